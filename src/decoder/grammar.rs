use core::ops::BitOr;

use crate::error::Error;

/// Behaviour bits of a grammar entry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Flags(u16);

impl Flags {
    /// Match one element, consume it and run the entry's action
    pub const MATCH: Flags = Flags(1 << 0);
    /// A missing element is not an error, evaluation continues at `jump`
    pub const OPTIONAL: Flags = Flags(1 << 1);
    /// Go to `jump` unconditionally (after closing, for end entries)
    pub const JUMP: Flags = Flags(1 << 2);
    /// Match whatever tag comes next
    pub const ANY: Flags = Flags(1 << 3);
    /// Go to `jump` without evaluating if the previous element matched
    pub const COND: Flags = Flags(1 << 4);
    /// Close the innermost open SEQUENCE
    pub const END_SEQ: Flags = Flags(1 << 5);
    /// Close the innermost open SET
    pub const END_SET: Flags = Flags(1 << 6);
    /// Consume a matched constructed element whole instead of entering it
    pub const SKIP: Flags = Flags(1 << 7);
    /// Successful end of the grammar
    pub const COMPLETE: Flags = Flags(1 << 8);

    pub const fn empty() -> Flags {
        Flags(0)
    }

    pub const fn union(self, other: Flags) -> Flags {
        Flags(self.0 | other.0)
    }

    pub const fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn intersects(self, other: Flags) -> bool {
        self.0 & other.0 != 0
    }
}

impl BitOr for Flags {
    type Output = Flags;

    fn bitor(self, rhs: Flags) -> Flags {
        self.union(rhs)
    }
}

/// One entry of a grammar table
///
/// Tables are written with the `const` builders:
///
/// ```
/// use berwalk::decoder::Op;
/// use berwalk::header::constants::id;
///
/// const VERSIONED: &[Op] = &[
///     Op::expect(id::SEQUENCE),
///     Op::expect(id::context_constructed(0)).optional(4),
///     Op::expect(id::INTEGER).act(0),
///     Op::end_seq(),
///     Op::expect(id::OCTET_STRING),
///     Op::end_seq(),
///     Op::complete(),
/// ];
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Op {
    /// Expected identifier byte
    pub tag: u8,
    pub flags: Flags,
    /// Target entry for OPTIONAL misses, COND skips and jumps
    pub jump: usize,
    /// Index in the grammar's action table
    pub action: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Kind {
    Match,
    Close,
    Jump,
    Complete,
}

impl Op {
    const fn new(tag: u8, flags: Flags) -> Self {
        Op {
            tag,
            flags,
            jump: 0,
            action: None,
        }
    }

    /// Match an element whose identifier byte is `tag`
    pub const fn expect(tag: u8) -> Self {
        Self::new(tag, Flags::MATCH)
    }

    /// Match any element
    pub const fn any() -> Self {
        Self::new(0, Flags::MATCH.union(Flags::ANY))
    }

    /// Close the innermost SEQUENCE (or other constructed element)
    pub const fn end_seq() -> Self {
        Self::new(0, Flags::END_SEQ)
    }

    /// Close the innermost SET
    pub const fn end_set() -> Self {
        Self::new(0, Flags::END_SET)
    }

    pub const fn jump_to(target: usize) -> Self {
        let mut op = Self::new(0, Flags::JUMP);
        op.jump = target;
        op
    }

    pub const fn complete() -> Self {
        Self::new(0, Flags::COMPLETE)
    }

    /// Element may be absent, continue at `no_match` when it is
    pub const fn optional(mut self, no_match: usize) -> Self {
        self.flags = self.flags.union(Flags::OPTIONAL);
        self.jump = no_match;
        self
    }

    /// Only evaluated when the previous element didn't match, otherwise
    /// continue at `skip_to`. Combined with `optional`, both share the target.
    pub const fn cond(mut self, skip_to: usize) -> Self {
        self.flags = self.flags.union(Flags::COND);
        self.jump = skip_to;
        self
    }

    /// Don't enter a matched constructed element
    pub const fn skip(mut self) -> Self {
        self.flags = self.flags.union(Flags::SKIP);
        self
    }

    /// After closing, continue at `target` instead of the next entry
    pub const fn then(mut self, target: usize) -> Self {
        self.flags = self.flags.union(Flags::JUMP);
        self.jump = target;
        self
    }

    pub const fn act(mut self, action: usize) -> Self {
        self.action = Some(action);
        self
    }

    pub(crate) fn kind(&self) -> Kind {
        if self.flags.contains(Flags::COMPLETE) {
            Kind::Complete
        } else if self.flags.intersects(Flags::END_SEQ.union(Flags::END_SET)) {
            Kind::Close
        } else if self.flags.contains(Flags::JUMP) {
            Kind::Jump
        } else {
            Kind::Match
        }
    }

    pub(crate) fn is_optional(&self) -> bool {
        self.flags.contains(Flags::OPTIONAL)
    }
}

/// A matched element, as given to actions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field<'a> {
    /// Index of the grammar entry that matched (or closed) the element
    pub index: usize,
    /// Identifier byte of the element
    pub tag: u8,
    /// Offset of the content in the input
    pub offset: usize,
    /// Content octets. Empty when an indefinite length element is opened,
    /// complete when it is closed.
    pub value: &'a [u8],
    pub indefinite: bool,
}

/// Returned by an action to stop the decode
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Abort {
    pub code: i32,
}

impl Abort {
    pub const fn new(code: i32) -> Self {
        Abort { code }
    }
}

/// Per-field handler, with the caller's context
pub type Action<C> = fn(&mut C, &Field<'_>) -> Result<(), Abort>;

/// A checked grammar table with its actions
pub struct Grammar<'g, C> {
    ops: &'g [Op],
    actions: &'g [Action<C>],
}

impl<C> Clone for Grammar<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for Grammar<'_, C> {}

impl<'g, C> Grammar<'g, C> {
    /// Check that every jump and action index is in range and that
    /// evaluation cannot run off the end of the table.
    pub fn new(ops: &'g [Op], actions: &'g [Action<C>]) -> Result<Self, Error> {
        if ops.is_empty() {
            return Err(Error::InvalidGrammar { action: 0 });
        }
        for (i, op) in ops.iter().enumerate() {
            let invalid = Err(Error::InvalidGrammar { action: i });
            if op.action.map_or(false, |a| a >= actions.len()) {
                return invalid;
            }
            let jumps = op
                .flags
                .intersects(Flags::JUMP.union(Flags::OPTIONAL).union(Flags::COND));
            if jumps && op.jump >= ops.len() {
                return invalid;
            }
            let falls_through = match op.kind() {
                Kind::Complete | Kind::Jump => false,
                Kind::Close => !op.flags.contains(Flags::JUMP),
                Kind::Match => {
                    if !op.flags.intersects(Flags::MATCH.union(Flags::ANY)) {
                        return invalid;
                    }
                    true
                }
            };
            if falls_through && i + 1 >= ops.len() {
                return invalid;
            }
        }
        Ok(Grammar { ops, actions })
    }

    pub fn ops(&self) -> &'g [Op] {
        self.ops
    }

    pub(crate) fn action(&self, index: usize) -> Option<Action<C>> {
        self.actions.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nothing(_: &mut (), _: &Field<'_>) -> Result<(), Abort> {
        Ok(())
    }

    #[test]
    fn builders() {
        let op = Op::expect(0x30).optional(4).act(1);
        assert_eq!(op.tag, 0x30);
        assert!(op.flags.contains(Flags::MATCH | Flags::OPTIONAL));
        assert_eq!(op.jump, 4);
        assert_eq!(op.action, Some(1));
        assert_eq!(op.kind(), Kind::Match);

        assert_eq!(Op::end_seq().then(2).kind(), Kind::Close);
        assert_eq!(Op::end_set().kind(), Kind::Close);
        assert_eq!(Op::jump_to(0).kind(), Kind::Jump);
        assert_eq!(Op::complete().kind(), Kind::Complete);
        assert!(Op::any().skip().flags.contains(Flags::ANY | Flags::SKIP));
    }

    #[test]
    fn validation() {
        let actions: &[Action<()>] = &[nothing];
        assert!(Grammar::new(&[Op::expect(0x02).act(0), Op::complete()], actions).is_ok());

        assert!(matches!(
            Grammar::<()>::new(&[], actions),
            Err(Error::InvalidGrammar { action: 0 })
        ));
        // action out of range
        assert!(matches!(
            Grammar::new(&[Op::expect(0x02).act(1), Op::complete()], actions),
            Err(Error::InvalidGrammar { action: 0 })
        ));
        // jump out of range
        assert!(matches!(
            Grammar::new(&[Op::expect(0x02).optional(5), Op::complete()], actions),
            Err(Error::InvalidGrammar { action: 0 })
        ));
        // falls off the end
        assert!(matches!(
            Grammar::new(&[Op::expect(0x02)], actions),
            Err(Error::InvalidGrammar { action: 0 })
        ));
        // entry that neither matches nor controls flow
        let bare = Op {
            tag: 0x02,
            flags: Flags::empty(),
            jump: 0,
            action: None,
        };
        assert!(matches!(
            Grammar::new(&[bare, Op::complete()], actions),
            Err(Error::InvalidGrammar { action: 0 })
        ));
    }
}
