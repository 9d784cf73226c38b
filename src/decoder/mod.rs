//! Table driven BER decoder
//!
//! A grammar is a flat table of [`Op`] entries describing the expected
//! sequence of elements, with explicit jumps for optional elements,
//! alternatives and repetition. The decoder interprets the table over the
//! input in a single forward pass: constructed elements are tracked on an
//! explicit scope stack rather than by recursion, and each matched element
//! is handed to the entry's action together with the caller's context.
//!
//! Evaluation of an entry:
//!
//! * a match entry whose tag is found consumes the element, runs its
//!   action, then enters the element if it is constructed (unless the entry
//!   has [`Flags::SKIP`]) and continues with the next entry;
//! * a match entry whose tag is not found (or whose enclosing element is
//!   exhausted) goes to `jump` if optional, and fails otherwise;
//! * an end entry closes the innermost element, which must be exhausted,
//!   runs its action with the whole content of the closed element and
//!   continues with the next entry, or `jump` for [`Op::then`];
//! * a cond entry is skipped (to `jump`) when the previous element matched.

mod grammar;

use alloc::vec::Vec;

pub use grammar::{Abort, Action, Field, Flags, Grammar, Op};

use grammar::Kind;

use crate::ber::{Options, Reader};
use crate::error::Error;
use crate::header::{Header, TagEncoded};

/// An open constructed element
#[derive(Clone, Copy, Debug)]
struct Scope {
    tag: u8,
    /// Offset of the first content byte
    start: usize,
    /// End of the content, `None` while an indefinite length is open
    end: Option<usize>,
    /// Bound for reads inside the element: its own end, or the nearest
    /// enclosing definite end
    limit: usize,
}

/// Decodes inputs against one grammar
pub struct Decoder<'g, C> {
    grammar: Grammar<'g, C>,
    options: Options,
}

impl<'g, C> Decoder<'g, C> {
    pub fn new(grammar: Grammar<'g, C>) -> Self {
        Self::with_options(grammar, Options::default())
    }

    pub fn with_options(grammar: Grammar<'g, C>, options: Options) -> Self {
        Decoder { grammar, options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Walk `data` with the grammar, calling actions with `ctx`.
    ///
    /// The whole input must be consumed by the grammar.
    pub fn decode(&self, data: &[u8], ctx: &mut C) -> Result<(), Error> {
        tracing::debug!(
            len = data.len(),
            entries = self.grammar.ops().len(),
            "decoding"
        );
        let mut walk = Walk {
            grammar: self.grammar,
            options: self.options,
            reader: Reader::new(data),
            ctx,
            stack: Vec::with_capacity(self.options.max_depth.min(16)),
            pc: 0,
            matched: false,
        };
        let result = walk.run();
        match &result {
            Ok(()) => tracing::debug!("decoded"),
            Err(e) => tracing::debug!(error = %e, "decode failed"),
        }
        result
    }
}

/// Decode `data` with default options
pub fn decode<C>(grammar: Grammar<'_, C>, data: &[u8], ctx: &mut C) -> Result<(), Error> {
    Decoder::new(grammar).decode(data, ctx)
}

struct Walk<'a, 'g, 'c, C> {
    grammar: Grammar<'g, C>,
    options: Options,
    reader: Reader<'a>,
    ctx: &'c mut C,
    stack: Vec<Scope>,
    pc: usize,
    /// Whether the last evaluated element was found
    matched: bool,
}

impl<C> Walk<'_, '_, '_, C> {
    fn run(&mut self) -> Result<(), Error> {
        // Steps that neither move the cursor nor change the nesting can
        // only revisit (entry, matched) states so many times before the
        // table is looping on itself.
        let budget = 2 * self.grammar.ops().len();
        let mut idle = 0;
        let mut last = self.progress();
        loop {
            if self.step()? {
                return Ok(());
            }
            let now = self.progress();
            if now == last {
                idle += 1;
                if idle > budget {
                    return Err(Error::InvalidGrammar { action: self.pc });
                }
            } else {
                last = now;
                idle = 0;
            }
        }
    }

    fn progress(&self) -> (usize, usize) {
        (self.reader.current_position(), self.stack.len())
    }

    fn position(&self) -> usize {
        self.reader.current_position()
    }

    fn limit(&self) -> usize {
        self.stack.last().map_or(self.reader.len(), |s| s.limit)
    }

    fn exhausted(&self) -> bool {
        match self.stack.last() {
            None => self.position() >= self.reader.len(),
            Some(Scope { end: Some(end), .. }) => self.position() >= *end,
            Some(scope) => self.reader.at_end_of_contents(scope.limit),
        }
    }

    /// Evaluate the current entry, true once the grammar completed
    fn step(&mut self) -> Result<bool, Error> {
        let pc = self.pc;
        let op = self.grammar.ops()[pc];
        tracing::trace!(
            entry = pc,
            offset = self.position(),
            depth = self.stack.len(),
            "step"
        );

        match op.kind() {
            Kind::Complete => return self.complete(),
            Kind::Jump => {
                self.pc = op.jump;
                return Ok(false);
            }
            Kind::Close => {
                self.close(op)?;
                return Ok(false);
            }
            Kind::Match => {}
        }

        if op.flags.contains(Flags::COND) && self.matched {
            self.pc = op.jump;
            return Ok(false);
        }

        if self.exhausted() {
            if op.is_optional() {
                self.miss(op);
                return Ok(false);
            }
            let offset = self.position();
            return Err(if self.stack.is_empty() {
                Error::TruncatedInput { offset }
            } else {
                Error::UnexpectedEndOfScope { offset, action: pc }
            });
        }

        let hdr = self.reader.peek(self.limit(), self.options.mode)?;
        // tag 0 is reserved for end-of-contents, which exhausted() consumed
        if hdr.tag_byte == 0 {
            return Err(Error::GrammarMismatch {
                offset: self.position(),
                action: pc,
                tag: 0,
            });
        }
        // entries hold a single identifier byte, so long form tags never match one
        let short = matches!(hdr.identifier.tag, TagEncoded::Short(_));
        if op.flags.contains(Flags::ANY) || (short && hdr.tag_byte == op.tag) {
            self.enter(op, hdr)?;
        } else if op.is_optional() {
            self.miss(op);
        } else {
            return Err(Error::GrammarMismatch {
                offset: self.position(),
                action: pc,
                tag: hdr.tag_byte,
            });
        }
        Ok(false)
    }

    fn miss(&mut self, op: Op) {
        self.matched = false;
        self.pc = op.jump;
    }

    /// Consume a matched element
    fn enter(&mut self, op: Op, hdr: Header) -> Result<(), Error> {
        let pc = self.pc;
        let header_offset = self.position();
        let limit = self.limit();
        self.reader.advance(hdr.size, limit)?;
        let start = self.position();

        if hdr.is_constructed() && !op.flags.contains(Flags::SKIP) {
            if self.stack.len() >= self.options.max_depth {
                return Err(Error::NestingTooDeep {
                    offset: header_offset,
                    depth: self.options.max_depth,
                });
            }
            let end = hdr.content_length().map(|len| start + len);
            let value = end.map_or(&[][..], |end| self.reader.content(start, end));
            self.invoke(
                op,
                Field {
                    index: pc,
                    tag: hdr.tag_byte,
                    offset: start,
                    value,
                    indefinite: end.is_none(),
                },
            )?;
            self.stack.push(Scope {
                tag: hdr.tag_byte,
                start,
                end,
                limit: end.unwrap_or(limit),
            });
        } else {
            let end = match hdr.content_length() {
                Some(len) => {
                    self.reader.advance(len, limit)?;
                    start + len
                }
                None => {
                    let depth_left = self.options.max_depth.saturating_sub(self.stack.len());
                    self.reader
                        .skip_indefinite(limit, self.options.mode, depth_left)?
                }
            };
            let value = self.reader.content(start, end);
            self.invoke(
                op,
                Field {
                    index: pc,
                    tag: hdr.tag_byte,
                    offset: start,
                    value,
                    indefinite: hdr.length.is_indefinite(),
                },
            )?;
        }

        self.matched = true;
        self.pc = pc + 1;
        Ok(())
    }

    /// Close the innermost open element
    fn close(&mut self, op: Op) -> Result<(), Error> {
        let pc = self.pc;
        let offset = self.position();
        let scope = match self.stack.last() {
            Some(scope) => *scope,
            None => return Err(Error::InvalidGrammar { action: pc }),
        };

        if !self.exhausted() {
            let remaining = scope.limit.saturating_sub(offset);
            if scope.end.is_none() && remaining < 2 {
                return Err(Error::TruncatedInput { offset });
            }
            let tag = self.reader.remaining().first().copied().unwrap_or(0);
            return Err(Error::GrammarMismatch {
                offset,
                action: pc,
                tag,
            });
        }

        self.stack.pop();
        if scope.end.is_none() {
            // end-of-contents marker
            self.reader.advance(2, scope.limit)?;
        }
        tracing::trace!(
            entry = pc,
            set = op.flags.contains(Flags::END_SET),
            "closed element"
        );

        let value = self.reader.content(scope.start, offset);
        self.invoke(
            op,
            Field {
                index: pc,
                tag: scope.tag,
                offset: scope.start,
                value,
                indefinite: scope.end.is_none(),
            },
        )?;

        self.matched = true;
        self.pc = if op.flags.contains(Flags::JUMP) {
            op.jump
        } else {
            pc + 1
        };
        Ok(())
    }

    fn complete(&mut self) -> Result<bool, Error> {
        let offset = self.position();
        if !self.stack.is_empty() {
            return Err(Error::UnexpectedEndOfScope {
                offset,
                action: self.pc,
            });
        }
        if offset < self.reader.len() {
            return Err(Error::ExcessData { offset });
        }
        Ok(true)
    }

    fn invoke(&mut self, op: Op, field: Field<'_>) -> Result<(), Error> {
        let Some(action) = op.action.and_then(|a| self.grammar.action(a)) else {
            return Ok(());
        };
        action(self.ctx, &field).map_err(|abort| Error::CallbackAborted {
            offset: field.offset,
            action: field.index,
            code: abort.code,
        })
    }
}

#[cfg(test)]
mod tests;
