use crate::header::HeaderError;

/// Decoding failure, with the byte offset where it was detected
///
/// Every failure is fatal for the decode that raised it: there is no
/// resynchronisation after malformed input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("input truncated at offset {offset}")]
    TruncatedInput { offset: usize },
    #[error("length of element at offset {offset} overflows its container")]
    LengthOverflow { offset: usize },
    #[error("indefinite length on primitive element at offset {offset}")]
    InvalidIndefiniteOnPrimitive { offset: usize },
    #[error("tag number at offset {offset} does not fit in 32 bits")]
    TagNumberOverflow { offset: usize },
    #[error("long tag number at offset {offset} has leading zero padding")]
    NonCanonicalTag { offset: usize },
    #[error("indefinite length at offset {offset} is not allowed in DER")]
    IndefiniteLengthDer { offset: usize },
    #[error("length at offset {offset} is not minimally encoded")]
    NonCanonicalLength { offset: usize },
    #[error("unexpected tag {tag:#04x} at offset {offset} (action {action})")]
    GrammarMismatch { offset: usize, action: usize, tag: u8 },
    #[error("element ended early at offset {offset} (action {action})")]
    UnexpectedEndOfScope { offset: usize, action: usize },
    #[error("action {action} aborted with code {code} at offset {offset}")]
    CallbackAborted { offset: usize, action: usize, code: i32 },
    #[error("unexpected trailing data at offset {offset}")]
    ExcessData { offset: usize },
    #[error("nesting deeper than {depth} at offset {offset}")]
    NestingTooDeep { offset: usize, depth: usize },
    #[error("invalid grammar at action {action}")]
    InvalidGrammar { action: usize },
}

impl Error {
    pub(crate) fn from_header(e: HeaderError, offset: usize) -> Self {
        match e {
            HeaderError::Truncated => Error::TruncatedInput { offset },
            HeaderError::TagNumberOverflow => Error::TagNumberOverflow { offset },
            HeaderError::NonCanonicalTag => Error::NonCanonicalTag { offset },
            HeaderError::LengthOverflow => Error::LengthOverflow { offset },
            HeaderError::IndefiniteOnPrimitive => Error::InvalidIndefiniteOnPrimitive { offset },
            HeaderError::IndefiniteLengthDer => Error::IndefiniteLengthDer { offset },
            HeaderError::NonCanonicalLength => Error::NonCanonicalLength { offset },
        }
    }

    /// Byte offset in the input where the failure was detected
    pub fn offset(&self) -> Option<usize> {
        match *self {
            Error::TruncatedInput { offset }
            | Error::LengthOverflow { offset }
            | Error::InvalidIndefiniteOnPrimitive { offset }
            | Error::TagNumberOverflow { offset }
            | Error::NonCanonicalTag { offset }
            | Error::IndefiniteLengthDer { offset }
            | Error::NonCanonicalLength { offset }
            | Error::GrammarMismatch { offset, .. }
            | Error::UnexpectedEndOfScope { offset, .. }
            | Error::CallbackAborted { offset, .. }
            | Error::ExcessData { offset }
            | Error::NestingTooDeep { offset, .. } => Some(offset),
            Error::InvalidGrammar { .. } => None,
        }
    }

    /// Index of the grammar entry being evaluated, when relevant
    pub fn action(&self) -> Option<usize> {
        match *self {
            Error::GrammarMismatch { action, .. }
            | Error::UnexpectedEndOfScope { action, .. }
            | Error::CallbackAborted { action, .. }
            | Error::InvalidGrammar { action } => Some(action),
            _ => None,
        }
    }
}
