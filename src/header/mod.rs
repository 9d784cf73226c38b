//! TLV header decoding: one identifier followed by one length.

pub mod constants;
mod identifier;
mod length;

pub use identifier::{Class, Identifier, IdentifierDecodeError, TagEncoded, PC};
pub use length::{Length, LengthDecodeError};

use crate::ber::Mode;

/// Reason a TLV header could not be decoded
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HeaderError {
    #[error("not enough bytes for a tag-length header")]
    Truncated,
    #[error("long tag number does not fit in 32 bits")]
    TagNumberOverflow,
    #[error("long tag number has leading zero padding")]
    NonCanonicalTag,
    #[error("length does not fit in the remaining input")]
    LengthOverflow,
    #[error("indefinite length on a primitive element")]
    IndefiniteOnPrimitive,
    #[error("indefinite length is not allowed in DER")]
    IndefiniteLengthDer,
    #[error("length is not minimally encoded")]
    NonCanonicalLength,
}

impl From<IdentifierDecodeError> for HeaderError {
    fn from(e: IdentifierDecodeError) -> Self {
        match e {
            IdentifierDecodeError::EncodingIncomplete => HeaderError::Truncated,
            IdentifierDecodeError::EncodingOverflow => HeaderError::TagNumberOverflow,
            IdentifierDecodeError::EncodingNonCanonical => HeaderError::NonCanonicalTag,
        }
    }
}

impl From<LengthDecodeError> for HeaderError {
    fn from(e: LengthDecodeError) -> Self {
        match e {
            LengthDecodeError::EncodingIncomplete => HeaderError::Truncated,
            LengthDecodeError::EncodingOverflow => HeaderError::LengthOverflow,
            LengthDecodeError::EncodingNonCanonical => HeaderError::NonCanonicalLength,
        }
    }
}

/// A decoded tag-length header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub identifier: Identifier,
    /// First identifier byte, as found on the wire
    pub tag_byte: u8,
    pub length: Length,
    /// Number of bytes taken by the identifier and the length
    pub size: usize,
}

impl Header {
    /// Decode the header at the start of `slice`.
    ///
    /// `slice` must end where the enclosing element ends: a definite
    /// length reaching past it is rejected, so the content is always
    /// readable once the header is accepted.
    pub fn decode(slice: &[u8], mode: Mode) -> Result<Self, HeaderError> {
        if slice.len() < 2 {
            return Err(HeaderError::Truncated);
        }
        let (identifier, id_size) = Identifier::decode(slice)?;
        let (length, len_size) = Length::decode(&slice[id_size..], mode == Mode::Der)?;
        let size = id_size + len_size;

        match length.value() {
            None => {
                if !identifier.is_constructed() {
                    return Err(HeaderError::IndefiniteOnPrimitive);
                }
                if mode == Mode::Der {
                    return Err(HeaderError::IndefiniteLengthDer);
                }
            }
            Some(len) => {
                if len > slice.len() - size {
                    return Err(HeaderError::LengthOverflow);
                }
            }
        }

        Ok(Header {
            identifier,
            tag_byte: slice[0],
            length,
            size,
        })
    }

    pub fn is_constructed(&self) -> bool {
        self.identifier.is_constructed()
    }

    /// Definite content length, `None` when indefinite
    pub fn content_length(&self) -> Option<usize> {
        self.length.value()
    }
}

/// True if `slice` starts with an end-of-contents marker
pub fn is_end_of_contents(slice: &[u8]) -> bool {
    slice.starts_with(&[constants::TAG_EOC as u8, 0x00])
}
