//! Basic Encoding Rules (BER) reading
//!
//! BER is the relaxed superset of DER: lengths may use more bytes than
//! needed and constructed values may use the indefinite length form,
//! terminated by an end-of-contents marker. Certificates are supposed to be
//! DER, but firmware variables sometimes carry BER produced by lenient
//! tools, so the decoder reads BER unless told otherwise.
pub mod reader;

pub use self::reader::Reader;

/// Encoding rules enforced while reading
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    /// Accept indefinite lengths and non-minimal length encodings
    #[default]
    Ber,
    /// Reject anything that is not the distinguished encoding
    Der,
}

/// Decoder configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Options {
    pub mode: Mode,
    /// Maximum number of nested constructed elements
    pub max_depth: usize,
}

impl Options {
    pub const DEFAULT_MAX_DEPTH: usize = 32;

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for Options {
    fn default() -> Self {
        Options {
            mode: Mode::Ber,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}
