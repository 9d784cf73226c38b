use crate::ber::Mode;
use crate::error::Error;
use crate::header::{is_end_of_contents, Header};

/// Forward-only cursor over a BER buffer
///
/// Every read is bounded by a `limit`, the end of the innermost element
/// with a known length (or the end of the buffer), so nothing is ever read
/// past the element being decoded.
#[derive(Clone)]
pub struct Reader<'a> {
    index: usize,
    slice: &'a [u8],
}

impl<'a> Reader<'a> {
    /// Create a new BER Reader where the read buffer is given by the user
    pub fn new(slice: &'a [u8]) -> Self {
        Reader { slice, index: 0 }
    }

    /// Decode the header at the cursor without consuming it
    pub fn peek(&self, limit: usize, mode: Mode) -> Result<Header, Error> {
        let window = self
            .slice
            .get(self.index..limit)
            .ok_or(Error::TruncatedInput { offset: self.index })?;
        Header::decode(window, mode).map_err(|e| Error::from_header(e, self.index))
    }

    /// True if the cursor sits on an end-of-contents marker before `limit`
    pub fn at_end_of_contents(&self, limit: usize) -> bool {
        self.slice
            .get(self.index..limit)
            .map_or(false, is_end_of_contents)
    }

    /// Move the cursor forward by `n` bytes, staying inside `limit`
    pub fn advance(&mut self, n: usize, limit: usize) -> Result<(), Error> {
        match self.index.checked_add(n) {
            Some(next) if next <= limit && limit <= self.slice.len() => {
                self.index = next;
                Ok(())
            }
            _ => Err(Error::TruncatedInput { offset: self.index }),
        }
    }

    /// Skip the content of an indefinite length element whose header was
    /// just consumed, including its end-of-contents marker.
    ///
    /// Nested elements are walked header by header; returns the offset
    /// where the content ends (the start of the terminating marker).
    pub fn skip_indefinite(
        &mut self,
        limit: usize,
        mode: Mode,
        max_depth: usize,
    ) -> Result<usize, Error> {
        let mut depth = 1usize;
        loop {
            if self.at_end_of_contents(limit) {
                let content_end = self.index;
                self.advance(2, limit)?;
                depth -= 1;
                if depth == 0 {
                    return Ok(content_end);
                }
                continue;
            }
            let hdr = self.peek(limit, mode)?;
            self.advance(hdr.size, limit)?;
            match hdr.content_length() {
                Some(len) => self.advance(len, limit)?,
                None => {
                    depth += 1;
                    if depth > max_depth {
                        return Err(Error::NestingTooDeep {
                            offset: self.index,
                            depth: max_depth,
                        });
                    }
                }
            }
        }
    }

    /// Slice of the input between two offsets already validated by the cursor
    pub fn content(&self, start: usize, end: usize) -> &'a [u8] {
        debug_assert!(start <= end && end <= self.slice.len());
        self.slice.get(start..end).unwrap_or(&[])
    }

    pub fn current_position(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.slice.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slice.is_empty()
    }

    pub fn remaining(&self) -> &'a [u8] {
        &self.slice[self.index..]
    }
}
