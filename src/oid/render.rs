use alloc::string::String;

use crate::intenc::{read_cont_bit7, ContBit7Error};

/// Reason an encoded object identifier could not be rendered
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("empty object identifier")]
    Truncated,
    /// `needed` is the length the text reached when it stopped fitting
    #[error("output buffer too small, {needed} bytes attempted")]
    BufferTooSmall { needed: usize },
    #[error("malformed subidentifier at offset {offset}")]
    MalformedVarint { offset: usize },
}

/// Iterator over the arcs of an encoded object identifier
///
/// The first subidentifier carries two arcs (`40 * arc1 + arc2`, with
/// `arc1` capped at 2), every following one carries a single arc.
#[derive(Debug, Clone)]
pub struct Arcs<'a> {
    data: &'a [u8],
    index: usize,
    second: Option<u64>,
}

impl<'a> Arcs<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Arcs {
            data,
            index: 0,
            second: None,
        }
    }
}

impl<'a> Iterator for Arcs<'a> {
    type Item = Result<u64, RenderError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(second) = self.second.take() {
            return Some(Ok(second));
        }
        if self.index >= self.data.len() {
            return None;
        }
        let offset = self.index;
        match read_cont_bit7(&self.data[offset..]) {
            Err(ContBit7Error::Incomplete) | Err(ContBit7Error::Overflow) => {
                self.index = self.data.len();
                Some(Err(RenderError::MalformedVarint { offset }))
            }
            Ok((value, adv)) => {
                self.index += adv;
                if offset != 0 {
                    return Some(Ok(value));
                }
                let first = match value {
                    0..=39 => 0,
                    40..=79 => 1,
                    _ => 2,
                };
                self.second = Some(value - 40 * first);
                Some(Ok(first))
            }
        }
    }
}

trait Sink {
    fn put(&mut self, s: &str) -> Result<(), RenderError>;
}

struct SliceSink<'b> {
    out: &'b mut [u8],
    written: usize,
}

impl Sink for SliceSink<'_> {
    fn put(&mut self, s: &str) -> Result<(), RenderError> {
        let end = self.written + s.len();
        match self.out.get_mut(self.written..end) {
            Some(dst) => {
                dst.copy_from_slice(s.as_bytes());
                self.written = end;
                Ok(())
            }
            None => Err(RenderError::BufferTooSmall { needed: end }),
        }
    }
}

impl Sink for String {
    fn put(&mut self, s: &str) -> Result<(), RenderError> {
        self.push_str(s);
        Ok(())
    }
}

fn decimal(mut v: u64, buf: &mut [u8; 20]) -> &str {
    let mut i = buf.len();
    loop {
        i -= 1;
        buf[i] = b'0' + (v % 10) as u8;
        v /= 10;
        if v == 0 {
            break;
        }
    }
    // only ASCII digits were written
    core::str::from_utf8(&buf[i..]).unwrap_or_default()
}

fn write_dotted<S: Sink>(oid: &[u8], sink: &mut S) -> Result<(), RenderError> {
    if oid.is_empty() {
        return Err(RenderError::Truncated);
    }
    let mut buf = [0u8; 20];
    for (i, arc) in Arcs::new(oid).enumerate() {
        let arc = arc?;
        if i > 0 {
            sink.put(".")?;
        }
        sink.put(decimal(arc, &mut buf))?;
    }
    Ok(())
}

/// Render an encoded object identifier as dotted decimal into `out`.
///
/// Returns the number of bytes written. Nothing is allocated; on
/// [`RenderError::BufferTooSmall`] the caller can retry with at least
/// `needed` bytes (more may be required for the arcs after that point).
pub fn render(oid: &[u8], out: &mut [u8]) -> Result<usize, RenderError> {
    let mut sink = SliceSink { out, written: 0 };
    write_dotted(oid, &mut sink)?;
    Ok(sink.written)
}

/// Render an encoded object identifier as an owned dotted decimal string
pub fn render_to_string(oid: &[u8]) -> Result<String, RenderError> {
    let mut s = String::new();
    write_dotted(oid, &mut s)?;
    Ok(s)
}
