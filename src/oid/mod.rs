//! Object identifier registry
//!
//! Maps encoded object identifiers (the content octets of an OBJECT
//! IDENTIFIER element) to a [`Symbol`], and renders encoded identifiers as
//! dotted decimal text.
//!
//! The registry is an interned table: the encodings of every symbol are
//! concatenated in `OID_DATA`, `OID_INDEX` gives each symbol's offset, and
//! a search table sorted by `(hash, length, reversed bytes)` is binary
//! searched. Identifiers of the same family mostly differ in their last
//! arc, so comparing from the tail end settles most probes on the first
//! byte.

use core::cmp::Ordering;

mod registry;
mod render;

pub use registry::Symbol;
pub use render::{render, render_to_string, Arcs, RenderError};

use registry::{OID_DATA, OID_INDEX, SEARCH_TABLE};

#[derive(Clone, Copy, Debug)]
pub(crate) struct SearchEntry {
    pub(crate) hash: u8,
    pub(crate) symbol: Symbol,
}

impl Symbol {
    /// Content octets of the object identifier
    pub fn encoded(self) -> &'static [u8] {
        let i = self as usize;
        &OID_DATA[OID_INDEX[i] as usize..OID_INDEX[i + 1] as usize]
    }
}

/// 8 bits search hash of an encoded object identifier
///
/// Polynomial accumulation (multiplier 33) seeded with `len - 1`, folded
/// by xoring the four byte lanes of the 32 bits accumulator.
pub fn hash(data: &[u8]) -> u8 {
    let mut h = (data.len() as u32).wrapping_sub(1);
    for b in data {
        h = h.wrapping_add(u32::from(*b) * 33);
    }
    h = (h >> 24) ^ (h >> 16) ^ (h >> 8) ^ h;
    (h & 0xff) as u8
}

/// Registry ordering: hash, then length, then bytes from the last one backward
fn search_order(a_hash: u8, a: &[u8], b_hash: u8, b: &[u8]) -> Ordering {
    a_hash
        .cmp(&b_hash)
        .then_with(|| a.len().cmp(&b.len()))
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

/// Find the registered symbol of an encoded object identifier
///
/// An unknown identifier is not an error: it gives `None` and is usually
/// displayed in dotted form instead.
pub fn lookup(data: &[u8]) -> Option<Symbol> {
    let h = hash(data);
    let found = SEARCH_TABLE
        .binary_search_by(|entry| search_order(entry.hash, entry.symbol.encoded(), h, data))
        .ok()
        .map(|i| SEARCH_TABLE[i].symbol);
    if found.is_none() {
        tracing::trace!(len = data.len(), hash = h, "unregistered object identifier");
    }
    found
}
