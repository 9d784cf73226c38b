//! Table driven ASN.1 BER decoder, object identifier registry and X.509
//! field walker
//!
//! The decoder never builds a tree: it walks the input once against a
//! static grammar table and hands each recognized element to a handler,
//! as a slice of the input. The crate is `no_std` (with `alloc`), so the
//! same code runs in firmware and in user space tools.
//!
//! * [`header`]: tag and length decoding of a single element
//! * [`decoder`]: the grammar table interpreter
//! * [`oid`]: registry lookup and dotted decimal rendering
//! * [`x509`]: certificate summaries built on the two above
//! * [`efi`]: Secure Boot signature databases holding the certificates

#![no_std]

extern crate alloc;

#[cfg(test)]
#[macro_use]
extern crate std;

#[macro_use]
mod coretm;
mod intenc;

pub mod ber;
pub mod decoder;
pub mod efi;
mod error;
pub mod header;
pub mod objects;
pub mod oid;
pub mod x509;

pub use error::Error;
