//! Universal tag numbers and the identifier bytes commonly found in
//! certificate grammars.

pub const TAG_EOC: u32 = 0x00;
pub const TAG_BOOLEAN: u32 = 0x01;
pub const TAG_INTEGER: u32 = 0x02;
pub const TAG_BIT_STRING: u32 = 0x03;
pub const TAG_OCTET_STRING: u32 = 0x04;
pub const TAG_NULL: u32 = 0x05;
pub const TAG_OID: u32 = 0x06;
pub const TAG_ENUMERATED: u32 = 0x0a;
pub const TAG_UTF8_STRING: u32 = 0x0c;
pub const TAG_SEQUENCE: u32 = 0x10;
pub const TAG_SET: u32 = 0x11;
pub const TAG_PRINTABLE_STRING: u32 = 0x13;
pub const TAG_T61_STRING: u32 = 0x14;
pub const TAG_IA5_STRING: u32 = 0x16;
pub const TAG_UTC_TIME: u32 = 0x17;
pub const TAG_GENERALIZED_TIME: u32 = 0x18;
pub const TAG_BMP_STRING: u32 = 0x1e;

/// Identifier bit set for constructed encodings
pub const CONSTRUCTED: u8 = 0b0010_0000;
/// Identifier bits of the context-specific class
pub const CONTEXT: u8 = 0b1000_0000;

/// Full identifier bytes, as they appear on the wire
pub mod id {
    use super::{CONSTRUCTED, CONTEXT};

    pub const BOOLEAN: u8 = 0x01;
    pub const INTEGER: u8 = 0x02;
    pub const BIT_STRING: u8 = 0x03;
    pub const OCTET_STRING: u8 = 0x04;
    pub const NULL: u8 = 0x05;
    pub const OID: u8 = 0x06;
    pub const UTF8_STRING: u8 = 0x0c;
    pub const PRINTABLE_STRING: u8 = 0x13;
    pub const T61_STRING: u8 = 0x14;
    pub const IA5_STRING: u8 = 0x16;
    pub const UTC_TIME: u8 = 0x17;
    pub const GENERALIZED_TIME: u8 = 0x18;
    pub const BMP_STRING: u8 = 0x1e;
    pub const SEQUENCE: u8 = 0x10 | CONSTRUCTED;
    pub const SET: u8 = 0x11 | CONSTRUCTED;

    /// `[n]` primitive context-specific identifier
    pub const fn context(n: u8) -> u8 {
        CONTEXT | n
    }

    /// `[n]` constructed context-specific identifier
    pub const fn context_constructed(n: u8) -> u8 {
        CONTEXT | CONSTRUCTED | n
    }
}
