/// Class for encoding
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Class {
    Universal,
    Application,
    Context,
    Private,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PC {
    Constructed,
    Primitive,
}

enum TagType {
    Short(u8), // u8 < 0x1f
    Long,      // u8 = 0x1f
}

#[derive(Clone, Debug, PartialEq, Eq, Copy)]
pub enum TagEncoded {
    Short(u8),
    Long(u32),
}

impl TagEncoded {
    pub fn value(self) -> u32 {
        match self {
            TagEncoded::Short(u) => u as u32,
            TagEncoded::Long(l) => l,
        }
    }
}

/// decode the first byte in the following format:
///
/// CL CL CON T T T T T
fn decode_first_byte(hdr: u8) -> (Class, PC, TagType) {
    let class = match hdr >> 6 {
        0b00 => Class::Universal,
        0b01 => Class::Application,
        0b10 => Class::Context,
        _ => Class::Private,
    };
    let constructed = if (hdr & 0b0010_0000) != 0 {
        PC::Constructed
    } else {
        PC::Primitive
    };
    let tag = hdr & 0b1_1111;
    let tagtype = if tag == 0b1_1111 {
        TagType::Long
    } else {
        TagType::Short(tag)
    };
    (class, constructed, tagtype)
}

type Tag = u32;

/// ASN.1 BER/CER/DER Identifier
///
/// The identifier consist of the ASN.1 class,
/// the Primitive/Construction boolean, and the tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub class: Class,
    pub pc: PC,
    pub tag: TagEncoded,
}

/// Identifier decoding error
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdentifierDecodeError {
    /// Slice ended before the identifier (or its long tag) was complete
    EncodingIncomplete,
    /// Long tag number doesn't fit in 32 bits
    EncodingOverflow,
    /// Long tag number starts with a zero padding group
    EncodingNonCanonical,
}

impl Identifier {
    pub fn decode(slice: &[u8]) -> Result<(Self, usize), IdentifierDecodeError> {
        let first = *slice
            .first()
            .ok_or(IdentifierDecodeError::EncodingIncomplete)?;

        let (class, pc, tagtype) = decode_first_byte(first);
        let mut index = 1;

        let tag = match tagtype {
            TagType::Short(tag) => TagEncoded::Short(tag),
            TagType::Long => TagEncoded::Long(get_taglong(slice, &mut index)?),
        };

        Ok((Identifier { class, pc, tag }, index))
    }

    pub fn is_constructed(&self) -> bool {
        self.pc == PC::Constructed
    }
}

fn get_taglong(slice: &[u8], index: &mut usize) -> Result<u32, IdentifierDecodeError> {
    let mut acc: Tag = 0u32;
    let mut first_byte = true;
    loop {
        let byte: u8 = *slice
            .get(*index)
            .ok_or(IdentifierDecodeError::EncodingIncomplete)?;
        *index += 1;

        let cbyte = byte & 0b0111_1111;
        if first_byte && byte == 0b1000_0000 {
            break Err(IdentifierDecodeError::EncodingNonCanonical);
        }
        first_byte = false;

        acc = acc
            .checked_mul(0x80)
            .ok_or(IdentifierDecodeError::EncodingOverflow)?
            | Tag::from(cbyte);

        if (byte & 0b1000_0000) == 0 {
            break Ok(acc);
        }
    }
}
