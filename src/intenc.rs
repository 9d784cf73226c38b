//! Integer encoding used in ASN.1
//!
//! * 7bit highest-continuation encoding (OID subidentifiers, long tags)
//! * 8bit big endian two's complement encoding (INTEGER content)

/// A simple encoded variable size integer where limbs
/// are 7 bits, and big endian, and continuation of
/// the encoding is indicated by having the highest bit set
#[derive(Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub(crate) struct IntegerContBit7([u8]);

/// Failure reading a 7bit continuation integer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ContBit7Error {
    /// continuation bit set on the last available byte
    Incomplete,
    /// value doesn't fit in 64 bits
    Overflow,
}

/// Read one 7bit continuation integer at the start of `slice`,
/// returning the value and the number of bytes used.
///
/// Leading `0x80` padding groups are tolerated here; strict parsing is
/// done by [`IntegerContBit7::parse_from_slice`].
pub(crate) fn read_cont_bit7(slice: &[u8]) -> Result<(u64, usize), ContBit7Error> {
    let mut acc = 0u64;
    for (i, byte) in slice.iter().enumerate() {
        acc = acc
            .checked_mul(0x80)
            .ok_or(ContBit7Error::Overflow)?
            | u64::from(byte & 0b0111_1111);
        if byte & 0b1000_0000 == 0 {
            return Ok((acc, i + 1));
        }
    }
    Err(ContBit7Error::Incomplete)
}

macro_rules! to_primitive7 {
    ($type: ident, $name: ident) => {
        /// Try to convert to the primitive
        ///
        /// If there's an overflown then nothing is returned
        pub fn $name(&self) -> Option<$type> {
            // this function assume that the data has been checked properly
            // so that the first byte is not a long zero,
            // and that the continuation bit are correctly set
            // for each byte limb.
            let mut acc = (self.0[0] & 0b0111_1111) as $type;
            for c in &self.0[1..] {
                acc = acc
                    .checked_mul(0x80)?
                    .checked_add((c & 0b0111_1111) as $type)?
            }
            Some(acc)
        }
    };
}

impl IntegerContBit7 {
    /// transform a raw slice into a IntegerContBit7 slice,
    /// no verification is done by this call
    /// one should use parse_from_slice for safe parsing+verification
    pub(crate) fn unverified_from_slice(slice: &[u8]) -> &Self {
        cast_slice_u8_to_typed_slice!(slice, Self)
    }

    /// Try to parse from a slice
    pub fn parse_from_slice(slice: &[u8]) -> Result<(&Self, usize), ()> {
        if slice.is_empty() {
            return Err(());
        }
        if slice[0] == 0b1000_0000 {
            return Err(());
        }
        let mut i = 0;
        while (slice[i] & 0b1000_0000) != 0 {
            i += 1;
            if i == slice.len() {
                return Err(());
            }
        }
        let r = Self::unverified_from_slice(&slice[0..1 + i]);
        Ok((r, 1 + i))
    }

    to_primitive7!(u64, to_u64);
}

slice_reexport_asref!(IntegerContBit7);

/// An encoded integer where each limbs is 8bits and in big endian
#[derive(Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub(crate) struct Integer8Bit([u8]);

macro_rules! to_primitive8 {
    ($type: ident, $name: ident) => {
        /// Try to convert to the primitive
        ///
        /// Negative values and overflows give nothing
        pub fn $name(&self) -> Option<$type> {
            self.to_u64().and_then(|v| $type::try_from(v).ok())
        }
    };
}

impl Integer8Bit {
    /// transform a raw slice into a Integer8Bit slice,
    /// no verification is done by this call
    pub(crate) fn unverified_from_slice(slice: &[u8]) -> &Self {
        cast_slice_u8_to_typed_slice!(slice, Self)
    }

    /// Try to parse from a slice
    ///
    /// The encoding must be non empty and use no redundant sign byte.
    pub fn from_slice(slice: &[u8]) -> Result<&Self, ()> {
        match slice {
            [] => Err(()),
            [0x00, next, ..] if next & 0x80 == 0 => Err(()),
            [0xff, next, ..] if next & 0x80 != 0 => Err(()),
            _ => Ok(Self::unverified_from_slice(slice)),
        }
    }

    pub fn is_negative(&self) -> bool {
        self.0[0] & 0x80 != 0
    }

    /// Try to convert to an unsigned 64 bits value
    ///
    /// Negative values and overflows give nothing
    pub fn to_u64(&self) -> Option<u64> {
        if self.is_negative() {
            return None;
        }
        let mut acc = 0u64;
        for c in &self.0[..] {
            acc = acc.checked_mul(0x100)?.checked_add(u64::from(*c))?
        }
        Some(acc)
    }

    to_primitive8!(u32, to_u32);
    to_primitive8!(u8, to_u8);
}

slice_reexport_asref!(Integer8Bit);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cont_bit7() {
        assert_eq!(read_cont_bit7(&[0x05]), Ok((5, 1)));
        assert_eq!(read_cont_bit7(&[0x86, 0x48, 0x01]), Ok((840, 2)));
        assert_eq!(read_cont_bit7(&[0x86, 0xf7, 0x0d]), Ok((113549, 3)));
        assert_eq!(read_cont_bit7(&[0x86]), Err(ContBit7Error::Incomplete));
        assert_eq!(read_cont_bit7(&[]), Err(ContBit7Error::Incomplete));
        assert_eq!(
            read_cont_bit7(&[0xff; 11]),
            Err(ContBit7Error::Overflow)
        );
        // tolerated here, rejected by the strict parser
        assert_eq!(read_cont_bit7(&[0x80, 0x01]), Ok((1, 2)));
        assert!(IntegerContBit7::parse_from_slice(&[0x80, 0x01]).is_err());
    }

    #[test]
    fn integer_8bit() {
        assert_eq!(Integer8Bit::from_slice(&[0x05]).unwrap().to_u8(), Some(5));
        assert_eq!(
            Integer8Bit::from_slice(&[0x00, 0x80]).unwrap().to_u32(),
            Some(0x80)
        );
        assert_eq!(
            Integer8Bit::from_slice(&[0x1a, 0x2b, 0x3c, 0x4d, 0x5e])
                .unwrap()
                .to_u64(),
            Some(0x1a_2b3c_4d5e)
        );
        assert_eq!(
            Integer8Bit::from_slice(&[0x01, 0x00]).unwrap().to_u8(),
            None
        );
        assert!(Integer8Bit::from_slice(&[0xff]).unwrap().is_negative());
        assert!(Integer8Bit::from_slice(&[]).is_err());
        assert!(Integer8Bit::from_slice(&[0x00, 0x01]).is_err());
        assert!(Integer8Bit::from_slice(&[0xff, 0x80]).is_err());
    }
}
