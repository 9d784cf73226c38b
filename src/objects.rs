//! Typed views over the content octets of decoded elements
//!
//! Handlers receive raw content slices from the decoder; these types give
//! them a checked, zero-copy interpretation.

use core::fmt;

use crate::intenc::{Integer8Bit, IntegerContBit7};
use crate::oid::{lookup, Arcs, Symbol};

macro_rules! typed_slice {
    ($slice: ident) => {
        define_typed_slice!($slice);
        slice_reexport_asref!($slice);

        impl $slice {
            /// unsafe method only available from internal module
            pub(crate) fn from_raw_slice<'a>(slice: &'a [u8]) -> &'a $slice {
                cast_slice_u8_to_typed_slice!(slice, $slice)
            }
        }
    };
}

macro_rules! type_reslice {
    ($name: ident, $slice: ident) => {
        #[derive(Debug, PartialEq, Eq, Hash)]
        #[repr(transparent)]
        pub struct $name($slice);

        method_reslice_cast!($name, $slice);
        slice_reexport_asref!($name);
    };
}

typed_slice!(OID);

type_reslice!(Integer, Integer8Bit);

impl Integer {
    /// Check the content octets of an INTEGER
    pub fn parse_from_slice(slice: &[u8]) -> Result<&Self, ()> {
        Integer8Bit::from_slice(slice).map(Self::from_inner_slice)
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    pub fn to_u64(&self) -> Option<u64> {
        self.0.to_u64()
    }

    pub fn to_u32(&self) -> Option<u32> {
        self.0.to_u32()
    }

    pub fn to_u8(&self) -> Option<u8> {
        self.0.to_u8()
    }
}

impl OID {
    /// Check the content octets of an OBJECT IDENTIFIER
    ///
    /// Every subidentifier must be minimally encoded and fit in 64 bits.
    pub fn parse_from_slice(slice: &[u8]) -> Result<&Self, ()> {
        if slice.is_empty() {
            return Err(());
        }
        let mut index = 0;
        while index < slice.len() {
            let (component, adv) = IntegerContBit7::parse_from_slice(&slice[index..])?;
            component.to_u64().ok_or(())?;
            index += adv;
        }
        Ok(Self::from_raw_slice(slice))
    }

    /// All arcs of the identifier, the first two split out of the
    /// leading subidentifier
    pub fn arcs(&self) -> Arcs<'_> {
        Arcs::new(&self.0)
    }

    /// Registered symbol for this identifier, if any
    pub fn symbol(&self) -> Option<Symbol> {
        lookup(&self.0)
    }
}

impl fmt::Display for OID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, arc) in self.arcs().map_while(Result::ok).enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", arc)?;
        }
        Ok(())
    }
}
