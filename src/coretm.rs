//! core type and macros
//!
//! this module is not exported by the crate as it contains
//! way to infringe on some type guarantees, and thus should
//! be use with care
//!

// transform a variable $name from type [u8] to $typ
macro_rules! cast_slice_u8_to_typed_slice {
    ($name: ident, $typ: ident) => {
        unsafe { &*($name as *const [u8] as *const $typ) }
    };
}

macro_rules! slice_reexport_asref {
    ($name: ident) => {
        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0.as_ref()
            }
        }
    };
}

// define an unsized $slice type wrapping raw bytes
macro_rules! define_typed_slice {
    ($slice: ident) => {
        #[derive(Debug, PartialEq, Eq, Hash)]
        #[repr(transparent)]
        pub struct $slice([u8]);
    };
}

macro_rules! method_reslice_cast {
    ($name: ident, $slice: ident) => {
        impl $name {
            /// unsafe method only available from internal module
            pub(crate) fn from_inner_slice<'a>(slice: &'a $slice) -> &'a $name {
                unsafe { &*(slice as *const $slice as *const $name) }
            }
        }
    };
}
