//! UEFI signature databases
//!
//! The Secure Boot variables (`PK`, `KEK`, `db`, `dbx`) hold a sequence of
//! `EFI_SIGNATURE_LIST`, each one a typed array of fixed size entries:
//!
//! ```text
//! SignatureType        GUID
//! SignatureListSize    u32 (le), whole list including this header
//! SignatureHeaderSize  u32 (le)
//! SignatureSize        u32 (le), size of each entry
//! SignatureHeader      [u8; SignatureHeaderSize]
//! Signatures           [ { SignatureOwner GUID, SignatureData } ]
//! ```

use alloc::string::String;
use core::fmt;

const GUID_SIZE: usize = 16;
const LIST_HEADER_SIZE: usize = GUID_SIZE + 12;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("signature list truncated at offset {offset}")]
    Truncated { offset: usize },
    #[error("invalid signature list size {size} at offset {offset}")]
    InvalidListSize { offset: usize, size: u32 },
    #[error("invalid signature size {size} at offset {offset}")]
    InvalidSignatureSize { offset: usize, size: u32 },
}

/// An EFI GUID, stored with its first three fields little endian
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Guid {
    pub data1: u32,
    pub data2: u16,
    pub data3: u16,
    pub data4: [u8; 8],
}

impl Guid {
    pub const fn new(data1: u32, data2: u16, data3: u16, data4: [u8; 8]) -> Self {
        Guid {
            data1,
            data2,
            data3,
            data4,
        }
    }

    pub fn from_bytes(b: &[u8; GUID_SIZE]) -> Self {
        let mut data4 = [0u8; 8];
        data4.copy_from_slice(&b[8..16]);
        Guid {
            data1: u32::from_le_bytes([b[0], b[1], b[2], b[3]]),
            data2: u16::from_le_bytes([b[4], b[5]]),
            data3: u16::from_le_bytes([b[6], b[7]]),
            data4,
        }
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = &self.data4;
        write!(
            f,
            "{:08x}-{:04x}-{:04x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
            self.data1, self.data2, self.data3, d[0], d[1], d[2], d[3], d[4], d[5], d[6], d[7]
        )
    }
}

pub const EFI_GLOBAL_VARIABLE: Guid = Guid::new(
    0x8be4df61,
    0x93ca,
    0x11d2,
    [0xaa, 0x0d, 0x00, 0xe0, 0x98, 0x03, 0x2b, 0x8c],
);
pub const EFI_IMAGE_SECURITY_DATABASE: Guid = Guid::new(
    0xd719b2cb,
    0x3d3a,
    0x4596,
    [0xa3, 0xbc, 0xda, 0xd0, 0x0e, 0x67, 0x65, 0x6f],
);
pub const EFI_CERT_X509: Guid = Guid::new(
    0xa5c059a1,
    0x94e4,
    0x4aa7,
    [0x87, 0xb5, 0xab, 0x15, 0x5c, 0x2b, 0xf0, 0x72],
);
pub const EFI_CERT_SHA256: Guid = Guid::new(
    0xc1c41626,
    0x504c,
    0x4092,
    [0xac, 0xa9, 0x41, 0xf9, 0x36, 0x93, 0x43, 0x28],
);
pub const EFI_CERT_RSA2048: Guid = Guid::new(
    0x3c5766e8,
    0x269c,
    0x4e34,
    [0xaa, 0x14, 0xed, 0x77, 0x6e, 0x85, 0xb3, 0xb6],
);
pub const EFI_CERT_TYPE_PKCS7: Guid = Guid::new(
    0x4aafd29d,
    0x68df,
    0x49ee,
    [0x8a, 0xa9, 0x34, 0x7d, 0x37, 0x56, 0x65, 0xa7],
);

/// Secure Boot signature database variables
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variable {
    Pk,
    Kek,
    Db,
    Dbx,
}

impl Variable {
    pub const ALL: [Variable; 4] = [Variable::Pk, Variable::Kek, Variable::Db, Variable::Dbx];

    pub fn name(self) -> &'static str {
        match self {
            Variable::Pk => "PK",
            Variable::Kek => "KEK",
            Variable::Db => "db",
            Variable::Dbx => "dbx",
        }
    }

    /// Vendor GUID the variable is defined under
    pub fn owner(self) -> Guid {
        match self {
            Variable::Pk | Variable::Kek => EFI_GLOBAL_VARIABLE,
            Variable::Db | Variable::Dbx => EFI_IMAGE_SECURITY_DATABASE,
        }
    }

    /// File name of the variable in efivarfs (`<name>-<guid>`)
    pub fn efivarfs_name(self) -> String {
        alloc::format!("{}-{}", self.name(), self.owner())
    }
}

/// Drop the 4 bytes attribute prefix of a variable read from efivarfs
pub fn strip_attributes(data: &[u8]) -> Result<&[u8], Error> {
    data.get(4..).ok_or(Error::Truncated { offset: 0 })
}

/// Type of the entries of a signature list
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignatureKind {
    X509,
    Sha256,
    Rsa2048,
    Pkcs7,
    Unknown,
}

impl SignatureKind {
    pub fn from_guid(guid: &Guid) -> Self {
        match *guid {
            EFI_CERT_X509 => SignatureKind::X509,
            EFI_CERT_SHA256 => SignatureKind::Sha256,
            EFI_CERT_RSA2048 => SignatureKind::Rsa2048,
            EFI_CERT_TYPE_PKCS7 => SignatureKind::Pkcs7,
            _ => SignatureKind::Unknown,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SignatureKind::X509 => "X509",
            SignatureKind::Sha256 => "SHA256",
            SignatureKind::Rsa2048 => "RSA2048",
            SignatureKind::Pkcs7 => "PKCS7",
            SignatureKind::Unknown => "Unknown",
        }
    }
}

/// One entry of a signature list
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Signature<'a> {
    pub owner: Guid,
    pub data: &'a [u8],
}

/// A checked `EFI_SIGNATURE_LIST`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SignatureList<'a> {
    pub signature_type: Guid,
    pub header: &'a [u8],
    signature_size: usize,
    entries: &'a [u8],
}

impl<'a> SignatureList<'a> {
    pub fn kind(&self) -> SignatureKind {
        SignatureKind::from_guid(&self.signature_type)
    }

    pub fn len(&self) -> usize {
        self.entries.len() / self.signature_size
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn signatures(&self) -> impl Iterator<Item = Signature<'a>> + 'a {
        self.entries
            .chunks_exact(self.signature_size)
            .map(|entry| {
                let (owner, data) = entry.split_at(GUID_SIZE);
                let mut guid = [0u8; GUID_SIZE];
                guid.copy_from_slice(owner);
                Signature {
                    owner: Guid::from_bytes(&guid),
                    data,
                }
            })
    }
}

/// Iterator over the signature lists of a variable's content
///
/// Iteration stops after the first malformed list.
pub struct SignatureLists<'a> {
    data: &'a [u8],
    index: usize,
}

pub fn signature_lists(data: &[u8]) -> SignatureLists<'_> {
    SignatureLists { data, index: 0 }
}

fn read_u32(b: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([b[at], b[at + 1], b[at + 2], b[at + 3]])
}

impl<'a> SignatureLists<'a> {
    fn parse(&self) -> Result<(SignatureList<'a>, usize), Error> {
        let offset = self.index;
        let data: &'a [u8] = self.data;
        let rest = &data[offset..];
        if rest.len() < LIST_HEADER_SIZE {
            return Err(Error::Truncated { offset });
        }
        let mut guid = [0u8; GUID_SIZE];
        guid.copy_from_slice(&rest[..GUID_SIZE]);
        let list_size = read_u32(rest, 16);
        let header_size = read_u32(rest, 20);
        let signature_size = read_u32(rest, 24);

        let list_len = list_size as usize;
        let header_end = LIST_HEADER_SIZE
            .checked_add(header_size as usize)
            .filter(|end| *end <= list_len)
            .ok_or(Error::InvalidListSize {
                offset,
                size: list_size,
            })?;
        if list_len > rest.len() {
            return Err(Error::Truncated { offset });
        }
        let entries = &rest[header_end..list_len];
        let invalid_signature = Error::InvalidSignatureSize {
            offset,
            size: signature_size,
        };
        let sig_len = signature_size as usize;
        if sig_len < GUID_SIZE || entries.len() % sig_len != 0 {
            return Err(invalid_signature);
        }

        let list = SignatureList {
            signature_type: Guid::from_bytes(&guid),
            header: &rest[LIST_HEADER_SIZE..header_end],
            signature_size: sig_len,
            entries,
        };
        Ok((list, list_len))
    }
}

impl<'a> Iterator for SignatureLists<'a> {
    type Item = Result<SignatureList<'a>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.data.len() {
            return None;
        }
        match self.parse() {
            Ok((list, size)) => {
                tracing::trace!(
                    offset = self.index,
                    kind = list.kind().name(),
                    entries = list.len(),
                    "signature list"
                );
                self.index += size;
                Some(Ok(list))
            }
            Err(e) => {
                tracing::warn!(error = %e, "malformed signature list");
                self.index = self.data.len();
                Some(Err(e))
            }
        }
    }
}
