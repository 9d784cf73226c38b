//! Certificate grammar and its field handlers
//!
//! ```text
//! Certificate ::= SEQUENCE {
//!     tbsCertificate       TBSCertificate,
//!     signatureAlgorithm   AlgorithmIdentifier,
//!     signatureValue       BIT STRING }
//!
//! TBSCertificate ::= SEQUENCE {
//!     version         [0] EXPLICIT Version DEFAULT v1,
//!     serialNumber         INTEGER,
//!     signature            AlgorithmIdentifier,
//!     issuer               Name,
//!     validity             SEQUENCE { notBefore Time, notAfter Time },
//!     subject              Name,
//!     subjectPublicKeyInfo SEQUENCE { algorithm AlgorithmIdentifier,
//!                                     subjectPublicKey BIT STRING },
//!     issuerUniqueID  [1] IMPLICIT BIT STRING OPTIONAL,
//!     subjectUniqueID [2] IMPLICIT BIT STRING OPTIONAL,
//!     extensions      [3] EXPLICIT SEQUENCE OF Extension OPTIONAL }
//! ```

use alloc::string::String;

use super::{Builder, Extension, Rejected, Time};
use crate::decoder::{Abort, Action, Field, Op};
use crate::header::constants::id;
use crate::objects::{Integer, OID};
use crate::oid::{lookup, Symbol};

const VERSION: usize = 0;
const SERIAL: usize = 1;
const ALGORITHM: usize = 2;
const SIGNATURE: usize = 3;
const ATTRIBUTE_TYPE: usize = 4;
const ATTRIBUTE_VALUE: usize = 5;
const ISSUER: usize = 6;
const NOT_BEFORE: usize = 7;
const NOT_AFTER: usize = 8;
const SUBJECT: usize = 9;
const PUBLIC_KEY: usize = 10;
const EXTENSION_ID: usize = 11;
const CRITICAL: usize = 12;
const OUTER_SIGNATURE: usize = 13;

pub(super) const ACTIONS: &[Action<Builder>] = &[
    version,
    serial,
    algorithm,
    signature,
    attribute_type,
    attribute_value,
    issuer,
    not_before,
    not_after,
    subject,
    public_key,
    extension_id,
    critical,
    outer_signature,
];

#[rustfmt::skip]
pub(super) const CERTIFICATE: &[Op] = &[
    /*  0 */ Op::expect(id::SEQUENCE),
    /*  1 */ Op::expect(id::SEQUENCE),
    // version
    /*  2 */ Op::expect(id::context_constructed(0)).optional(5),
    /*  3 */ Op::expect(id::INTEGER).act(VERSION),
    /*  4 */ Op::end_seq(),
    /*  5 */ Op::expect(id::INTEGER).act(SERIAL),
    // signature
    /*  6 */ Op::expect(id::SEQUENCE),
    /*  7 */ Op::expect(id::OID).act(ALGORITHM),
    /*  8 */ Op::any().skip().optional(9),
    /*  9 */ Op::end_seq().act(SIGNATURE),
    // issuer
    /* 10 */ Op::expect(id::SEQUENCE),
    /* 11 */ Op::expect(id::SET).optional(17),
    /* 12 */ Op::expect(id::SEQUENCE).optional(16),
    /* 13 */ Op::expect(id::OID).act(ATTRIBUTE_TYPE),
    /* 14 */ Op::any().skip().act(ATTRIBUTE_VALUE),
    /* 15 */ Op::end_seq().then(12),
    /* 16 */ Op::end_set().then(11),
    /* 17 */ Op::end_seq().act(ISSUER),
    // validity
    /* 18 */ Op::expect(id::SEQUENCE),
    /* 19 */ Op::expect(id::UTC_TIME).optional(20).act(NOT_BEFORE),
    /* 20 */ Op::expect(id::GENERALIZED_TIME).cond(21).act(NOT_BEFORE),
    /* 21 */ Op::expect(id::UTC_TIME).optional(22).act(NOT_AFTER),
    /* 22 */ Op::expect(id::GENERALIZED_TIME).cond(23).act(NOT_AFTER),
    /* 23 */ Op::end_seq(),
    // subject
    /* 24 */ Op::expect(id::SEQUENCE),
    /* 25 */ Op::expect(id::SET).optional(31),
    /* 26 */ Op::expect(id::SEQUENCE).optional(30),
    /* 27 */ Op::expect(id::OID).act(ATTRIBUTE_TYPE),
    /* 28 */ Op::any().skip().act(ATTRIBUTE_VALUE),
    /* 29 */ Op::end_seq().then(26),
    /* 30 */ Op::end_set().then(25),
    /* 31 */ Op::end_seq().act(SUBJECT),
    // subjectPublicKeyInfo
    /* 32 */ Op::expect(id::SEQUENCE),
    /* 33 */ Op::expect(id::SEQUENCE),
    /* 34 */ Op::expect(id::OID).act(ALGORITHM),
    /* 35 */ Op::any().skip().optional(36),
    /* 36 */ Op::end_seq(),
    /* 37 */ Op::expect(id::BIT_STRING),
    /* 38 */ Op::end_seq().act(PUBLIC_KEY),
    // unique identifiers
    /* 39 */ Op::expect(id::context(1)).optional(40),
    /* 40 */ Op::expect(id::context(2)).optional(41),
    // extensions
    /* 41 */ Op::expect(id::context_constructed(3)).optional(50),
    /* 42 */ Op::expect(id::SEQUENCE),
    /* 43 */ Op::expect(id::SEQUENCE).optional(48),
    /* 44 */ Op::expect(id::OID).act(EXTENSION_ID),
    /* 45 */ Op::expect(id::BOOLEAN).optional(46).act(CRITICAL),
    /* 46 */ Op::expect(id::OCTET_STRING),
    /* 47 */ Op::end_seq().then(43),
    /* 48 */ Op::end_seq(),
    /* 49 */ Op::end_seq(),
    /* 50 */ Op::end_seq(),
    // signatureAlgorithm, signatureValue
    /* 51 */ Op::expect(id::SEQUENCE),
    /* 52 */ Op::expect(id::OID).act(ALGORITHM),
    /* 53 */ Op::any().skip().optional(54),
    /* 54 */ Op::end_seq().act(OUTER_SIGNATURE),
    /* 55 */ Op::expect(id::BIT_STRING),
    /* 56 */ Op::end_seq(),
    /* 57 */ Op::complete(),
];

fn oid_text(value: &[u8]) -> Result<String, Abort> {
    let oid = OID::parse_from_slice(value).map_err(|()| Rejected::ObjectIdentifier)?;
    Ok(match oid.symbol() {
        Some(symbol) => String::from(symbol.name()),
        None => alloc::format!("{}", oid),
    })
}

fn version(b: &mut Builder, field: &Field<'_>) -> Result<(), Abort> {
    let v = Integer::parse_from_slice(field.value)
        .ok()
        .and_then(|i| i.to_u8())
        .ok_or(Rejected::Version)?;
    b.summary.version = v;
    Ok(())
}

fn serial(b: &mut Builder, field: &Field<'_>) -> Result<(), Abort> {
    Integer::parse_from_slice(field.value).map_err(|()| Rejected::Serial)?;
    b.summary.serial = field.value.to_vec();
    Ok(())
}

fn algorithm(b: &mut Builder, field: &Field<'_>) -> Result<(), Abort> {
    b.pending = oid_text(field.value)?;
    Ok(())
}

fn signature(b: &mut Builder, _: &Field<'_>) -> Result<(), Abort> {
    b.summary.signature_algorithm = b.take();
    Ok(())
}

fn attribute_type(b: &mut Builder, field: &Field<'_>) -> Result<(), Abort> {
    if !b.pending.is_empty() {
        b.pending.push(' ');
    }
    let short = match lookup(field.value) {
        Some(Symbol::CountryName) => "C",
        Some(Symbol::StateOrProvinceName) => "ST",
        Some(Symbol::Locality) => "L",
        Some(Symbol::OrganizationName) => "O",
        Some(Symbol::OrganizationUnitName) => "OU",
        Some(Symbol::CommonName) => "CN",
        _ => {
            let name = oid_text(field.value)?;
            b.pending.push_str(&name);
            b.pending.push('=');
            return Ok(());
        }
    };
    b.pending.push_str(short);
    b.pending.push('=');
    Ok(())
}

fn attribute_value(b: &mut Builder, field: &Field<'_>) -> Result<(), Abort> {
    match field.tag {
        id::UTF8_STRING | id::PRINTABLE_STRING | id::IA5_STRING => {
            let text = core::str::from_utf8(field.value).map_err(|_| Rejected::Text)?;
            b.pending.push_str(text);
        }
        // teletex, taken as latin-1
        id::T61_STRING => b.pending.extend(field.value.iter().map(|c| char::from(*c))),
        id::BMP_STRING => {
            if field.value.len() % 2 != 0 {
                return Err(Rejected::Text.into());
            }
            let units = field
                .value
                .chunks_exact(2)
                .map(|c| u16::from_be_bytes([c[0], c[1]]));
            for c in char::decode_utf16(units) {
                b.pending.push(c.map_err(|_| Rejected::Text)?);
            }
        }
        _ => {
            b.pending.push('#');
            for byte in field.value {
                b.pending.push_str(&alloc::format!("{:02x}", byte));
            }
        }
    }
    Ok(())
}

fn issuer(b: &mut Builder, _: &Field<'_>) -> Result<(), Abort> {
    b.summary.issuer = b.take();
    Ok(())
}

fn subject(b: &mut Builder, _: &Field<'_>) -> Result<(), Abort> {
    b.summary.subject = b.take();
    Ok(())
}

fn time(field: &Field<'_>) -> Result<Time, Abort> {
    Time::parse(field.tag, field.value).ok_or_else(|| Rejected::Time.into())
}

fn not_before(b: &mut Builder, field: &Field<'_>) -> Result<(), Abort> {
    b.summary.not_before = Some(time(field)?);
    Ok(())
}

fn not_after(b: &mut Builder, field: &Field<'_>) -> Result<(), Abort> {
    b.summary.not_after = Some(time(field)?);
    Ok(())
}

fn public_key(b: &mut Builder, _: &Field<'_>) -> Result<(), Abort> {
    b.summary.public_key_algorithm = b.take();
    Ok(())
}

fn extension_id(b: &mut Builder, field: &Field<'_>) -> Result<(), Abort> {
    let name = oid_text(field.value)?;
    b.summary.extensions.push(Extension {
        name,
        critical: false,
    });
    Ok(())
}

fn critical(b: &mut Builder, field: &Field<'_>) -> Result<(), Abort> {
    let flag = match field.value {
        [v] => *v != 0,
        _ => return Err(Rejected::Boolean.into()),
    };
    if let Some(ext) = b.summary.extensions.last_mut() {
        ext.critical = flag;
    }
    Ok(())
}

fn outer_signature(b: &mut Builder, _: &Field<'_>) -> Result<(), Abort> {
    let outer = b.take();
    if outer != b.summary.signature_algorithm {
        tracing::warn!(
            inner = %b.summary.signature_algorithm,
            outer = %outer,
            "signature algorithm differs from the signed one"
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::Grammar;

    #[test]
    fn table_is_valid() {
        let g = Grammar::new(CERTIFICATE, ACTIONS).unwrap();
        assert_eq!(g.ops().len(), 58);
    }

    fn field(tag: u8, value: &[u8]) -> Field<'_> {
        Field {
            index: 0,
            tag,
            offset: 0,
            value,
            indefinite: false,
        }
    }

    #[test]
    fn attribute_types() {
        let mut b = Builder::default();
        attribute_type(&mut b, &field(id::OID, &[0x55, 0x04, 0x06])).unwrap();
        attribute_value(&mut b, &field(id::PRINTABLE_STRING, b"US")).unwrap();
        attribute_type(&mut b, &field(id::OID, &[0x55, 0x04, 0x03])).unwrap();
        attribute_value(&mut b, &field(id::BMP_STRING, &[0x00, 0x4b, 0x00, 0xe9])).unwrap();
        // 2.5.4.97, organizationIdentifier, is not registered
        attribute_type(&mut b, &field(id::OID, &[0x55, 0x04, 0x61])).unwrap();
        attribute_value(&mut b, &field(id::SEQUENCE, &[0x05, 0x00])).unwrap();
        assert_eq!(b.pending, "C=US CN=K\u{e9} 2.5.4.97=#0500");

        assert!(attribute_value(&mut b, &field(id::BMP_STRING, &[0x00])).is_err());
        assert!(attribute_value(&mut b, &field(id::UTF8_STRING, &[0xff])).is_err());
    }
}
