//! X.509 certificate summaries
//!
//! [`summarize`] walks a DER (or BER) encoded certificate with a static
//! grammar and collects the fields worth displaying: version, serial
//! number, algorithms, issuer and subject names, validity and the list
//! of extensions. Nothing is verified.
//!
//! ```no_run
//! # fn certificate() -> &'static [u8] { &[] }
//! let summary = berwalk::x509::summarize(certificate())?;
//! println!("{}", summary.subject);
//! # Ok::<(), berwalk::Error>(())
//! ```

mod grammar;
mod time;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

pub use time::Time;

use crate::ber::Options;
use crate::decoder::{Abort, Decoder, Grammar};
use crate::error::Error;

/// Reason a certificate handler stopped the decode, carried as the code
/// of [`Error::CallbackAborted`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[repr(i32)]
pub enum Rejected {
    #[error("version is not a small positive integer")]
    Version = 1,
    #[error("malformed serial number")]
    Serial = 2,
    #[error("malformed object identifier")]
    ObjectIdentifier = 3,
    #[error("undecodable name attribute")]
    Text = 4,
    #[error("malformed or unsupported time")]
    Time = 5,
    #[error("malformed boolean")]
    Boolean = 6,
}

impl Rejected {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Rejected::Version),
            2 => Some(Rejected::Serial),
            3 => Some(Rejected::ObjectIdentifier),
            4 => Some(Rejected::Text),
            5 => Some(Rejected::Time),
            6 => Some(Rejected::Boolean),
            _ => None,
        }
    }
}

impl From<Rejected> for Abort {
    fn from(r: Rejected) -> Abort {
        Abort::new(r as i32)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Extension {
    /// Registered name, or dotted form of the identifier
    pub name: String,
    pub critical: bool,
}

/// Displayable fields of a certificate
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CertSummary {
    /// Encoded version: 0 for v1, 2 for v3
    pub version: u8,
    /// Content octets of the serial number INTEGER
    pub serial: Vec<u8>,
    pub signature_algorithm: String,
    pub issuer: String,
    pub not_before: Option<Time>,
    pub not_after: Option<Time>,
    pub subject: String,
    pub public_key_algorithm: String,
    pub extensions: Vec<Extension>,
}

/// Context of the certificate grammar handlers
#[derive(Default)]
struct Builder {
    summary: CertSummary,
    /// Text of the algorithm or name being walked, moved into the summary
    /// when its element closes
    pending: String,
}

impl Builder {
    fn take(&mut self) -> String {
        core::mem::take(&mut self.pending)
    }
}

/// Summarize a certificate, reading BER
pub fn summarize(der: &[u8]) -> Result<CertSummary, Error> {
    summarize_with(der, Options::default())
}

pub fn summarize_with(der: &[u8], options: Options) -> Result<CertSummary, Error> {
    let certificate = Grammar::new(grammar::CERTIFICATE, grammar::ACTIONS)?;
    let mut builder = Builder::default();
    Decoder::with_options(certificate, options).decode(der, &mut builder)?;
    tracing::debug!(subject = %builder.summary.subject, "certificate summarized");
    Ok(builder.summary)
}

const WRAP: usize = 90;
const CONTINUATION: &str = "             ";

struct Optional<'a>(&'a Option<Time>);

impl fmt::Display for Optional<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(t) => t.fmt(f),
            None => f.write_str("unknown"),
        }
    }
}

impl fmt::Display for CertSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "  Version: {} (0x{:02x})",
            u16::from(self.version) + 1,
            self.version
        )?;
        f.write_str("  Serial Number: ")?;
        for (i, b) in self.serial.iter().enumerate() {
            if i > 0 {
                f.write_str(":")?;
            }
            write!(f, "{:02x}", b)?;
        }
        writeln!(f)?;
        writeln!(f, "  Signature Algorithm: {}", self.signature_algorithm)?;
        writeln!(f, "  Issuer: {}", self.issuer)?;
        writeln!(
            f,
            "  Validity:  Not Before: {}   Not After: {}",
            Optional(&self.not_before),
            Optional(&self.not_after)
        )?;
        writeln!(f, "  Subject: {}", self.subject)?;
        writeln!(
            f,
            "  Subject Public Key Algorithm: {}",
            self.public_key_algorithm
        )?;
        if !self.extensions.is_empty() {
            f.write_str("  Extensions:")?;
            let mut line = 0;
            for ext in &self.extensions {
                if line > WRAP {
                    write!(f, "\n{}", CONTINUATION)?;
                    line = 0;
                }
                write!(f, " {}", ext.name)?;
                line += 1 + ext.name.len();
                if ext.critical {
                    f.write_str(" (critical)")?;
                    line += 11;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ber::Mode;
    use alloc::string::ToString;

    const RSA_KEK: &[u8] = include_bytes!("../../tests/data/rsa-kek-ca.der");

    #[test]
    fn rejected_codes() {
        for r in [
            Rejected::Version,
            Rejected::Serial,
            Rejected::ObjectIdentifier,
            Rejected::Text,
            Rejected::Time,
            Rejected::Boolean,
        ] {
            assert_eq!(Rejected::from_code(Abort::from(r).code), Some(r));
        }
        assert_eq!(Rejected::from_code(0), None);
    }

    #[test]
    fn rsa_certificate() {
        let s = summarize(RSA_KEK).unwrap();
        assert_eq!(s.version, 2);
        assert_eq!(s.serial, std::vec![0x05]);
        assert_eq!(s.signature_algorithm, "sha256WithRSAEncryption");
        assert_eq!(s.issuer, "C=US O=Firmware Vendor OU=Secure Boot CN=Vendor KEK CA");
        assert_eq!(s.subject, s.issuer);
        assert_eq!(s.public_key_algorithm, "rsaEncryption");
        assert_eq!(
            s.not_before.unwrap().to_string(),
            "2026-10-19 11:19:27 UTC"
        );
        assert_eq!(s.not_after.unwrap().to_string(), "2027-10-19 11:19:27 UTC");
        let names: Vec<(&str, bool)> = s
            .extensions
            .iter()
            .map(|e| (e.name.as_str(), e.critical))
            .collect();
        assert_eq!(
            names,
            std::vec![
                ("subjectKeyIdentifier", false),
                ("authorityKeyIdentifier", false),
                ("basicConstraints", true),
            ]
        );

        // the fixture is DER
        assert_eq!(
            summarize_with(RSA_KEK, Options::default().with_mode(Mode::Der)).unwrap(),
            s
        );
    }

    #[test]
    fn display() {
        let s = summarize(RSA_KEK).unwrap();
        let text = s.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "  Version: 3 (0x02)");
        assert_eq!(lines[1], "  Serial Number: 05");
        assert_eq!(lines[2], "  Signature Algorithm: sha256WithRSAEncryption");
        assert_eq!(
            lines[4],
            "  Validity:  Not Before: 2026-10-19 11:19:27 UTC   Not After: 2027-10-19 11:19:27 UTC"
        );
        assert_eq!(
            lines[7],
            "  Extensions: subjectKeyIdentifier authorityKeyIdentifier basicConstraints (critical)"
        );
        assert_eq!(lines.len(), 8);
    }

    #[test]
    fn extensions_wrap() {
        let ext = Extension {
            name: "authorityKeyIdentifier".to_string(),
            critical: true,
        };
        let s = CertSummary {
            extensions: std::vec![ext; 6],
            ..Default::default()
        };
        let text = s.to_string();
        let ext_lines: Vec<&str> = text
            .lines()
            .skip_while(|l| !l.starts_with("  Extensions:"))
            .collect();
        assert_eq!(ext_lines.len(), 2);
        assert!(ext_lines[1].starts_with(CONTINUATION));
    }

    #[test]
    fn corrupted_certificate() {
        let mut bad = RSA_KEK.to_vec();
        // the serial number INTEGER becomes an OCTET STRING
        assert_eq!(bad[13], 0x02);
        bad[13] = 0x04;
        assert_eq!(
            summarize(&bad).unwrap_err(),
            Error::GrammarMismatch {
                offset: 13,
                action: 5,
                tag: 0x04
            }
        );

        assert!(matches!(
            summarize(&RSA_KEK[..RSA_KEK.len() - 1]),
            Err(Error::LengthOverflow { offset: 0 })
        ));
    }
}
