// Generated from the registry below. The search table must stay sorted by
// (hash, encoded length, encoded bytes compared from the last byte backward).

use super::SearchEntry;

macro_rules! symbols {
    ($($variant:ident => $name:literal, $dotted:literal;)*) => {
        /// Symbolic identifier of a registered object identifier
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u16)]
        pub enum Symbol {
            $($variant,)*
        }

        impl Symbol {
            /// Every registered symbol, in registry order
            pub const ALL: &'static [Symbol] = &[$(Symbol::$variant,)*];

            /// Mnemonic name of the object identifier
            pub fn name(self) -> &'static str {
                match self {
                    $(Symbol::$variant => $name,)*
                }
            }

            /// Dotted-decimal form of the object identifier
            pub fn dotted(self) -> &'static str {
                match self {
                    $(Symbol::$variant => $dotted,)*
                }
            }
        }
    };
}

symbols! {
    IdDsaWithSha1 => "id_dsa_with_sha1", "1.2.840.10030.4.3";
    IdDsa => "id_dsa", "1.2.840.10040.4.1";
    IdEcPublicKey => "id_ecPublicKey", "1.2.840.10045.2.1";
    IdEcdsaWithSha1 => "id_ecdsa_with_sha1", "1.2.840.10045.4.1";
    EcdsaWithSha256 => "ecdsa_with_sha256", "1.2.840.10045.4.3.2";
    EcdsaWithSha384 => "ecdsa_with_sha384", "1.2.840.10045.4.3.3";
    EcdsaWithSha512 => "ecdsa_with_sha512", "1.2.840.10045.4.3.4";
    RsaEncryption => "rsaEncryption", "1.2.840.113549.1.1.1";
    Md2WithRsaEncryption => "md2WithRSAEncryption", "1.2.840.113549.1.1.2";
    Md3WithRsaEncryption => "md3WithRSAEncryption", "1.2.840.113549.1.1.3";
    Md4WithRsaEncryption => "md4WithRSAEncryption", "1.2.840.113549.1.1.4";
    Sha1WithRsaEncryption => "sha1WithRSAEncryption", "1.2.840.113549.1.1.5";
    Mgf1 => "mgf1", "1.2.840.113549.1.1.8";
    RsassaPss => "rsassaPSS", "1.2.840.113549.1.1.10";
    Sha256WithRsaEncryption => "sha256WithRSAEncryption", "1.2.840.113549.1.1.11";
    Sha384WithRsaEncryption => "sha384WithRSAEncryption", "1.2.840.113549.1.1.12";
    Sha512WithRsaEncryption => "sha512WithRSAEncryption", "1.2.840.113549.1.1.13";
    Sha224WithRsaEncryption => "sha224WithRSAEncryption", "1.2.840.113549.1.1.14";
    Data => "data", "1.2.840.113549.1.7.1";
    SignedData => "signed_data", "1.2.840.113549.1.7.2";
    EmailAddress => "email_address", "1.2.840.113549.1.9.1";
    ContentType => "contentType", "1.2.840.113549.1.9.3";
    MessageDigest => "messageDigest", "1.2.840.113549.1.9.4";
    SigningTime => "signingTime", "1.2.840.113549.1.9.5";
    SmimeCapabilites => "smimeCapabilites", "1.2.840.113549.1.9.15";
    SmimeAuthenticatedAttrs => "smimeAuthenticatedAttrs", "1.2.840.113549.1.9.16.2.11";
    Md2 => "md2", "1.2.840.113549.2.2";
    Md4 => "md4", "1.2.840.113549.2.4";
    Md5 => "md5", "1.2.840.113549.2.5";
    MsIndirectData => "msIndirectData", "1.3.6.1.4.1.311.2.1.4";
    MsStatementType => "msStatementType", "1.3.6.1.4.1.311.2.1.11";
    MsSpOpusInfo => "msSpOpusInfo", "1.3.6.1.4.1.311.2.1.12";
    MsPeImageDataObjId => "msPeImageDataObjId", "1.3.6.1.4.1.311.2.1.15";
    MsIndividualSpKeyPurpose => "msIndividualSPKeyPurpose", "1.3.6.1.4.1.311.2.1.21";
    MsOutlookExpress => "msOutlookExpress", "1.3.6.1.4.1.311.16.4";
    MsEnrollCerttypeExtension => "msEnrollCerttypeExtension", "1.3.6.1.4.1.311.20.2";
    MsCertsrvCaVersion => "msCertsrvCAVersion", "1.3.6.1.4.1.311.21.1";
    MsCertsrvPreviousCertHash => "msCertsrvPreviousCertHash", "1.3.6.1.4.1.311.21.2";
    CertAuthInfoAccess => "certAuthInfoAccess", "1.3.6.1.5.5.7.1.1";
    IdKpServerAuth => "id_kp_serverAuth", "1.3.6.1.5.5.7.3.1";
    IdKpClientAuth => "id_kp_clientAuth", "1.3.6.1.5.5.7.3.2";
    IdKpCodeSigning => "id_kp_codeSigning", "1.3.6.1.5.5.7.3.3";
    Sha1 => "sha1", "1.3.14.3.2.26";
    Ed25519 => "ed25519", "1.3.101.112";
    Sha256 => "sha256", "2.16.840.1.101.3.4.2.1";
    Sha384 => "sha384", "2.16.840.1.101.3.4.2.2";
    Sha512 => "sha512", "2.16.840.1.101.3.4.2.3";
    Sha224 => "sha224", "2.16.840.1.101.3.4.2.4";
    DomainComponent => "domainComponent", "0.9.2342.19200300.100.1.25";
    CommonName => "commonName", "2.5.4.3";
    Surname => "surname", "2.5.4.4";
    SerialNumber => "serialNumber", "2.5.4.5";
    CountryName => "countryName", "2.5.4.6";
    Locality => "locality", "2.5.4.7";
    StateOrProvinceName => "stateOrProvinceName", "2.5.4.8";
    StreetAddress => "streetAddress", "2.5.4.9";
    OrganizationName => "organizationName", "2.5.4.10";
    OrganizationUnitName => "organizationUnitName", "2.5.4.11";
    Title => "title", "2.5.4.12";
    Description => "description", "2.5.4.13";
    Name => "name", "2.5.4.41";
    GivenName => "givenName", "2.5.4.42";
    Initials => "initials", "2.5.4.43";
    GenerationalQualifier => "generationalQualifier", "2.5.4.44";
    SubjectKeyIdentifier => "subjectKeyIdentifier", "2.5.29.14";
    KeyUsage => "keyUsage", "2.5.29.15";
    SubjectAltName => "subjectAltName", "2.5.29.17";
    IssuerAltName => "issuerAltName", "2.5.29.18";
    BasicConstraints => "basicConstraints", "2.5.29.19";
    CrlDistributionPoints => "crlDistributionPoints", "2.5.29.31";
    CertPolicies => "certPolicies", "2.5.29.32";
    AuthorityKeyIdentifier => "authorityKeyIdentifier", "2.5.29.35";
    ExtKeyUsage => "extKeyUsage", "2.5.29.37";
}

/// Offsets of each symbol's encoding inside [`OID_DATA`], plus a final end offset
pub(super) const OID_INDEX: [u16; 74] = [
    0, 7, 14, 21, 28, 36, 44, 52, 61, 70, 79, 88,
    97, 106, 115, 124, 133, 142, 151, 160, 169, 178, 187, 196,
    205, 214, 225, 233, 241, 249, 259, 269, 279, 289, 299, 308,
    317, 326, 335, 343, 351, 359, 367, 372, 375, 384, 393, 402,
    411, 421, 424, 427, 430, 433, 436, 439, 442, 445, 448, 451,
    454, 457, 460, 463, 466, 469, 472, 475, 478, 481, 484, 487,
    490, 493,
];

/// Concatenated content octets of every registered object identifier
pub(super) const OID_DATA: [u8; 493] = [
    // 1.2.840.10030.4.3
    0x2a, 0x86, 0x48, 0xce, 0x2e, 0x04, 0x03,
    // 1.2.840.10040.4.1
    0x2a, 0x86, 0x48, 0xce, 0x38, 0x04, 0x01,
    // 1.2.840.10045.2.1
    0x2a, 0x86, 0x48, 0xce, 0x3d, 0x02, 0x01,
    // 1.2.840.10045.4.1
    0x2a, 0x86, 0x48, 0xce, 0x3d, 0x04, 0x01,
    // 1.2.840.10045.4.3.2
    0x2a, 0x86, 0x48, 0xce, 0x3d, 0x04, 0x03, 0x02,
    // 1.2.840.10045.4.3.3
    0x2a, 0x86, 0x48, 0xce, 0x3d, 0x04, 0x03, 0x03,
    // 1.2.840.10045.4.3.4
    0x2a, 0x86, 0x48, 0xce, 0x3d, 0x04, 0x03, 0x04,
    // 1.2.840.113549.1.1.1
    0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x01,
    // 1.2.840.113549.1.1.2
    0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x02,
    // 1.2.840.113549.1.1.3
    0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x03,
    // 1.2.840.113549.1.1.4
    0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x04,
    // 1.2.840.113549.1.1.5
    0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x05,
    // 1.2.840.113549.1.1.8
    0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x08,
    // 1.2.840.113549.1.1.10
    0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x0a,
    // 1.2.840.113549.1.1.11
    0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x0b,
    // 1.2.840.113549.1.1.12
    0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x0c,
    // 1.2.840.113549.1.1.13
    0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x0d,
    // 1.2.840.113549.1.1.14
    0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x0e,
    // 1.2.840.113549.1.7.1
    0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x07, 0x01,
    // 1.2.840.113549.1.7.2
    0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x07, 0x02,
    // 1.2.840.113549.1.9.1
    0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x09, 0x01,
    // 1.2.840.113549.1.9.3
    0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x09, 0x03,
    // 1.2.840.113549.1.9.4
    0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x09, 0x04,
    // 1.2.840.113549.1.9.5
    0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x09, 0x05,
    // 1.2.840.113549.1.9.15
    0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x09, 0x0f,
    // 1.2.840.113549.1.9.16.2.11
    0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x09, 0x10, 0x02, 0x0b,
    // 1.2.840.113549.2.2
    0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x02, 0x02,
    // 1.2.840.113549.2.4
    0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x02, 0x04,
    // 1.2.840.113549.2.5
    0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x02, 0x05,
    // 1.3.6.1.4.1.311.2.1.4
    0x2b, 0x06, 0x01, 0x04, 0x01, 0x82, 0x37, 0x02, 0x01, 0x04,
    // 1.3.6.1.4.1.311.2.1.11
    0x2b, 0x06, 0x01, 0x04, 0x01, 0x82, 0x37, 0x02, 0x01, 0x0b,
    // 1.3.6.1.4.1.311.2.1.12
    0x2b, 0x06, 0x01, 0x04, 0x01, 0x82, 0x37, 0x02, 0x01, 0x0c,
    // 1.3.6.1.4.1.311.2.1.15
    0x2b, 0x06, 0x01, 0x04, 0x01, 0x82, 0x37, 0x02, 0x01, 0x0f,
    // 1.3.6.1.4.1.311.2.1.21
    0x2b, 0x06, 0x01, 0x04, 0x01, 0x82, 0x37, 0x02, 0x01, 0x15,
    // 1.3.6.1.4.1.311.16.4
    0x2b, 0x06, 0x01, 0x04, 0x01, 0x82, 0x37, 0x10, 0x04,
    // 1.3.6.1.4.1.311.20.2
    0x2b, 0x06, 0x01, 0x04, 0x01, 0x82, 0x37, 0x14, 0x02,
    // 1.3.6.1.4.1.311.21.1
    0x2b, 0x06, 0x01, 0x04, 0x01, 0x82, 0x37, 0x15, 0x01,
    // 1.3.6.1.4.1.311.21.2
    0x2b, 0x06, 0x01, 0x04, 0x01, 0x82, 0x37, 0x15, 0x02,
    // 1.3.6.1.5.5.7.1.1
    0x2b, 0x06, 0x01, 0x05, 0x05, 0x07, 0x01, 0x01,
    // 1.3.6.1.5.5.7.3.1
    0x2b, 0x06, 0x01, 0x05, 0x05, 0x07, 0x03, 0x01,
    // 1.3.6.1.5.5.7.3.2
    0x2b, 0x06, 0x01, 0x05, 0x05, 0x07, 0x03, 0x02,
    // 1.3.6.1.5.5.7.3.3
    0x2b, 0x06, 0x01, 0x05, 0x05, 0x07, 0x03, 0x03,
    // 1.3.14.3.2.26
    0x2b, 0x0e, 0x03, 0x02, 0x1a,
    // 1.3.101.112
    0x2b, 0x65, 0x70,
    // 2.16.840.1.101.3.4.2.1
    0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x01,
    // 2.16.840.1.101.3.4.2.2
    0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x02,
    // 2.16.840.1.101.3.4.2.3
    0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x03,
    // 2.16.840.1.101.3.4.2.4
    0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x04,
    // 0.9.2342.19200300.100.1.25
    0x09, 0x92, 0x26, 0x89, 0x93, 0xf2, 0x2c, 0x64, 0x01, 0x19,
    // 2.5.4.3
    0x55, 0x04, 0x03,
    // 2.5.4.4
    0x55, 0x04, 0x04,
    // 2.5.4.5
    0x55, 0x04, 0x05,
    // 2.5.4.6
    0x55, 0x04, 0x06,
    // 2.5.4.7
    0x55, 0x04, 0x07,
    // 2.5.4.8
    0x55, 0x04, 0x08,
    // 2.5.4.9
    0x55, 0x04, 0x09,
    // 2.5.4.10
    0x55, 0x04, 0x0a,
    // 2.5.4.11
    0x55, 0x04, 0x0b,
    // 2.5.4.12
    0x55, 0x04, 0x0c,
    // 2.5.4.13
    0x55, 0x04, 0x0d,
    // 2.5.4.41
    0x55, 0x04, 0x29,
    // 2.5.4.42
    0x55, 0x04, 0x2a,
    // 2.5.4.43
    0x55, 0x04, 0x2b,
    // 2.5.4.44
    0x55, 0x04, 0x2c,
    // 2.5.29.14
    0x55, 0x1d, 0x0e,
    // 2.5.29.15
    0x55, 0x1d, 0x0f,
    // 2.5.29.17
    0x55, 0x1d, 0x11,
    // 2.5.29.18
    0x55, 0x1d, 0x12,
    // 2.5.29.19
    0x55, 0x1d, 0x13,
    // 2.5.29.31
    0x55, 0x1d, 0x1f,
    // 2.5.29.32
    0x55, 0x1d, 0x20,
    // 2.5.29.35
    0x55, 0x1d, 0x23,
    // 2.5.29.37
    0x55, 0x1d, 0x25,
];

pub(super) const SEARCH_TABLE: [SearchEntry; 73] = [
    SearchEntry { hash: 0x02, symbol: Symbol::RsassaPss },
    SearchEntry { hash: 0x0a, symbol: Symbol::Title },
    SearchEntry { hash: 0x17, symbol: Symbol::IssuerAltName },
    SearchEntry { hash: 0x17, symbol: Symbol::Initials },
    SearchEntry { hash: 0x1d, symbol: Symbol::Md2WithRsaEncryption },
    SearchEntry { hash: 0x1e, symbol: Symbol::Md2 },
    SearchEntry { hash: 0x20, symbol: Symbol::IdDsaWithSha1 },
    SearchEntry { hash: 0x23, symbol: Symbol::Ed25519 },
    SearchEntry { hash: 0x23, symbol: Symbol::ContentType },
    SearchEntry { hash: 0x23, symbol: Symbol::Sha256WithRsaEncryption },
    SearchEntry { hash: 0x24, symbol: Symbol::AuthorityKeyIdentifier },
    SearchEntry { hash: 0x25, symbol: Symbol::Description },
    SearchEntry { hash: 0x27, symbol: Symbol::IdKpServerAuth },
    SearchEntry { hash: 0x2b, symbol: Symbol::IdDsa },
    SearchEntry { hash: 0x2c, symbol: Symbol::SerialNumber },
    SearchEntry { hash: 0x33, symbol: Symbol::MsIndividualSpKeyPurpose },
    SearchEntry { hash: 0x36, symbol: Symbol::BasicConstraints },
    SearchEntry { hash: 0x36, symbol: Symbol::GenerationalQualifier },
    SearchEntry { hash: 0x3c, symbol: Symbol::Md3WithRsaEncryption },
    SearchEntry { hash: 0x40, symbol: Symbol::SignedData },
    SearchEntry { hash: 0x40, symbol: Symbol::Mgf1 },
    SearchEntry { hash: 0x46, symbol: Symbol::IdKpClientAuth },
    SearchEntry { hash: 0x4d, symbol: Symbol::CountryName },
    SearchEntry { hash: 0x4d, symbol: Symbol::IdEcdsaWithSha1 },
    SearchEntry { hash: 0x53, symbol: Symbol::Sha256 },
    SearchEntry { hash: 0x55, symbol: Symbol::SmimeCapabilites },
    SearchEntry { hash: 0x57, symbol: Symbol::Sha1 },
    SearchEntry { hash: 0x61, symbol: Symbol::EmailAddress },
    SearchEntry { hash: 0x6a, symbol: Symbol::ExtKeyUsage },
    SearchEntry { hash: 0x6a, symbol: Symbol::MsPeImageDataObjId },
    SearchEntry { hash: 0x6e, symbol: Symbol::Locality },
    SearchEntry { hash: 0x79, symbol: Symbol::IdKpCodeSigning },
    SearchEntry { hash: 0x7e, symbol: Symbol::RsaEncryption },
    SearchEntry { hash: 0x84, symbol: Symbol::SmimeAuthenticatedAttrs },
    SearchEntry { hash: 0x8e, symbol: Symbol::IdEcPublicKey },
    SearchEntry { hash: 0x8e, symbol: Symbol::Sha224WithRsaEncryption },
    SearchEntry { hash: 0x8f, symbol: Symbol::StateOrProvinceName },
    SearchEntry { hash: 0x92, symbol: Symbol::SubjectKeyIdentifier },
    SearchEntry { hash: 0x96, symbol: Symbol::EcdsaWithSha512 },
    SearchEntry { hash: 0x9d, symbol: Symbol::Sha512 },
    SearchEntry { hash: 0xa0, symbol: Symbol::Data },
    SearchEntry { hash: 0xa1, symbol: Symbol::CrlDistributionPoints },
    SearchEntry { hash: 0xa8, symbol: Symbol::StreetAddress },
    SearchEntry { hash: 0xad, symbol: Symbol::MsOutlookExpress },
    SearchEntry { hash: 0xb2, symbol: Symbol::Sha384 },
    SearchEntry { hash: 0xb3, symbol: Symbol::KeyUsage },
    SearchEntry { hash: 0xc3, symbol: Symbol::Md4WithRsaEncryption },
    SearchEntry { hash: 0xc6, symbol: Symbol::CertPolicies },
    SearchEntry { hash: 0xc8, symbol: Symbol::MsSpOpusInfo },
    SearchEntry { hash: 0xc9, symbol: Symbol::OrganizationName },
    SearchEntry { hash: 0xcc, symbol: Symbol::MessageDigest },
    SearchEntry { hash: 0xcc, symbol: Symbol::Sha384WithRsaEncryption },
    SearchEntry { hash: 0xce, symbol: Symbol::MsCertsrvPreviousCertHash },
    SearchEntry { hash: 0xd0, symbol: Symbol::EcdsaWithSha256 },
    SearchEntry { hash: 0xd0, symbol: Symbol::DomainComponent },
    SearchEntry { hash: 0xd4, symbol: Symbol::Name },
    SearchEntry { hash: 0xd5, symbol: Symbol::CommonName },
    SearchEntry { hash: 0xdc, symbol: Symbol::Md4 },
    SearchEntry { hash: 0xe2, symbol: Symbol::Sha1WithRsaEncryption },
    SearchEntry { hash: 0xe3, symbol: Symbol::Md5 },
    SearchEntry { hash: 0xe4, symbol: Symbol::CertAuthInfoAccess },
    SearchEntry { hash: 0xe7, symbol: Symbol::MsStatementType },
    SearchEntry { hash: 0xea, symbol: Symbol::OrganizationUnitName },
    SearchEntry { hash: 0xed, symbol: Symbol::SigningTime },
    SearchEntry { hash: 0xed, symbol: Symbol::Sha512WithRsaEncryption },
    SearchEntry { hash: 0xef, symbol: Symbol::MsCertsrvCaVersion },
    SearchEntry { hash: 0xef, symbol: Symbol::MsEnrollCerttypeExtension },
    SearchEntry { hash: 0xf4, symbol: Symbol::Surname },
    SearchEntry { hash: 0xf5, symbol: Symbol::SubjectAltName },
    SearchEntry { hash: 0xf5, symbol: Symbol::GivenName },
    SearchEntry { hash: 0xf7, symbol: Symbol::EcdsaWithSha384 },
    SearchEntry { hash: 0xfc, symbol: Symbol::Sha224 },
    SearchEntry { hash: 0xff, symbol: Symbol::MsIndirectData },
];
