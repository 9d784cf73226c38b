/// ASN.1 Header Length has 3 differents encoding
///
/// * Short : 1 byte, for any raw length value less than < 0x80 bytes
/// * Indefinite : 1 byte, for encoding an unknown length value, the content
///   is terminated by an end-of-contents marker (`00 00`)
/// * Long : 2 to 2+126 bytes, for encoding a length >= 0x80 bytes
///
/// For long encoding, the maximum allowed length is what fits in a `usize`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Length {
    Short(u8),
    Long { nb_bytes: u8, value: usize },
    Indefinite,
}

/// Length decoding error
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LengthDecodeError {
    EncodingIncomplete,
    /// Length encoded is bigger than what the platform can represent
    EncodingOverflow,
    /// Long form used where a shorter form exists (DER only)
    EncodingNonCanonical,
}

impl Length {
    /// Definite length value, or `None` for the indefinite form
    pub fn value(&self) -> Option<usize> {
        match self {
            Length::Short(sz) => Some(*sz as usize),
            Length::Long { nb_bytes: _, value } => Some(*value),
            Length::Indefinite => None,
        }
    }

    pub fn is_indefinite(&self) -> bool {
        *self == Length::Indefinite
    }

    pub fn size_bytes(&self) -> usize {
        match self {
            Length::Indefinite => 1,
            Length::Short(_) => 1,
            Length::Long { nb_bytes, value: _ } => 1 + *nb_bytes as usize,
        }
    }

    /// Decode a length from the start of `buf`.
    ///
    /// With `canonical` set, the long form is only accepted when it is the
    /// shortest possible encoding, as DER requires.
    pub fn decode(buf: &[u8], canonical: bool) -> Result<(Self, usize), LengthDecodeError> {
        get_length(buf, canonical)
    }
}

// length encoding is either 0x80 for indefinite, anything less is a short encoding,
// and anything above give the number of byte
fn get_length(slice: &[u8], canonical: bool) -> Result<(Length, usize), LengthDecodeError> {
    let f = *slice.first().ok_or(LengthDecodeError::EncodingIncomplete)?;

    if f == 0b1000_0000 {
        return Ok((Length::Indefinite, 1));
    }
    if (f & 0b1000_0000) == 0 {
        return Ok((Length::Short(f), 1));
    }

    let nb_bytes = f & 0b0111_1111;
    // 0xff is reserved for future extensions
    if nb_bytes == 0b0111_1111 {
        return Err(LengthDecodeError::EncodingOverflow);
    }

    let total_size = 1 + nb_bytes as usize;
    let bytes = slice
        .get(1..total_size)
        .ok_or(LengthDecodeError::EncodingIncomplete)?;

    if canonical && bytes[0] == 0 {
        return Err(LengthDecodeError::EncodingNonCanonical);
    }

    let mut acc = 0usize;
    for b in bytes {
        acc = acc
            .checked_mul(0x100)
            .ok_or(LengthDecodeError::EncodingOverflow)?
            | usize::from(*b);
    }

    if canonical && acc < 0x80 {
        return Err(LengthDecodeError::EncodingNonCanonical);
    }

    let len = Length::Long {
        nb_bytes,
        value: acc,
    };
    Ok((len, total_size))
}
