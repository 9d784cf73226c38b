use core::fmt;

use crate::header::constants::id;

/// A validity bound, in UTC
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

fn two_digits(s: &[u8]) -> Option<u8> {
    match s {
        [a @ b'0'..=b'9', b @ b'0'..=b'9'] => Some((a - b'0') * 10 + (b - b'0')),
        _ => None,
    }
}

impl Time {
    /// Parse the content of a UTCTime (`tag` 0x17) or GeneralizedTime
    /// (`tag` 0x18) element.
    ///
    /// Only the `Z` terminated forms are accepted, the seconds may be
    /// omitted from a UTCTime. Two digit years from 50 to 99 are in the
    /// 20th century.
    pub fn parse(tag: u8, value: &[u8]) -> Option<Time> {
        let (year, rest) = match tag {
            id::UTC_TIME => {
                let yy = u16::from(two_digits(value.get(0..2)?)?);
                let year = if yy >= 50 { 1900 + yy } else { 2000 + yy };
                (year, &value[2..])
            }
            id::GENERALIZED_TIME => {
                let hi = u16::from(two_digits(value.get(0..2)?)?);
                let lo = u16::from(two_digits(value.get(2..4)?)?);
                (hi * 100 + lo, &value[4..])
            }
            _ => return None,
        };

        let (digits, zone) = rest.split_at(rest.len().checked_sub(1)?);
        if zone != b"Z" {
            return None;
        }
        let seconds_optional = tag == id::UTC_TIME;
        let second = match digits.len() {
            10 => two_digits(&digits[8..10])?,
            8 if seconds_optional => 0,
            _ => return None,
        };
        let time = Time {
            year,
            month: two_digits(&digits[0..2])?,
            day: two_digits(&digits[2..4])?,
            hour: two_digits(&digits[4..6])?,
            minute: two_digits(&digits[6..8])?,
            second,
        };
        time.is_valid().then_some(time)
    }

    fn is_valid(&self) -> bool {
        (1..=12).contains(&self.month)
            && (1..=31).contains(&self.day)
            && self.hour < 24
            && self.minute < 60
            // leap second
            && self.second <= 60
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02} UTC",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}
