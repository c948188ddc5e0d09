use crate::core::errors::{Error, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/*-------------------------------------------------------------------------------------------------
  Version Token
-------------------------------------------------------------------------------------------------*/

// Canonical textual form of the "no specific version" sentinel.
const SENTINEL: &str = "0000000000";

/// Compact date-plus-sequence identifier the web service uses to name a release of its
/// connectivity metadata.
///
/// The canonical textual form is exactly 10 ASCII digits, `YYYYMMDDNN`, where `NN` is an intraday
/// sequence number used when multiple versions are published on a single day. The all-zero token
/// `"0000000000"` is a sentinel meaning "no specific version" (the earliest possible version);
/// the sentinel carries no date and its intraday sequence is `0`.
///
/// ```
/// use o365endpoints::VersionToken;
///
/// let token = VersionToken::parse("2023040102")?;
/// assert_eq!(token.intraday(), 2);
/// assert_eq!(token.to_string(), "2023040102");
///
/// let sentinel = VersionToken::parse("0000000000")?;
/// assert!(sentinel.is_sentinel());
/// # Ok::<(), o365endpoints::Error>(())
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct VersionToken {
    date: Option<NaiveDate>,
    intraday: u8,
}

impl VersionToken {
    /// Construct a token naming a specific historical version. The intraday sequence must fit the
    /// two-digit wire field (0-99).
    pub fn new(date: NaiveDate, intraday: u8) -> Result<Self> {
        if intraday > 99 {
            return Err(Error::MalformedVersionToken {
                value: format!("{}{intraday}", date.format("%Y%m%d")),
            });
        }
        Ok(Self {
            date: Some(date),
            intraday,
        })
    }

    /// The "no specific version" sentinel; formats as `"0000000000"`.
    pub const fn sentinel() -> Self {
        Self {
            date: None,
            intraday: 0,
        }
    }

    /// Parse a token from its 10-digit wire form.
    ///
    /// The input must be exactly 10 ASCII digits. An all-zero input produces the sentinel.
    /// Otherwise the digits split as `YYYY|MM|DD|NN`; the date portion must name a real calendar
    /// date.
    pub fn parse(value: &str) -> Result<Self> {
        let malformed = || Error::MalformedVersionToken {
            value: value.to_string(),
        };

        if value.len() != 10 || !value.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(malformed());
        }

        if value == SENTINEL {
            return Ok(Self::sentinel());
        }

        let year: i32 = value[0..4].parse().map_err(|_| malformed())?;
        let month: u32 = value[4..6].parse().map_err(|_| malformed())?;
        let day: u32 = value[6..8].parse().map_err(|_| malformed())?;
        let intraday: u8 = value[8..10].parse().map_err(|_| malformed())?;

        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(malformed)?;

        Ok(Self {
            date: Some(date),
            intraday,
        })
    }

    /// Calendar date of the version; `None` for the sentinel.
    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// Intraday sequence number (0-99); always `0` for the sentinel.
    pub fn intraday(&self) -> u8 {
        self.intraday
    }

    /// Whether this token is the "no specific version" sentinel.
    pub fn is_sentinel(&self) -> bool {
        self.date.is_none()
    }
}

/*--------------------------------------------------------------------------------------
  Canonical Textual Form
--------------------------------------------------------------------------------------*/

impl fmt::Display for VersionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.date {
            Some(date) => write!(
                f,
                "{:04}{:02}{:02}{:02}",
                date.year(),
                date.month(),
                date.day(),
                self.intraday
            ),
            None => f.write_str(SENTINEL),
        }
    }
}

impl FromStr for VersionToken {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        VersionToken::parse(s)
    }
}

impl Serialize for VersionToken {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
