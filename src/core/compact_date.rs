use chrono::NaiveDate;
use serde::{self, Deserialize, Deserializer, Serializer};

/*-------------------------------------------------------------------------------------------------
  Compact Date Format
-------------------------------------------------------------------------------------------------*/

// Effective dates are published as eight digits: `YYYYMMDD`.
const COMPACT_DATE_FORMAT: &str = "%Y%m%d";

pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let s = format!("{}", date.format(COMPACT_DATE_FORMAT));
    serializer.serialize_str(&s)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    if s.len() != 8 {
        return Err(serde::de::Error::custom(format!(
            "compact date must be 8 digits: '{s}'"
        )));
    }
    NaiveDate::parse_from_str(&s, COMPACT_DATE_FORMAT).map_err(serde::de::Error::custom)
}
