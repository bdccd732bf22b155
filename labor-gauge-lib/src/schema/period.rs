use crate::Result;
use chrono::{Datelike, Months, NaiveDate};
use core::fmt;
use core::str::FromStr;
use ohno::{IntoAppError, bail};
use serde::{Deserialize, Serialize, Serializer};

/// A calendar year-month, written as `YYYY-MM`.
///
/// Periods are totally ordered. The day component of the inner date is always 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Period(NaiveDate);

impl Period {
    #[must_use]
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(Self)
    }

    #[must_use]
    pub fn year(self) -> i32 {
        self.0.year()
    }

    #[must_use]
    pub fn month(self) -> u32 {
        self.0.month()
    }

    /// The same month one year earlier.
    #[must_use]
    pub fn prior_year(self) -> Option<Self> {
        self.months_back(12)
    }

    #[must_use]
    pub fn months_back(self, months: u32) -> Option<Self> {
        self.0.checked_sub_months(Months::new(months)).map(Self)
    }

    /// First period of a trailing window of `months` periods ending at (and including) `self`.
    #[must_use]
    pub fn window_start(self, months: u32) -> Option<Self> {
        self.months_back(months.saturating_sub(1))
    }
}

impl FromStr for Period {
    type Err = ohno::AppError;

    fn from_str(s: &str) -> Result<Self> {
        let bytes = s.as_bytes();
        let well_formed = bytes.len() == 7
            && bytes[4] == b'-'
            && bytes[..4].iter().all(u8::is_ascii_digit)
            && bytes[5..].iter().all(u8::is_ascii_digit);

        if !well_formed {
            bail!("invalid period '{s}': expected YYYY-MM");
        }

        let year: i32 = s.get(..4).unwrap_or_default().parse()?;
        let month: u32 = s.get(5..).unwrap_or_default().parse()?;

        Self::new(year, month).into_app_err_with(|| format!("invalid period '{s}': month must be between 01 and 12"))
    }
}

impl TryFrom<String> for Period {
    type Error = ohno::AppError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl Serialize for Period {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}
