//! Zodiac sign table and birthdate resolution.

use crate::utils::error::{Result, ZodiacError};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Formats accepted for a birthdate, tried in order.
pub const BIRTHDATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%d/%m/%Y", "%m/%d/%Y", "%d-%m-%Y"];

/// Sign returned when a date cannot be resolved.
pub const FALLBACK_SIGN: ZodiacSign = ZodiacSign::Aries;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// Inclusive (month, day) interval. `start > end` wraps over the new year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: (u32, u32),
    pub end: (u32, u32),
}

impl DateRange {
    pub fn contains(&self, month: u32, day: u32) -> bool {
        let md = (month, day);
        if self.start <= self.end {
            self.start <= md && md <= self.end
        } else {
            md >= self.start || md <= self.end
        }
    }
}

#[derive(Debug)]
pub struct SignInfo {
    pub sign: ZodiacSign,
    pub id: &'static str,
    pub display_name: &'static str,
    pub symbol: &'static str,
    pub ranges: &'static [DateRange],
}

static ZODIAC_TABLE: [SignInfo; 12] = [
    SignInfo {
        sign: ZodiacSign::Aries,
        id: "aries",
        display_name: "Bạch Dương",
        symbol: "♈",
        ranges: &[DateRange { start: (3, 21), end: (4, 19) }],
    },
    SignInfo {
        sign: ZodiacSign::Taurus,
        id: "taurus",
        display_name: "Kim Ngưu",
        symbol: "♉",
        ranges: &[DateRange { start: (4, 20), end: (5, 20) }],
    },
    SignInfo {
        sign: ZodiacSign::Gemini,
        id: "gemini",
        display_name: "Song Tử",
        symbol: "♊",
        ranges: &[DateRange { start: (5, 21), end: (6, 20) }],
    },
    SignInfo {
        sign: ZodiacSign::Cancer,
        id: "cancer",
        display_name: "Cự Giải",
        symbol: "♋",
        ranges: &[DateRange { start: (6, 21), end: (7, 22) }],
    },
    SignInfo {
        sign: ZodiacSign::Leo,
        id: "leo",
        display_name: "Sư Tử",
        symbol: "♌",
        ranges: &[DateRange { start: (7, 23), end: (8, 22) }],
    },
    SignInfo {
        sign: ZodiacSign::Virgo,
        id: "virgo",
        display_name: "Xử Nữ",
        symbol: "♍",
        ranges: &[DateRange { start: (8, 23), end: (9, 22) }],
    },
    SignInfo {
        sign: ZodiacSign::Libra,
        id: "libra",
        display_name: "Thiên Bình",
        symbol: "♎",
        ranges: &[DateRange { start: (9, 23), end: (10, 22) }],
    },
    SignInfo {
        sign: ZodiacSign::Scorpio,
        id: "scorpio",
        display_name: "Hổ Cáp",
        symbol: "♏",
        ranges: &[DateRange { start: (10, 23), end: (11, 21) }],
    },
    SignInfo {
        sign: ZodiacSign::Sagittarius,
        id: "sagittarius",
        display_name: "Nhân Mã",
        symbol: "♐",
        ranges: &[DateRange { start: (11, 22), end: (12, 21) }],
    },
    SignInfo {
        sign: ZodiacSign::Capricorn,
        id: "capricorn",
        display_name: "Ma Kết",
        symbol: "♑",
        ranges: &[
            DateRange { start: (12, 22), end: (12, 31) },
            DateRange { start: (1, 1), end: (1, 19) },
        ],
    },
    SignInfo {
        sign: ZodiacSign::Aquarius,
        id: "aquarius",
        display_name: "Bao Bình",
        symbol: "♒",
        ranges: &[DateRange { start: (1, 20), end: (2, 18) }],
    },
    SignInfo {
        sign: ZodiacSign::Pisces,
        id: "pisces",
        display_name: "Song Ngư",
        symbol: "♓",
        ranges: &[DateRange { start: (2, 19), end: (3, 20) }],
    },
];

impl ZodiacSign {
    pub fn all() -> impl Iterator<Item = ZodiacSign> {
        ZODIAC_TABLE.iter().map(|info| info.sign)
    }

    pub fn info(self) -> &'static SignInfo {
        // Table order matches declaration order.
        &ZODIAC_TABLE[self as usize]
    }

    pub fn id(self) -> &'static str {
        self.info().id
    }

    pub fn display_name(self) -> &'static str {
        self.info().display_name
    }

    pub fn symbol(self) -> &'static str {
        self.info().symbol
    }

    pub fn ranges(self) -> &'static [DateRange] {
        self.info().ranges
    }

    /// First sign in table order whose ranges contain the date.
    pub fn for_month_day(month: u32, day: u32) -> ZodiacSign {
        ZODIAC_TABLE
            .iter()
            .find(|info| info.ranges.iter().any(|range| range.contains(month, day)))
            .map(|info| info.sign)
            .unwrap_or(FALLBACK_SIGN)
    }

    pub fn for_date(date: NaiveDate) -> ZodiacSign {
        Self::for_month_day(date.month(), date.day())
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ZodiacSign {
    type Err = ZodiacError;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim().to_ascii_lowercase();
        ZODIAC_TABLE
            .iter()
            .find(|info| info.id == needle)
            .map(|info| info.sign)
            .ok_or_else(|| ZodiacError::UnknownSign {
                value: s.to_string(),
            })
    }
}

pub fn parse_birthdate(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    BIRTHDATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
}

/// Resolves the sign for a birthdate as typed into a form.
pub fn sign_for_birthdate(value: &str) -> ZodiacSign {
    match parse_birthdate(value) {
        Some(date) => ZodiacSign::for_date(date),
        None => {
            tracing::warn!(
                "Could not parse birthdate '{}', falling back to {}",
                value,
                FALLBACK_SIGN
            );
            FALLBACK_SIGN
        }
    }
}
