use crate::errors::CellError;
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

const DATETIME_FORMAT: &str = "%d.%m.%Y %H:%M:%S";
const DATE_FORMAT: &str = "%d.%m.%Y";

/// Raw operation timestamp cell, e.g. `05.03.2024 10:21:07`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TinkoffDateTime(String);

/// Raw payment date cell, e.g. `06.03.2024`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TinkoffDate(String);

/// Raw money cell. The export writes `-1 299,00`: comma as decimal
/// separator, spaces (often non-breaking) between thousands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TinkoffAmount(String);

/// Raw merchant category code cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TinkoffMcc(String);

macro_rules! impl_from_str_for_cell {
    ($($cell:ident),*) => {
        $(
            impl From<String> for $cell {
                fn from(value: String) -> Self {
                    Self(value)
                }
            }

            impl From<&str> for $cell {
                fn from(value: &str) -> Self {
                    Self(value.to_string())
                }
            }
        )*
    };
}

impl_from_str_for_cell!(TinkoffDateTime, TinkoffDate, TinkoffAmount, TinkoffMcc);

impl TryFrom<TinkoffDateTime> for NaiveDateTime {
    type Error = CellError;

    fn try_from(value: TinkoffDateTime) -> Result<Self, Self::Error> {
        let s = value.0.trim();
        NaiveDateTime::parse_from_str(s, DATETIME_FORMAT)
            .map_err(|_| CellError::InvalidDateTime(s.to_string()))
    }
}

impl TryFrom<TinkoffDate> for NaiveDate {
    type Error = CellError;

    fn try_from(value: TinkoffDate) -> Result<Self, Self::Error> {
        let s = value.0.trim();
        NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| CellError::InvalidDate(s.to_string()))
    }
}

impl TryFrom<TinkoffAmount> for Decimal {
    type Error = CellError;

    fn try_from(value: TinkoffAmount) -> Result<Self, Self::Error> {
        let normalized: String = value
            .0
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| if c == ',' { '.' } else { c })
            .collect();

        Decimal::from_str(&normalized).map_err(|_| CellError::InvalidDecimal(value.0.trim().to_string()))
    }
}

impl TryFrom<TinkoffMcc> for i32 {
    type Error = CellError;

    fn try_from(value: TinkoffMcc) -> Result<Self, Self::Error> {
        let s = value.0.trim();
        s.parse().map_err(|_| CellError::InvalidInteger(s.to_string()))
    }
}
