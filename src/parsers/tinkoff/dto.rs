use super::types::{TinkoffAmount, TinkoffDate, TinkoffDateTime, TinkoffMcc};
use crate::{errors::CellError, types::Transaction};
use chrono::{NaiveDate, NaiveDateTime};
use csv::StringRecord;
use rust_decimal::Decimal;

/// Positional column of the export. Header names are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Column {
    pub(super) index: usize,
    pub(super) name: &'static str,
}

impl Column {
    const fn new(index: usize, name: &'static str) -> Self {
        Self { index, name }
    }
}

pub(super) const REQUESTED_AT: Column = Column::new(0, "requested_at");
pub(super) const PAID_AT: Column = Column::new(1, "paid_at");
pub(super) const CARD_LAST_DIGITS: Column = Column::new(2, "card_last_digits");
pub(super) const STATUS: Column = Column::new(3, "status");
pub(super) const AMOUNT_CURRENCY: Column = Column::new(4, "amount_currency");
pub(super) const CURRENCY: Column = Column::new(5, "currency");
pub(super) const AMOUNT_RUB: Column = Column::new(6, "amount_rub");
pub(super) const CATEGORY: Column = Column::new(9, "category");
pub(super) const MCC_CODE: Column = Column::new(10, "mcc_code");
pub(super) const DESCRIPTION: Column = Column::new(11, "description");

/// One data row as read from the file, before validation.
#[derive(Debug)]
pub(super) struct TinkoffRowRaw {
    pub(super) row_index: usize,
    pub(super) record: StringRecord,
}

impl TinkoffRowRaw {
    pub(super) fn new(row_index: usize, record: StringRecord) -> Self {
        Self { row_index, record }
    }

    /// Converts every cell, collecting one message per failing cell.
    pub(super) fn validate(&self) -> Result<Transaction, Vec<String>> {
        let mut errors = Vec::new();

        let requested_at: Option<NaiveDateTime> =
            self.required(REQUESTED_AT, &mut errors, |s| TinkoffDateTime::from(s).try_into());
        let paid_at: Option<Option<NaiveDate>> =
            self.optional(PAID_AT, &mut errors, |s| TinkoffDate::from(s).try_into());
        let card_last_digits = self.required(CARD_LAST_DIGITS, &mut errors, |s| Ok(s.to_string()));
        let status = self.required(STATUS, &mut errors, |s| Ok(s.to_string()));
        let amount_currency: Option<Decimal> =
            self.required(AMOUNT_CURRENCY, &mut errors, |s| TinkoffAmount::from(s).try_into());
        let currency = self.required(CURRENCY, &mut errors, |s| Ok(s.to_string()));
        let amount_rub: Option<Decimal> =
            self.required(AMOUNT_RUB, &mut errors, |s| TinkoffAmount::from(s).try_into());
        let category = self.required(CATEGORY, &mut errors, |s| Ok(s.to_string()));
        let mcc_code: Option<Option<i32>> =
            self.optional(MCC_CODE, &mut errors, |s| TinkoffMcc::from(s).try_into());
        let description = self.required(DESCRIPTION, &mut errors, |s| Ok(s.to_string()));

        match (
            requested_at,
            paid_at,
            card_last_digits,
            status,
            amount_currency,
            currency,
            amount_rub,
            category,
            mcc_code,
            description,
        ) {
            (
                Some(requested_at),
                Some(paid_at),
                Some(card_last_digits),
                Some(status),
                Some(amount_currency),
                Some(currency),
                Some(amount_rub),
                Some(category),
                Some(mcc_code),
                Some(description),
            ) => Ok(Transaction {
                requested_at,
                paid_at,
                card_last_digits,
                status,
                amount_currency,
                currency,
                amount_rub,
                category,
                mcc_code,
                description,
                row_index: self.row_index,
            }),
            _ => Err(errors),
        }
    }

    fn cell(&self, column: Column) -> Option<&str> {
        self.record
            .get(column.index)
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    fn required<T>(
        &self,
        column: Column,
        errors: &mut Vec<String>,
        convert: impl FnOnce(&str) -> Result<T, CellError>,
    ) -> Option<T> {
        let result = self.cell(column).ok_or(CellError::Missing).and_then(convert);
        self.collect(column, result, errors)
    }

    /// An empty optional cell is `Some(None)`; a malformed one is `None`.
    fn optional<T>(
        &self,
        column: Column,
        errors: &mut Vec<String>,
        convert: impl FnOnce(&str) -> Result<T, CellError>,
    ) -> Option<Option<T>> {
        let result = self.cell(column).map(convert).transpose();
        self.collect(column, result, errors)
    }

    fn collect<T>(&self, column: Column, result: Result<T, CellError>, errors: &mut Vec<String>) -> Option<T> {
        result
            .map_err(|e| errors.push(row_error(self.row_index, column, &e)))
            .ok()
    }
}

pub(super) fn row_error(row_index: usize, column: Column, error: &CellError) -> String {
    format!("Row {}, column {} ({}): {}", row_index, column.index, column.name, error)
}
