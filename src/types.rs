use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One successfully parsed row of the bank export.
///
/// `amount_rub` is signed: money leaving the account is negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub requested_at: NaiveDateTime,
    pub paid_at: Option<NaiveDate>,
    pub card_last_digits: String,
    pub status: String,
    pub amount_currency: Decimal,
    pub currency: String,
    pub amount_rub: Decimal,
    pub category: String,
    pub mcc_code: Option<i32>,
    pub description: String,
    pub row_index: usize,
}

impl Transaction {
    pub fn is_debit(&self) -> bool {
        self.amount_rub < Decimal::ZERO
    }

    pub fn requested_on(&self) -> NaiveDate {
        self.requested_at.date()
    }
}

/// Summary of a description group classified as recurrent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrentPayment {
    pub description: String,
    pub total_paid: Decimal,
    pub last_payment_date: NaiveDate,
}
