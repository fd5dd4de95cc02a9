//! Recurrent payment detection over parsed transactions.

mod aggregator;
mod classifier;
mod filter;
mod grouper;

pub use aggregator::{ACTIVE_WINDOW_DAYS, analyze_for_recurrent_payments};
pub use classifier::{RecurrenceReason, classify, drop_earliest_date, is_recurrent_payment};
pub use filter::filter_transactions;
pub use grouper::{DescriptionGroup, group_by_description};

use chrono::NaiveDate;

use crate::{config::AnalysisOptions, types::{RecurrentPayment, Transaction}};

/// Filters debits for the configured card, then finds recurrent payments.
pub fn find_recurrent_payments(
    transactions: &[Transaction],
    options: &AnalysisOptions,
    today: NaiveDate,
) -> Vec<RecurrentPayment> {
    let debits = filter_transactions(transactions, options.card_last_digits.as_deref());
    analyze_for_recurrent_payments(&debits, &options.sure_recurrent_descriptions, options.only_active, today)
}
