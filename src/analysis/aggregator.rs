use std::collections::HashSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, info};

use super::{classifier::is_recurrent_payment, grouper::group_by_description};
use crate::types::{RecurrentPayment, Transaction};

/// A recurrent payment is active when its last charge is at most this many
/// days before the evaluation date.
pub const ACTIVE_WINDOW_DAYS: i64 = 30;

/// Groups `transactions` by description and summarizes every recurrent
/// group, in first-seen order.
///
/// With `only_active`, payments last charged more than
/// [`ACTIVE_WINDOW_DAYS`] before `today` are dropped.
pub fn analyze_for_recurrent_payments(
    transactions: &[Transaction],
    sure_recurrent_descriptions: &HashSet<String>,
    only_active: bool,
    today: NaiveDate,
) -> Vec<RecurrentPayment> {
    let groups = group_by_description(transactions);
    let group_count = groups.len();

    let payments: Vec<RecurrentPayment> = groups
        .into_iter()
        .filter(|g| is_recurrent_payment(g.description, &g.transactions, sure_recurrent_descriptions))
        .filter_map(|g| summarize(g.description, &g.transactions))
        .filter(|p| !only_active || is_active(p, today))
        .collect();

    info!(groups = group_count, recurrent = payments.len(), only_active, "analysis finished");
    payments
}

/// `None` only for an empty group.
fn summarize(description: &str, transactions: &[&Transaction]) -> Option<RecurrentPayment> {
    let last_payment_date = transactions.iter().map(|t| t.requested_at).max()?.date();
    let total_paid = transactions.iter().map(|t| t.amount_rub.abs()).sum::<Decimal>();

    Some(RecurrentPayment {
        description: description.to_string(),
        total_paid,
        last_payment_date,
    })
}

fn is_active(payment: &RecurrentPayment, today: NaiveDate) -> bool {
    let days_since = (today - payment.last_payment_date).num_days();
    if days_since > ACTIVE_WINDOW_DAYS {
        debug!(description = %payment.description, days_since, "inactive payment dropped");
        return false;
    }
    true
}
