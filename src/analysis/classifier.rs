use std::collections::{BTreeSet, HashMap, HashSet};

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::types::Transaction;

const RECURRENT_KEYWORDS: &[&str] = &["monthly", "membership"];

/// Dates that must remain after dropping the earliest one.
const MIN_REMAINING_DATES: usize = 3;
const MAX_GAP_SPREAD_DAYS: i64 = 2;
/// Gaps must be strictly longer than this.
const MIN_GAP_DAYS: i64 = 5;
/// The modal gap must cover at least 3/5 (60%) of all gaps.
const MODAL_SHARE: (usize, usize) = (3, 5);

/// Which rule marked a group as recurrent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecurrenceReason {
    /// Description is in the caller's override list.
    Override,
    /// Description mentions a subscription keyword.
    Keyword,
    /// Every payment fell on the same day of the month.
    SameDayOfMonth,
    /// Gaps between payments are nearly constant or dominated by one value.
    RegularInterval,
}

/// Sorted distinct dates without the earliest one.
///
/// The first charge of a subscription is often off-cycle (a trial, a
/// pro-rated start) so it is left out of the date statistics.
pub fn drop_earliest_date(dates: &BTreeSet<NaiveDate>) -> Vec<NaiveDate> {
    dates.iter().skip(1).copied().collect()
}

/// Decides whether one description group is a recurrent payment.
pub fn is_recurrent_payment(
    description: &str,
    transactions: &[&Transaction],
    sure_recurrent_descriptions: &HashSet<String>,
) -> bool {
    classify(description, transactions, sure_recurrent_descriptions).is_some()
}

/// Applies the rules in order and returns the first that matches.
pub fn classify(
    description: &str,
    transactions: &[&Transaction],
    sure_recurrent_descriptions: &HashSet<String>,
) -> Option<RecurrenceReason> {
    let reason = if sure_recurrent_descriptions.contains(description) {
        Some(RecurrenceReason::Override)
    } else if has_recurrent_keyword(description) {
        Some(RecurrenceReason::Keyword)
    } else {
        classify_by_dates(transactions)
    };

    debug!(description, transactions = transactions.len(), ?reason, "group classified");
    reason
}

fn has_recurrent_keyword(description: &str) -> bool {
    let lowered = description.to_lowercase();
    RECURRENT_KEYWORDS.iter().any(|keyword| lowered.contains(keyword))
}

fn classify_by_dates(transactions: &[&Transaction]) -> Option<RecurrenceReason> {
    let dates: BTreeSet<NaiveDate> = transactions.iter().map(|t| t.requested_on()).collect();
    let remaining = drop_earliest_date(&dates);

    if paid_on_same_day_of_month(&dates, &remaining) {
        return Some(RecurrenceReason::SameDayOfMonth);
    }
    if paid_at_regular_intervals(&remaining) {
        return Some(RecurrenceReason::RegularInterval);
    }
    None
}

/// `all_dates` still includes the dropped earliest date.
fn paid_on_same_day_of_month(all_dates: &BTreeSet<NaiveDate>, remaining: &[NaiveDate]) -> bool {
    let days: HashSet<u32> = all_dates.iter().map(|d| d.day()).collect();
    remaining.len() >= MIN_REMAINING_DATES && days.len() == 1
}

/// Gap statistics run over the distinct gap values, so the modal share
/// only passes when a single gap value remains.
fn paid_at_regular_intervals(remaining: &[NaiveDate]) -> bool {
    let gaps = distinct_gaps_in_days(remaining);
    let (Some(&min_gap), Some(&max_gap)) = (gaps.first(), gaps.last()) else {
        return false;
    };

    let (numerator, denominator) = MODAL_SHARE;
    let dominated_by_one_gap = modal_gap_count(&gaps) * denominator >= gaps.len() * numerator;

    (max_gap - min_gap <= MAX_GAP_SPREAD_DAYS || dominated_by_one_gap)
        && remaining.len() >= MIN_REMAINING_DATES
        && min_gap > MIN_GAP_DAYS
}

fn distinct_gaps_in_days(dates: &[NaiveDate]) -> BTreeSet<i64> {
    dates.windows(2).map(|pair| (pair[1] - pair[0]).num_days()).collect()
}

/// How many times the most common gap occurs.
fn modal_gap_count(gaps: &BTreeSet<i64>) -> usize {
    let mut histogram: HashMap<i64, usize> = HashMap::new();
    for gap in gaps {
        *histogram.entry(*gap).or_default() += 1;
    }
    histogram.into_values().max().unwrap_or(0)
}
