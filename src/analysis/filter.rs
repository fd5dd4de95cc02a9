use crate::types::Transaction;

/// Keeps debits, optionally only those made with a card whose number ends
/// with `card_last_digits`. An empty suffix matches every card.
pub fn filter_transactions(transactions: &[Transaction], card_last_digits: Option<&str>) -> Vec<Transaction> {
    let suffix = card_last_digits.filter(|digits| !digits.is_empty());

    transactions
        .iter()
        .filter(|t| t.is_debit())
        .filter(|t| suffix.is_none_or(|digits| t.card_last_digits.ends_with(digits)))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::fixtures::{debit, ymd};
    use rstest::rstest;

    fn with_card(mut transaction: Transaction, card: &str) -> Transaction {
        transaction.card_last_digits = card.to_string();
        transaction
    }

    fn ledger() -> Vec<Transaction> {
        vec![
            with_card(debit("Netflix", ymd(2024, 1, 5), "-799"), "*1234"),
            with_card(debit("Salary", ymd(2024, 1, 6), "150000"), "*1234"),
            with_card(debit("Cafe", ymd(2024, 1, 7), "-350.50"), "*5678"),
            with_card(debit("Refund", ymd(2024, 1, 8), "0"), "*5678"),
            with_card(debit("Spotify", ymd(2024, 1, 9), "-169"), "*9234"),
        ]
    }

    fn descriptions(transactions: &[Transaction]) -> Vec<&str> {
        transactions.iter().map(|t| t.description.as_str()).collect()
    }

    #[rstest]
    #[case(None, vec!["Netflix", "Cafe", "Spotify"])]
    #[case(Some(""), vec!["Netflix", "Cafe", "Spotify"])]
    #[case(Some("5678"), vec!["Cafe"])]
    #[case(Some("234"), vec!["Netflix", "Spotify"])]
    #[case(Some("0000"), vec![])]
    fn test_filter_transactions(#[case] card: Option<&str>, #[case] expected: Vec<&str>) {
        let ledger = ledger();
        let filtered = filter_transactions(&ledger, card);
        assert_eq!(descriptions(&filtered), expected);
    }

    #[test]
    fn test_filter_never_returns_credits_or_foreign_cards() {
        let ledger = ledger();
        for suffix in ["1234", "78", "4"] {
            for t in filter_transactions(&ledger, Some(suffix)) {
                assert!(t.amount_rub.is_sign_negative());
                assert!(t.card_last_digits.ends_with(suffix));
            }
        }
    }

    #[test]
    fn test_filter_empty_input() {
        assert!(filter_transactions(&[], Some("1234")).is_empty());
    }
}
