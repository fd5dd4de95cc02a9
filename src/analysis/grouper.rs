use std::collections::HashMap;

use crate::types::Transaction;

/// Transactions sharing one exact description.
#[derive(Debug, Clone)]
pub struct DescriptionGroup<'a> {
    pub description: &'a str,
    pub transactions: Vec<&'a Transaction>,
}

/// Partitions by exact description. Groups come out in the order their
/// description first appears; members keep their input order.
pub fn group_by_description(transactions: &[Transaction]) -> Vec<DescriptionGroup<'_>> {
    let mut groups: Vec<DescriptionGroup<'_>> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for transaction in transactions {
        let description = transaction.description.as_str();
        match positions.get(description) {
            Some(&position) => groups[position].transactions.push(transaction),
            None => {
                positions.insert(description, groups.len());
                groups.push(DescriptionGroup {
                    description,
                    transactions: vec![transaction],
                });
            }
        }
    }

    groups
}
