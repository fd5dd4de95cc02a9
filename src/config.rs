use std::collections::HashSet;

/// Knobs for one analysis run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// Descriptions treated as recurrent without looking at dates.
    pub sure_recurrent_descriptions: HashSet<String>,
    /// Only debits from cards ending with these digits are analyzed.
    pub card_last_digits: Option<String>,
    /// Drop payments not charged within the active window.
    pub only_active: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            sure_recurrent_descriptions: HashSet::new(),
            card_last_digits: None,
            only_active: true,
        }
    }
}

impl AnalysisOptions {
    pub fn with_sure_recurrent_descriptions(mut self, list: &str) -> Self {
        self.sure_recurrent_descriptions = parse_description_list(list);
        self
    }

    pub fn with_card_last_digits(mut self, digits: Option<&str>) -> Self {
        self.card_last_digits = digits.filter(|d| !d.is_empty()).map(str::to_string);
        self
    }

    pub fn with_only_active(mut self, only_active: bool) -> Self {
        self.only_active = only_active;
        self
    }
}

/// Splits a comma-separated list. Entries are kept verbatim (descriptions
/// are matched exactly); empty entries are ignored.
pub fn parse_description_list(list: &str) -> HashSet<String> {
    list.split(',')
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}
