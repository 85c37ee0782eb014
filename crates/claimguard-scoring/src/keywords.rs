//! Keyword tables shared by the fallback scorer and the traditional indicators.
//! All matching is case-insensitive substring matching on the description.

pub const SUSPICIOUS_KEYWORDS: [&str; 5] = ["urgent", "emergency", "immediate", "cash", "asap"];

pub const MEDICAL_TERMS: [&str; 6] = [
    "procedure",
    "treatment",
    "medication",
    "surgery",
    "diagnosis",
    "prescription",
];

/// Keywords from `table` that occur in `text`, in table order.
pub fn matched<'a>(text: &str, table: &[&'a str]) -> Vec<&'a str> {
    let lower = text.to_lowercase();
    table
        .iter()
        .copied()
        .filter(|kw| lower.contains(kw))
        .collect()
}

/// Number of keywords from `table` that occur in `text`. Each keyword counts once.
pub fn count(text: &str, table: &[&str]) -> usize {
    matched(text, table).len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_each_keyword_once() {
        assert_eq!(count("URGENT urgent cash", &SUSPICIOUS_KEYWORDS), 2);
    }

    #[test]
    fn matched_keeps_table_order() {
        assert_eq!(
            matched("cash needed, Urgent", &SUSPICIOUS_KEYWORDS),
            vec!["urgent", "cash"]
        );
    }
}
