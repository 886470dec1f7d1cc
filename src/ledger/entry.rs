//! Expense lines inside an expense file
//!
//! The tracker that produces expense files writes one `ID|timestamp|item|amount`
//! line per expense. Files stay opaque to the archiver; this parsing only
//! feeds the summary shown on lookup.

use super::money::Money;

/// One `ID|timestamp|item|amount` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseEntry {
    pub id: u32,
    pub timestamp: String,
    pub item: String,
    pub amount: Money,
}

impl ExpenseEntry {
    /// Parse a single line, returning `None` if it is not a well-formed entry
    pub fn parse_line(line: &str) -> Option<Self> {
        let parts: Vec<&str> = line.trim().split('|').collect();
        if parts.len() != 4 {
            return None;
        }

        Some(Self {
            id: parts[0].trim().parse().ok()?,
            timestamp: parts[1].to_string(),
            item: parts[2].to_string(),
            amount: Money::parse(parts[3])?,
        })
    }
}

/// Totals over the entries of one expense file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseSummary {
    /// Well-formed entries found
    pub entries: usize,
    /// Sum of their amounts
    pub total: Money,
    /// Non-blank lines that did not parse
    pub unparsed: usize,
}

impl ExpenseSummary {
    /// Summarize raw file content; invalid UTF-8 is replaced, not rejected
    pub fn from_content(content: &[u8]) -> Self {
        let text = String::from_utf8_lossy(content);
        let mut summary = Self::default();

        for line in text.lines().filter(|l| !l.trim().is_empty()) {
            match ExpenseEntry::parse_line(line) {
                Some(entry) => {
                    summary.entries += 1;
                    summary.total += entry.amount;
                }
                None => summary.unparsed += 1,
            }
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        let entry = ExpenseEntry::parse_line("3|2025-01-10 12:04:55|coffee beans|14.90\n").unwrap();
        assert_eq!(entry.id, 3);
        assert_eq!(entry.timestamp, "2025-01-10 12:04:55");
        assert_eq!(entry.item, "coffee beans");
        assert_eq!(entry.amount, Money::from_cents(1490));
    }

    #[test]
    fn test_parse_line_rejects_malformed() {
        assert!(ExpenseEntry::parse_line("1|2025-01-10|lunch").is_none());
        assert!(ExpenseEntry::parse_line("x|2025-01-10|lunch|3.00").is_none());
        assert!(ExpenseEntry::parse_line("1|2025-01-10|lunch|cheap").is_none());
        assert!(ExpenseEntry::parse_line("1|a|b|c|2.00").is_none());
    }

    #[test]
    fn test_summary() {
        let content = b"1|2025-01-10 08:00:00|bread|2.00\n\
                        2|2025-01-10 09:00:00|milk|1.25\n\
                        \n\
                        scribbled note\n";
        let summary = ExpenseSummary::from_content(content);
        assert_eq!(summary.entries, 2);
        assert_eq!(summary.total, Money::from_cents(325));
        assert_eq!(summary.unparsed, 1);
    }

    #[test]
    fn test_summary_of_empty_content() {
        assert_eq!(ExpenseSummary::from_content(b""), ExpenseSummary::default());
    }
}
