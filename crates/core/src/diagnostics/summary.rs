//! Per-category tallies of a scan, for user-facing reports

use std::fmt;

use piiguard_common::privacy::patterns::{PiiCategory, PiiMatch};

/// Count of matches per category, in the order categories were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanSummary {
    total: usize,
    counts: Vec<(PiiCategory, usize)>,
}

impl ScanSummary {
    /// Tally `matches`.
    pub fn from_matches<'a, I>(matches: I) -> Self
    where
        I: IntoIterator<Item = &'a PiiMatch>,
    {
        let mut summary = Self::default();
        for found in matches {
            summary.total += 1;
            match summary.counts.iter_mut().find(|(category, _)| *category == found.category) {
                Some((_, count)) => *count += 1,
                None => summary.counts.push((found.category.clone(), 1)),
            }
        }
        summary
    }

    /// Number of matches counted.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Whether nothing was counted.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Matches counted for `category`.
    pub fn count(&self, category: &PiiCategory) -> usize {
        self.counts.iter().find(|(c, _)| c == category).map_or(0, |(_, n)| *n)
    }

    /// Counts in first-seen order.
    pub fn counts(&self) -> &[(PiiCategory, usize)] {
        &self.counts
    }

    /// One-line report for a whole-document scan.
    pub fn report(&self) -> String {
        if self.is_empty() {
            "No PII detected in this file.".to_string()
        } else {
            format!("Found {} potential PII items: {}", self.total, self)
        }
    }
}

impl fmt::Display for ScanSummary {
    /// Renders `"2 email, 1 phone"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, (category, count)) in self.counts.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} {}", count, category)?;
        }
        Ok(())
    }
}
