use std::collections::HashSet;
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Category of personally identifiable information a pattern detects.
///
/// The eight built-in variants carry fixed identifiers that collaborators use
/// in their enabled-category configuration. Custom patterns registered at
/// startup use [`PiiCategory::Custom`].
///
/// # Examples
/// ```
/// use piiguard_common::privacy::patterns::PiiCategory;
///
/// let category: PiiCategory = "creditCard".parse().unwrap();
/// assert_eq!(category, PiiCategory::CreditCard);
/// assert_eq!(category.as_str(), "creditCard");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PiiCategory {
    /// `email`
    Email,
    /// `ssn`
    Ssn,
    /// `phone`
    Phone,
    /// `creditCard`
    CreditCard,
    /// `ipAddress`
    IpAddress,
    /// `dateOfBirth`
    DateOfBirth,
    /// `passport`
    Passport,
    /// `driverLicense`
    DriverLicense,
    /// A configured category, identified by its own name.
    Custom(String),
}

impl PiiCategory {
    /// Built-in categories in registry order.
    pub const BUILTIN: [PiiCategory; 8] = [
        PiiCategory::Email,
        PiiCategory::Ssn,
        PiiCategory::Phone,
        PiiCategory::CreditCard,
        PiiCategory::IpAddress,
        PiiCategory::DateOfBirth,
        PiiCategory::Passport,
        PiiCategory::DriverLicense,
    ];

    /// Identifier used in configuration and diagnostics codes.
    pub fn as_str(&self) -> &str {
        match self {
            PiiCategory::Email => "email",
            PiiCategory::Ssn => "ssn",
            PiiCategory::Phone => "phone",
            PiiCategory::CreditCard => "creditCard",
            PiiCategory::IpAddress => "ipAddress",
            PiiCategory::DateOfBirth => "dateOfBirth",
            PiiCategory::Passport => "passport",
            PiiCategory::DriverLicense => "driverLicense",
            PiiCategory::Custom(name) => name,
        }
    }

    /// Returns true for the fixed built-in categories.
    pub fn is_builtin(&self) -> bool {
        !matches!(self, PiiCategory::Custom(_))
    }
}

impl fmt::Display for PiiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PiiCategory {
    type Err = std::convert::Infallible;

    /// Identifiers are matched exactly; anything unrecognised becomes
    /// `Custom`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_string()))
    }
}

impl From<String> for PiiCategory {
    fn from(value: String) -> Self {
        match value.as_str() {
            "email" => PiiCategory::Email,
            "ssn" => PiiCategory::Ssn,
            "phone" => PiiCategory::Phone,
            "creditCard" => PiiCategory::CreditCard,
            "ipAddress" => PiiCategory::IpAddress,
            "dateOfBirth" => PiiCategory::DateOfBirth,
            "passport" => PiiCategory::Passport,
            "driverLicense" => PiiCategory::DriverLicense,
            _ => PiiCategory::Custom(value),
        }
    }
}

impl From<PiiCategory> for String {
    fn from(value: PiiCategory) -> Self {
        match value {
            PiiCategory::Custom(name) => name,
            other => other.as_str().to_string(),
        }
    }
}

/// Set of category identifiers a scan should report.
///
/// Identifiers that do not name a registered category are kept but simply
/// match nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnabledCategories(HashSet<String>);

impl EnabledCategories {
    /// Every built-in category.
    pub fn all() -> Self {
        PiiCategory::BUILTIN.iter().map(PiiCategory::as_str).collect()
    }

    /// No categories; every scan returns nothing.
    pub fn none() -> Self {
        Self::default()
    }

    /// Whether `category` is enabled.
    pub fn contains(&self, category: &PiiCategory) -> bool {
        self.0.contains(category.as_str())
    }

    /// Whether the raw identifier is present.
    pub fn contains_id(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    /// Whether no category is enabled.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of enabled identifiers.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Enable one more identifier.
    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        self.0.insert(id.into())
    }
}

impl<S: Into<String>> FromIterator<S> for EnabledCategories {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// A located occurrence of a PII pattern.
///
/// Offsets are half-open character indices into the scanned text (absolute
/// document offsets when a sub-range was scanned).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PiiMatch {
    /// Category of the detector that matched.
    pub category: PiiCategory,
    /// Matched text, equal to the `start..end` character slice.
    pub value: String,
    /// Inclusive start offset in characters.
    pub start: usize,
    /// Exclusive end offset in characters.
    pub end: usize,
    /// Replacement used when the match is redacted.
    pub placeholder: String,
}

impl PiiMatch {
    /// Character span of the match.
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Length of the match in characters.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the span covers no characters.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Input to a single scan call.
#[derive(Debug, Clone)]
pub struct ScanRequest<'a> {
    /// Full document text; offsets are relative to it.
    pub text: &'a str,
    /// Categories to report.
    pub enabled: &'a EnabledCategories,
    /// Optional half-open character range to restrict the scan to.
    pub range: Option<Range<usize>>,
}

impl<'a> ScanRequest<'a> {
    /// Scan the whole text.
    pub fn new(text: &'a str, enabled: &'a EnabledCategories) -> Self {
        Self { text, enabled, range: None }
    }

    /// Restrict the scan to `range` (character offsets).
    pub fn with_range(mut self, range: Range<usize>) -> Self {
        self.range = Some(range);
        self
    }
}
