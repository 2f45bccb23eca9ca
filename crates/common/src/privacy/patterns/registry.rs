//! Built-in PII detectors and the ordered registry that holds them.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use super::error::{PiiError, PiiResult};
use crate::error::CommonError;
use super::types::{EnabledCategories, PiiCategory};

// Word boundaries are ASCII-only so that a digit run next to an accented
// letter still counts as a standalone token.
pub(crate) const EMAIL_PATTERN: &str = r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}";
pub(crate) const SSN_PATTERN: &str = r"(?-u:\b)[0-9]{3}-[0-9]{2}-[0-9]{4}(?-u:\b)";
pub(crate) const PHONE_PATTERN: &str =
    r"(?-u:\b)(?:\+?1[-.\s]?)?\(?[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}(?-u:\b)";
pub(crate) const CREDIT_CARD_PATTERN: &str = r"(?-u:\b)(?:[0-9]{4}[-\s]?){3}[0-9]{4}(?-u:\b)";
pub(crate) const IP_ADDRESS_PATTERN: &str = r"(?-u:\b)(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)(?-u:\b)";
pub(crate) const DATE_OF_BIRTH_PATTERN: &str =
    r"(?-u:\b)(?:0[1-9]|1[0-2])/(?:0[1-9]|[12][0-9]|3[01])/(?:19|20)[0-9]{2}(?-u:\b)";
pub(crate) const PASSPORT_PATTERN: &str = r"(?-u:\b)[A-Z]{1,2}[0-9]{6,9}(?-u:\b)";
pub(crate) const DRIVER_LICENSE_PATTERN: &str = r"(?-u:\b)[A-Z]{1,2}[0-9]{5,8}(?-u:\b)";

/// Built-in detector table: category, pattern, description, placeholder.
const BUILTIN_DEFINITIONS: [(PiiCategory, &str, &str, &str); 8] = [
    (PiiCategory::Email, EMAIL_PATTERN, "Email address", "[EMAIL]"),
    (PiiCategory::Ssn, SSN_PATTERN, "Social Security Number", "[SSN]"),
    (PiiCategory::Phone, PHONE_PATTERN, "Phone number", "[PHONE]"),
    (PiiCategory::CreditCard, CREDIT_CARD_PATTERN, "Credit card number", "[CREDIT_CARD]"),
    (PiiCategory::IpAddress, IP_ADDRESS_PATTERN, "IP address", "[IP_ADDRESS]"),
    (PiiCategory::DateOfBirth, DATE_OF_BIRTH_PATTERN, "Date of birth", "[DOB]"),
    (PiiCategory::Passport, PASSPORT_PATTERN, "Passport number", "[PASSPORT]"),
    (PiiCategory::DriverLicense, DRIVER_LICENSE_PATTERN, "Driver license number", "[DRIVER_LICENSE]"),
];

static BUILTIN_PATTERNS: Lazy<Vec<PiiPattern>> = Lazy::new(|| {
    BUILTIN_DEFINITIONS
        .iter()
        .map(|(category, pattern, description, placeholder)| PiiPattern {
            category: category.clone(),
            matcher: Regex::new(pattern).expect("built-in PII pattern should compile - this is a bug"),
            description: (*description).to_string(),
            placeholder: (*placeholder).to_string(),
        })
        .collect()
});

/// A named PII detector.
#[derive(Debug, Clone)]
pub struct PiiPattern {
    /// Category reported for every match.
    pub category: PiiCategory,
    /// Compiled matching rule.
    pub matcher: Regex,
    /// Human-readable label.
    pub description: String,
    /// Replacement used when redacting a match.
    pub placeholder: String,
}

/// Ordered, immutable collection of PII detectors.
///
/// Order is the order patterns are evaluated in, which fixes the order of
/// matches across categories.
#[derive(Debug, Clone)]
pub struct PatternRegistry {
    patterns: Vec<PiiPattern>,
}

impl Default for PatternRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PatternRegistry {
    /// Registry containing the eight built-in detectors.
    pub fn builtin() -> Self {
        Self { patterns: BUILTIN_PATTERNS.clone() }
    }

    /// Start from the built-ins and append custom detectors.
    pub fn builder() -> PatternRegistryBuilder {
        PatternRegistryBuilder { patterns: BUILTIN_PATTERNS.clone(), errors: Vec::new() }
    }

    /// Patterns whose category is enabled, in registry order.
    ///
    /// Unknown identifiers in `enabled` are ignored.
    pub fn enabled_patterns<'a>(
        &'a self,
        enabled: &'a EnabledCategories,
    ) -> impl Iterator<Item = &'a PiiPattern> + 'a {
        self.patterns.iter().filter(move |pattern| enabled.contains(&pattern.category))
    }

    /// Look up a detector by category.
    pub fn get(&self, category: &PiiCategory) -> Option<&PiiPattern> {
        self.patterns.iter().find(|pattern| &pattern.category == category)
    }

    /// All detectors in registry order.
    pub fn patterns(&self) -> &[PiiPattern] {
        &self.patterns
    }

    /// Category identifiers in registry order.
    pub fn categories(&self) -> impl Iterator<Item = &PiiCategory> {
        self.patterns.iter().map(|pattern| &pattern.category)
    }

    /// Number of detectors.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether the registry holds no detectors.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Builder for registries with custom detectors.
///
/// Errors are collected and the first one is reported by [`build`], so a
/// malformed custom pattern fails initialisation instead of surfacing during
/// a scan.
///
/// [`build`]: PatternRegistryBuilder::build
#[derive(Debug)]
pub struct PatternRegistryBuilder {
    patterns: Vec<PiiPattern>,
    errors: Vec<PiiError>,
}

impl PatternRegistryBuilder {
    /// Append a custom detector after the existing ones.
    pub fn custom(
        mut self,
        category: impl Into<String>,
        pattern: &str,
        description: impl Into<String>,
        placeholder: impl Into<String>,
    ) -> Self {
        let category = PiiCategory::from(category.into());
        let description = description.into();
        let placeholder = placeholder.into();

        if category.as_str().trim().is_empty() {
            self.errors.push(CommonError::validation("category", "must not be empty").into());
            return self;
        }
        if placeholder.is_empty() {
            let err = CommonError::validation_with_value(
                "placeholder",
                "must not be empty",
                category.as_str(),
            );
            self.errors.push(err.into());
            return self;
        }

        match Regex::new(pattern) {
            Ok(matcher) => {
                self.patterns.push(PiiPattern { category, matcher, description, placeholder })
            }
            Err(err) => self.errors.push(PiiError::PatternCompilation {
                category: category.to_string(),
                message: err.to_string(),
            }),
        }
        self
    }

    /// Finish the registry, failing on the first recorded error or on a
    /// duplicated category.
    pub fn build(self) -> PiiResult<PatternRegistry> {
        if let Some(err) = self.errors.into_iter().next() {
            return Err(err);
        }

        let mut seen = HashSet::new();
        for pattern in &self.patterns {
            if !seen.insert(pattern.category.as_str()) {
                return Err(PiiError::DuplicateCategory(pattern.category.to_string()));
            }
        }

        Ok(PatternRegistry { patterns: self.patterns })
    }
}
