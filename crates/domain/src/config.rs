//! PII detection settings

use std::collections::HashSet;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{BUILTIN_CATEGORY_IDS, DEFAULT_DEBOUNCE_MS};
use crate::errors::{PiiGuardError, Result};
use crate::types::DiagnosticSeverity;

/// A detector supplied through configuration, appended after the built-ins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomPatternConfig {
    /// Category identifier, also used in `pii_patterns` to enable it.
    pub category: String,
    /// Regular expression source.
    pub pattern: String,
    /// Human-readable label shown in diagnostics.
    pub description: String,
    /// Replacement text used when redacting.
    pub placeholder: String,
}

/// User-facing settings for PII detection.
///
/// Every field has a default, so partial configuration files are valid.
/// Keys are snake_case; the camelCase names used by editor hosts
/// (`enablePiiDetection`, `piiPatterns`, ...) are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PiiSettings {
    /// Master switch for automatic document scans.
    #[serde(alias = "enablePiiDetection")]
    pub enable_pii_detection: bool,

    /// Enabled category identifiers. Unknown identifiers match nothing.
    #[serde(alias = "piiPatterns")]
    pub pii_patterns: Vec<String>,

    /// Severity used for published diagnostics.
    #[serde(alias = "piiSeverity")]
    pub pii_severity: DiagnosticSeverity,

    /// Scan documents when they are saved.
    #[serde(alias = "autoScanOnSave")]
    pub auto_scan_on_save: bool,

    /// Glob patterns (`*`, `**`, `?`) of relative paths never scanned.
    #[serde(alias = "excludePatterns")]
    pub exclude_patterns: Vec<String>,

    /// Quiet period before a debounced scan runs.
    #[serde(alias = "debounceMs")]
    pub debounce_ms: u64,

    /// Detectors appended after the built-ins.
    #[serde(alias = "customPatterns")]
    pub custom_patterns: Vec<CustomPatternConfig>,
}

impl Default for PiiSettings {
    fn default() -> Self {
        Self {
            enable_pii_detection: true,
            pii_patterns: BUILTIN_CATEGORY_IDS.iter().map(|id| (*id).to_string()).collect(),
            pii_severity: DiagnosticSeverity::default(),
            auto_scan_on_save: false,
            exclude_patterns: Vec::new(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            custom_patterns: Vec::new(),
        }
    }
}

impl PiiSettings {
    /// `debounce_ms` as a [`Duration`].
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Check structural constraints.
    ///
    /// Regex syntax of custom patterns is checked later, when the pattern
    /// registry is built.
    ///
    /// # Errors
    /// Returns `PiiGuardError::Config` if:
    /// - `debounce_ms` is zero
    /// - an exclude pattern is blank
    /// - a custom pattern has an empty field
    /// - a custom category repeats or shadows a built-in category
    pub fn validate(&self) -> Result<()> {
        if self.debounce_ms == 0 {
            return Err(PiiGuardError::Config("debounce_ms must be greater than zero".into()));
        }

        if self.exclude_patterns.iter().any(|p| p.trim().is_empty()) {
            return Err(PiiGuardError::Config("exclude_patterns must not contain blanks".into()));
        }

        let mut seen: HashSet<&str> = BUILTIN_CATEGORY_IDS.iter().copied().collect();
        for custom in &self.custom_patterns {
            let fields = [
                ("category", &custom.category),
                ("pattern", &custom.pattern),
                ("description", &custom.description),
                ("placeholder", &custom.placeholder),
            ];
            if let Some((name, _)) = fields.iter().find(|(_, value)| value.trim().is_empty()) {
                return Err(PiiGuardError::Config(format!(
                    "custom pattern '{}' has an empty {}",
                    custom.category, name
                )));
            }

            if !seen.insert(custom.category.as_str()) {
                return Err(PiiGuardError::Config(format!(
                    "custom pattern category '{}' is already defined",
                    custom.category
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn custom(category: &str) -> CustomPatternConfig {
        CustomPatternConfig {
            category: category.into(),
            pattern: r"EMP-[0-9]{6}".into(),
            description: "Employee identifier".into(),
            placeholder: "[EMPLOYEE_ID]".into(),
        }
    }

    #[test]
    fn test_defaults() {
        let settings = PiiSettings::default();
        assert!(settings.enable_pii_detection);
        assert_eq!(settings.pii_patterns.len(), 8);
        assert_eq!(settings.pii_patterns[0], "email");
        assert_eq!(settings.pii_severity, DiagnosticSeverity::Warning);
        assert!(!settings.auto_scan_on_save);
        assert_eq!(settings.debounce(), Duration::from_millis(500));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings: PiiSettings =
            serde_json::from_str(r#"{"pii_patterns": ["ssn"], "pii_severity": "error"}"#).unwrap();
        assert_eq!(settings.pii_patterns, vec!["ssn"]);
        assert_eq!(settings.pii_severity, DiagnosticSeverity::Error);
        assert!(settings.enable_pii_detection);
        assert_eq!(settings.debounce_ms, 500);
    }

    /// Validates that host-style camelCase keys are read.
    ///
    /// Assertions:
    /// - Confirms every camelCase alias maps onto its field.
    /// - Confirms serialization still writes snake_case keys.
    #[test]
    fn test_camel_case_keys_accepted() {
        let settings: PiiSettings = serde_json::from_str(
            r#"{
                "enablePiiDetection": false,
                "piiPatterns": ["email"],
                "piiSeverity": "hint",
                "autoScanOnSave": true,
                "excludePatterns": ["**/*.log"],
                "debounceMs": 750,
                "customPatterns": [{
                    "category": "employeeId",
                    "pattern": "EMP-[0-9]{6}",
                    "description": "Employee identifier",
                    "placeholder": "[EMPLOYEE_ID]"
                }]
            }"#,
        )
        .unwrap();

        assert!(!settings.enable_pii_detection);
        assert_eq!(settings.pii_patterns, vec!["email"]);
        assert_eq!(settings.pii_severity, DiagnosticSeverity::Hint);
        assert!(settings.auto_scan_on_save);
        assert_eq!(settings.exclude_patterns, vec!["**/*.log"]);
        assert_eq!(settings.debounce_ms, 750);
        assert_eq!(settings.custom_patterns, vec![custom("employeeId")]);

        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"enable_pii_detection\":false"));
    }

    #[test]
    fn test_zero_debounce_rejected() {
        let settings = PiiSettings { debounce_ms: 0, ..PiiSettings::default() };
        assert!(matches!(settings.validate(), Err(PiiGuardError::Config(_))));
    }

    #[test]
    fn test_custom_pattern_validation() {
        let ok = PiiSettings { custom_patterns: vec![custom("employeeId")], ..Default::default() };
        assert!(ok.validate().is_ok());

        let shadow = PiiSettings { custom_patterns: vec![custom("ssn")], ..Default::default() };
        let err = shadow.validate().unwrap_err();
        assert!(err.to_string().contains("'ssn' is already defined"));

        let repeated = PiiSettings {
            custom_patterns: vec![custom("employeeId"), custom("employeeId")],
            ..Default::default()
        };
        assert!(repeated.validate().is_err());

        let mut blank = custom("badge");
        blank.placeholder = " ".into();
        let empty = PiiSettings { custom_patterns: vec![blank], ..Default::default() };
        let err = empty.validate().unwrap_err();
        assert_eq!(
            err,
            PiiGuardError::Config("custom pattern 'badge' has an empty placeholder".into())
        );
    }

    #[test]
    fn test_blank_exclude_pattern_rejected() {
        let settings =
            PiiSettings { exclude_patterns: vec!["**/*.log".into(), "".into()], ..Default::default() };
        assert!(settings.validate().is_err());
    }
}
