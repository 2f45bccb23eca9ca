//! Application constants
//!
//! Centralized location for domain-level constants used throughout the
//! application.

// Scheduling
/// Default quiet period before a scheduled scan runs.
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

// Diagnostics
/// `source` of every published diagnostic.
pub const DIAGNOSTIC_SOURCE: &str = "piiguard";
/// Prefix of diagnostic codes, followed by the category id.
pub const DIAGNOSTIC_CODE_PREFIX: &str = "pii-";
/// Prefix of diagnostic messages, followed by the pattern description.
pub const DIAGNOSTIC_MESSAGE_PREFIX: &str = "Potential PII detected: ";

/// Built-in category identifiers in registry order.
pub const BUILTIN_CATEGORY_IDS: [&str; 8] = [
    "email",
    "ssn",
    "phone",
    "creditCard",
    "ipAddress",
    "dateOfBirth",
    "passport",
    "driverLicense",
];

/// File extensions never scanned (binary and font assets).
pub const SKIP_EXTENSIONS: [&str; 10] =
    ["png", "jpg", "jpeg", "gif", "svg", "ico", "woff", "woff2", "ttf", "eot"];

// Configuration discovery
/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "PIIGUARD_CONFIG";
/// File stem probed for `.toml` and `.json` config files.
pub const CONFIG_FILE_STEM: &str = "piiguard";
