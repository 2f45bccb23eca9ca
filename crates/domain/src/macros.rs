//! Macro for implementing Display and FromStr for settings enums
//!
//! Settings such as the diagnostic severity are written as lowercase words in
//! configuration files. This macro maps each variant to its word once and
//! derives both directions from that table, parsing case-insensitively.
//!
//! # Example
//!
//! ```rust
//! use piiguard_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum ScanTrigger {
//!     Open,
//!     Change,
//!     Save,
//! }
//!
//! impl_domain_status_conversions!(ScanTrigger {
//!     Open => "open",
//!     Change => "change",
//!     Save => "save",
//! });
//!
//! assert_eq!(ScanTrigger::Save.to_string(), "save");
//! assert_eq!("CHANGE".parse::<ScanTrigger>().unwrap(), ScanTrigger::Change);
//! ```

/// Implements Display and FromStr for a fieldless enum
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Variant to lowercase word mapping
///
/// Parse errors name the enum and echo the rejected input.
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Trigger {
        Open,
        Save,
    }

    impl_domain_status_conversions!(Trigger {
        Open => "open",
        Save => "save",
    });

    #[test]
    fn test_display_uses_mapped_word() {
        assert_eq!(Trigger::Open.to_string(), "open");
        assert_eq!(format!("{:>6}", Trigger::Save.to_string()), "  save");
    }

    #[test]
    fn test_parse_ignores_case_and_whitespace() {
        assert_eq!(Trigger::from_str("SAVE").unwrap(), Trigger::Save);
        assert_eq!(Trigger::from_str(" Open ").unwrap(), Trigger::Open);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = Trigger::from_str("close").unwrap_err();
        assert_eq!(err, "Invalid Trigger: close");
        assert!(Trigger::from_str("").is_err());
    }
}
