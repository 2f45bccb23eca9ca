//! Path-based scan exclusion
//!
//! Globs follow `globset` syntax with a literal separator: `*` and `?` stay
//! within one path segment, `**` crosses segments. Patterns match the whole
//! relative path.

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use piiguard_domain::constants::SKIP_EXTENSIONS;
use piiguard_domain::{PiiGuardError, Result};

/// Compiled exclude globs plus the fixed skip-extension list.
#[derive(Debug, Clone)]
pub struct ExclusionFilter {
    globs: GlobSet,
}

impl Default for ExclusionFilter {
    fn default() -> Self {
        Self { globs: GlobSet::empty() }
    }
}

impl ExclusionFilter {
    /// Compile `patterns`.
    ///
    /// # Errors
    /// Returns `PiiGuardError::Config` naming the offending glob if it cannot
    /// be compiled.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let pattern = pattern.as_ref();
            let glob = GlobBuilder::new(pattern)
                .literal_separator(true)
                .build()
                .map_err(|e| invalid_pattern(pattern, &e))?;
            builder.add(glob);
        }
        let globs = builder
            .build()
            .map_err(|e| PiiGuardError::Config(format!("invalid exclude patterns: {}", e)))?;
        Ok(Self { globs })
    }

    /// Whether `relative_path` matches an exclude glob.
    pub fn is_excluded(&self, relative_path: &str) -> bool {
        self.globs.is_match(relative_path)
    }

    /// Whether the file extension marks a binary or font asset.
    pub fn has_skipped_extension(relative_path: &str) -> bool {
        let file_name = relative_path.rsplit(['/', '\\']).next().unwrap_or(relative_path);
        match file_name.rsplit_once('.') {
            Some((_, ext)) => {
                let ext = ext.to_ascii_lowercase();
                SKIP_EXTENSIONS.contains(&ext.as_str())
            }
            None => false,
        }
    }

    /// Combined check: excluded by glob or by extension.
    pub fn rejects(&self, relative_path: &str) -> bool {
        self.is_excluded(relative_path) || Self::has_skipped_extension(relative_path)
    }
}

fn invalid_pattern(pattern: &str, err: &globset::Error) -> PiiGuardError {
    PiiGuardError::Config(format!("invalid exclude pattern '{}': {}", pattern, err))
}
