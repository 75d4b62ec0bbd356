//! Catalog build configuration
//!
//! Every tunable of the build pipeline lives here, with the reasoning for
//! its default value. Configs can be written by hand or loaded from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{CatalogError, Result};

/// What to do when a manifest entry has an invalid rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Abort the whole build on the first invalid entry (in name order).
    #[default]
    FailFast,
    /// Leave invalid entries out of the catalog and list them in
    /// `SpriteCatalog::skipped`. Decode and extraction errors still abort.
    SkipInvalid,
}

/// Configuration for catalog builds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Minimum entry count before extraction runs on the rayon pool
    ///
    /// Cropping a small sprite is a few row copies; below this count the
    /// pool dispatch costs more than it saves. Must be at least 1.
    pub parallel_threshold: usize,

    /// Handling of entries whose rectangle fails validation
    pub failure_policy: FailurePolicy,

    /// Largest accepted atlas width or height (pixels)
    ///
    /// 16384 matches the common GPU texture size limit; an atlas larger
    /// than that could not be uploaded by the presentation layer anyway.
    pub max_atlas_dimension: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 64,
            failure_policy: FailurePolicy::FailFast,
            max_atlas_dimension: 16384,
        }
    }
}

impl CatalogConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.parallel_threshold == 0 {
            return Err("parallel_threshold must be at least 1".into());
        }

        if self.max_atlas_dimension == 0 {
            return Err("max_atlas_dimension must be at least 1".into());
        }

        Ok(())
    }

    /// Parse and validate a config from TOML text. Missing keys keep defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: CatalogConfig = toml::from_str(content)
            .map_err(|e| CatalogError::Config(format!("Failed to parse config TOML: {}", e)))?;
        config.validate().map_err(CatalogError::Config)?;
        Ok(config)
    }

    /// Load a config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| match e {
            CatalogError::Config(msg) => CatalogError::Config(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }
}
