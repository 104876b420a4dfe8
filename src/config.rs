//! Configuration for ds2save
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Editor configuration
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Output Configuration
    // -------------------------------------------------------------------------
    /// Directory the edited save is written to.
    /// `None` writes next to the source file, replacing it.
    pub output_dir: Option<PathBuf>,

    /// Copy an existing file to `<name>.bak` before replacing it
    pub backup: bool,

    // -------------------------------------------------------------------------
    // Input Configuration
    // -------------------------------------------------------------------------
    /// Reject non-numeric or out-of-range text input instead of clamping it
    pub strict_input: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: None,
            backup: true,
            strict_input: false,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the output directory
    pub fn output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output_dir = Some(path.into());
        self
    }

    /// Enable or disable `.bak` copies of replaced files
    pub fn backup(mut self, enabled: bool) -> Self {
        self.config.backup = enabled;
        self
    }

    /// Enable or disable strict text input
    pub fn strict_input(mut self, enabled: bool) -> Self {
        self.config.strict_input = enabled;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
