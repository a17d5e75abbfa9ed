//! Project configuration
//!
//! Loaded from `tapegen.yaml` in the input directory. Every field has a
//! default, so a missing file or an empty document is a valid configuration.

use crate::error::{Error, Result};
use crate::render::{RenderConfig, Target};
use crate::util::is_identifier;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Number of cells on the tape unless configured otherwise
pub const DEFAULT_TAPE_SIZE: usize = 256;

/// File looked up by [`Config::discover`]
pub const CONFIG_FILE: &str = "tapegen.yaml";

/// Generator configuration (`tapegen.yaml`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Target language to generate
    #[serde(default = "default_target")]
    pub target: Target,

    /// Name of the generated container (module, class or package)
    #[serde(default = "default_container")]
    pub container: String,

    /// Cells on the tape of every generated function
    #[serde(default = "default_tape_size")]
    pub tape_size: usize,

    /// Extension of tape-language sources, without the dot
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Emit a provenance header naming sources and their hashes
    #[serde(default = "default_true")]
    pub provenance: bool,

    /// Run the target formatter over generated code (Rust only)
    #[serde(default = "default_true")]
    pub auto_format: bool,
}

fn default_target() -> Target {
    Target::Rust
}

fn default_container() -> String {
    "BF".to_string()
}

fn default_tape_size() -> usize {
    DEFAULT_TAPE_SIZE
}

fn default_extension() -> String {
    "bf".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target: default_target(),
            container: default_container(),
            tape_size: default_tape_size(),
            extension: default_extension(),
            provenance: true,
            auto_format: true,
        }
    }
}

impl Config {
    /// Parse and validate a YAML document
    pub fn from_yaml(content: &str) -> Result<Self> {
        // an empty document deserializes as unit, not as an empty map
        let config: Config = if content.trim().is_empty() {
            Config::default()
        } else {
            serde_norway::from_str(content)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(Error::Io)?;
        Self::from_yaml(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    /// Load `tapegen.yaml` from `dir`, or fall back to defaults
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Check the invariants the renderers rely on
    pub fn validate(&self) -> Result<()> {
        if self.tape_size == 0 {
            return Err(Error::Config("tape_size must be at least 1".into()));
        }
        if !is_identifier(&self.container) {
            return Err(Error::Config(format!(
                "container '{}' is not a valid identifier",
                self.container
            )));
        }
        if self.extension.is_empty() || self.extension.starts_with('.') {
            return Err(Error::Config(format!(
                "extension '{}' must be non-empty and given without a leading dot",
                self.extension
            )));
        }
        Ok(())
    }

    /// Whether a host file name is a tape-language source
    pub fn matches_source(&self, name: &str) -> bool {
        name.strip_suffix(&self.extension)
            .is_some_and(|rest| rest.ends_with('.') && rest.len() > 1)
    }

    /// Rendering options derived from this configuration
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            container: self.container.clone(),
            tape_size: self.tape_size,
            provenance: self.provenance,
            auto_format: self.auto_format,
            ..RenderConfig::default()
        }
    }
}
