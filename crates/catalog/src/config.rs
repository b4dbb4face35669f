//! Configuration system for the reference builder.
//!
//! This module defines the configuration structures used to parameterize a build. It provides:
//! 1. **Defaults:** Baseline directories, record key, and link settings.
//! 2. **Structures:** Hierarchical config for paths, ingest, build mode, and linking.
//! 3. **Enums:** The self-link policy.
//!
//! Configuration is supplied as JSON (`Config::from_json_file`) or via `Config::default()`;
//! the CLI layers its flags on top of either.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::common::Error;

/// Default configuration constants.
mod defaults {
    /// Directory scanned for input documents.
    pub const INPUT_DIR: &str = "input";

    /// Directory holding one persisted store file per architecture.
    pub const DB_DIR: &str = "db";

    /// Directory receiving renderer-facing output.
    pub const OUTPUT_DIR: &str = "docs";

    /// Key under which a document carries its record list.
    pub const RECORD_KEY: &str = "instructions";

    /// File extension of input and store documents.
    pub const EXTENSION: &str = "json";

    /// Prefix prepended to a relative URL inside generated hyperlinks.
    ///
    /// Detail pages live two levels deep (`<arch>/<slug>/`), so links climb back to the site root.
    pub const HREF_PREFIX: &str = "../../";
}

/// Whether an instruction's own mnemonic is hyperlinked inside its own text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum SelfLinkPolicy {
    /// Leave self-references as plain (escaped) text.
    #[default]
    #[serde(alias = "skip")]
    Skip,
    /// Link self-references like any other mnemonic.
    #[serde(alias = "link")]
    Link,
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Input, store, and output locations.
    #[serde(default)]
    pub paths: PathsConfig,
    /// Document format options.
    #[serde(default)]
    pub ingest: IngestConfig,
    /// Build mode switches.
    #[serde(default)]
    pub build: BuildConfig,
    /// Cross-reference link options.
    #[serde(default)]
    pub links: LinkConfig,
}

impl Config {
    /// Loads a configuration from a JSON file.
    ///
    /// Missing sections and fields fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the file cannot be read or is not valid JSON for this schema.
    pub fn from_json_file(path: &Path) -> Result<Self, Error> {
        let text = fs::read_to_string(path).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        serde_json::from_str(&text).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

/// Filesystem locations.
#[derive(Debug, Clone, Deserialize)]
pub struct PathsConfig {
    /// Directory of input documents.
    #[serde(default = "PathsConfig::default_input_dir")]
    pub input_dir: PathBuf,
    /// Directory of the persisted store.
    #[serde(default = "PathsConfig::default_db_dir")]
    pub db_dir: PathBuf,
    /// Directory of renderer-facing output.
    #[serde(default = "PathsConfig::default_output_dir")]
    pub output_dir: PathBuf,
}

impl PathsConfig {
    fn default_input_dir() -> PathBuf {
        PathBuf::from(defaults::INPUT_DIR)
    }

    fn default_db_dir() -> PathBuf {
        PathBuf::from(defaults::DB_DIR)
    }

    fn default_output_dir() -> PathBuf {
        PathBuf::from(defaults::OUTPUT_DIR)
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input_dir: Self::default_input_dir(),
            db_dir: Self::default_db_dir(),
            output_dir: Self::default_output_dir(),
        }
    }
}

/// Document format options.
#[derive(Debug, Clone, Deserialize)]
pub struct IngestConfig {
    /// Key holding the record list inside a document object.
    #[serde(default = "IngestConfig::default_record_key")]
    pub record_key: String,
    /// File extension (without the dot) of documents to read.
    #[serde(default = "IngestConfig::default_extension")]
    pub extension: String,
}

impl IngestConfig {
    fn default_record_key() -> String {
        defaults::RECORD_KEY.to_string()
    }

    fn default_extension() -> String {
        defaults::EXTENSION.to_string()
    }
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            record_key: Self::default_record_key(),
            extension: Self::default_extension(),
        }
    }
}

/// Build mode switches.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct BuildConfig {
    /// Treat any parse or validation failure as fatal.
    #[serde(default)]
    pub strict: bool,
    /// Compute everything but write nothing.
    #[serde(default)]
    pub dry_run: bool,
}

/// Cross-reference link options.
#[derive(Debug, Clone, Deserialize)]
pub struct LinkConfig {
    /// Self-reference policy.
    #[serde(default)]
    pub self_links: SelfLinkPolicy,
    /// Prefix prepended to relative URLs in generated anchors.
    #[serde(default = "LinkConfig::default_href_prefix")]
    pub href_prefix: String,
}

impl LinkConfig {
    fn default_href_prefix() -> String {
        defaults::HREF_PREFIX.to_string()
    }
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            self_links: SelfLinkPolicy::default(),
            href_prefix: Self::default_href_prefix(),
        }
    }
}
