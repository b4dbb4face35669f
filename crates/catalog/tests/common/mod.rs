//! # Test Fixtures
//!
//! Record builders and a scratch workspace shared by the unit tests.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

use isaref_core::Config;
use isaref_core::ingest::{Candidate, Provenance};
use isaref_core::isa::{Encoding, Instruction};

/// Builds a minimal valid JSON record.
pub fn record(arch: &str, mnemonic: &str, summary: &str, pattern: &str) -> Value {
    json!({
        "mnemonic": mnemonic,
        "architecture": arch,
        "summary": summary,
        "encoding": { "binary_pattern": pattern },
    })
}

/// Builds a typed instruction with an encoding pattern.
pub fn instruction(arch: &str, mnemonic: &str, summary: &str) -> Instruction {
    Instruction {
        mnemonic: mnemonic.to_string(),
        architecture: arch.to_string(),
        extension: None,
        summary: summary.to_string(),
        syntax: None,
        pseudocode: None,
        operands: Vec::new(),
        encoding: Encoding {
            binary_pattern: Some("imm[11:0]|rs1|000|rd|0010011".to_string()),
            pattern: None,
            hex_opcode: None,
        },
    }
}

/// Builds a typed instruction carrying an extension hint.
pub fn with_extension(arch: &str, mnemonic: &str, extension: &str) -> Instruction {
    Instruction {
        extension: Some(extension.to_string()),
        ..instruction(arch, mnemonic, "test")
    }
}

/// Wraps records as input candidates from one document.
pub fn candidates(origin: &str, records: Vec<Value>) -> Vec<Candidate> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| Candidate {
            origin: PathBuf::from(origin),
            index,
            provenance: Provenance::Input,
            record,
        })
        .collect()
}

/// Routes library events to the test harness output; repeated calls are no-ops.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("isaref_core=debug")
        .with_test_writer()
        .try_init();
}

/// A scratch directory laid out like a project checkout.
#[derive(Debug)]
pub struct Workspace {
    dir: TempDir,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

impl Workspace {
    /// Creates an empty workspace with an `input/` directory.
    pub fn new() -> Self {
        init_logging();
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("input")).unwrap();
        Self { dir }
    }

    /// Workspace root.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Input directory.
    pub fn input_dir(&self) -> PathBuf {
        self.root().join("input")
    }

    /// Store directory.
    pub fn db_dir(&self) -> PathBuf {
        self.root().join("db")
    }

    /// Output directory.
    pub fn output_dir(&self) -> PathBuf {
        self.root().join("docs")
    }

    /// Writes an input document `{ "instructions": records }`.
    pub fn write_input(&self, name: &str, records: Vec<Value>) -> PathBuf {
        self.write_raw(name, &json!({ "instructions": records }).to_string())
    }

    /// Writes arbitrary text into the input directory.
    pub fn write_raw(&self, name: &str, text: &str) -> PathBuf {
        let path = self.input_dir().join(name);
        fs::write(&path, text).unwrap();
        path
    }

    /// Removes an input document.
    pub fn remove_input(&self, name: &str) {
        fs::remove_file(self.input_dir().join(name)).unwrap();
    }

    /// Configuration pointing at this workspace.
    pub fn config(&self) -> Config {
        let mut config = Config::default();
        config.paths.input_dir = self.input_dir();
        config.paths.db_dir = self.db_dir();
        config.paths.output_dir = self.output_dir();
        config
    }

    /// Reads a store file for `arch`.
    pub fn read_store(&self, arch: &str) -> Vec<u8> {
        fs::read(self.db_dir().join(format!("{arch}.json"))).unwrap()
    }

    /// Reads and parses a file under the output directory.
    pub fn read_output(&self, relative: &str) -> Value {
        let text = fs::read_to_string(self.output_dir().join(relative)).unwrap();
        serde_json::from_str(&text).unwrap()
    }
}
