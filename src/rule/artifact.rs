use crate::compiler::Compiler;
use crate::error::ArtifactError;
use crate::graph::LaidOutGraph;
use crate::summary::SummaryFormatter;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};

/// A compiled and laid-out rule, ready to hand to a renderer without recompiling.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CompiledFlow {
    pub rule_id: String,
    pub summary: String,
    pub graph: LaidOutGraph,
}

impl CompiledFlow {
    /// Compiles, lays out and describes the compiler's rule.
    pub fn from_compiler(compiler: &Compiler) -> Self {
        Self {
            rule_id: compiler.rule().id.clone(),
            summary: SummaryFormatter::describe_rule(compiler.rule(), compiler.actions()),
            graph: compiler.compile_laid_out(),
        }
    }

    /// Serializes the artifact with the bincode format.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ArtifactError> {
        Ok(encode_to_vec(self, standard())?)
    }

    /// Saves the artifact to a file using the bincode format.
    pub fn save(&self, path: &str) -> Result<(), ArtifactError> {
        let bytes = self.to_bytes()?;
        let io_error = |source| ArtifactError::Io {
            path: path.to_string(),
            source,
        };
        let mut file = fs::File::create(path).map_err(io_error)?;
        file.write_all(&bytes).map_err(io_error)?;
        Ok(())
    }

    /// Loads an artifact from a file.
    pub fn from_file(path: &str) -> Result<Self, ArtifactError> {
        let io_error = |source| ArtifactError::Io {
            path: path.to_string(),
            source,
        };
        let mut file = fs::File::open(path).map_err(io_error)?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(io_error)?;
        Self::from_bytes(&bytes)
    }

    /// Deserializes an artifact from a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ArtifactError> {
        decode_from_slice(bytes, standard())
            .map(|(flow, _)| flow) // bincode 2 returns a tuple (data, bytes_read)
            .map_err(ArtifactError::from)
    }
}
