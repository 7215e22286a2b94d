use super::catalog::RecipeCatalog;
use crate::error::CatalogError;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};

/// Format revision written into every artifact. Bumped whenever `Recipe` changes shape.
pub const ARTIFACT_VERSION: u32 = 1;

/// A pre-validated catalog snapshot, stored in the bincode format.
///
/// Loading an artifact skips JSON parsing and validation, which makes it the
/// preferred input for cold starts.
#[derive(Serialize, Deserialize, Debug)]
pub struct CatalogArtifact {
    pub version: u32,
    pub catalog: RecipeCatalog,
}

impl CatalogArtifact {
    pub fn new(catalog: RecipeCatalog) -> Self {
        Self {
            version: ARTIFACT_VERSION,
            catalog,
        }
    }

    /// Saves the artifact to a file.
    pub fn save(&self, path: &str) -> Result<(), CatalogError> {
        let bytes = self.to_bytes()?;
        let mut file = fs::File::create(path).map_err(|e| {
            CatalogError::Artifact(format!("Could not create file '{}': {}", path, e))
        })?;
        file.write_all(&bytes).map_err(|e| {
            CatalogError::Artifact(format!("Could not write to file '{}': {}", path, e))
        })?;
        Ok(())
    }

    /// Loads an artifact from a file.
    pub fn from_file(path: &str) -> Result<Self, CatalogError> {
        let mut file = fs::File::open(path).map_err(|e| CatalogError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|e| CatalogError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_bytes(&bytes)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, CatalogError> {
        encode_to_vec(self, standard())
            .map_err(|e| CatalogError::Artifact(format!("Serialization failed: {}", e)))
    }

    /// Deserializes an artifact, rejecting snapshots written by another format revision.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CatalogError> {
        let artifact: Self = decode_from_slice(bytes, standard())
            .map(|(artifact, _)| artifact) // bincode 2 returns (data, bytes_read)
            .map_err(|e| CatalogError::Artifact(format!("Deserialization failed: {}", e)))?;
        if artifact.version != ARTIFACT_VERSION {
            return Err(CatalogError::Artifact(format!(
                "Unsupported artifact version {} (expected {})",
                artifact.version, ARTIFACT_VERSION
            )));
        }
        Ok(artifact)
    }

    pub fn into_catalog(self) -> RecipeCatalog {
        self.catalog
    }
}
