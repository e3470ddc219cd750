use serde::{Deserialize, Serialize};

use mfx_crypto::{ContentDigest, DigestAlgorithm};

use crate::block::BlockGenerator;
use crate::dag::DagGenerator;
use crate::error::{GenError, GenResult};
use crate::shape::DagShape;

/// Digest boxed for runtime selection.
pub type DynDigest = Box<dyn ContentDigest + Send + Sync>;

/// Settings for building generators from configuration.
///
/// Every field has a default, so an empty TOML document is a valid config.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Digest used for both blocks and nodes.
    pub digest: DigestAlgorithm,
    /// Shape used when a caller does not name one.
    pub shape: DagShape,
}

impl GeneratorConfig {
    /// Parse a TOML document.
    pub fn from_toml(s: &str) -> GenResult<Self> {
        let config: Self = toml::from_str(s).map_err(|e| GenError::Config(e.to_string()))?;
        config.shape.validate()?;
        Ok(config)
    }

    pub fn block_generator(&self) -> BlockGenerator<DynDigest> {
        BlockGenerator::with_digest(self.digest.block_digest())
    }

    pub fn dag_generator(&self) -> DagGenerator<DynDigest> {
        DagGenerator::with_digest(self.digest.node_digest())
    }
}
