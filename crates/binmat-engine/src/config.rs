use binmat_core::{BinmatError, ErrorInfo};
use serde::{Deserialize, Serialize};

use crate::methods::{FixedMethod, IntervalMethod};

/// Parameters of one sampling session, loadable from YAML or JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplerConfig {
    /// Method name; validated against the margin type when a generator is built.
    #[serde(default = "default_method")]
    pub method: String,
    /// Elementary moves between consecutive chain samples.
    #[serde(default = "default_steps")]
    pub steps: usize,
    /// Seed used by the generator.
    #[serde(default)]
    pub seed_policy: SeedPolicy,
}

fn default_method() -> String {
    FixedMethod::Exact.as_str().to_string()
}

fn default_steps() -> usize {
    1000
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            method: default_method(),
            steps: default_steps(),
            seed_policy: SeedPolicy::default(),
        }
    }
}

/// Master seed configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedPolicy {
    /// Seed of the session; replicas derive their own seeds from it.
    #[serde(default = "default_master_seed")]
    pub master_seed: u64,
}

fn default_master_seed() -> u64 {
    0x0B1A_7A55_5EED_2024_u64
}

impl Default for SeedPolicy {
    fn default() -> Self {
        Self {
            master_seed: default_master_seed(),
        }
    }
}

fn config_error(code: &str, err: impl ToString) -> BinmatError {
    BinmatError::Config(ErrorInfo::new(code, err.to_string()))
}

impl SamplerConfig {
    /// Config for `method` with default steps and seed.
    pub fn with_method(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            ..Self::default()
        }
    }

    /// Parses a YAML document.
    pub fn from_yaml_str(data: &str) -> Result<Self, BinmatError> {
        serde_yaml::from_str(data).map_err(|err| config_error("yaml_deserialize", err))
    }

    /// Parses a JSON document.
    pub fn from_json_str(data: &str) -> Result<Self, BinmatError> {
        serde_json::from_str(data).map_err(|err| config_error("json_deserialize", err))
    }

    /// Serializes into YAML.
    pub fn to_yaml_string(&self) -> Result<String, BinmatError> {
        serde_yaml::to_string(self).map_err(|err| config_error("yaml_serialize", err))
    }

    /// Method parsed for fixed margins.
    pub fn fixed_method(&self) -> Result<FixedMethod, BinmatError> {
        self.method.parse()
    }

    /// Method parsed for interval margins.
    pub fn interval_method(&self) -> Result<IntervalMethod, BinmatError> {
        self.method.parse()
    }
}
