use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Options for a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateOptions {
    /// Maximum nesting of spec expansions before the run is aborted.
    pub max_depth: usize,
    /// Maximum number of records a single expansion may accumulate.
    pub max_results: usize,
    /// Seed for random engines created by the generation engine.
    pub seed: Option<u64>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            max_depth: 64,
            max_results: 1_000_000,
            seed: None,
        }
    }
}

impl GenerateOptions {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_overrides_only_given_fields() {
        let options = GenerateOptions::from_toml_str("max_depth = 8\nseed = 42\n")
            .expect("valid options");
        assert_eq!(options.max_depth, 8);
        assert_eq!(options.seed, Some(42));
        assert_eq!(options.max_results, GenerateOptions::default().max_results);
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let err = GenerateOptions::from_toml_str("max_depth = \"deep\"").expect_err("bad type");
        assert!(matches!(err, crate::Error::Config(_)));
    }
}
