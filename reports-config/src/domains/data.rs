//! Record source configuration

use crate::error::ConfigResult;
use crate::validation::{validate_required_string, Validatable};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where report records come from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// JSON or YAML fixture; the built-in sample dataset is served when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixture_path: Option<PathBuf>,
}

impl Validatable for DataConfig {
    fn validate(&self) -> ConfigResult<()> {
        if let Some(path) = &self.fixture_path {
            validate_required_string(&path.to_string_lossy(), "fixture_path", self.domain_name())?;
        }
        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "data"
    }
}
