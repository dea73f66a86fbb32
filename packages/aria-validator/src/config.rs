//! Validator Configuration
//!
//! JSON configuration selecting the allow-list and optional checks:
//!
//! ```json
//! {
//!   "prefix": "aria-",
//!   "allowList": "aria_properties.json",
//!   "extraNames": ["aria-experimental"],
//!   "checkCamelCase": true
//! }
//! ```
//!
//! Every field is optional. Without `allowList` the built-in ARIA table is
//! used. A relative `allowList` path is resolved against the directory of
//! the config file.

use crate::error::{AllowListError, ConfigError};
use crate::schema::{AllowList, AttributeValidator, ARIA_PREFIX};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidatorConfig {
    pub prefix: String,
    pub allow_list: Option<PathBuf>,
    pub extra_names: Vec<String>,
    pub check_camel_case: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        ValidatorConfig {
            prefix: ARIA_PREFIX.to_string(),
            allow_list: None,
            extra_names: Vec::new(),
            check_camel_case: false,
        }
    }
}

impl ValidatorConfig {
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = ValidatorConfig::from_json_str(&content)?;

        if let (Some(list_path), Some(base)) = (config.allow_list.as_ref(), path.parent()) {
            if list_path.is_relative() {
                config.allow_list = Some(base.join(list_path));
            }
        }

        tracing::debug!(path = %path.display(), "loaded validator config");
        Ok(config)
    }

    /// Resolve the allow-list this configuration describes
    pub fn build_allow_list(&self) -> Result<Arc<AllowList>, AllowListError> {
        let base = match &self.allow_list {
            Some(path) => Arc::new(AllowList::from_path(&self.prefix, path)?),
            None if self.prefix == ARIA_PREFIX => AllowList::aria(),
            None => Arc::new(AllowList::new(&self.prefix, Vec::<String>::new())?),
        };

        if self.extra_names.is_empty() {
            return Ok(base);
        }
        Ok(Arc::new(base.with_names(self.extra_names.iter().cloned())?))
    }

    pub fn build_validator(&self) -> Result<AttributeValidator, ConfigError> {
        let allow_list = self.build_allow_list()?;
        Ok(AttributeValidator::new(allow_list).with_camel_case_check(self.check_camel_case))
    }
}
