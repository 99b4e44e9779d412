//! Query engine configuration

use crate::error::ConfigResult;
use crate::validation::{validate_positive, Validatable};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Accepted categories and page size bounds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Categories a request may filter on
    pub categories: Vec<String>,

    /// Page size when a request names none
    pub default_page_size: u32,

    /// Largest page size a request may ask for
    pub max_page_size: u32,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            categories: ["finance", "ops", "sales", "marketing", "development"]
                .into_iter()
                .map(String::from)
                .collect(),
            default_page_size: 50,
            max_page_size: 100,
        }
    }
}

impl Validatable for QueryConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_positive(self.default_page_size, "default_page_size", self.domain_name())?;
        validate_positive(self.max_page_size, "max_page_size", self.domain_name())?;

        if self.default_page_size > self.max_page_size {
            return Err(self.validation_error(format!(
                "default_page_size ({}) cannot exceed max_page_size ({})",
                self.default_page_size, self.max_page_size
            )));
        }

        if self.categories.is_empty() {
            return Err(self.validation_error("at least one category must be configured"));
        }

        let mut seen = HashSet::new();
        for category in &self.categories {
            if category.trim().is_empty() {
                return Err(self.validation_error("categories cannot contain empty entries"));
            }
            if *category != category.to_lowercase() {
                return Err(self.validation_error(format!(
                    "category '{}' must be lower-case",
                    category
                )));
            }
            if category == "all" {
                return Err(self.validation_error("'all' is reserved as the category wildcard"));
            }
            if !seen.insert(category.as_str()) {
                return Err(self.validation_error(format!("duplicate category '{}'", category)));
            }
        }

        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "query"
    }
}
