use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

use crate::batcher::{BatchError, Batcher, DEFAULT_PAGE_SIZE};
use crate::taxonomy::{Category, Item, Taxonomy};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Page size must be at least 1")]
    ZeroPageSize,

    #[error("Category key must not be empty")]
    EmptyKey,

    #[error("Duplicate category key: {0}")]
    DuplicateKey(String),

    #[error("Category {0} lists no classifications")]
    EmptyCategory(String),
}

/// Taxonomy and paging settings for a gallery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatcherConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_taxonomy")]
    pub categories: Taxonomy,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

/// The studio's standard service categories
pub fn default_taxonomy() -> Taxonomy {
    Taxonomy::new(vec![
        Category::new("weddings", ["wedding", "engagement", "bridal"]),
        Category::new("portraits", ["portrait", "family", "maternity", "newborn"]),
        Category::new("corporate", ["corporate", "linkedin_headshots", "conference"]),
        Category::new("events", ["event", "birthday", "matric-dance"]),
        Category::new("products", ["product", "food"]),
        Category::new("graduation", ["graduation"]),
    ])
}

impl Default for BatcherConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            categories: default_taxonomy(),
        }
    }
}

impl BatcherConfig {
    /// Load and validate a JSON config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .context(format!("Failed to read config: {}", path.display()))?;
        let config = Self::from_json_str(&raw)
            .context(format!("Invalid config: {}", path.display()))?;

        info!(
            path = %path.display(),
            categories = config.categories.len(),
            page_size = config.page_size,
            "loaded config"
        );
        Ok(config)
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw).context("Failed to parse config JSON")?;
        config.validate()?;

        for (classification, keys) in config.categories.overlaps() {
            warn!(
                classification,
                categories = ?keys,
                "classification listed under several categories, first match wins"
            );
        }

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }

        let mut seen = HashSet::new();
        for category in self.categories.categories() {
            if category.key.trim().is_empty() {
                return Err(ConfigError::EmptyKey);
            }
            if !seen.insert(category.key.as_str()) {
                return Err(ConfigError::DuplicateKey(category.key.clone()));
            }
            if category.classifications.is_empty() {
                return Err(ConfigError::EmptyCategory(category.key.clone()));
            }
        }

        Ok(())
    }

    pub fn batcher(&self) -> Result<Batcher, BatchError> {
        Batcher::try_new(self.page_size)
    }
}

/// Read a JSON array of items, as exported by the gallery API
pub fn load_items(path: &Path) -> Result<Vec<Item>> {
    let raw = fs::read_to_string(path)
        .context(format!("Failed to read items: {}", path.display()))?;
    let items: Vec<Item> = serde_json::from_str(&raw)
        .context(format!("Failed to parse items JSON: {}", path.display()))?;

    info!(path = %path.display(), count = items.len(), "loaded items");
    Ok(items)
}
