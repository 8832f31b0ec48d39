use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::label::format_label;

/// Anything the batcher can group and page: an identity plus a classification tag
pub trait Classified {
    /// Opaque identifier, stable across calls
    fn id(&self) -> &str;
    /// Fine-grained classification label (e.g., "engagement")
    fn classification(&self) -> &str;
}

/// A single classified media asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    pub classification: String,
    /// Display fields the batcher never looks at (url, alt text, dimensions...)
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Item {
    pub fn new(id: impl Into<String>, classification: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            classification: classification.into(),
            attributes: Map::new(),
        }
    }

    /// Attach an opaque display attribute
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

impl Classified for Item {
    fn id(&self) -> &str {
        &self.id
    }

    fn classification(&self) -> &str {
        &self.classification
    }
}

// Database rows sometimes carry numeric ids
fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

/// A coarse category grouping one or more classifications
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Stable key (e.g., "weddings")
    pub key: String,
    /// Optional display label; falls back to the formatted key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Fine-grained classifications that belong to this category
    pub classifications: Vec<String>,
}

impl Category {
    pub fn new<I, S>(key: impl Into<String>, classifications: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            key: key.into(),
            label: None,
            classifications: classifications.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Whether `classification` is listed under this category
    pub fn contains(&self, classification: &str) -> bool {
        self.classifications.iter().any(|c| c == classification)
    }

    pub fn display_label(&self) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None => format_label(&self.key),
        }
    }
}

/// Ordered classification -> category lookup table, fixed at configuration time.
///
/// Order matters only when a classification is listed under more than one
/// category: [`Taxonomy::category_of`] resolves it to the first match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Taxonomy {
    categories: Vec<Category>,
}

impl Taxonomy {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Append a category (builder style)
    pub fn with_category<I, S>(mut self, key: impl Into<String>, classifications: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories.push(Category::new(key, classifications));
        self
    }

    pub fn get(&self, key: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.key == key)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Resolve a classification to its category (first match wins)
    pub fn category_of(&self, classification: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.contains(classification))
    }

    /// Classifications listed under more than one category, with the keys
    /// that claim them, sorted by classification
    pub fn overlaps(&self) -> Vec<(&str, Vec<&str>)> {
        let mut claims: Vec<(&str, Vec<&str>)> = Vec::new();

        for category in &self.categories {
            for classification in &category.classifications {
                match claims.iter_mut().find(|(c, _)| *c == classification.as_str()) {
                    Some((_, keys)) => {
                        if !keys.contains(&category.key.as_str()) {
                            keys.push(category.key.as_str());
                        }
                    }
                    None => claims.push((classification.as_str(), vec![category.key.as_str()])),
                }
            }
        }

        let mut overlaps: Vec<_> = claims.into_iter().filter(|(_, keys)| keys.len() > 1).collect();
        overlaps.sort_by(|a, b| a.0.cmp(b.0));
        overlaps
    }
}
