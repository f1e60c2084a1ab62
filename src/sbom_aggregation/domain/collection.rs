use crate::sbom_aggregation::services::IdentifierValidator;
use crate::shared::error::SbomError;
use crate::shared::Result;
use serde::{Deserialize, Deserializer, Serialize};

/// NewType wrapper for a collection GUID that passed [`IdentifierValidator`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CollectionId(String);

impl CollectionId {
    pub fn parse(candidate: &str) -> Result<Self> {
        if !IdentifierValidator::is_valid(candidate) {
            return Err(SbomError::InvalidCollectionId {
                value: candidate.to_string(),
            }
            .into());
        }
        Ok(Self(candidate.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CollectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A collection record as returned by the name search
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CollectionSummary {
    pub guid: String,
    pub name: String,
}

impl CollectionSummary {
    pub fn new(guid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            guid: guid.into(),
            name: name.into(),
        }
    }
}

/// A named grouping of applications, read once per run
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Collection {
    pub guid: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_tags")]
    pub tags: Vec<String>,
    /// Last-modified timestamp, kept exactly as the service formats it
    pub modified: String,
}

/// The service has returned tags both as an array and as a single
/// comma-separated string.
fn deserialize_tags<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawTags {
        List(Vec<String>),
        Text(String),
    }

    Ok(match Option::<RawTags>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(RawTags::List(tags)) => tags,
        Some(RawTags::Text(text)) => text
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect(),
    })
}

/// Reference to one application under a collection
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Asset {
    pub asset_info: AssetInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AssetInfo {
    pub guid: String,
}

impl Asset {
    pub fn new(application_guid: impl Into<String>) -> Self {
        Self {
            asset_info: AssetInfo {
                guid: application_guid.into(),
            },
        }
    }

    pub fn application_guid(&self) -> &str {
        &self.asset_info.guid
    }
}
