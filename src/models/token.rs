use crate::content::rewrite_content_uri;
use alloy::primitives::{Address, U256};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical token record handed to the presentation layer.
///
/// Identity is the `(collection_address, token_id)` pair; a resolution run
/// never emits two records with the same pair. The record is immutable once
/// constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    /// Address of the source collection contract
    pub collection_address: Address,
    /// Decimal token id, kept as a string for transport safety
    pub token_id: String,
    /// Display name
    pub name: String,
    /// Free-text description
    pub description: String,
    /// Resolved image location
    pub image: TokenImage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenImage {
    pub url: String,
}

/// Loosely-shaped metadata document fetched from a content gateway. Only
/// `name`, `description` and `image` are consumed; everything else in the
/// document is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTokenMetadata {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl Token {
    /// Normalize a raw metadata document into a canonical record.
    ///
    /// Total mapping: every missing field gets a default (`"Token {id}"`
    /// name, empty description, empty image url) and an `ipfs://` image
    /// pointer is rewritten through the configured gateway.
    pub fn from_metadata(
        collection: Address,
        token_id: U256,
        metadata: Option<RawTokenMetadata>,
        gateway_host: &str,
    ) -> Self {
        let metadata = metadata.unwrap_or_default();
        let name = metadata
            .name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| format!("Token {}", token_id));
        let image_url = metadata
            .image
            .map(|raw| rewrite_content_uri(&raw, gateway_host))
            .unwrap_or_default();

        Self {
            collection_address: collection,
            token_id: token_id.to_string(),
            name,
            description: metadata.description.unwrap_or_default(),
            image: TokenImage { url: image_url },
        }
    }
}

/// A single `(collection, token id)` pair queued for resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Candidate {
    pub collection: Address,
    pub token_id: U256,
}

impl Candidate {
    pub fn new(collection: Address, token_id: U256) -> Self {
        Self {
            collection,
            token_id,
        }
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.collection, self.token_id)
    }
}
