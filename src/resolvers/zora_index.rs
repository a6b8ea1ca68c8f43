use crate::errors::ResolveError;
use crate::models::{Candidate, RawTokenMetadata, Token};
use crate::resolvers::{CandidateResolver, Skip};
use async_trait::async_trait;
use log::trace;
use serde::Deserialize;
use serde_json::json;

const DEFAULT_ENDPOINT: &str = "https://api.zora.co/graphql";
const PAGE_LIMIT: u32 = 12;

const TOKENS_QUERY: &str = "\
query GetTokens($where: TokensQueryInput, $pagination: PaginationInput) {
    tokens(where: $where, sort: { sortKey: MINTED, sortDirection: DESC }, pagination: $pagination) {
        nodes {
            token {
                collectionAddress
                tokenId
                name
                description
                image {
                    url
                }
            }
        }
    }
}";

/// Alternate resolver backed by an external GraphQL token index instead of
/// direct contract reads. Useful on networks where the index is warmer than
/// the public RPCs; swaps in behind the same capability interface.
pub struct ZoraIndexResolver {
    http: reqwest::Client,
    endpoint: String,
    gateway_host: String,
}

impl ZoraIndexResolver {
    pub fn new(gateway_host: impl Into<String>) -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT, gateway_host)
    }

    pub fn with_endpoint(endpoint: impl Into<String>, gateway_host: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            gateway_host: gateway_host.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct IndexResponse {
    data: Option<IndexData>,
}

#[derive(Debug, Deserialize)]
struct IndexData {
    tokens: Option<TokenConnection>,
}

#[derive(Debug, Deserialize)]
struct TokenConnection {
    nodes: Vec<TokenNode>,
}

#[derive(Debug, Deserialize)]
struct TokenNode {
    token: IndexedToken,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IndexedToken {
    token_id: String,
    name: Option<String>,
    description: Option<String>,
    image: Option<IndexedImage>,
}

#[derive(Debug, Deserialize)]
struct IndexedImage {
    url: Option<String>,
}

/// Run an indexed token through the same defaulting rules as a fetched
/// metadata document, so both resolvers emit identically-shaped records.
fn token_from_node(node: IndexedToken, candidate: &Candidate, gateway_host: &str) -> Token {
    let metadata = RawTokenMetadata {
        name: node.name,
        description: node.description,
        image: node.image.and_then(|image| image.url),
    };
    Token::from_metadata(
        candidate.collection,
        candidate.token_id,
        Some(metadata),
        gateway_host,
    )
}

#[async_trait]
impl CandidateResolver for ZoraIndexResolver {
    async fn resolve(&self, candidate: &Candidate) -> Result<Token, Skip> {
        let variables = json!({
            "where": { "collectionAddresses": [candidate.collection.to_string()] },
            "pagination": { "limit": PAGE_LIMIT },
        });
        trace!("Querying token index at {} for {}", self.endpoint, candidate);

        let response = self
            .http
            .post(&self.endpoint)
            .json(&json!({ "query": TOKENS_QUERY, "variables": variables }))
            .send()
            .await
            .map_err(ResolveError::from)?;
        if !response.status().is_success() {
            return Err(Skip::Unresolved(ResolveError::GatewayStatus(
                response.status().as_u16(),
            )));
        }

        let body: IndexResponse = response.json().await.map_err(ResolveError::from)?;
        let nodes = body
            .data
            .and_then(|data| data.tokens)
            .ok_or_else(|| {
                ResolveError::MetadataMalformed("index response missing token data".to_string())
            })?
            .nodes;

        let wanted = candidate.token_id.to_string();
        nodes
            .into_iter()
            .find(|node| node.token.token_id == wanted)
            .map(|node| token_from_node(node.token, candidate, &self.gateway_host))
            .ok_or(Skip::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{address, U256};

    fn candidate() -> Candidate {
        Candidate::new(
            address!("0x1802c1d526a563471ed64a91045104dc7f1786fe"),
            U256::from(1),
        )
    }

    #[test]
    fn test_index_response_shape_parses() {
        let raw = r#"{
            "data": {
                "tokens": {
                    "nodes": [
                        {
                            "token": {
                                "collectionAddress": "0x1802c1d526a563471ed64a91045104dc7f1786fe",
                                "tokenId": "1",
                                "name": "Region 1",
                                "description": "Sentinel capture",
                                "image": { "url": "ipfs://QmImageHash" }
                            }
                        }
                    ]
                }
            }
        }"#;

        let parsed: IndexResponse = serde_json::from_str(raw).unwrap();
        let nodes = parsed.data.unwrap().tokens.unwrap().nodes;
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].token.token_id, "1");
    }

    #[test]
    fn test_token_from_node_applies_gateway_rewrite() {
        let node = IndexedToken {
            token_id: "1".to_string(),
            name: Some("Region 1".to_string()),
            description: None,
            image: Some(IndexedImage {
                url: Some("ipfs://QmImageHash".to_string()),
            }),
        };

        let token = token_from_node(node, &candidate(), "ipfs.io");
        assert_eq!(token.name, "Region 1");
        assert_eq!(token.description, "");
        assert_eq!(token.image.url, "https://ipfs.io/ipfs/QmImageHash");
    }

    #[test]
    fn test_token_from_node_defaults_missing_fields() {
        let node = IndexedToken {
            token_id: "3".to_string(),
            name: None,
            description: None,
            image: None,
        };

        let token = token_from_node(node, &candidate(), "ipfs.io");
        assert_eq!(token.name, "Token 1");
        assert_eq!(token.image.url, "");
    }
}
