use crate::chain::contracts::{IERC1155MetadataURI, IERC721Metadata};
use crate::content::ContentClient;
use crate::errors::ResolveError;
use crate::models::{Candidate, Token};
use crate::resolvers::{CandidateResolver, Skip};
use alloy::providers::DynProvider;
use async_trait::async_trait;
use log::{debug, trace};
use std::sync::Arc;

/// Canonical resolver: read the metadata pointer straight off the contract,
/// fetch the document through the content gateway, normalize.
pub struct OnchainResolver {
    provider: Arc<DynProvider>,
    content: ContentClient,
}

impl OnchainResolver {
    pub fn new(provider: Arc<DynProvider>, content: ContentClient) -> Self {
        Self { provider, content }
    }

    /// Ordered strategy chain for the metadata pointer: the multi-token
    /// standard's `uri()` first, then the single-token standard's
    /// `tokenURI()`. First non-empty success wins. Both failing is the
    /// expected outcome for a token that does not exist.
    async fn resolve_token_uri(&self, candidate: &Candidate) -> Result<String, Skip> {
        let erc1155 = IERC1155MetadataURI::new(candidate.collection, &self.provider);
        match erc1155.uri(candidate.token_id).call().await {
            Ok(pointer) if !pointer.is_empty() => return Ok(pointer),
            Ok(_) => debug!("uri() returned an empty pointer for {}", candidate),
            Err(e) => debug!(
                "uri() probe failed for {}: {}",
                candidate,
                ResolveError::from(e)
            ),
        }

        let erc721 = IERC721Metadata::new(candidate.collection, &self.provider);
        match erc721.tokenURI(candidate.token_id).call().await {
            Ok(pointer) if !pointer.is_empty() => Ok(pointer),
            Ok(_) => {
                debug!("tokenURI() returned an empty pointer for {}", candidate);
                Err(Skip::NotFound)
            }
            Err(e) => match ResolveError::from(e) {
                // The node being unreachable says nothing about the token;
                // keep that distinct from an ordinary missing-token revert.
                err @ ResolveError::ChainUnavailable(_) => Err(Skip::Unresolved(err)),
                err => {
                    debug!("tokenURI() probe failed for {}: {}", candidate, err);
                    Err(Skip::NotFound)
                }
            },
        }
    }
}

#[async_trait]
impl CandidateResolver for OnchainResolver {
    async fn resolve(&self, candidate: &Candidate) -> Result<Token, Skip> {
        let pointer = self.resolve_token_uri(candidate).await?;
        trace!("Metadata pointer for {}: {}", candidate, pointer);

        let document = self.content.fetch_metadata(&pointer).await?;
        Ok(Token::from_metadata(
            candidate.collection,
            candidate.token_id,
            Some(document),
            self.content.gateway_host(),
        ))
    }
}
