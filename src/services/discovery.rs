use crate::chain::{create_provider, Network};
use crate::config::Config;
use crate::content::ContentClient;
use crate::models::{Candidate, Token};
use crate::resolvers::{CandidateResolver, OnchainResolver, Skip};
use crate::services::fallback::placeholder_tokens;
use alloy::primitives::{Address, U256};
use anyhow::Result;
use futures::stream::{self, StreamExt};
use log::{debug, info, warn};
use std::sync::Arc;

/// Bound on in-flight candidates; results stay in input order regardless.
const RESOLVE_CONCURRENCY: usize = 4;

/// Candidate enumeration policy for a resolution run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanPolicy {
    /// Probe token id 1 on every configured collection
    SingleToken,
    /// Scan ids 1..=n per collection, stopping the scan at the first missing
    /// id since ids are assigned contiguously from 1
    FixedRange(u64),
}

impl ScanPolicy {
    pub fn from_range(range: u64) -> Self {
        match range {
            0 => ScanPolicy::SingleToken,
            n => ScanPolicy::FixedRange(n),
        }
    }
}

/// Drives the full pipeline: address set -> metadata pointer -> document ->
/// canonical token, with the placeholder dataset as the terminal fallback.
///
/// `resolve_tokens` is infallible by contract. Candidates fail individually
/// and get skipped; a run where every candidate fails resolves to the
/// placeholder dataset, never to an error.
pub struct TokenDiscovery {
    config: Config,
    resolver: Box<dyn CandidateResolver>,
}

impl TokenDiscovery {
    pub fn new(config: Config, resolver: Box<dyn CandidateResolver>) -> Self {
        Self { config, resolver }
    }

    /// Wire up the canonical on-chain resolver from configuration.
    pub fn from_config(config: Config) -> Result<Self> {
        let network = Network::from_name(&config.network.name);
        let rpc_urls = if config.network.rpc_urls.is_empty() {
            network.default_rpc_urls()
        } else {
            config.network.rpc_urls.clone()
        };
        let provider = Arc::new(create_provider(&rpc_urls)?);
        let content = ContentClient::new(&config.content);
        let resolver = OnchainResolver::new(provider, content);
        Ok(Self::new(config, Box::new(resolver)))
    }

    pub async fn resolve_tokens(&self) -> Vec<Token> {
        let limit = self.config.gallery.result_limit;

        if self.config.gallery.mock_mode {
            info!("Mock mode enabled, serving the placeholder dataset");
            return placeholder_tokens(limit);
        }

        let addresses = self.config.collection_addresses();
        if addresses.is_empty() {
            info!("No valid collection addresses configured, serving the placeholder dataset");
            return placeholder_tokens(limit);
        }

        let mut tokens = match ScanPolicy::from_range(self.config.gallery.scan_range) {
            ScanPolicy::SingleToken => self.resolve_single_token(&addresses).await,
            ScanPolicy::FixedRange(range) => self.resolve_fixed_range(&addresses, range).await,
        };

        // Newest-first: the most recently processed candidate leads.
        tokens.reverse();
        tokens.truncate(limit);

        if tokens.is_empty() {
            info!("Live resolution produced no tokens, serving the placeholder dataset");
            return placeholder_tokens(limit);
        }

        info!("Resolved {} live tokens", tokens.len());
        tokens
    }

    /// Probe token id 1 on every collection, a bounded number in flight at
    /// once. `buffered` yields in input order, which keeps the final
    /// ordering deterministic under concurrency.
    async fn resolve_single_token(&self, addresses: &[Address]) -> Vec<Token> {
        stream::iter(addresses.iter().copied())
            .map(|collection| {
                let candidate = Candidate::new(collection, U256::ONE);
                async move {
                    match self.resolver.resolve(&candidate).await {
                        Ok(token) => Some(token),
                        Err(skip) => {
                            log_skip(&candidate, &skip);
                            None
                        }
                    }
                }
            })
            .buffered(RESOLVE_CONCURRENCY)
            .filter_map(|token| async move { token })
            .collect::<Vec<_>>()
            .await
    }

    /// Scan ids 1..=range per collection. Sequential on purpose: the scan
    /// ends at the first missing id, and that decision depends on the
    /// previous candidate's outcome. A transport-level skip says nothing
    /// about id assignment and does not end the scan.
    async fn resolve_fixed_range(&self, addresses: &[Address], range: u64) -> Vec<Token> {
        let mut tokens = Vec::new();
        for collection in addresses {
            for id in 1..=range {
                let candidate = Candidate::new(*collection, U256::from(id));
                match self.resolver.resolve(&candidate).await {
                    Ok(token) => tokens.push(token),
                    Err(Skip::NotFound) => {
                        debug!("No token at {}, ending the scan for this collection", candidate);
                        break;
                    }
                    Err(skip) => log_skip(&candidate, &skip),
                }
            }
        }
        tokens
    }
}

fn log_skip(candidate: &Candidate, skip: &Skip) {
    match skip {
        Skip::NotFound => debug!("Skipping {}: {}", candidate, skip),
        Skip::Unresolved(err) => warn!("Skipping {}: {}", candidate, err),
    }
}
