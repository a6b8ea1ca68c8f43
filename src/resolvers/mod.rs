pub mod onchain;
pub mod zora_index;

pub use onchain::*;
pub use zora_index::*;

use crate::errors::ResolveError;
use crate::models::{Candidate, Token};
use async_trait::async_trait;
use thiserror::Error;

/// Non-fatal outcome for a candidate that produced no token.
#[derive(Debug, Error)]
pub enum Skip {
    /// Expected absence: the token does not exist on this contract
    #[error("token not found")]
    NotFound,
    /// Diagnostic-worthy failure somewhere between chain and gateway
    #[error("{0}")]
    Unresolved(#[from] ResolveError),
}

/// A strategy for turning one candidate into a canonical token.
///
/// Implementations must treat every failure as local to the candidate: a
/// `Skip` tells the orchestrator to move on, never to abort the run.
#[async_trait]
pub trait CandidateResolver: Send + Sync {
    async fn resolve(&self, candidate: &Candidate) -> Result<Token, Skip>;
}
