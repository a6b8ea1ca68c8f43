use alloy::transports::RpcError;
use thiserror::Error;

/// Failure taxonomy of the resolution pipeline.
///
/// None of these are fatal to a resolution run: every variant is handled
/// locally by skipping the candidate it occurred on, and a run that loses
/// every candidate substitutes the placeholder dataset instead of erroring.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("chain call reverted: {0}")]
    ChainCallReverted(String),

    #[error("chain rpc unavailable: {0}")]
    ChainUnavailable(String),

    #[error("malformed call return: {0}")]
    MalformedReturn(String),

    #[error("content gateway unreachable: {0}")]
    ContentUnavailable(String),

    #[error("content gateway returned status {0}")]
    GatewayStatus(u16),

    #[error("metadata document malformed: {0}")]
    MetadataMalformed(String),

    #[error("invalid content location: {0}")]
    InvalidContentLocation(String),
}

impl From<alloy::contract::Error> for ResolveError {
    fn from(error: alloy::contract::Error) -> Self {
        match error {
            // An error response from the node is the contract itself refusing
            // the call: unknown function or nonexistent token.
            alloy::contract::Error::TransportError(RpcError::ErrorResp(payload)) => {
                ResolveError::ChainCallReverted(payload.message.to_string())
            }
            alloy::contract::Error::TransportError(transport) => {
                ResolveError::ChainUnavailable(transport.to_string())
            }
            other => ResolveError::MalformedReturn(other.to_string()),
        }
    }
}

impl From<reqwest::Error> for ResolveError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            ResolveError::MetadataMalformed(error.to_string())
        } else {
            ResolveError::ContentUnavailable(error.to_string())
        }
    }
}
