use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::client::RpcClient;
use alloy::transports::http::reqwest::Url;
use alloy::transports::http::Http;
use alloy::transports::layers::FallbackLayer;
use anyhow::{anyhow, Result};
use std::num::NonZeroUsize;
use tower::ServiceBuilder;

/// Build a read-only provider over one or more HTTP transports. With several
/// endpoints the fallback layer routes each call to a healthy transport, so
/// a single dead RPC does not take the gallery down.
pub fn create_provider(rpcs: &[String]) -> Result<DynProvider> {
    let transport_count =
        NonZeroUsize::new(rpcs.len()).ok_or_else(|| anyhow!("No RPC endpoints configured"))?;
    let fallback_layer = FallbackLayer::default().with_active_transport_count(transport_count);

    let mut transports = Vec::with_capacity(rpcs.len());
    for rpc in rpcs {
        let url: Url = rpc
            .parse()
            .map_err(|e| anyhow!("Invalid RPC url {:?}: {}", rpc, e))?;
        transports.push(Http::new(url));
    }

    let transport = ServiceBuilder::new()
        .layer(fallback_layer)
        .service(transports);
    let client = RpcClient::builder().transport(transport, false);
    let provider = ProviderBuilder::new().connect_client(client);
    Ok(provider.erased())
}
