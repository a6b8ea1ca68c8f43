use crate::config::ContentConfig;
use crate::errors::ResolveError;
use crate::models::RawTokenMetadata;
use log::trace;
use url::Url;

const IPFS_SCHEME: &str = "ipfs://";

/// Rewrite a content-addressed pointer into a fetchable HTTPS location.
/// Anything that is not `ipfs://` passes through unchanged.
pub fn rewrite_content_uri(uri: &str, gateway_host: &str) -> String {
    match uri.strip_prefix(IPFS_SCHEME) {
        Some(path) => format!("https://{}/ipfs/{}", gateway_host, path),
        None => uri.to_string(),
    }
}

/// Fetches metadata documents through a content gateway.
pub struct ContentClient {
    http: reqwest::Client,
    gateway_host: String,
}

impl ContentClient {
    pub fn new(config: &ContentConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            gateway_host: config.ipfs_gateway.clone(),
        }
    }

    pub fn gateway_host(&self) -> &str {
        &self.gateway_host
    }

    /// Resolve a metadata pointer to its JSON document. Network trouble,
    /// non-2xx answers and non-JSON bodies all surface as typed errors for
    /// the caller to skip on; nothing here aborts a resolution run.
    pub async fn fetch_metadata(&self, pointer: &str) -> Result<RawTokenMetadata, ResolveError> {
        let location = rewrite_content_uri(pointer, &self.gateway_host);
        let location = Url::parse(&location)
            .map_err(|e| ResolveError::InvalidContentLocation(format!("{}: {}", location, e)))?;

        trace!("Fetching metadata document from {}", location);
        let response = self.http.get(location).send().await?;
        if !response.status().is_success() {
            return Err(ResolveError::GatewayStatus(response.status().as_u16()));
        }

        let document = response.json::<RawTokenMetadata>().await?;
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrite_ipfs_pointer() {
        let rewritten = rewrite_content_uri("ipfs://QmMetadataHash/1.json", "ipfs.io");
        assert_eq!(rewritten, "https://ipfs.io/ipfs/QmMetadataHash/1.json");
        assert!(!rewritten.contains("ipfs://"));
    }

    #[test]
    fn test_rewrite_respects_configured_gateway() {
        let rewritten = rewrite_content_uri("ipfs://QmMetadataHash", "cloudflare-ipfs.com");
        assert!(rewritten.starts_with("https://cloudflare-ipfs.com/ipfs/"));
    }

    #[test]
    fn test_rewrite_passes_plain_https_through() {
        let uri = "https://example.com/metadata/1.json";
        assert_eq!(rewrite_content_uri(uri, "ipfs.io"), uri);
    }

    #[tokio::test]
    async fn test_fetch_rejects_unparseable_location() {
        let client = ContentClient::new(&ContentConfig {
            ipfs_gateway: "ipfs.io".to_string(),
        });
        let result = client.fetch_metadata("not a url at all").await;
        assert!(matches!(
            result,
            Err(ResolveError::InvalidContentLocation(_))
        ));
    }
}
