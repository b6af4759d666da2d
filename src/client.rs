//! Async client for the Waves node REST API.

use crate::error::Result;
use crate::network::Network;
use crate::transport::{HttpConfig, HttpTransport, RequestOptions, Transport};
use crate::types::*;
use crate::{blocks, leasing};

/// Async client bound to one node.
///
/// Holds the base URL and a transport and nothing else; every method is one
/// GET through the matching function in [`blocks`] or [`leasing`].
///
/// # Example
///
/// ```no_run
/// use waves_node_api::{NodeClient, RequestOptions};
///
/// #[tokio::main]
/// async fn main() -> waves_node_api::Result<()> {
///     let client = NodeClient::mainnet();
///     let height = client.fetch_height(&RequestOptions::default()).await?;
///     println!("Height: {}", height.height);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct NodeClient<T = HttpTransport> {
    transport: T,
    base_url: String,
}

impl NodeClient {
    /// Create a new client with a custom URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_transport(base_url, HttpTransport::new())
    }

    /// Create a client whose `reqwest::Client` is built from `config`.
    pub fn with_config(base_url: impl Into<String>, config: HttpConfig) -> Result<Self> {
        Ok(Self::with_transport(base_url, HttpTransport::with_config(config)?))
    }

    pub fn for_network(network: Network) -> Self {
        Self::new(network.node_url())
    }

    /// Create a client for Waves Mainnet.
    pub fn mainnet() -> Self {
        Self::for_network(Network::Mainnet)
    }

    /// Create a client for Waves Testnet.
    pub fn testnet() -> Self {
        Self::for_network(Network::Testnet)
    }

    /// Create a client for Waves Stagenet.
    pub fn stagenet() -> Self {
        Self::for_network(Network::Stagenet)
    }

    /// Create a client for local development (localhost:6869).
    pub fn local() -> Self {
        Self::for_network(Network::Local)
    }
}

impl<T: Transport> NodeClient<T> {
    pub fn with_transport(base_url: impl Into<String>, transport: T) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    // ── Block headers ────────────────────────────────────────────

    /// Headers of the blocks between two heights, inclusive.
    pub async fn fetch_headers_seq(
        &self,
        from: u32,
        to: u32,
        options: &RequestOptions,
    ) -> Result<Vec<BlockHeader>> {
        blocks::fetch_headers_seq(&self.transport, &self.base_url, from, to, options).await
    }

    /// Header of the last block.
    pub async fn fetch_headers_last(&self, options: &RequestOptions) -> Result<BlockHeader> {
        blocks::fetch_headers_last(&self.transport, &self.base_url, options).await
    }

    /// Header of the block at `height`.
    pub async fn fetch_headers_at(
        &self,
        height: u32,
        options: &RequestOptions,
    ) -> Result<BlockHeader> {
        blocks::fetch_headers_at(&self.transport, &self.base_url, height, options).await
    }

    // ── Blocks ───────────────────────────────────────────────────

    /// Block at `height`.
    pub async fn block_at(&self, height: u32, options: &RequestOptions) -> Result<Block> {
        blocks::block_at(&self.transport, &self.base_url, height, options).await
    }

    /// Blocks between two heights, inclusive.
    pub async fn fetch_seq(
        &self,
        from: u32,
        to: u32,
        options: &RequestOptions,
    ) -> Result<Vec<Block>> {
        blocks::fetch_seq(&self.transport, &self.base_url, from, to, options).await
    }

    /// Block with the given signature.
    pub async fn fetch_block_by_signature(
        &self,
        signature: &str,
        options: &RequestOptions,
    ) -> Result<Block> {
        blocks::fetch_block_by_signature(&self.transport, &self.base_url, signature, options).await
    }

    /// Genesis block.
    pub async fn fetch_first(&self, options: &RequestOptions) -> Result<Block> {
        blocks::fetch_first(&self.transport, &self.base_url, options).await
    }

    /// Blocks generated by `address` between two heights.
    pub async fn fetch_blocks_by_address(
        &self,
        address: &str,
        from: u32,
        to: u32,
        options: &RequestOptions,
    ) -> Result<Vec<Block>> {
        blocks::fetch_blocks_by_address(&self.transport, &self.base_url, address, from, to, options)
            .await
    }

    /// Last block.
    pub async fn fetch_last(&self, options: &RequestOptions) -> Result<Block> {
        blocks::fetch_last(&self.transport, &self.base_url, options).await
    }

    // ── Chain ────────────────────────────────────────────────────

    /// Height of the block with the given id.
    pub async fn fetch_height_by_id(&self, id: &str, options: &RequestOptions) -> Result<Height> {
        blocks::fetch_height_by_id(&self.transport, &self.base_url, id, options).await
    }

    /// Average delay in milliseconds between the last `block_num` blocks
    /// starting from block `id`.
    pub async fn fetch_delay(
        &self,
        id: &str,
        block_num: &str,
        options: &RequestOptions,
    ) -> Result<Delay> {
        blocks::fetch_delay(&self.transport, &self.base_url, id, block_num, options).await
    }

    /// Current chain height.
    pub async fn fetch_height(&self, options: &RequestOptions) -> Result<Height> {
        blocks::fetch_height(&self.transport, &self.base_url, options).await
    }

    // ── Leasing ──────────────────────────────────────────────────

    /// Active leases of `address`.
    pub async fn fetch_active_leases(
        &self,
        address: &str,
        options: &RequestOptions,
    ) -> Result<Vec<LeaseRecord>> {
        leasing::fetch_active(&self.transport, &self.base_url, address, options).await
    }
}
