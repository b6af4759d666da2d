//! Typed async client for the Waves node REST API.
//!
//! Covers the read-only blocks and leasing endpoints. Each endpoint is one
//! function that builds the URL, issues a single GET through a [`Transport`]
//! and decodes the JSON body into the matching record from [`types`].
//! Nothing is cached or retried, and errors reach the caller as the transport
//! raised them.
//!
//! # Features
//!
//! - **`types`, `blocks`, `leasing`**: Wire records and endpoint functions.
//!   Available with no additional features.
//! - **`client`** (enabled by default): [`HttpTransport`] built on `reqwest`
//!   and the [`NodeClient`] wrapper.
//!
//! # Quick start
//!
//! ```no_run
//! use waves_node_api::{NodeClient, RequestOptions};
//!
//! #[tokio::main]
//! async fn main() -> waves_node_api::Result<()> {
//!     let client = NodeClient::mainnet();
//!     let header = client.fetch_headers_last(&RequestOptions::default()).await?;
//!     println!("Block {} by {}", header.height, header.generator);
//!     Ok(())
//! }
//! ```
//!
//! The endpoint functions can also be called directly with any transport:
//!
//! ```no_run
//! use waves_node_api::{HttpTransport, RequestOptions, blocks};
//!
//! # async fn run() -> waves_node_api::Result<()> {
//! let transport = HttpTransport::new();
//! let blocks = blocks::fetch_seq(
//!     &transport,
//!     "https://nodes.wavesnodes.com",
//!     10,
//!     20,
//!     &RequestOptions::default(),
//! )
//! .await?;
//! # let _ = blocks;
//! # Ok(())
//! # }
//! ```

pub mod blocks;
mod error;
pub mod leasing;
mod network;
mod transport;
pub mod types;

pub use error::{Error, NodeError, Result};
pub use network::{Network, UnknownNetwork};
pub use transport::{LARGE_SIGNIFICAND_ACCEPT, RequestOptions, Transport};

#[cfg(feature = "client")]
pub use transport::{DEFAULT_TIMEOUT_SECS, HttpConfig, HttpTransport};

#[cfg(feature = "client")]
pub mod client;

#[cfg(feature = "client")]
pub use client::NodeClient;

pub use types::*;
