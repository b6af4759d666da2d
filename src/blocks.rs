//! `/blocks/*` endpoints.
//!
//! Every function issues exactly one GET against `base` and decodes the body.
//! Path parameters are substituted as given, without percent-encoding.

use crate::error::Result;
use crate::transport::{RequestOptions, Transport, fetch_json};
use crate::types::{Block, BlockHeader, Delay, Height};

/// GET `/blocks/headers/seq/{from}/{to}`: headers of the blocks in `from..=to`.
pub async fn fetch_headers_seq<T: Transport>(
    transport: &T,
    base: &str,
    from: u32,
    to: u32,
    options: &RequestOptions,
) -> Result<Vec<BlockHeader>> {
    fetch_json(transport, base, &format!("/blocks/headers/seq/{from}/{to}"), options).await
}

/// GET `/blocks/headers/last`
pub async fn fetch_headers_last<T: Transport>(
    transport: &T,
    base: &str,
    options: &RequestOptions,
) -> Result<BlockHeader> {
    fetch_json(transport, base, "/blocks/headers/last", options).await
}

/// GET `/blocks/height/{id}`: height of the block with the given id.
pub async fn fetch_height_by_id<T: Transport>(
    transport: &T,
    base: &str,
    id: &str,
    options: &RequestOptions,
) -> Result<Height> {
    fetch_json(transport, base, &format!("/blocks/height/{id}"), options).await
}

/// GET `/blocks/headers/at/{height}`
pub async fn fetch_headers_at<T: Transport>(
    transport: &T,
    base: &str,
    height: u32,
    options: &RequestOptions,
) -> Result<BlockHeader> {
    fetch_json(transport, base, &format!("/blocks/headers/at/{height}"), options).await
}

/// GET `/blocks/at/{height}`
pub async fn block_at<T: Transport>(
    transport: &T,
    base: &str,
    height: u32,
    options: &RequestOptions,
) -> Result<Block> {
    fetch_json(transport, base, &format!("/blocks/at/{height}"), options).await
}

/// GET `/blocks/seq/{from}/{to}`: full blocks in `from..=to`.
pub async fn fetch_seq<T: Transport>(
    transport: &T,
    base: &str,
    from: u32,
    to: u32,
    options: &RequestOptions,
) -> Result<Vec<Block>> {
    fetch_json(transport, base, &format!("/blocks/seq/{from}/{to}"), options).await
}

/// GET `/blocks/signature/{signature}`
pub async fn fetch_block_by_signature<T: Transport>(
    transport: &T,
    base: &str,
    signature: &str,
    options: &RequestOptions,
) -> Result<Block> {
    fetch_json(transport, base, &format!("/blocks/signature/{signature}"), options).await
}

/// GET `/blocks/first`: the genesis block.
pub async fn fetch_first<T: Transport>(
    transport: &T,
    base: &str,
    options: &RequestOptions,
) -> Result<Block> {
    fetch_json(transport, base, "/blocks/first", options).await
}

/// GET `/blocks/address/{address}/{from}/{to}`: blocks forged by `address`
/// between the two heights.
pub async fn fetch_blocks_by_address<T: Transport>(
    transport: &T,
    base: &str,
    address: &str,
    from: u32,
    to: u32,
    options: &RequestOptions,
) -> Result<Vec<Block>> {
    fetch_json(
        transport,
        base,
        &format!("/blocks/address/{address}/{from}/{to}"),
        options,
    )
    .await
}

/// GET `/blocks/last`
pub async fn fetch_last<T: Transport>(
    transport: &T,
    base: &str,
    options: &RequestOptions,
) -> Result<Block> {
    fetch_json(transport, base, "/blocks/last", options).await
}

/// GET `/blocks/delay/{id}/{blockNum}`: average delay in milliseconds over
/// the last `block_num` blocks, starting from block `id`.
pub async fn fetch_delay<T: Transport>(
    transport: &T,
    base: &str,
    id: &str,
    block_num: &str,
    options: &RequestOptions,
) -> Result<Delay> {
    fetch_json(transport, base, &format!("/blocks/delay/{id}/{block_num}"), options).await
}

/// GET `/blocks/height`: current chain height.
pub async fn fetch_height<T: Transport>(
    transport: &T,
    base: &str,
    options: &RequestOptions,
) -> Result<Height> {
    fetch_json(transport, base, "/blocks/height", options).await
}
