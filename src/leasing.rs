//! `/leasing/*` endpoints.

use crate::error::Result;
use crate::transport::{RequestOptions, Transport, fetch_json};
use crate::types::LeaseRecord;

/// GET `/leasing/active/{address}`: leases currently active for `address`.
pub async fn fetch_active<T: Transport>(
    transport: &T,
    base: &str,
    address: &str,
    options: &RequestOptions,
) -> Result<Vec<LeaseRecord>> {
    fetch_json(transport, base, &format!("/leasing/active/{address}"), options).await
}
