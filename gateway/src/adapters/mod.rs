//! RPC adapters
//!
//! One stateless façade per backend domain. Adapters attach the caller's
//! outbound metadata where an operation is identity-sensitive, issue the
//! call over the shared channel, and normalize backend errors. No retries
//! happen here; retry policy belongs outside this layer.

mod inventory;
mod orders;
mod products;

pub use inventory::InventoryAdapter;
pub use orders::OrdersAdapter;
pub use products::ProductsAdapter;

use tonic::{Code, Response, Status};
use tracing::warn;

use crate::error::GatewayError;

/// Unwrap a backend response, classifying errors.
///
/// `Unavailable`/`DeadlineExceeded` become the distinct service-unavailable
/// condition; everything else is re-raised with its original status intact.
pub(crate) fn backend_result<T>(
    result: Result<Response<T>, Status>,
) -> Result<T, GatewayError> {
    result
        .map(Response::into_inner)
        .map_err(GatewayError::from)
}

/// Unwrap a backend response, degrading `Unimplemented` to a default value.
///
/// Lets the gateway stay up while a backend is a stub or mid-rollout: the
/// caller sees an empty success-shaped result instead of an error.
pub(crate) fn soft_unimplemented<T: Default>(
    result: Result<Response<T>, Status>,
    target: &str,
) -> Result<T, GatewayError> {
    match result {
        Err(status) if status.code() == Code::Unimplemented => {
            warn!(target_service = target, "operation not implemented on backend, returning default response");
            Ok(T::default())
        }
        other => backend_result(other),
    }
}
