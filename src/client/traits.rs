use super::ApprovalRequest;
use crate::error::ClientError;
use std::future::Future;
use std::pin::Pin;

/// Device control client abstraction — whatever actually talks to the target.
///
/// Implementations own transport, device sessions and timeouts. Callers hand
/// over one [`ApprovalRequest`] and await the outcome; faults come back as
/// [`ClientError`] and are not retried.
pub trait DeviceControlClient: Send + Sync {
    /// Backend name (e.g. "simctl", "dry-run")
    fn name(&self) -> &str;

    /// Grant every permission in `request` to the app on the target.
    fn approve<'a>(
        &'a self,
        request: &'a ApprovalRequest,
    ) -> Pin<Box<dyn Future<Output = Result<(), ClientError>> + Send + 'a>>;
}
