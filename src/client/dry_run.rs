use super::{ApprovalRequest, DeviceControlClient};
use crate::error::ClientError;
use std::future::Future;
use std::pin::Pin;
use tracing::info;

/// No-op client — logs the request, touches no device.
pub struct DryRunClient {
    udid: String,
}

impl DryRunClient {
    pub fn new(udid: impl Into<String>) -> Self {
        Self { udid: udid.into() }
    }
}

impl DeviceControlClient for DryRunClient {
    fn name(&self) -> &str {
        "dry-run"
    }

    fn approve<'a>(
        &'a self,
        request: &'a ApprovalRequest,
    ) -> Pin<Box<dyn Future<Output = Result<(), ClientError>> + Send + 'a>> {
        Box::pin(async move {
            info!(
                udid = %self.udid,
                bundle_id = %request.bundle_id,
                permissions = %request.permission_list(),
                scheme = request.scheme.as_deref().unwrap_or("-"),
                "dry-run: would approve permissions"
            );
            Ok(())
        })
    }
}
