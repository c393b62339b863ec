use super::{ApprovalRequest, DeviceControlClient, Permission, process, tcc};
use crate::error::ClientError;
use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::time::Duration;
use tracing::info;

/// Preferences domain LaunchServices reads URL scheme approvals from.
const SCHEME_APPROVAL_DOMAIN: &str = "com.apple.launchservices.schemeapproval";
/// Key prefix for a scheme opened through the simulator bridge.
const SCHEME_APPROVAL_KEY_PREFIX: &str = "com.apple.CoreSimulator.CoreSimulatorBridge-->";

/// stderr fragments simctl prints when the target can't be resolved.
const DEVICE_MISSING_MARKERS: &[&str] = &["Invalid device", "No devices are booted"];

/// Simulator client driving `xcrun simctl`.
///
/// Photos and contacts go through `simctl privacy`. Camera has no simctl
/// service, so it is written straight into the simulator's TCC database.
/// URL schemes are approved by writing the LaunchServices preference inside
/// the simulator.
pub struct SimctlClient {
    udid: String,
    xcrun: String,
    timeout: Duration,
}

impl SimctlClient {
    pub fn new(udid: impl Into<String>, xcrun: impl Into<String>, timeout: Duration) -> Self {
        Self {
            udid: udid.into(),
            xcrun: xcrun.into(),
            timeout,
        }
    }

    async fn simctl(&self, args: &[&str]) -> Result<String, ClientError> {
        let mut full = Vec::with_capacity(args.len() + 1);
        full.push("simctl");
        full.extend_from_slice(args);
        process::run(&self.xcrun, &full, self.timeout)
            .await
            .map_err(|err| self.classify(err))
    }

    fn classify(&self, err: ClientError) -> ClientError {
        match err {
            ClientError::CommandFailed { ref stderr, .. }
                if DEVICE_MISSING_MARKERS.iter().any(|m| stderr.contains(m)) =>
            {
                ClientError::DeviceNotFound {
                    udid: self.udid.clone(),
                    reason: stderr.clone(),
                }
            }
            other => other,
        }
    }

    async fn grant_privacy(&self, service: &str, bundle_id: &str) -> Result<(), ClientError> {
        self.simctl(&["privacy", &self.udid, "grant", service, bundle_id])
            .await
            .map(|_| ())
    }

    /// The simulator's data directory (its `HOME` from the device's point of view).
    async fn data_dir(&self) -> Result<PathBuf, ClientError> {
        let home = self.simctl(&["getenv", &self.udid, "HOME"]).await?;
        let home = home.trim();
        if home.is_empty() {
            return Err(ClientError::DeviceNotFound {
                udid: self.udid.clone(),
                reason: "simctl reported no HOME for the device".to_string(),
            });
        }
        Ok(PathBuf::from(home))
    }

    async fn grant_camera(&self, bundle_id: &str) -> Result<(), ClientError> {
        let db = tcc::database_path(&self.data_dir().await?);
        tcc::grant(&db, tcc::CAMERA_SERVICE, bundle_id).await
    }

    async fn approve_scheme(&self, scheme: &str, bundle_id: &str) -> Result<(), ClientError> {
        let key = format!("{SCHEME_APPROVAL_KEY_PREFIX}{scheme}");
        self.simctl(&[
            "spawn",
            &self.udid,
            "defaults",
            "write",
            SCHEME_APPROVAL_DOMAIN,
            &key,
            "-string",
            bundle_id,
        ])
        .await
        .map(|_| ())
    }

    async fn grant(
        &self,
        permission: Permission,
        request: &ApprovalRequest,
    ) -> Result<(), ClientError> {
        let bundle_id = request.bundle_id.as_str();
        match permission {
            Permission::Photos => self.grant_privacy("photos", bundle_id).await,
            Permission::Contacts => self.grant_privacy("contacts", bundle_id).await,
            Permission::Camera => self.grant_camera(bundle_id).await,
            Permission::Url => {
                let scheme = request
                    .scheme
                    .as_deref()
                    .filter(|s| !s.is_empty())
                    .ok_or_else(|| {
                        ClientError::InvalidRequest("url permission requires a scheme".into())
                    })?;
                self.approve_scheme(scheme, bundle_id).await
            }
        }
    }
}

impl DeviceControlClient for SimctlClient {
    fn name(&self) -> &str {
        "simctl"
    }

    fn approve<'a>(
        &'a self,
        request: &'a ApprovalRequest,
    ) -> Pin<Box<dyn Future<Output = Result<(), ClientError>> + Send + 'a>> {
        Box::pin(async move {
            for &permission in &request.permissions {
                self.grant(permission, request).await?;
                info!(
                    udid = %self.udid,
                    bundle_id = %request.bundle_id,
                    %permission,
                    "permission granted"
                );
            }
            Ok(())
        })
    }
}
