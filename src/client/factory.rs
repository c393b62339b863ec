use super::{DeviceControlClient, DryRunClient, SimctlClient};
use crate::config::ClientConfig;
use crate::error::ConfigError;
use std::time::Duration;

/// Create the device control client named by `config.backend` for `udid`.
pub fn create_client(
    config: &ClientConfig,
    udid: &str,
) -> Result<Box<dyn DeviceControlClient>, ConfigError> {
    match config.backend.as_str() {
        "simctl" | "" => Ok(Box::new(SimctlClient::new(
            udid,
            config.xcrun_path.clone(),
            Duration::from_secs(config.command_timeout_secs),
        ))),

        "dry-run" | "none" => Ok(Box::new(DryRunClient::new(udid))),

        other => Err(ConfigError::UnknownBackend(other.to_string())),
    }
}
