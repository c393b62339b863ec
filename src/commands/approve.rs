use super::ClientCommand;
use crate::client::{ApprovalRequest, DeviceControlClient, Permission};
use crate::error::CommandError;
use clap::Args;
use clap::builder::NonEmptyStringValueParser;
use std::future::Future;
use std::pin::Pin;
use tracing::debug;

pub const NAME: &str = "approve";
pub const DESCRIPTION: &str = "Approve permissions for an app";

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ApproveArgs {
    /// App's bundle id
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub bundle_id: String,

    /// Permissions to approve
    #[arg(value_enum, required = true, num_args = 1..)]
    pub permissions: Vec<Permission>,

    /// Url scheme registered by the app to approve
    #[arg(long)]
    pub scheme: Option<String>,
}

impl ApproveArgs {
    /// Build the request, refusing `url` without a usable scheme.
    pub fn to_request(&self) -> Result<ApprovalRequest, CommandError> {
        let request = ApprovalRequest::new(
            self.bundle_id.clone(),
            self.permissions.iter().copied(),
            self.scheme.clone(),
        );
        let has_scheme = request.scheme.as_deref().is_some_and(|s| !s.is_empty());
        if request.includes(Permission::Url) && !has_scheme {
            return Err(CommandError::MissingScheme);
        }
        Ok(request)
    }
}

/// `approve <bundle_id> <permission>... [--scheme <scheme>]`
pub struct ApproveCommand;

impl ClientCommand for ApproveCommand {
    type Args = ApproveArgs;

    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        DESCRIPTION
    }

    fn run_with_client<'a>(
        &'a self,
        args: &'a ApproveArgs,
        client: &'a dyn DeviceControlClient,
    ) -> Pin<Box<dyn Future<Output = Result<(), CommandError>> + Send + 'a>> {
        Box::pin(async move {
            let request = args.to_request()?;
            debug!(
                client = client.name(),
                bundle_id = %request.bundle_id,
                permissions = %request.permission_list(),
                scheme = request.scheme.as_deref().unwrap_or("-"),
                "dispatching approval"
            );
            client.approve(&request).await?;
            Ok(())
        })
    }
}
