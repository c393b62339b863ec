pub mod approve;

pub use approve::{ApproveArgs, ApproveCommand};

use crate::client::DeviceControlClient;
use crate::error::CommandError;
use std::future::Future;
use std::pin::Pin;

/// A subcommand that runs against an already-constructed device client.
///
/// The surrounding app resolves the target, builds the client and hands it
/// over together with the parsed arguments.
pub trait ClientCommand: Send + Sync {
    type Args: Sync;

    /// Name used for dispatch and help listings.
    fn name(&self) -> &'static str;

    /// One-line help text.
    fn description(&self) -> &'static str;

    fn run_with_client<'a>(
        &'a self,
        args: &'a Self::Args,
        client: &'a dyn DeviceControlClient,
    ) -> Pin<Box<dyn Future<Output = Result<(), CommandError>> + Send + 'a>>;
}
