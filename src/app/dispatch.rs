use crate::cli::{Cli, Commands};
use crate::client::{DeviceControlClient, create_client};
use crate::commands::{ApproveCommand, ClientCommand};
use crate::config::Config;
use crate::error::{CommandError, IdbError};
use std::error::Error as _;
use tracing::info;

/// Run one client command against `client`, logging which backend served it.
pub async fn run_client_command<C: ClientCommand>(
    command: &C,
    args: &C::Args,
    client: &dyn DeviceControlClient,
) -> Result<(), CommandError> {
    info!(command = command.name(), client = client.name(), "running command");
    command.run_with_client(args, client).await
}

/// Resolve the target, build the configured client and run the parsed command.
pub async fn dispatch(cli: Cli, config: &Config) -> Result<(), IdbError> {
    let udid = config.resolve_udid(cli.udid.as_deref());

    match cli.command {
        Commands::Approve(args) => {
            let client = create_client(&config.client, &udid)?;
            run_client_command(&ApproveCommand, &args, client.as_ref()).await?;
        }
    }
    Ok(())
}

/// One-line rendering of `err` with its source chain, `a: b: c` style.
///
/// thiserror messages here already embed their direct source, so a source
/// whose text is contained in its parent's is skipped.
pub fn render_error(err: &IdbError) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !rendered.contains(&text) {
            rendered.push_str(": ");
            rendered.push_str(&text);
        }
        source = cause.source();
    }
    rendered
}
