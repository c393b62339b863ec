use super::recording_client::RecordingClient;
use clap::Parser;
use idbctl::app::run_client_command;
use idbctl::cli::{Cli, Commands};
use idbctl::client::{ApprovalRequest, Permission};
use idbctl::commands::{ApproveArgs, ApproveCommand};
use idbctl::error::{ClientError, CommandError, IdbError};
use std::collections::BTreeSet;

fn parse_approve(argv: &[&str]) -> ApproveArgs {
    let cli = Cli::try_parse_from(std::iter::once("idbctl").chain(argv.iter().copied()))
        .expect("arguments should parse");
    match cli.command {
        Commands::Approve(args) => args,
    }
}

async fn run(argv: &[&str], client: &RecordingClient) -> Result<(), CommandError> {
    run_client_command(&ApproveCommand, &parse_approve(argv), client).await
}

#[tokio::test]
async fn camera_without_scheme_dispatches_once() {
    let client = RecordingClient::default();

    run(&["approve", "com.example.app", "camera"], &client)
        .await
        .unwrap();

    assert_eq!(
        client.calls(),
        vec![ApprovalRequest::new(
            "com.example.app",
            [Permission::Camera],
            None
        )]
    );
}

#[tokio::test]
async fn url_without_scheme_exits_one_and_skips_client() {
    let client = RecordingClient::default();

    let err = run(&["approve", "com.example.app", "url"], &client)
        .await
        .unwrap_err();

    assert!(matches!(err, CommandError::MissingScheme));
    assert_eq!(IdbError::from(err).exit_code(), 1);
    assert!(client.calls().is_empty());
}

#[tokio::test]
async fn url_and_photos_with_scheme_dispatches_exact_scheme() {
    let client = RecordingClient::default();

    run(
        &["approve", "com.example.app", "url", "photos", "--scheme", "myapp"],
        &client,
    )
    .await
    .unwrap();

    assert_eq!(
        client.calls(),
        vec![ApprovalRequest::new(
            "com.example.app",
            [Permission::Url, Permission::Photos],
            Some("myapp".into())
        )]
    );
}

#[tokio::test]
async fn client_fault_propagates_with_its_own_exit_code() {
    let client = RecordingClient::failing_with("device not found");

    let err = run(&["approve", "com.example.app", "contacts"], &client)
        .await
        .unwrap_err();

    match &err {
        CommandError::Client(ClientError::DeviceNotFound { reason, .. }) => {
            assert_eq!(reason, "device not found");
        }
        other => panic!("expected client fault, got {other}"),
    }
    let code = IdbError::from(err).exit_code();
    assert_ne!(code, 0);
    assert_ne!(code, 1);
}

#[tokio::test]
async fn non_url_permissions_pass_scheme_through() {
    for scheme in [None, Some("anything")] {
        let client = RecordingClient::default();
        let mut argv = vec!["approve", "com.example.app", "photos", "contacts"];
        if let Some(s) = scheme {
            argv.extend(["--scheme", s]);
        }

        run(&argv, &client).await.unwrap();

        let calls = client.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].scheme.as_deref(), scheme);
    }
}

#[tokio::test]
async fn permission_set_ignores_order_and_duplicates() {
    let orders: [&[&str]; 3] = [
        &["camera", "photos", "url"],
        &["url", "camera", "photos"],
        &["photos", "url", "photos", "camera", "url"],
    ];
    let expected: BTreeSet<Permission> = [Permission::Camera, Permission::Photos, Permission::Url]
        .into_iter()
        .collect();

    for tokens in orders {
        let client = RecordingClient::default();
        let mut argv = vec!["approve", "com.example.app"];
        argv.extend_from_slice(tokens);
        argv.extend(["--scheme", "myapp"]);

        run(&argv, &client).await.unwrap();

        assert_eq!(client.calls()[0].permissions, expected, "tokens: {tokens:?}");
    }
}
