#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate
)]

//! `idbctl` — grant app permissions on iOS simulators.
//!
//! The `approve` command validates its arguments and hands a single
//! [`client::ApprovalRequest`] to a [`client::DeviceControlClient`].

pub mod app;
pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod ui;

pub use config::Config;
pub use error::IdbError;
