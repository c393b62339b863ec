pub mod dispatch;
pub mod logging;

pub use dispatch::{dispatch, render_error, run_client_command};
pub use logging::init_logging;
