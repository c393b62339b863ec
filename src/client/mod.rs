mod dry_run;
mod factory;
mod process;
mod simctl;
mod tcc;
mod traits;
mod types;

pub use dry_run::DryRunClient;
pub use factory::create_client;
pub use simctl::SimctlClient;
pub use traits::DeviceControlClient;
pub use types::{ApprovalRequest, Permission};
