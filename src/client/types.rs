use clap::ValueEnum;
use std::collections::BTreeSet;
use strum::{AsRefStr, Display};

/// OS-mediated capability an app can be granted on the target.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    ValueEnum,
    Display,
    AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Permission {
    Photos,
    Camera,
    Contacts,
    Url,
}

/// A single permission grant handed to a [`DeviceControlClient`](super::DeviceControlClient).
///
/// Lives for one command invocation. The permission set carries exactly the
/// tokens given on the command line; repeats collapse, nothing is added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApprovalRequest {
    pub bundle_id: String,
    pub permissions: BTreeSet<Permission>,
    pub scheme: Option<String>,
}

impl ApprovalRequest {
    pub fn new(
        bundle_id: impl Into<String>,
        permissions: impl IntoIterator<Item = Permission>,
        scheme: Option<String>,
    ) -> Self {
        Self {
            bundle_id: bundle_id.into(),
            permissions: permissions.into_iter().collect(),
            scheme,
        }
    }

    pub fn includes(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }

    /// Comma-joined permission list for log lines, e.g. `camera,url`.
    pub fn permission_list(&self) -> String {
        self.permissions
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<&str>>()
            .join(",")
    }
}
