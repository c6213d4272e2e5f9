use crate::{err, error::ErrorTree, validate::ValidateNode};
use derive_more::Display;
use serde::Serialize;
use std::collections::BTreeSet;

///
/// Action
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq, Serialize)]
#[remain::sorted]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Delete,
    Read,
    Write,
}

///
/// Permissions
///
/// Role lists per action. Authorization metadata only: validation never
/// consults it, the surrounding application does.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Permissions {
    pub read: Vec<String>,
    pub write: Vec<String>,
    pub delete: Vec<String>,
}

impl Permissions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn read<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.read = roles.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn write<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.write = roles.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn delete<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.delete = roles.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn roles(&self, action: Action) -> &[String] {
        match action {
            Action::Delete => &self.delete,
            Action::Read => &self.read,
            Action::Write => &self.write,
        }
    }

    #[must_use]
    pub fn allows(&self, action: Action, role: &str) -> bool {
        self.roles(action).iter().any(|r| r == role)
    }
}

impl ValidateNode for Permissions {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        for action in [Action::Read, Action::Write, Action::Delete] {
            let mut seen = BTreeSet::new();
            for role in self.roles(action) {
                if role.trim().is_empty() {
                    err!(errs, "{action} permission lists an empty role");
                } else if !seen.insert(role.as_str()) {
                    err!(errs, "{action} permission lists role '{role}' twice");
                }
            }
        }

        errs.result()
    }
}

///
/// Feature
///
/// Capability flags for the generated UI. Informational; nothing in the
/// runtime refuses an operation because a flag is missing.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[remain::sorted]
#[serde(rename_all = "lowercase")]
pub enum Feature {
    Create,
    Delete,
    Detail,
    Edit,
    Export,
    List,
}

impl Feature {
    /// Features a plain CRUD entity gets unless told otherwise.
    pub const STANDARD: [Self; 5] = [
        Self::List,
        Self::Create,
        Self::Edit,
        Self::Detail,
        Self::Delete,
    ];
}
