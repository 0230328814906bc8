//! Viewer roles and the controls they unlock

use serde::{Deserialize, Serialize};

use bitflags::bitflags;

/// The access level of the current viewer, fetched once per session from `GET /api/user/role`.
///
/// This is a closed set: a server that answers anything else makes the role fetch fail, which callers treat the same as an unreachable role endpoint (no role, hence no controls).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Manager,
    Editor,
    Viewer,
}

impl Role {
    pub fn can_edit(&self) -> bool {
        match self {
            Role::Manager | Role::Editor => true,
            Role::Viewer => false,
        }
    }

    pub fn can_delete(&self) -> bool {
        match self {
            Role::Manager => true,
            _ => false,
        }
    }
}

bitflags! {
    /// Flags to tell which action controls a task row carries
    #[derive(Serialize, Deserialize)]
    pub struct ControlSet: u8 {
        /// An "Edit" button, opening the shared edit modal
        const EDIT = 1;
        /// A "Delete" button, going through a confirmation prompt
        const DELETE = 2;
    }
}

impl ControlSet {
    /// The controls a given role gets on every task row.
    ///
    /// `None` means the role is not resolved (yet, or at all): nothing is rendered, so that an unknown viewer can never reach a mutation.
    pub fn for_role(role: Option<Role>) -> Self {
        let role = match role {
            None => return Self::empty(),
            Some(r) => r,
        };

        let mut controls = Self::empty();
        if role.can_edit() {
            controls.insert(Self::EDIT);
        }
        if role.can_delete() {
            controls.insert(Self::DELETE);
        }
        controls
    }
}
