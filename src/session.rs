//! Per-page session state.
//!
//! One [`PageSession`] is created per page load and handed to every handler, instead of letting the current project id and the cached role live in ambient globals.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::role::Role;

/// The project whose tasks this page shows, taken from the URL path
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ProjectId(u64);

impl ProjectId {
    /// Extract the project id from a page path.
    ///
    /// Only `/project/{id}` pages have a task board; any other path (including a trailing slash, which leaves an empty last segment) returns `None` and the controller does not boot.
    pub fn from_path(path: &str) -> Option<Self> {
        if path.starts_with("/project/") == false {
            return None;
        }

        let last_segment = path.rsplit('/').next().unwrap_or("");
        match last_segment.parse::<u64>() {
            Ok(id) => Some(Self(id)),
            Err(_) => None,
        }
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}
impl From<u64> for ProjectId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}
impl FromStr for ProjectId {
    type Err = std::num::ParseIntError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id: u64 = s.parse()?;
        Ok(Self(id))
    }
}
impl Display for ProjectId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.0)
    }
}

/// What the page knows about itself: the current project, and the viewer's role once it has been resolved.
///
/// The role starts unset. It is cached here after the first successful fetch, and stays unset after a failed one, which renders every row without controls.
#[derive(Clone, Debug, PartialEq)]
pub struct PageSession {
    project: ProjectId,
    role: Option<Role>,
}

impl PageSession {
    pub fn new(project: ProjectId) -> Self {
        Self { project, role: None }
    }

    pub fn project(&self) -> ProjectId {
        self.project
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn set_role(&mut self, role: Role) {
        self.role = Some(role);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_pages_only() {
        assert_eq!(ProjectId::from_path("/project/42"), Some(ProjectId(42)));
        assert_eq!(ProjectId::from_path("/project/42/"), None);
        assert_eq!(ProjectId::from_path("/project/abc"), None);
        assert_eq!(ProjectId::from_path("/reports"), None);
        assert_eq!(ProjectId::from_path("/"), None);
        assert_eq!(ProjectId::from_path(""), None);
    }

    #[test]
    fn session_caches_the_role() {
        let mut session = PageSession::new(ProjectId::from(7));
        assert_eq!(session.role(), None);

        session.set_role(Role::Editor);
        assert_eq!(session.role(), Some(Role::Editor));
        assert_eq!(session.project().as_u64(), 7);
    }
}
