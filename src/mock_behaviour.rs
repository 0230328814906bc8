//! This module provides ways to tweak mocked task servers, so that they can return errors on some tests

use std::error::Error;

/// This stores some behaviour tweaks, that describe how a mocked task server will behave during a given test
///
/// So that a function fails _n_ times after _m_ initial successes, set `(m, n)` for the suited parameter
#[derive(Default, Clone, Debug)]
pub struct MockBehaviour {
    /// If this is true, every action will be allowed
    pub is_suspended: bool,

    // One entry per TaskApi operation
    pub fetch_role_behaviour: (u32, u32),
    pub fetch_project_page_behaviour: (u32, u32),
    pub fetch_task_behaviour: (u32, u32),
    pub fetch_tasks_behaviour: (u32, u32),
    pub edit_task_behaviour: (u32, u32),
    pub delete_task_behaviour: (u32, u32),
}

impl MockBehaviour {
    pub fn new() -> Self {
        Self::default()
    }

    /// All operations will fail at once, for `n_fails` times
    pub fn fail_now(n_fails: u32) -> Self {
        Self {
            is_suspended: false,
            fetch_role_behaviour: (0, n_fails),
            fetch_project_page_behaviour: (0, n_fails),
            fetch_task_behaviour: (0, n_fails),
            fetch_tasks_behaviour: (0, n_fails),
            edit_task_behaviour: (0, n_fails),
            delete_task_behaviour: (0, n_fails),
        }
    }

    /// Suspend this mock behaviour until you call `resume`
    pub fn suspend(&mut self) {
        self.is_suspended = true;
    }
    /// Make this behaviour active again
    pub fn resume(&mut self) {
        self.is_suspended = false;
    }

    pub fn can_fetch_role(&mut self) -> Result<(), Box<dyn Error>> {
        if self.is_suspended { return Ok(()) }
        decrement(&mut self.fetch_role_behaviour, "fetch_role")
    }
    pub fn can_fetch_project_page(&mut self) -> Result<(), Box<dyn Error>> {
        if self.is_suspended { return Ok(()) }
        decrement(&mut self.fetch_project_page_behaviour, "fetch_project_page")
    }
    pub fn can_fetch_task(&mut self) -> Result<(), Box<dyn Error>> {
        if self.is_suspended { return Ok(()) }
        decrement(&mut self.fetch_task_behaviour, "fetch_task")
    }
    pub fn can_fetch_tasks(&mut self) -> Result<(), Box<dyn Error>> {
        if self.is_suspended { return Ok(()) }
        decrement(&mut self.fetch_tasks_behaviour, "fetch_tasks")
    }
    pub fn can_edit_task(&mut self) -> Result<(), Box<dyn Error>> {
        if self.is_suspended { return Ok(()) }
        decrement(&mut self.edit_task_behaviour, "edit_task")
    }
    pub fn can_delete_task(&mut self) -> Result<(), Box<dyn Error>> {
        if self.is_suspended { return Ok(()) }
        decrement(&mut self.delete_task_behaviour, "delete_task")
    }
}

/// Return Ok(()) in case the value is `(1+, _)` or `(_, 0)`, or return Err and decrement otherwise
fn decrement(value: &mut (u32, u32), descr: &str) -> Result<(), Box<dyn Error>> {
    let remaining_successes = value.0;
    let remaining_failures = value.1;

    if remaining_successes > 0 {
        value.0 = value.0 - 1;
        log::debug!("Mock behaviour: allowing a {} ({:?})", descr, value);
        Ok(())
    } else {
        if remaining_failures > 0 {
            value.1 = value.1 - 1;
            log::debug!("Mock behaviour: failing a {} ({:?})", descr, value);
            Err(format!("Mocked behaviour requires this {} to fail this time. ({:?})", descr, value).into())
        } else {
            log::debug!("Mock behaviour: allowing a {} ({:?})", descr, value);
            Ok(())
        }
    }
}
