//! The shared edit modal.
//!
//! The page has a single modal, bound to at most one task at a time. It is either closed or open on a task with a filled-in form; a failed fetch or save never leaves it in some intermediate state.

use crate::task::{TaskFields, TaskId};

/// The form fields, in the order focus travels through them.
///
/// Pressing enter on the title or changing one of the other fields moves the focus one step forward, ending on the save button. A convenience, nothing depends on it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusField {
    Title,
    Deadline,
    Priority,
    Status,
    Save,
}

impl FocusField {
    pub fn next(self) -> Self {
        match self {
            FocusField::Title => FocusField::Deadline,
            FocusField::Deadline => FocusField::Priority,
            FocusField::Priority => FocusField::Status,
            FocusField::Status => FocusField::Save,
            FocusField::Save => FocusField::Save,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
enum ModalState {
    Closed,
    Open {
        task_id: TaskId,
        fields: TaskFields,
        focus: FocusField,
    },
}

/// The edit modal and its current state
#[derive(Clone, Debug, PartialEq)]
pub struct EditModal {
    state: ModalState,
}

impl EditModal {
    pub fn new() -> Self {
        Self { state: ModalState::Closed }
    }

    pub fn is_open(&self) -> bool {
        match &self.state {
            ModalState::Closed => false,
            ModalState::Open { .. } => true,
        }
    }

    /// Open the modal on a task, with the form populated from its current server values.
    /// Focus starts on the title field. Opening while already open simply re-binds the modal
    pub fn open(&mut self, task_id: TaskId, fields: TaskFields) {
        self.state = ModalState::Open {
            task_id,
            fields,
            focus: FocusField::Title,
        };
    }

    /// Close the modal, on save success, cancel, or a click outside of it
    pub fn close(&mut self) {
        self.state = ModalState::Closed;
    }

    /// The task the modal is currently bound to
    pub fn current_task(&self) -> Option<TaskId> {
        match &self.state {
            ModalState::Closed => None,
            ModalState::Open { task_id, .. } => Some(*task_id),
        }
    }

    pub fn fields(&self) -> Option<&TaskFields> {
        match &self.state {
            ModalState::Closed => None,
            ModalState::Open { fields, .. } => Some(fields),
        }
    }

    /// The form, for the user to type into
    pub fn fields_mut(&mut self) -> Option<&mut TaskFields> {
        match &mut self.state {
            ModalState::Closed => None,
            ModalState::Open { fields, .. } => Some(fields),
        }
    }

    pub fn focus(&self) -> Option<FocusField> {
        match &self.state {
            ModalState::Closed => None,
            ModalState::Open { focus, .. } => Some(*focus),
        }
    }

    /// Move the focus one field forward. Does nothing on a closed modal
    pub fn advance_focus(&mut self) {
        if let ModalState::Open { focus, .. } = &mut self.state {
            *focus = focus.next();
        }
    }
}

impl Default for EditModal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::task::Priority;

    fn draft_fields() -> TaskFields {
        TaskFields {
            title: "Draft".to_string(),
            deadline: NaiveDate::from_ymd(2024, 1, 1),
            priority: Priority::High,
            status: "Open".to_string(),
        }
    }

    #[test]
    fn open_then_close() {
        let mut modal = EditModal::new();
        assert!(modal.is_open() == false);
        assert_eq!(modal.current_task(), None);

        modal.open(TaskId::from(5), draft_fields());
        assert!(modal.is_open());
        assert_eq!(modal.current_task(), Some(TaskId::from(5)));
        assert_eq!(modal.fields().unwrap().title, "Draft");

        modal.close();
        assert!(modal.is_open() == false);
        assert_eq!(modal.fields(), None);
    }

    #[test]
    fn reopening_rebinds_the_modal() {
        let mut modal = EditModal::new();
        modal.open(TaskId::from(5), draft_fields());

        let mut other = draft_fields();
        other.title = "Review".to_string();
        modal.open(TaskId::from(6), other);

        assert_eq!(modal.current_task(), Some(TaskId::from(6)));
        assert_eq!(modal.fields().unwrap().title, "Review");
    }

    #[test]
    fn focus_walks_the_form_and_stops_on_save() {
        let mut modal = EditModal::new();
        modal.advance_focus(); // closed: no-op
        assert_eq!(modal.focus(), None);

        modal.open(TaskId::from(5), draft_fields());
        assert_eq!(modal.focus(), Some(FocusField::Title));

        let expected = [
            FocusField::Deadline,
            FocusField::Priority,
            FocusField::Status,
            FocusField::Save,
            FocusField::Save, // terminal
        ];
        for field in expected.iter() {
            modal.advance_focus();
            assert_eq!(modal.focus(), Some(*field));
        }
    }

    #[test]
    fn typing_goes_through_fields_mut() {
        let mut modal = EditModal::new();
        modal.open(TaskId::from(5), draft_fields());

        modal.fields_mut().unwrap().priority = Priority::Low;
        assert_eq!(modal.fields().unwrap().priority, Priority::Low);
    }
}
