//! Queued toast notifications emitted by view actions.
//!
//! DESIGN
//! ======
//! Table and form actions do not mutate any backing data; they describe
//! their outcome as a `Toast` command handed to a caller-supplied handler.
//! The handler pushes into this shared queue and the toast host renders
//! it, keeping the views themselves free of side effects.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Visual severity of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Default,
    /// Deletions, rejections, and validation errors.
    Destructive,
}

/// A single notification command: title, body, severity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Assigned by the queue on push; empty until then.
    pub id: String,
    pub title: String,
    pub message: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Toast {
        Toast {
            id: String::new(),
            title: title.into(),
            message: message.into(),
            variant: ToastVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, message: impl Into<String>) -> Toast {
        Toast {
            id: String::new(),
            title: title.into(),
            message: message.into(),
            variant: ToastVariant::Destructive,
        }
    }
}

/// Shared toast queue state.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<Toast>,
}

impl ToastState {
    /// Queue a toast, assigning it a fresh id. Returns the id.
    pub fn push(&mut self, mut toast: Toast) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        toast.id.clone_from(&id);
        self.items.push(toast);
        id
    }

    /// Remove a toast by id; unknown ids are ignored.
    pub fn dismiss(&mut self, id: &str) {
        self.items.retain(|toast| toast.id != id);
    }
}
