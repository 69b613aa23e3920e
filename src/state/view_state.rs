use serde::Serialize;

use crate::models::{GraphQLError, Organization};

/// The one mutable record of the session. Starts unloaded and is only ever
/// replaced by a reconciler output; an error result still produces a state,
/// with `errors` populated and possibly no organization. Renderers check
/// `errors` before touching issue data.
#[derive(Debug, Clone, Serialize)]
pub struct ViewState {
    /// User-editable `organization/repository` text.
    pub path: String,
    pub organization: Option<Organization>,
    pub errors: Option<Vec<GraphQLError>>,
}

impl ViewState {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            organization: None,
            errors: None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.organization.is_some()
    }

    pub fn has_errors(&self) -> bool {
        self.errors.as_ref().is_some_and(|e| !e.is_empty())
    }

    /// All error messages joined into one user-visible line.
    pub fn error_summary(&self) -> Option<String> {
        let errors = self.errors.as_ref()?;
        if errors.is_empty() {
            return None;
        }
        Some(
            errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join(" "),
        )
    }

    /// Cursor to request the next issue page, if one is known.
    pub fn end_cursor(&self) -> Option<&str> {
        self.organization
            .as_ref()?
            .repository
            .issues
            .page_info
            .end_cursor
            .as_deref()
    }

    pub fn has_next_page(&self) -> bool {
        self.organization
            .as_ref()
            .is_some_and(|o| o.repository.issues.page_info.has_next_page)
    }
}
