//! Plain-text rendering of the form.

use crate::domain::DisplayState;
use crate::form::FormSnapshot;

pub const TITLE: &str = "User Lookup";
pub const PLACEHOLDER: &str = "Enter an id";
pub const LOADING: &str = "Loading…";

pub fn render(snapshot: &FormSnapshot) -> String {
    let mut lines = vec![TITLE.to_string(), "-".repeat(TITLE.len())];

    match &snapshot.display {
        DisplayState::Unset => lines.push(PLACEHOLDER.to_string()),
        DisplayState::Loaded(user) => {
            lines.push(user.name.clone());
            lines.push(user.email.clone());
            lines.push(user.username.clone());
        }
        DisplayState::Failed { identifier, reason } => {
            lines.push(format!("Could not load user {identifier}: {reason}"));
        }
    }
    if snapshot.loading {
        lines.push(LOADING.to_string());
    }
    lines.push(field_line(&snapshot.field));
    lines.join("\n")
}

pub fn field_line(field: &str) -> String {
    format!("User Id: [{field}]")
}
