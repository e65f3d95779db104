mod command;
mod query;

pub use self::command::ProductCommandService;
pub use self::query::ProductQueryService;

use validator::ValidationErrors;

/// Flatten validator output into one message per failed field.
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Invalid {field}"));
            messages.push(format!("{field}: {message}"));
        }
    }

    if messages.is_empty() {
        messages.push("Validation failed".to_string());
    }

    messages
}
