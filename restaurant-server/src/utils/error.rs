//! Error handling
//!
//! Re-exports the shared error types and converts validator output into
//! [`AppError`].
//!
//! ```ignore
//! payload.validate().map_err(validation_error)?;
//! ```

pub use shared::error::{AppError, AppResult, ErrorBody, ErrorCategory, ErrorCode};
use validator::{ValidationErrors, ValidationErrorsKind};

/// Flatten `ValidationErrors` into one readable message plus per-field details
pub fn validation_error(errors: ValidationErrors) -> AppError {
    let mut messages = Vec::new();
    collect_messages(&errors, "", &mut messages);
    messages.sort();

    let mut err = AppError::validation(if messages.is_empty() {
        "Validation failed".to_string()
    } else {
        messages.join("; ")
    });
    if let Ok(details) = serde_json::to_value(&errors) {
        err = err.with_detail("fields", details);
    }
    err
}

fn collect_messages(errors: &ValidationErrors, prefix: &str, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };
        match kind {
            ValidationErrorsKind::Field(list) => {
                for e in list {
                    match &e.message {
                        Some(msg) => out.push(format!("{path}: {msg}")),
                        None => out.push(format!("{path}: failed '{}' check", e.code)),
                    }
                }
            }
            ValidationErrorsKind::Struct(inner) => collect_messages(inner, &path, out),
            ValidationErrorsKind::List(items) => {
                for (idx, inner) in items {
                    collect_messages(inner, &format!("{path}[{idx}]"), out);
                }
            }
        }
    }
}
