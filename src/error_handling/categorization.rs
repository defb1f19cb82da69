//! Error categorization.
//!
//! Maps transport-level errors into the [`Unavailable`] sentinel.

use super::types::Unavailable;

/// Categorizes a `reqwest::Error` into an [`Unavailable`] cause.
///
/// Status errors keep their code, decode errors count as malformed bodies,
/// everything else (connect, timeout, request, body) is a transport failure.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> Unavailable {
    if let Some(status) = error.status() {
        return Unavailable::Status(status.as_u16());
    }

    if error.is_decode() {
        Unavailable::Malformed(error.to_string())
    } else {
        Unavailable::Transport(error.to_string())
    }
}

/// Categorizes a fixture read failure.
///
/// A missing file behaves like an upstream 404.
pub fn categorize_io_error(error: &std::io::Error) -> Unavailable {
    match error.kind() {
        std::io::ErrorKind::NotFound => Unavailable::Status(404),
        _ => Unavailable::Transport(error.to_string()),
    }
}

/// Categorizes a JSON decode failure.
pub fn categorize_json_error(error: &serde_json::Error) -> Unavailable {
    Unavailable::Malformed(error.to_string())
}
