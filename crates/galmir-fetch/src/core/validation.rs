/// How the fetcher treats an HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// 2xx: the body is the result.
    Success,
    /// 5xx: the server may recover, retry.
    Transient,
    /// Anything else: the request itself is wrong, retrying cannot help.
    Rejected,
}

/// Classify an HTTP status code.
///
/// # Examples
///
/// ```
/// use galmir_fetch::{StatusClass, classify_status};
///
/// assert_eq!(classify_status(200), StatusClass::Success);
/// assert_eq!(classify_status(503), StatusClass::Transient);
/// assert_eq!(classify_status(404), StatusClass::Rejected);
/// ```
pub fn classify_status(status: u16) -> StatusClass {
    match status {
        200..=299 => StatusClass::Success,
        500..=599 => StatusClass::Transient,
        _ => StatusClass::Rejected,
    }
}
