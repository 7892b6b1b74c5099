//! Stable error codes for callers that match on strings (logs, CLI exit output).

/// Every error enum implements this to expose a structured error code.
pub trait CinerecErrorCode {
    /// Returns the error code string (e.g. "UNKNOWN_ENTITY").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const UNKNOWN_ENTITY: &str = "UNKNOWN_ENTITY";
pub const INVALID_INPUT: &str = "INVALID_INPUT";
pub const STORE_IO: &str = "STORE_IO";
pub const STORE_PARSE: &str = "STORE_PARSE";
pub const STORE_INTEGRITY: &str = "STORE_INTEGRITY";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
