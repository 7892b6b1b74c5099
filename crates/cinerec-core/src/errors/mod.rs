//! Error handling for cinerec.
//! One error enum per subsystem, `thiserror` only, aggregated by `CinerecError`.

pub mod cinerec_error;
pub mod config_error;
pub mod error_code;
pub mod store_error;

pub use cinerec_error::{CinerecError, CinerecResult, EntityKind};
pub use config_error::ConfigError;
pub use error_code::CinerecErrorCode;
pub use store_error::StoreError;
