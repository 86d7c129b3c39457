pub mod auth;
pub mod log;

pub use auth::{jwt_check, AuthUser};
pub use log::request_log;
