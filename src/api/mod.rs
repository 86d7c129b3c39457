pub mod envelope;
pub mod input;

pub use envelope::{Envelope, HandlerResult};
