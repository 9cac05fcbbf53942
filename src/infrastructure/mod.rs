//! External integrations.

mod tinyurl;

pub use tinyurl::{TinyUrlGateway, DEFAULT_API_BASE};
