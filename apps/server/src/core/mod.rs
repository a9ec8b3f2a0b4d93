pub mod error;
pub mod extract;
pub mod request_log;
