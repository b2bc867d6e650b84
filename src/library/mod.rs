pub mod logger;
pub mod retry;
