pub mod retry;

pub use retry::retry_once_on_expired;
