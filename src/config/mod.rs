pub mod endpoints;
pub mod settings;

pub use endpoints::ApiEndpoints;
pub use settings::{ApiSettings, Credentials};
