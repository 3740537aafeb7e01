/// Parser module
///
/// Locates the access token inside the token endpoint's JSON response.
pub mod token;
