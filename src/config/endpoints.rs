/// Relative path appended to a bare resource base to reach the token
/// issuance endpoint.
pub const TOKEN_ENDPOINT_PATH: &str = "access_token.do";

/// Last-segment extensions that mark a configured URL as a literal
/// token endpoint rather than a resource base.
const DOCUMENT_EXTENSIONS: [&str; 4] = [".do", ".json", ".php", ".asp"];

/// Resolved pair of URLs derived from the single configured API URL.
///
/// Invariant: `token_endpoint` always ends in a document-style segment;
/// `resource_base` never does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoints {
    pub resource_base: String,
    pub token_endpoint: String,
}

impl ApiEndpoints {
    /// Normalize one configured URL so we always have both a resource
    /// base and a token endpoint.
    ///
    /// Operators configure either a service root or the token URL
    /// itself. A last segment with a known document extension, or any
    /// embedded dot, classifies the whole URL as the token endpoint.
    /// The dot check is a deliberate heuristic: a dotted segment is
    /// accepted even when the dot is not part of an extension.
    pub fn resolve(configured_url: &str) -> Self {
        let normalized = configured_url.trim_end_matches('/');
        let last_segment = match normalized.rsplit_once('/') {
            Some((_, segment)) => segment,
            None => normalized,
        };
        let lower_segment = last_segment.to_ascii_lowercase();

        let is_token_endpoint = DOCUMENT_EXTENSIONS
            .iter()
            .any(|ext| lower_segment.ends_with(ext))
            || last_segment.contains('.');

        if is_token_endpoint {
            let resource_base = match normalized.rsplit_once('/') {
                Some((base, _)) => base.to_owned(),
                None => normalized.to_owned(),
            };
            Self {
                resource_base,
                token_endpoint: normalized.to_owned(),
            }
        } else {
            Self {
                resource_base: normalized.to_owned(),
                token_endpoint: format!("{normalized}/{TOKEN_ENDPOINT_PATH}"),
            }
        }
    }

    /// Full URL for a business endpoint under the resource base.
    pub fn business_url(&self, path: &str) -> String {
        format!("{}/{}", self.resource_base, path)
    }
}
