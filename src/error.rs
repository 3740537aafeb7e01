use thiserror::Error;

/// Max characters of raw response body carried in error diagnostics.
pub const BODY_EXCERPT_MAX_CHARS: usize = 300;

/// Failure taxonomy for the KAF B2B client.
///
/// `ExpiredToken` is the only recoverable kind: the retry wrapper
/// converts it into exactly one more attempt. Everything else
/// propagates to the caller unchanged.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or invalid configuration, raised before any network call.
    #[error("configuration error: {0}")]
    Config(String),

    /// Token issuance failed: bad status, non-JSON body, or no token field.
    #[error("token request failed ({status}): {detail}")]
    TokenRequest { status: u16, detail: String },

    /// The server rejected the bearer token as expired. Carries the
    /// server's message text.
    #[error("token expired: {0}")]
    ExpiredToken(String),

    /// A business endpoint call failed for a reason other than expiry.
    #[error("{operation} request failed ({status}): {detail}")]
    BusinessRequest {
        operation: String,
        status: u16,
        detail: String,
    },

    /// Connectivity, TLS, or timeout failure below the HTTP layer.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// First `BODY_EXCERPT_MAX_CHARS` characters of a raw body, for error
/// diagnostics. Counts characters, not bytes: upstream messages are
/// Korean text and must not be split mid-character.
pub fn body_excerpt(body: &str) -> String {
    match body.char_indices().nth(BODY_EXCERPT_MAX_CHARS) {
        Some((idx, _)) => body[..idx].to_owned(),
        None => body.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excerpt_passes_short_bodies_through() {
        assert_eq!(body_excerpt("ok"), "ok");
        assert_eq!(body_excerpt(""), "");
    }

    #[test]
    fn excerpt_counts_characters_not_bytes() {
        // 400 Korean characters, 3 bytes each
        let body = "만".repeat(400);
        let excerpt = body_excerpt(&body);
        assert_eq!(excerpt.chars().count(), BODY_EXCERPT_MAX_CHARS);
        assert!(body.starts_with(&excerpt));
    }

    #[test]
    fn excerpt_keeps_exact_limit_intact() {
        let body = "a".repeat(BODY_EXCERPT_MAX_CHARS);
        assert_eq!(body_excerpt(&body), body);
    }
}
