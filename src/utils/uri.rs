use std::string::FromUtf8Error;
use hex::FromHexError;
use log::debug;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UriDecodeError {
    #[error("Encoded uri is not valid hex: {0}")]
    InvalidHex(#[from] FromHexError),
    #[error("Decoded uri is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] FromUtf8Error),
}

/// Lowercase hex of the UTF-8 bytes, safe to embed in a query string.
pub fn encode(uri: &str) -> String {
    hex::encode(uri.as_bytes())
}

pub fn decode(uri_encoded: &str) -> Result<String, UriDecodeError> {
    let bytes = hex::decode(uri_encoded)?;
    Ok(String::from_utf8(bytes)?)
}

/// Returns the requested form of a page identifier, deriving it from the
/// other form when the requested one is empty.
///
/// A malformed encoded value resolves to an empty string, so lookups by a
/// garbage key simply match nothing.
pub fn resolve(uri: &str, uri_encoded: &str, want_encoded: bool) -> String {
    if want_encoded {
        if !uri_encoded.is_empty() {
            return uri_encoded.to_string();
        }
        return encode(uri);
    }
    if !uri.is_empty() {
        return uri.to_string();
    }
    match decode(uri_encoded) {
        Ok(uri) => uri,
        Err(e) => {
            debug!("Ignoring malformed uri_encoded {:?}: {}", uri_encoded, e);
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_as_lowercase_hex() {
        assert_eq!(encode("/blog/1"), "2f626c6f672f31");
        assert_eq!(encode(""), "");
    }

    #[test]
    fn decode_reverses_encode() {
        for uri in ["/blog/1", "https://example.com/a?b=c&d=e#f", "/päge/日本語", " "] {
            assert_eq!(decode(&encode(uri)).unwrap(), uri);
        }
    }

    #[test]
    fn decode_accepts_uppercase_hex() {
        assert_eq!(decode("2F626C6F672F31").unwrap(), "/blog/1");
    }

    #[test]
    fn decode_rejects_malformed_tokens() {
        assert!(matches!(decode("abc"), Err(UriDecodeError::InvalidHex(_))));
        assert!(matches!(decode("zz"), Err(UriDecodeError::InvalidHex(_))));
        assert!(matches!(decode("ff"), Err(UriDecodeError::InvalidUtf8(_))));
    }

    #[test]
    fn resolve_prefers_the_supplied_form() {
        assert_eq!(resolve("/a", "2f62", true), "2f62");
        assert_eq!(resolve("/a", "2f62", false), "/a");
    }

    #[test]
    fn resolve_derives_the_missing_form() {
        assert_eq!(resolve("/blog/1", "", true), "2f626c6f672f31");
        assert_eq!(resolve("", "2f626c6f672f31", false), "/blog/1");
    }

    #[test]
    fn resolve_falls_back_to_empty_on_malformed_input() {
        assert_eq!(resolve("", "not-hex", false), "");
        assert_eq!(resolve("", "abc", false), "");
    }

    #[test]
    fn resolve_with_nothing_supplied_is_empty() {
        assert_eq!(resolve("", "", true), "");
        assert_eq!(resolve("", "", false), "");
    }

    #[test]
    fn resolve_round_trips_through_encoded_form() {
        let raw = "/posts/2024/hello-world?ref=feed";
        let encoded = resolve(raw, "", true);
        assert_eq!(resolve("", &encoded, false), raw);
    }
}
