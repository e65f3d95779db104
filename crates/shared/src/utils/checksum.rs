use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 digest of the given bytes; doubles as the ETag of a
/// stored image.
pub fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// Compare a client-supplied `If-None-Match` value against the current ETag.
/// Clients may send the tag quoted or bare; weak validators (`W/"..."`) are
/// accepted too since the body is content-addressed.
pub fn etag_matches(if_none_match: &str, etag: &str) -> bool {
    if_none_match
        .split(',')
        .map(str::trim)
        .map(|candidate| candidate.strip_prefix("W/").unwrap_or(candidate))
        .map(|candidate| candidate.trim_matches('"'))
        .any(|candidate| candidate == etag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_stable_hex() {
        assert_eq!(
            sha256_hex(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn quoted_and_bare_tags_match() {
        assert!(etag_matches("\"abc123\"", "abc123"));
        assert!(etag_matches("abc123", "abc123"));
        assert!(etag_matches("W/\"abc123\"", "abc123"));
    }

    #[test]
    fn list_of_tags_matches_any() {
        assert!(etag_matches("\"zzz\", \"abc123\"", "abc123"));
        assert!(!etag_matches("\"zzz\", \"yyy\"", "abc123"));
    }
}
