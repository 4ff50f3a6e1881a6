//! Short code generation.
//!
//! Codes are drawn from a high-entropy random source; uniqueness is not
//! assumed on a single draw and is enforced by the store's unique constraint
//! at insertion time.

use base64::Engine as _;

/// Random bytes per code. 6 bytes encode to exactly 8 base64 characters.
const CODE_LENGTH_BYTES: usize = 6;

/// Length of a generated short code in characters.
pub const CODE_LENGTH: usize = 8;

/// Generates a cryptographically secure random 8-character short code.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding. With 48 bits of entropy per code, collisions are
/// improbable but still possible; callers must retry on insert conflicts.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_code() -> String {
    let mut buffer = [0u8; CODE_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_correct_length() {
        for _ in 0..100 {
            assert_eq!(generate_code().len(), CODE_LENGTH);
        }
    }

    #[test]
    fn test_generate_code_url_safe_characters() {
        let code = generate_code();
        assert!(
            code.chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
    }

    #[test]
    fn test_generate_code_no_padding() {
        let code = generate_code();
        assert!(!code.contains('='));
    }

    #[test]
    fn test_generate_code_produces_unique_codes() {
        let mut codes = HashSet::new();

        for _ in 0..1000 {
            codes.insert(generate_code());
        }

        assert_eq!(codes.len(), 1000);
    }
}
