use uuid::{Uuid, Variant, Version};

/// IdentifierValidator gates identifiers before they address a remote resource
pub struct IdentifierValidator;

impl IdentifierValidator {
    /// Returns true iff `candidate` is a version-4 UUID written in canonical
    /// form (lower-case, hyphenated, no braces or URN prefix)
    pub fn is_valid(candidate: &str) -> bool {
        let Ok(uuid) = Uuid::parse_str(candidate) else {
            return false;
        };

        uuid.get_version() == Some(Version::Random)
            && uuid.get_variant() == Variant::RFC4122
            && uuid.hyphenated().to_string() == candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = "3f2b8c1e-9d4a-4e6b-8f1c-2a7d5e9b0c3f";

    #[test]
    fn test_canonical_v4_is_valid() {
        assert!(IdentifierValidator::is_valid(VALID));
        assert!(IdentifierValidator::is_valid(
            "00000000-0000-4000-a000-000000000000"
        ));
    }

    #[test]
    fn test_generated_v4_is_valid() {
        for _ in 0..16 {
            let generated = Uuid::new_v4().to_string();
            assert!(IdentifierValidator::is_valid(&generated), "{}", generated);
        }
    }

    #[test]
    fn test_upper_case_is_invalid() {
        assert!(!IdentifierValidator::is_valid(&VALID.to_uppercase()));
        assert!(!IdentifierValidator::is_valid(
            "3F2b8c1e-9d4a-4e6b-8f1c-2a7d5e9b0c3f"
        ));
    }

    #[test]
    fn test_missing_hyphens_is_invalid() {
        assert!(!IdentifierValidator::is_valid(&VALID.replace('-', "")));
    }

    #[test]
    fn test_braced_and_urn_forms_are_invalid() {
        assert!(!IdentifierValidator::is_valid(&format!("{{{}}}", VALID)));
        assert!(!IdentifierValidator::is_valid(&format!("urn:uuid:{}", VALID)));
    }

    #[test]
    fn test_wrong_length_is_invalid() {
        assert!(!IdentifierValidator::is_valid(&VALID[..35]));
        assert!(!IdentifierValidator::is_valid(&format!("{}0", VALID)));
        assert!(!IdentifierValidator::is_valid(""));
    }

    #[test]
    fn test_non_hex_is_invalid() {
        assert!(!IdentifierValidator::is_valid(
            "3f2b8c1e-9d4a-4e6b-8f1c-2a7d5e9b0c3g"
        ));
    }

    #[test]
    fn test_other_versions_are_invalid() {
        // version 1
        assert!(!IdentifierValidator::is_valid(
            "3f2b8c1e-9d4a-1e6b-8f1c-2a7d5e9b0c3f"
        ));
        // RFC 4122 variant bits not set
        assert!(!IdentifierValidator::is_valid(
            "3f2b8c1e-9d4a-4e6b-cf1c-2a7d5e9b0c3f"
        ));
    }

    #[test]
    fn test_surrounding_whitespace_is_invalid() {
        assert!(!IdentifierValidator::is_valid(&format!(" {}", VALID)));
        assert!(!IdentifierValidator::is_valid(&format!("{}\n", VALID)));
    }
}
