// src/common/id_generator.rs
//! Crockford Base32 ID generator.
//!
//! Generates human-readable, prefixed IDs in the form PREFIX_XXXXXX
//! (e.g. J_K7NP3X for jobs). The alphabet excludes I, L, O and U so
//! IDs stay unambiguous when read aloud or typed.

use rand::Rng;

/// Crockford Base32 alphabet (excludes I, L, O, U to avoid confusion)
const CROCKFORD_ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Entity type prefixes for ID generation
#[derive(Debug, Clone, Copy)]
pub enum EntityPrefix {
    /// Job posting (J_)
    Job,
    /// Learning resource (L_)
    Resource,
}

impl EntityPrefix {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityPrefix::Job => "J",
            EntityPrefix::Resource => "L",
        }
    }
}

/// Generate a random 6-character Crockford Base32 suffix
fn random_suffix() -> String {
    let mut rng = rand::thread_rng();
    (0..6)
        .map(|_| {
            let idx = rng.gen_range(0..32);
            CROCKFORD_ALPHABET[idx] as char
        })
        .collect()
}

/// Generate a prefixed entity ID
pub fn generate_id(prefix: EntityPrefix) -> String {
    format!("{}_{}", prefix.as_str(), random_suffix())
}

pub fn generate_job_id() -> String {
    generate_id(EntityPrefix::Job)
}

pub fn generate_resource_id() -> String {
    generate_id(EntityPrefix::Resource)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_format() {
        let id = generate_job_id();
        assert!(id.starts_with("J_"));
        assert_eq!(id.len(), 8);
    }

    #[test]
    fn test_id_alphabet_excludes_ambiguous_characters() {
        for _ in 0..100 {
            let id = generate_resource_id();
            let suffix = id.strip_prefix("L_").unwrap();
            for c in suffix.chars() {
                assert!(!"ILOU".contains(c), "ambiguous character {} in {}", c, id);
            }
        }
    }

    #[test]
    fn test_prefixes_are_distinct() {
        assert!(generate_job_id().starts_with("J_"));
        assert!(generate_resource_id().starts_with("L_"));
    }
}
