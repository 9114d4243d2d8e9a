//! Per-installation identity token: generated lazily once, reused forever.

use rand::Rng;

use crate::store::KvStore;

/// Store key holding the per-installation identity token.
pub const UID_KEY: &str = "unic_id";

/// Token length in characters.
const TOKEN_LEN: usize = 8;

const TOKEN_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Returns the persisted identity token, generating and persisting one on
/// first use. Never overwrites an existing token; safe to call from any
/// number of call sites.
pub fn ensure_identity_token(store: &mut dyn KvStore) -> String {
    let existing = store.get(UID_KEY, "");
    if !existing.is_empty() {
        return existing;
    }

    let token = generate_token(TOKEN_LEN);
    store.set(UID_KEY, &token);
    tracing::debug!("generated identity token {}", token);
    token
}

/// Random lowercase alphanumeric token of the given length.
fn generate_token(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| TOKEN_CHARSET[rng.gen_range(0..TOKEN_CHARSET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn generates_eight_lowercase_alphanumeric_chars() {
        let token = generate_token(TOKEN_LEN);
        assert_eq!(token.len(), 8);
        assert!(token
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()));
    }

    #[test]
    fn ensure_is_stable_across_calls() {
        let mut store = MemoryStore::new();
        let first = ensure_identity_token(&mut store);
        let second = ensure_identity_token(&mut store);
        assert_eq!(first, second);
        assert_eq!(store.get(UID_KEY, ""), first);
    }

    #[test]
    fn ensure_never_overwrites_existing_token() {
        let mut store = MemoryStore::new();
        store.set(UID_KEY, "seeded99");
        assert_eq!(ensure_identity_token(&mut store), "seeded99");
        assert_eq!(store.get(UID_KEY, ""), "seeded99");
    }
}
