//! Uid command: print the per-installation identity token.

use anyhow::Result;
use tpx_core::identity;
use tpx_core::store::KvStore;

/// Print the identity token, generating and persisting it on first use.
pub fn run_uid(store: &mut dyn KvStore) -> Result<()> {
    println!("{}", identity::ensure_identity_token(store));
    Ok(())
}
