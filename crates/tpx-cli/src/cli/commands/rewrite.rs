//! Rewrite command: run one URL through the proxy rewriter.

use anyhow::Result;
use tpx_core::config::ProxyConfig;
use tpx_core::hooks;
use tpx_core::identity;
use tpx_core::rewrite::{rewrite_url, AccountContext, AnnotateContext, ResourceKind};
use tpx_core::store::KvStore;

/// Rewrite `url` with the current config and stored identity, printing the result.
pub fn run_rewrite(
    cfg: &ProxyConfig,
    store: &mut dyn KvStore,
    kind: ResourceKind,
    url: &str,
    email: Option<String>,
) -> Result<()> {
    let token = identity::ensure_identity_token(store);
    let account = match email {
        Some(email) => AccountContext { email: Some(email) },
        None => hooks::account_from_store(store),
    };
    let ctx = AnnotateContext::assemble(&account, &token, cfg);
    println!("{}", rewrite_url(url, kind, cfg, &ctx));
    Ok(())
}
