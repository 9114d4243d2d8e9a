//! Host hook points: the URL builder slots the integration layer overwrites.
//!
//! The host app rebuilds its default (non-proxied) URL builders
//! asynchronously after its own geo-detection step, which can clobber an
//! installed override. Installation is therefore cheap and idempotent so the
//! re-apply schedule (see [`crate::schedule`]) can assert it repeatedly.

use crate::config::ProxyConfig;
use crate::identity;
use crate::rewrite::{self, AccountContext, AnnotateContext, ResourceKind};
use crate::store::KvStore;

/// Store key flagging that proxy rewriting is active.
pub const PROXY_FLAG_KEY: &str = "proxy_tmdb";

/// Store key holding the optional account email, written by the host.
pub const ACCOUNT_EMAIL_KEY: &str = "account_email";

/// A URL builder slot on the host object.
pub type UrlFn = Box<dyn Fn(&str) -> String + Send + Sync>;

/// The host's image/API URL builder slots. Defaults pass URLs through
/// untouched, matching the host before any proxy is installed.
pub struct UrlHooks {
    pub image: UrlFn,
    pub api: UrlFn,
}

impl Default for UrlHooks {
    fn default() -> Self {
        Self {
            image: Box::new(|url| url.to_string()),
            api: Box::new(|url| url.to_string()),
        }
    }
}

/// Reads the account context out of the host store.
pub fn account_from_store(store: &dyn KvStore) -> AccountContext {
    let email = store.get(ACCOUNT_EMAIL_KEY, "");
    AccountContext {
        email: (!email.is_empty()).then_some(email),
    }
}

/// Overwrites both hook slots with proxying closures, ensuring the identity
/// token exists and recording the active flag in the store. With an inactive
/// configuration the hooks are left untouched. Calling this any number of
/// times installs the same behavior.
pub fn install_proxy(
    hooks: &mut UrlHooks,
    cfg: &ProxyConfig,
    account: &AccountContext,
    store: &mut dyn KvStore,
) {
    if !cfg.is_active() {
        tracing::debug!("proxy inactive; leaving host URL builders untouched");
        return;
    }

    let token = identity::ensure_identity_token(store);
    store.set(PROXY_FLAG_KEY, "true");

    let ctx = AnnotateContext::assemble(account, &token, cfg);

    let image_cfg = cfg.clone();
    let image_ctx = ctx.clone();
    hooks.image = Box::new(move |url| {
        rewrite::rewrite_url(url, ResourceKind::Image, &image_cfg, &image_ctx)
    });

    let api_cfg = cfg.clone();
    hooks.api =
        Box::new(move |url| rewrite::rewrite_url(url, ResourceKind::Api, &api_cfg, &ctx));

    tracing::debug!("proxy hooks installed for {}", cfg.base_url);
}
