//! URL proxy rewriting.
//!
//! Transforms outbound TMDB image/API URLs into proxied URLs carrying
//! identification parameters. Pure string transformation: given the same
//! config, context and URL the result is always the same.

mod annotate;
mod component;

pub use annotate::{annotate, AccountContext, AnnotateContext};
pub use component::{add_url_component, encode_component};

use crate::config::ProxyConfig;

/// Path prefix on the proxy for image requests.
const IMAGE_PREFIX: &str = "/tmdb/img/";
/// Path prefix on the proxy for API (v3) requests.
const API_PREFIX: &str = "/tmdb/api/3/";

/// Target resource kind of a rewrite request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Image,
    Api,
}

impl ResourceKind {
    fn prefix(self) -> &'static str {
        match self {
            ResourceKind::Image => IMAGE_PREFIX,
            ResourceKind::Api => API_PREFIX,
        }
    }
}

/// Rewrites `url` to route through the proxy for the given kind, with
/// identification parameters attached. An inactive configuration (disabled
/// mode or empty base URL) passes the URL through unchanged.
pub fn rewrite_url(
    url: &str,
    kind: ResourceKind,
    cfg: &ProxyConfig,
    ctx: &AnnotateContext,
) -> String {
    if !cfg.is_active() {
        return url.to_string();
    }

    // Trim the slash seam so `/movie/550` joins as `.../api/3/movie/550`.
    let base = cfg.base_url.trim_end_matches('/');
    let tail = annotate(url, ctx);
    format!("{}{}{}", base, kind.prefix(), tail.trim_start_matches('/'))
}

/// Rewrites an image URL; see [`rewrite_url`].
pub fn rewrite_image_url(url: &str, cfg: &ProxyConfig, ctx: &AnnotateContext) -> String {
    rewrite_url(url, ResourceKind::Image, cfg, ctx)
}

/// Rewrites an API URL; see [`rewrite_url`].
pub fn rewrite_api_url(url: &str, cfg: &ProxyConfig, ctx: &AnnotateContext) -> String {
    rewrite_url(url, ResourceKind::Api, cfg, ctx)
}
