//! Identification parameters appended to outbound URLs.

use super::component::{add_url_component, encode_component};
use crate::config::ProxyConfig;

/// Optional end-user account attached to requests, resolved by the host.
#[derive(Debug, Clone, Default)]
pub struct AccountContext {
    pub email: Option<String>,
}

/// Everything `annotate` attaches to a URL.
#[derive(Debug, Clone, Default)]
pub struct AnnotateContext {
    /// Account email, URL-encoded into `account_email=`.
    pub account_email: Option<String>,
    /// Per-installation identity token, URL-encoded into `uid=`.
    pub identity_token: String,
    /// Proxy auth token, appended raw as `token=`.
    pub auth_token: Option<String>,
}

impl AnnotateContext {
    /// Assembles the annotate input from the account context, the
    /// per-installation token and the configured auth token.
    pub fn assemble(account: &AccountContext, identity_token: &str, cfg: &ProxyConfig) -> Self {
        Self {
            account_email: account.email.clone(),
            identity_token: identity_token.to_string(),
            auth_token: cfg.auth_token.clone(),
        }
    }
}

/// Appends `account_email`, `uid` and `token` query parameters in that order,
/// skipping any parameter the URL already carries. The host may hand us a URL
/// it already annotated on an earlier pass, so each append is guarded by a
/// presence check rather than remove-and-replace.
pub fn annotate(url: &str, ctx: &AnnotateContext) -> String {
    let mut out = url.to_string();

    if !out.contains("account_email=") {
        if let Some(email) = ctx.account_email.as_deref().filter(|e| !e.is_empty()) {
            let component = format!("account_email={}", encode_component(email));
            out = add_url_component(&out, &component);
        }
    }

    if !out.contains("uid=") && !ctx.identity_token.is_empty() {
        let component = format!("uid={}", encode_component(&ctx.identity_token));
        out = add_url_component(&out, &component);
    }

    if !out.contains("token=") {
        if let Some(token) = ctx.auth_token.as_deref().filter(|t| !t.is_empty()) {
            out = add_url_component(&out, &format!("token={}", token));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(email: Option<&str>, uid: &str, token: Option<&str>) -> AnnotateContext {
        AnnotateContext {
            account_email: email.map(str::to_string),
            identity_token: uid.to_string(),
            auth_token: token.map(str::to_string),
        }
    }

    #[test]
    fn appends_uid_when_absent() {
        let out = annotate("/movie/550", &ctx(None, "ab12cd34", None));
        assert!(out.contains("uid=ab12cd34"));
    }

    #[test]
    fn appends_all_three_in_order() {
        let out = annotate("/movie/550", &ctx(Some("a@b.com"), "ab12cd34", Some("tok")));
        assert_eq!(out, "/movie/550?account_email=a%40b.com&uid=ab12cd34&token=tok");
    }

    #[test]
    fn is_idempotent() {
        let c = ctx(Some("a@b.com"), "ab12cd34", Some("tok"));
        let once = annotate("/movie/550", &c);
        let twice = annotate(&once, &c);
        assert_eq!(once, twice);
    }

    #[test]
    fn existing_account_email_is_not_replaced_or_duplicated() {
        let c = ctx(Some("other@mail.com"), "ab12cd34", None);
        let out = annotate("/x?account_email=already%40set.com", &c);
        assert_eq!(out, "/x?account_email=already%40set.com&uid=ab12cd34");
    }

    #[test]
    fn empty_or_missing_token_is_omitted() {
        let out = annotate("/movie/550", &ctx(None, "ab12cd34", Some("")));
        assert!(!out.contains("token="));
        let out = annotate("/movie/550", &ctx(None, "ab12cd34", None));
        assert!(!out.contains("token="));
    }

    #[test]
    fn token_is_appended_raw() {
        let out = annotate("/movie/550", &ctx(None, "ab12cd34", Some("p@ss")));
        assert!(out.ends_with("token=p@ss"));
    }

    #[test]
    fn existing_query_string_keeps_ampersand_separators() {
        let out = annotate("/search?query=dune", &ctx(Some("a@b.com"), "ab12cd34", None));
        assert_eq!(out, "/search?query=dune&account_email=a%40b.com&uid=ab12cd34");
    }

    #[test]
    fn empty_identity_token_appends_nothing() {
        assert_eq!(annotate("/movie/550", &ctx(None, "", None)), "/movie/550");
    }
}
