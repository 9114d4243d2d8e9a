//! Status command: show effective proxy configuration and stored state.

use anyhow::Result;
use tpx_core::config::{ProxyConfig, ProxyMode};
use tpx_core::hooks::PROXY_FLAG_KEY;
use tpx_core::identity::UID_KEY;
use tpx_core::store::KvStore;

/// Print the effective configuration and what the store currently holds.
pub fn run_status(cfg: &ProxyConfig, store: &dyn KvStore) -> Result<()> {
    let mode = match cfg.mode {
        ProxyMode::Enabled => "enabled",
        ProxyMode::Disabled => "disabled",
    };
    let active = if cfg.is_active() {
        "active"
    } else {
        "inactive (pass-through)"
    };
    let auth = match cfg.auth_token.as_deref() {
        Some(t) if !t.is_empty() => "set",
        _ => "none",
    };
    let uid = store.get(UID_KEY, "");

    println!("mode:       {} ({})", mode, active);
    println!("base_url:   {}", cfg.base_url);
    println!("auth_token: {}", auth);
    println!(
        "uid:        {}",
        if uid.is_empty() { "(not generated)" } else { uid.as_str() }
    );
    println!("installed:  {}", store.get(PROXY_FLAG_KEY, "false"));
    Ok(())
}
