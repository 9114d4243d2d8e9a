//! Settings-panel suppression data.
//!
//! When the host opens its TMDB settings panel, the integration layer
//! removes the proxy-related controls so the user cannot toggle them back.
//! Only the selector data lives here; the DOM work belongs to the host glue.

/// Settings panel whose proxy controls are hidden.
pub const SETTINGS_PANEL: &str = "tmdb";

/// Attribute selectors removed from the panel body when it opens.
pub const HIDDEN_SELECTORS: [&str; 3] = [
    r#"[data-parent="proxy"]"#,
    r#"[data-name="proxy_tmdb"]"#,
    r#"[data-name="proxy_tmdb_auto"]"#,
];

/// Selectors to remove when the panel named `panel` opens. Empty for every
/// panel other than the TMDB one.
pub fn selectors_to_remove(panel: &str) -> &'static [&'static str] {
    if panel == SETTINGS_PANEL {
        &HIDDEN_SELECTORS
    } else {
        &[]
    }
}
