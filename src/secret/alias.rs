//! Preset key aliases
//!
//! Short identifiers like `api-token` stand in for the fully-qualified
//! keyring keys configured in [`Settings`].

use crate::config::Settings;

/// Alias identifiers accepted by [`resolve_key`]
pub const PRESET_ALIASES: [&str; 2] = ["api-token", "admin-password"];

/// Map an alias to its configured backend key; other identifiers pass through
pub fn resolve_key<'a>(settings: &'a Settings, identifier: &'a str) -> &'a str {
    match identifier {
        "api-token" => &settings.api_token_key,
        "admin-password" => &settings.admin_password_key,
        other => other,
    }
}

/// Keys checked when no explicit list is given
pub fn default_required_keys(settings: &Settings) -> Vec<String> {
    PRESET_ALIASES
        .iter()
        .map(|alias| resolve_key(settings, alias).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_key_uses_alias() {
        let settings = Settings::default();
        assert_eq!(resolve_key(&settings, "api-token"), settings.api_token_key);
        assert_eq!(
            resolve_key(&settings, "admin-password"),
            settings.admin_password_key
        );
        assert_eq!(resolve_key(&settings, "custom"), "custom");
    }

    #[test]
    fn test_default_required_keys() {
        let settings = Settings {
            api_token_key: "tok".to_string(),
            admin_password_key: "pw".to_string(),
            ..Settings::default()
        };
        assert_eq!(default_required_keys(&settings), vec!["tok", "pw"]);
    }
}
