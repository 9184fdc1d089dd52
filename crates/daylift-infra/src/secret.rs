//! Environment variable API-key resolution.
//!
//! Keys are read from the environment only -- there is no vault in this
//! deployment model. `DAYLIFT_API_KEY` overrides the provider-specific
//! variable. Values are wrapped in [`SecretString`] so they never appear
//! in Debug output or logs.

use secrecy::SecretString;

use daylift_types::config::ProviderKind;

/// Provider-specific environment variable name.
pub fn provider_key_var(provider: ProviderKind) -> &'static str {
    match provider {
        ProviderKind::Openai => "OPENAI_API_KEY",
        ProviderKind::Gemini | ProviderKind::GeminiNative => "GEMINI_API_KEY",
    }
}

/// Resolve the API key for a provider.
///
/// Checks `DAYLIFT_API_KEY` first, then the provider-specific variable.
/// Empty values count as unset.
pub fn resolve_api_key(provider: ProviderKind) -> Option<SecretString> {
    for var in ["DAYLIFT_API_KEY", provider_key_var(provider)] {
        if let Ok(value) = std::env::var(var)
            && !value.trim().is_empty()
        {
            return Some(SecretString::from(value));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn provider_key_var_maps_kinds() {
        assert_eq!(provider_key_var(ProviderKind::Openai), "OPENAI_API_KEY");
        assert_eq!(provider_key_var(ProviderKind::Gemini), "GEMINI_API_KEY");
        assert_eq!(
            provider_key_var(ProviderKind::GeminiNative),
            "GEMINI_API_KEY"
        );
    }

    // One test covers the whole resolution order: the vars are process-wide,
    // so separate tests would race under the parallel test runner.
    #[test]
    fn resolution_order() {
        // SAFETY: this is the only test in the binary touching these vars,
        // and it cleans up after itself.
        unsafe {
            std::env::remove_var("DAYLIFT_API_KEY");
            std::env::remove_var("OPENAI_API_KEY");
        }
        assert!(resolve_api_key(ProviderKind::Openai).is_none());

        unsafe { std::env::set_var("OPENAI_API_KEY", "provider-key") };
        let key = resolve_api_key(ProviderKind::Openai).unwrap();
        assert_eq!(key.expose_secret(), "provider-key");

        unsafe { std::env::set_var("DAYLIFT_API_KEY", "override-key") };
        let key = resolve_api_key(ProviderKind::Openai).unwrap();
        assert_eq!(key.expose_secret(), "override-key");

        // Blank values count as unset.
        unsafe { std::env::set_var("DAYLIFT_API_KEY", "  ") };
        let key = resolve_api_key(ProviderKind::Openai).unwrap();
        assert_eq!(key.expose_secret(), "provider-key");

        unsafe {
            std::env::remove_var("DAYLIFT_API_KEY");
            std::env::remove_var("OPENAI_API_KEY");
        }
    }
}
