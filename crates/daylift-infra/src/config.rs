//! Configuration loader for Daylift.
//!
//! Reads `config.toml` from the data directory (`~/.daylift/` in
//! production) and deserializes it into [`AppConfig`]. Falls back to
//! defaults when the file is missing or malformed, then applies
//! environment overrides on top.

use std::path::{Path, PathBuf};

use daylift_types::config::AppConfig;

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `DAYLIFT_DATA_DIR` environment variable
/// 2. Platform home directory (`~/.daylift`)
/// 3. Last resort: `./.daylift`
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("DAYLIFT_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".daylift");
    }

    PathBuf::from(".daylift")
}

/// Load configuration from `{data_dir}/config.toml` and apply env overrides.
///
/// - If the file does not exist, starts from [`AppConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and starts from
///   the default.
/// - Environment variables override file values either way.
pub async fn load_config(data_dir: &Path) -> AppConfig {
    let config_path = data_dir.join("config.toml");

    let mut config = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => match toml::from_str::<AppConfig>(&content) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(
                    "Failed to parse {}: {err}, using defaults",
                    config_path.display()
                );
                AppConfig::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(
                "No config.toml found at {}, using defaults",
                config_path.display()
            );
            AppConfig::default()
        }
        Err(err) => {
            tracing::warn!(
                "Failed to read {}: {err}, using defaults",
                config_path.display()
            );
            AppConfig::default()
        }
    };

    apply_env_overrides(&mut config);
    config
}

/// Apply environment overrides on top of the file configuration.
///
/// - `DAYLIFT_PROVIDER` -- provider kind (ignored when unparseable)
/// - `DAYLIFT_MODEL` -- model identifier
/// - `DAYLIFT_DEMO_MODE` -- `1`/`true`/`yes` enable demo mode
/// - `DAYLIFT_TOKEN` -- static service token
/// - `DAYLIFT_HISTORY_FILE` -- history CSV path
pub fn apply_env_overrides(config: &mut AppConfig) {
    if let Ok(provider) = std::env::var("DAYLIFT_PROVIDER") {
        match provider.parse() {
            Ok(kind) => config.provider = kind,
            Err(err) => tracing::warn!("ignoring DAYLIFT_PROVIDER: {err}"),
        }
    }
    if let Ok(model) = std::env::var("DAYLIFT_MODEL")
        && !model.is_empty()
    {
        config.model = model;
    }
    if let Ok(flag) = std::env::var("DAYLIFT_DEMO_MODE") {
        config.demo_mode = parse_flag(&flag);
    }
    if let Ok(token) = std::env::var("DAYLIFT_TOKEN")
        && !token.is_empty()
    {
        config.token = Some(token);
    }
    if let Ok(path) = std::env::var("DAYLIFT_HISTORY_FILE")
        && !path.is_empty()
    {
        config.history_file = path;
    }
}

/// Resolve the history CSV path: absolute paths are used as-is, relative
/// paths land under the data directory.
pub fn history_path(data_dir: &Path, config: &AppConfig) -> PathBuf {
    let path = Path::new(&config.history_file);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        data_dir.join(path)
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "1" | "true" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use daylift_types::config::ProviderKind;
    use tempfile::TempDir;

    #[tokio::test]
    async fn missing_file_returns_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).await;
        assert_eq!(config.provider, ProviderKind::Openai);
        assert_eq!(config.timeout_secs, 15);
    }

    #[tokio::test]
    async fn valid_toml_is_parsed() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(
            tmp.path().join("config.toml"),
            r#"
provider = "gemini"
model = "gemini-2.0-flash"
demo_mode = true
"#,
        )
        .await
        .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config.provider, ProviderKind::Gemini);
        assert_eq!(config.model, "gemini-2.0-flash");
        assert!(config.demo_mode);
    }

    #[tokio::test]
    async fn invalid_toml_returns_defaults() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join("config.toml"), "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config.provider, ProviderKind::Openai);
        assert_eq!(config.model, "gpt-4o-mini");
    }

    #[test]
    fn history_path_respects_absolute() {
        let config = AppConfig {
            history_file: "/var/tmp/history.csv".to_string(),
            ..Default::default()
        };
        let path = history_path(Path::new("/data"), &config);
        assert_eq!(path, Path::new("/var/tmp/history.csv"));
    }

    #[test]
    fn history_path_joins_relative() {
        let config = AppConfig::default();
        let path = history_path(Path::new("/data"), &config);
        assert_eq!(path, Path::new("/data/mood_history.csv"));
    }

    #[test]
    fn parse_flag_accepts_common_truthy_values() {
        assert!(parse_flag("1"));
        assert!(parse_flag("true"));
        assert!(parse_flag("YES"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("off"));
    }
}
