//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. Environment variables (`SCREENKIT_TITLE`, `SCREENKIT_DEBUG`,
//!    `SCREENKIT_FAST_CLEAR`, `SCREENKIT_COLOR`, `NO_COLOR`)
//! 2. TOML file specified via --config CLI flag
//! 3. ./screenkit.toml in the current directory
//! 4. $XDG_CONFIG_HOME/screenkit/screenkit.toml (or ~/.config/screenkit/screenkit.toml)
//! 5. Built-in defaults

use crate::error::ConfigError;
use std::path::{Path, PathBuf};

mod defaults;
mod env;
mod types;

use defaults::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
pub use types::{Config, DisplayConfig, InputConfig};

/// Where the loaded config text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit(PathBuf),
    Local,
    Global(PathBuf),
    BuiltInDefaults,
}

/// Load configuration from disk and environment.
///
/// `path_override` is an explicit config file path (from --config flag).
pub fn load_config(path_override: Option<&str>) -> Result<Config, ConfigError> {
    Ok(load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        config_root_dir,
    )?
    .0)
}

/// Load configuration through injectable file, env, and config-root lookups.
pub fn load_config_from_sources<FRead, FEnv, FRoot>(
    path_override: Option<&str>,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
) -> Result<(Config, ConfigSource), ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let (text, source) = read_config_text(path_override, &read_file, &config_root)?;
    let mut config: Config = toml::from_str(&text)?;
    env::apply_env_overrides(&mut config, &env_lookup)?;
    tracing::debug!(?source, "loaded configuration");
    Ok((config, source))
}

fn read_config_text<FRead, FRoot>(
    path_override: Option<&str>,
    read_file: &FRead,
    config_root: &FRoot,
) -> Result<(String, ConfigSource), ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FRoot: Fn() -> Option<PathBuf>,
{
    if let Some(p) = path_override {
        let path = PathBuf::from(p);
        let text = read_file(&path)?;
        return Ok((text, ConfigSource::Explicit(path)));
    }

    if let Ok(text) = read_file(Path::new(CONFIG_FILE_NAME)) {
        return Ok((text, ConfigSource::Local));
    }
    if let Some(dir) = config_root() {
        let global = dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME);
        if let Ok(text) = read_file(&global) {
            return Ok((text, ConfigSource::Global(global)));
        }
    }

    Ok((String::new(), ConfigSource::BuiltInDefaults))
}

pub fn config_root_dir() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    dirs::home_dir()
        .map(|home| home.join(".config"))
        .or_else(dirs::config_dir)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io;

    fn not_found(_: &Path) -> Result<String, io::Error> {
        Err(io::Error::new(io::ErrorKind::NotFound, "missing"))
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_are_sensible() {
        let c = Config::default();
        assert_eq!(c.display.title, "Untitled");
        assert!(c.display.color);
        assert!(c.display.fast_clear);
        assert!(!c.display.debug);
        assert_eq!(c.input.prompt, " > ");
    }

    #[test]
    fn missing_files_fall_back_to_defaults() {
        let (config, source) =
            load_config_from_sources(None, not_found, no_env, || None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(source, ConfigSource::BuiltInDefaults);
    }

    #[test]
    fn parse_partial_toml() {
        let toml = r#"
            [display]
            title = "Inventory"
            fast_clear = false
        "#;
        let (c, source) = load_config_from_sources(
            Some("custom.toml"),
            |_| Ok(toml.to_string()),
            no_env,
            || None,
        )
        .unwrap();
        assert_eq!(c.display.title, "Inventory");
        assert!(!c.display.fast_clear);
        assert!(c.display.color);
        assert_eq!(c.input.prompt, " > ");
        assert_eq!(source, ConfigSource::Explicit(PathBuf::from("custom.toml")));
    }

    #[test]
    fn explicit_path_must_exist() {
        let err = load_config_from_sources(Some("nope.toml"), not_found, no_env, || None)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)), "got: {err}");
    }

    #[test]
    fn global_config_is_found_under_root() {
        let root = PathBuf::from("/cfg");
        let expected = root.join("screenkit").join("screenkit.toml");
        let wanted = expected.clone();
        let (c, source) = load_config_from_sources(
            None,
            move |path| {
                if path == wanted {
                    Ok("[input]\nprompt = \"? \"\n".to_string())
                } else {
                    not_found(path)
                }
            },
            no_env,
            move || Some(root.clone()),
        )
        .unwrap();
        assert_eq!(c.input.prompt, "? ");
        assert_eq!(source, ConfigSource::Global(expected));
    }

    #[test]
    fn env_overrides_file_values() {
        let env = env_from(&[
            ("SCREENKIT_TITLE", "From Env"),
            ("SCREENKIT_DEBUG", "yes"),
            ("SCREENKIT_FAST_CLEAR", "0"),
        ]);
        let (c, _) = load_config_from_sources(
            Some("x.toml"),
            |_| Ok("[display]\ntitle = \"From File\"\n".to_string()),
            env,
            || None,
        )
        .unwrap();
        assert_eq!(c.display.title, "From Env");
        assert!(c.display.debug);
        assert!(!c.display.fast_clear);
    }

    #[test]
    fn no_color_disables_color_unless_explicit() {
        let (c, _) =
            load_config_from_sources(None, not_found, env_from(&[("NO_COLOR", "1")]), || None)
                .unwrap();
        assert!(!c.display.color);

        let (c, _) = load_config_from_sources(
            None,
            not_found,
            env_from(&[("NO_COLOR", "1"), ("SCREENKIT_COLOR", "on")]),
            || None,
        )
        .unwrap();
        assert!(c.display.color);
    }

    #[test]
    fn invalid_env_bool_is_rejected() {
        let err = load_config_from_sources(
            None,
            not_found,
            env_from(&[("SCREENKIT_DEBUG", "maybe")]),
            || None,
        )
        .unwrap_err();
        assert!(err.to_string().contains("SCREENKIT_DEBUG"), "got: {err}");
    }

    #[test]
    fn malformed_toml_is_reported() {
        let err = load_config_from_sources(
            Some("bad.toml"),
            |_| Ok("[display\n".to_string()),
            no_env,
            || None,
        )
        .unwrap_err();
        assert!(err.to_string().starts_with("toml:"), "got: {err}");
    }

    #[test]
    fn parse_bool_accepts_common_spellings() {
        assert_eq!(env::parse_bool(" TRUE "), Some(true));
        assert_eq!(env::parse_bool("off"), Some(false));
        assert_eq!(env::parse_bool("2"), None);
    }
}
