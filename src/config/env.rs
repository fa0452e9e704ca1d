//! Environment overrides.
//!
//! `SCREENKIT_*` variables win over file values. `NO_COLOR` (any non-empty
//! value) disables color unless `SCREENKIT_COLOR` is set explicitly.

use crate::error::ConfigError;

use super::Config;

pub(super) fn apply_env_overrides<FEnv>(
    config: &mut Config,
    env_lookup: &FEnv,
) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(title) = env_lookup("SCREENKIT_TITLE") {
        config.display.title = title;
    }
    if let Some(debug) = env_bool(env_lookup, "SCREENKIT_DEBUG")? {
        config.display.debug = debug;
    }
    if let Some(fast_clear) = env_bool(env_lookup, "SCREENKIT_FAST_CLEAR")? {
        config.display.fast_clear = fast_clear;
    }
    match env_bool(env_lookup, "SCREENKIT_COLOR")? {
        Some(color) => config.display.color = color,
        None => {
            if env_lookup("NO_COLOR").is_some_and(|v| !v.is_empty()) {
                config.display.color = false;
            }
        }
    }
    Ok(())
}

fn env_bool<FEnv>(env_lookup: &FEnv, name: &str) -> Result<Option<bool>, ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    let Some(raw) = env_lookup(name) else {
        return Ok(None);
    };
    parse_bool(&raw).map(Some).ok_or_else(|| {
        ConfigError::Invalid(format!(
            "invalid {name} value `{raw}`: expected true/false, 1/0, yes/no, or on/off"
        ))
    })
}

pub(super) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
