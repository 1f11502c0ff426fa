//! Handlers for `dojorc get/save/set/path`

use anyhow::{bail, Context, Result};
use serde_json::{Map, Value};

use dojorc_core::{ConfigStore, SaveOutcome};

/// Print a command's config as pretty JSON
pub fn get(store: &ConfigStore, command: &str) -> Result<()> {
    let config = store
        .get(command)
        .with_context(|| format!("Failed to read config for '{command}'"))?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

/// Merge a JSON object literal into a command's config
pub fn save(store: &ConfigStore, command: &str, json: &str) -> Result<()> {
    let config: Value = serde_json::from_str(json).context("Invalid JSON argument")?;
    if !config.is_object() {
        bail!("Config must be a JSON object, got: {json}");
    }
    persist(store, command, config)
}

/// Merge `KEY=VALUE` pairs into a command's config
pub fn set(store: &ConfigStore, command: &str, pairs: &[String]) -> Result<()> {
    let mut config = Map::new();
    for pair in pairs {
        let Some((key, raw)) = pair.split_once('=') else {
            bail!("Invalid pair format: '{pair}'. Use KEY=VALUE.");
        };
        if key.is_empty() {
            bail!("Invalid pair format: '{pair}'. Key cannot be empty.");
        }
        config.insert(key.to_string(), parse_value(raw));
    }
    persist(store, command, Value::Object(config))
}

/// Print the config file path, if inside a package
#[allow(clippy::unnecessary_wraps)]
pub fn path(store: &ConfigStore) -> Result<()> {
    match store.config_path() {
        Some(path) => println!("{}", path.display()),
        None => println!("No package directory found."),
    }
    Ok(())
}

fn persist(store: &ConfigStore, command: &str, config: Value) -> Result<()> {
    let outcome = store
        .save(config, command)
        .with_context(|| format!("Failed to save config for '{command}'"))?;
    if let SaveOutcome::Written(path) = outcome {
        println!("Saved '{command}' config to {}", path.display());
    }
    Ok(())
}

/// Values that parse as JSON keep their type, everything else is a string
fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_value_types() {
        assert_eq!(parse_value("8080"), json!(8080));
        assert_eq!(parse_value("true"), json!(true));
        assert_eq!(parse_value("[\"a\"]"), json!(["a"]));
        assert_eq!(parse_value("dist"), json!("dist"));
        assert_eq!(parse_value(""), json!(""));
    }
}
