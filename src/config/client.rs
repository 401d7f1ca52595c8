//! AI client configuration records
//!
//! This module handles validation and coercion of raw JSON mappings into
//! typed client configurations, and persistence of those configurations
//! as JSON files on disk.

use crate::error::{Result, ToolkitError};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Models accepted in the `model` field
pub const SUPPORTED_MODELS: &[&str] = &["gpt-4.1-mini", "gpt-4o", "claude-3-sonnet"];

pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_MAX_OUTPUT_TOKENS: i64 = 1024;
pub const DEFAULT_TOP_P: f64 = 0.95;
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Field names owned by the typed record; never stored in `extras`
pub const RESERVED_FIELDS: [&str; 6] = [
    "model",
    "temperature",
    "max_output_tokens",
    "top_p",
    "endpoint",
    "api_key_env",
];

/// Configuration values for an AI chat client
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfiguration {
    pub model: String,
    pub temperature: f64,
    pub max_output_tokens: i64,
    pub top_p: f64,
    pub endpoint: String,
    pub api_key_env: String,
    /// Pass-through fields outside the fixed schema
    pub extras: Map<String, Value>,
}

impl ClientConfiguration {
    /// Create a configuration for `model` with every other field defaulted
    pub fn new<S: Into<String>>(model: S) -> Self {
        Self {
            model: model.into(),
            temperature: DEFAULT_TEMPERATURE,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
            top_p: DEFAULT_TOP_P,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            extras: Map::new(),
        }
    }

    /// Attach pass-through fields, rejecting any that shadow a reserved name
    pub fn with_extras(mut self, extras: Map<String, Value>) -> Result<Self> {
        let mut shadowed: Vec<&str> = extras
            .keys()
            .map(String::as_str)
            .filter(|key| is_reserved(key))
            .collect();
        if !shadowed.is_empty() {
            shadowed.sort_unstable();
            return Err(ToolkitError::config(format!(
                "extras cannot redefine reserved fields: {}",
                shadowed.join(", ")
            )));
        }

        self.extras = extras;
        Ok(self)
    }

    /// Validate and coerce a raw JSON mapping into a configuration
    pub fn from_map(raw: &Map<String, Value>) -> Result<Self> {
        let model = validate_model(raw.get("model"), SUPPORTED_MODELS)?;

        let temperature = coerce_float(raw.get("temperature"), DEFAULT_TEMPERATURE, "temperature")?;
        if !(0.0..=2.0).contains(&temperature) {
            return Err(ToolkitError::config("`temperature` must be between 0 and 2."));
        }

        let max_output_tokens = coerce_int(
            raw.get("max_output_tokens"),
            DEFAULT_MAX_OUTPUT_TOKENS,
            "max_output_tokens",
        )?;
        if max_output_tokens <= 0 {
            return Err(ToolkitError::config("`max_output_tokens` must be positive."));
        }

        let top_p = coerce_float(raw.get("top_p"), DEFAULT_TOP_P, "top_p")?;
        if !(top_p > 0.0 && top_p <= 1.0) {
            return Err(ToolkitError::config(
                "`top_p` must be between 0 (exclusive) and 1 (inclusive).",
            ));
        }

        let endpoint = raw
            .get("endpoint")
            .map(stringify)
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        if endpoint.is_empty() {
            return Err(ToolkitError::config("`endpoint` cannot be empty."));
        }

        let api_key_env = raw
            .get("api_key_env")
            .map(stringify)
            .unwrap_or_else(|| DEFAULT_API_KEY_ENV.to_string());
        if api_key_env.is_empty() {
            return Err(ToolkitError::config("`api_key_env` cannot be empty."));
        }

        let extras = raw
            .iter()
            .filter(|(key, _)| !is_reserved(key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Ok(Self {
            model,
            temperature,
            max_output_tokens,
            top_p,
            endpoint,
            api_key_env,
            extras,
        })
    }

    /// Flatten the configuration into a single JSON object.
    ///
    /// Extras are merged at the top level. The typed fields are written last,
    /// so an extras entry can never replace one of them.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut payload = self.extras.clone();
        payload.insert("model".to_string(), Value::from(self.model.clone()));
        payload.insert("temperature".to_string(), Value::from(self.temperature));
        payload.insert(
            "max_output_tokens".to_string(),
            Value::from(self.max_output_tokens),
        );
        payload.insert("top_p".to_string(), Value::from(self.top_p));
        payload.insert("endpoint".to_string(), Value::from(self.endpoint.clone()));
        payload.insert(
            "api_key_env".to_string(),
            Value::from(self.api_key_env.clone()),
        );
        payload
    }

    /// Render as pretty JSON with sorted keys and two-space indentation
    pub fn to_json_pretty(&self) -> Result<String> {
        let sorted: BTreeMap<String, Value> = self.to_map().into_iter().collect();
        Ok(serde_json::to_string_pretty(&sorted)?)
    }
}

/// Load a configuration file from disk
pub fn load_configuration<P: AsRef<Path>>(path: P) -> Result<ClientConfiguration> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading client configuration");

    if !path.exists() {
        return Err(ToolkitError::config(format!(
            "Configuration file {} does not exist.",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ToolkitError::config(format!(
            "Configuration file {} could not be read: {e}",
            path.display()
        ))
    })?;

    let data: Value = serde_json::from_str(&contents).map_err(|e| {
        ToolkitError::config(format!(
            "Configuration file {} is not valid JSON: {e}",
            path.display()
        ))
    })?;

    match data {
        Value::Object(raw) => ClientConfiguration::from_map(&raw),
        _ => Err(ToolkitError::config(
            "Configuration file must contain a JSON object.",
        )),
    }
}

/// Write a configuration to disk as formatted JSON, replacing any existing file
pub fn dump_configuration<P: AsRef<Path>>(config: &ClientConfiguration, path: P) -> Result<()> {
    let path = path.as_ref();
    let mut contents = config.to_json_pretty()?;
    contents.push('\n');

    fs::write(path, contents)?;
    debug!(path = %path.display(), "wrote client configuration");

    Ok(())
}

pub fn is_reserved(key: &str) -> bool {
    RESERVED_FIELDS.contains(&key)
}

fn validate_model(raw: Option<&Value>, allowed: &[&str]) -> Result<String> {
    let raw = raw.ok_or_else(|| {
        ToolkitError::config("`model` is required in the configuration file.")
    })?;

    let model = stringify(raw).trim().to_string();
    if model.is_empty() {
        return Err(ToolkitError::config("`model` cannot be empty."));
    }

    if !allowed.is_empty() && !allowed.contains(&model.as_str()) {
        let mut sorted = allowed.to_vec();
        sorted.sort_unstable();
        return Err(ToolkitError::config(format!(
            "`model` must be one of [{}], received {:?}.",
            sorted.join(", "),
            model
        )));
    }

    Ok(model)
}

/// Text form of a raw value; strings are taken without quotes
fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn coerce_float(raw: Option<&Value>, default: f64, name: &str) -> Result<f64> {
    let Some(value) = raw else {
        return Ok(default);
    };

    let coerced = match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    coerced.ok_or_else(|| {
        ToolkitError::config(format!("{name} must be a number, received {value}"))
    })
}

fn coerce_int(raw: Option<&Value>, default: i64, name: &str) -> Result<i64> {
    let Some(value) = raw else {
        return Ok(default);
    };

    let coerced = match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(truncate_float)),
        Value::Bool(b) => Some(i64::from(*b)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    coerced.ok_or_else(|| {
        ToolkitError::config(format!("{name} must be an integer, received {value}"))
    })
}

// Non-integral floats truncate toward zero.
fn truncate_float(value: f64) -> Option<i64> {
    let truncated = value.trunc();
    if truncated.is_finite() && truncated >= i64::MIN as f64 && truncated < i64::MAX as f64 {
        Some(truncated as i64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test input must be an object"),
        }
    }

    #[test]
    fn test_defaults_applied() {
        let config = ClientConfiguration::from_map(&raw(json!({"model": "gpt-4o"}))).unwrap();

        assert_eq!(config, ClientConfiguration::new("gpt-4o"));
    }

    #[test]
    fn test_model_trimmed_and_stringified() {
        let config =
            ClientConfiguration::from_map(&raw(json!({"model": "  gpt-4o  "}))).unwrap();
        assert_eq!(config.model, "gpt-4o");

        let err = ClientConfiguration::from_map(&raw(json!({"model": 42}))).unwrap_err();
        assert!(err.to_string().contains("received \"42\""));
    }

    #[test]
    fn test_unknown_model_lists_sorted_allow_list() {
        let err = ClientConfiguration::from_map(&raw(json!({"model": "unknown"}))).unwrap_err();

        assert_eq!(
            err.to_string(),
            "`model` must be one of [claude-3-sonnet, gpt-4.1-mini, gpt-4o], received \"unknown\"."
        );
    }

    #[test]
    fn test_empty_allow_list_accepts_any_model() {
        let model = validate_model(Some(&json!("anything-goes")), &[]).unwrap();
        assert_eq!(model, "anything-goes");
    }

    #[test]
    fn test_float_coercion() {
        assert_eq!(coerce_float(Some(&json!("0.5")), 0.7, "t").unwrap(), 0.5);
        assert_eq!(coerce_float(Some(&json!(" 1 ")), 0.7, "t").unwrap(), 1.0);
        assert_eq!(coerce_float(Some(&json!(true)), 0.7, "t").unwrap(), 1.0);
        assert_eq!(coerce_float(None, 0.7, "t").unwrap(), 0.7);
        assert!(coerce_float(Some(&Value::Null), 0.7, "t").is_err());
        assert!(coerce_float(Some(&json!([1])), 0.7, "t").is_err());
    }

    #[test]
    fn test_int_coercion() {
        assert_eq!(coerce_int(Some(&json!("12")), 1, "n").unwrap(), 12);
        assert_eq!(coerce_int(Some(&json!(3.9)), 1, "n").unwrap(), 3);
        assert_eq!(coerce_int(Some(&json!(false)), 1, "n").unwrap(), 0);
        assert!(coerce_int(Some(&json!("3.5")), 1, "n").is_err());
        assert!(coerce_int(Some(&json!({"a": 1})), 1, "n").is_err());
    }

    #[test]
    fn test_non_finite_temperature_rejected() {
        let err = ClientConfiguration::from_map(&raw(json!({
            "model": "gpt-4o",
            "temperature": "nan"
        })))
        .unwrap_err();

        assert!(err.to_string().contains("between 0 and 2"));
    }

    #[test]
    fn test_with_extras_rejects_reserved_names() {
        let mut extras = Map::new();
        extras.insert("top_p".to_string(), json!(0.1));
        extras.insert("timeout".to_string(), json!(5));

        let err = ClientConfiguration::new("gpt-4o")
            .with_extras(extras)
            .unwrap_err();
        assert!(err.to_string().contains("top_p"));
    }

    #[test]
    fn test_typed_fields_win_over_extras() {
        let mut config = ClientConfiguration::new("gpt-4o");
        config.extras.insert("model".to_string(), json!("shadow"));

        let payload = config.to_map();
        assert_eq!(payload["model"], json!("gpt-4o"));
    }
}
