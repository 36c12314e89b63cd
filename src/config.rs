//! Component configuration: a frozen key/value record with typed accessors.
//!
//! Values are heterogeneous (strings, nested maps), so they are stored as
//! JSON values and validated at the accessor, not at construction. The
//! record has no mutators at all; combining a component's configuration
//! with its parents' happens through [`Configuration::merge`], which builds
//! a new record and never overwrites an existing key — first wins.

use std::collections::HashMap;

use serde_json::Value;

use crate::error::ConfigError;

/// Well-known key: the application context prefix, e.g. `"app"`.
pub const KEY_APP_CONTEXT: &str = "appContext";
/// Well-known key: the name of the theme used when a page names none.
pub const KEY_DEFAULT_THEME: &str = "defaultTheme";
/// Well-known key: HTTP-status-to-page mapping, e.g. `{"404": "/error/404"}`.
pub const KEY_ERROR_PAGES: &str = "errorPages";

/// An immutable component configuration.
///
/// ```rust
/// use serde_json::json;
/// use trellis::Configuration;
///
/// let config = Configuration::from_json(json!({
///     "defaultTheme": "default",
///     "appContext": "app",
/// })).unwrap();
///
/// assert_eq!(config.default_theme_name().unwrap(), "default");
/// assert_eq!(config.app_context().unwrap(), Some("app"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Configuration {
    values: HashMap<String, Value>,
}

impl Configuration {
    pub fn new(values: HashMap<String, Value>) -> Self {
        Self { values }
    }

    /// A configuration with no keys. Every optional accessor returns its
    /// absent case; required accessors fail with `MissingKey`.
    pub fn empty() -> Self {
        Self { values: HashMap::new() }
    }

    /// Builds a configuration from a parsed JSON document.
    ///
    /// The document must be an object; anything else is an
    /// [`ConfigError::InvalidType`] on the (virtual) root key.
    pub fn from_json(value: Value) -> Result<Self, ConfigError> {
        match value {
            Value::Object(map) => Ok(Self { values: map.into_iter().collect() }),
            other => Err(ConfigError::InvalidType {
                key: "<root>".to_owned(),
                expected: "object",
                found: json_type_name(&other),
            }),
        }
    }

    /// The application context prefix, if configured.
    ///
    /// The value must be a non-empty string and must not start with `/` —
    /// the framework prepends the slash when it assembles full URLs.
    pub fn app_context(&self) -> Result<Option<&str>, ConfigError> {
        let Some(value) = self.values.get(KEY_APP_CONTEXT) else {
            return Ok(None);
        };
        let app_context = expect_string(KEY_APP_CONTEXT, value)?;
        if app_context.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: KEY_APP_CONTEXT.to_owned(),
                reason: "app context cannot be empty".to_owned(),
            });
        }
        if app_context.starts_with('/') {
            return Err(ConfigError::InvalidValue {
                key: KEY_APP_CONTEXT.to_owned(),
                reason: "app context cannot start with '/'".to_owned(),
            });
        }
        Ok(Some(app_context))
    }

    /// The default theme name. Required: a component without one cannot
    /// render at all, so absence is an error rather than a fallback.
    pub fn default_theme_name(&self) -> Result<&str, ConfigError> {
        let value = self
            .values
            .get(KEY_DEFAULT_THEME)
            .ok_or_else(|| ConfigError::MissingKey { key: KEY_DEFAULT_THEME.to_owned() })?;
        let name = expect_string(KEY_DEFAULT_THEME, value)?;
        if name.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: KEY_DEFAULT_THEME.to_owned(),
                reason: "default theme name cannot be empty".to_owned(),
            });
        }
        Ok(name)
    }

    /// The error-page mapping (status code → page path). Absent means no
    /// custom error pages: an empty map, not an error.
    pub fn error_pages(&self) -> Result<HashMap<String, String>, ConfigError> {
        let Some(value) = self.values.get(KEY_ERROR_PAGES) else {
            return Ok(HashMap::new());
        };
        let Value::Object(map) = value else {
            return Err(ConfigError::InvalidType {
                key: KEY_ERROR_PAGES.to_owned(),
                expected: "map of string to string",
                found: json_type_name(value),
            });
        };
        let mut pages = HashMap::with_capacity(map.len());
        for (status, page) in map {
            let Value::String(page) = page else {
                return Err(ConfigError::InvalidType {
                    key: KEY_ERROR_PAGES.to_owned(),
                    expected: "map of string to string",
                    found: json_type_name(page),
                });
            };
            pages.insert(status.clone(), page.clone());
        }
        Ok(pages)
    }

    /// Generic typed accessor: the value under `key` as a string.
    ///
    /// Absent keys and explicit JSON nulls are both `None`; any other
    /// non-string value is an [`ConfigError::InvalidType`].
    pub fn get_as_string(&self, key: &str) -> Result<Option<&str>, ConfigError> {
        match self.values.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => expect_string(key, value).map(Some),
        }
    }

    /// Like [`get_as_string`](Self::get_as_string), falling back to
    /// `default` when the key is absent.
    pub fn get_as_string_or<'a>(
        &'a self,
        key: &str,
        default: &'a str,
    ) -> Result<&'a str, ConfigError> {
        Ok(self.get_as_string(key)?.unwrap_or(default))
    }

    /// Whether `key` is present (even with a null value).
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Combines two configurations, first wins.
    ///
    /// Every key of `self` survives untouched; keys of `other` are taken
    /// only where `self` has none. Pure — both inputs are left as they were.
    pub fn merge(&self, other: &Configuration) -> Configuration {
        let mut values = self.values.clone();
        for (key, value) in &other.values {
            values.entry(key.clone()).or_insert_with(|| value.clone());
        }
        Configuration { values }
    }
}

fn expect_string<'a>(key: &str, value: &'a Value) -> Result<&'a str, ConfigError> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(ConfigError::InvalidType {
            key: key.to_owned(),
            expected: "string",
            found: json_type_name(other),
        }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
