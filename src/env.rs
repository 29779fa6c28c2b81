use std::collections::BTreeMap;
use std::env;
use std::fmt;

use serde::Serialize;

pub const APP_TOKEN_KEY: &str = "APP_TOKEN";
pub const PYTHON_ENV_KEY: &str = "PYTHON_ENV";

pub const DEFAULT_APP_TOKEN: &str = "";
pub const DEFAULT_PYTHON_ENV: &str = "development";

/// `PYTHON_ENV` value that selects production services.
pub const PRODUCTION: &str = "production";

/// Snapshot of the job environment, built fresh on every read.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Environment {
    #[serde(rename = "APP_TOKEN")]
    app_token: String,
    #[serde(rename = "PYTHON_ENV")]
    python_env: String,
}

impl Environment {
    /// Builds a snapshot from an arbitrary variable source. Unset and empty
    /// values both fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            app_token: or_default(lookup(APP_TOKEN_KEY), DEFAULT_APP_TOKEN),
            python_env: or_default(lookup(PYTHON_ENV_KEY), DEFAULT_PYTHON_ENV),
        }
    }

    pub fn app_token(&self) -> &str {
        &self.app_token
    }

    pub fn python_env(&self) -> &str {
        &self.python_env
    }

    pub fn has_token(&self) -> bool {
        !self.app_token.is_empty()
    }

    pub fn is_production(&self) -> bool {
        self.python_env == PRODUCTION
    }

    pub fn to_map(&self) -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            (APP_TOKEN_KEY, self.app_token.clone()),
            (PYTHON_ENV_KEY, self.python_env.clone()),
        ])
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            app_token: DEFAULT_APP_TOKEN.to_string(),
            python_env: DEFAULT_PYTHON_ENV.to_string(),
        }
    }
}

// Keeps the token out of logs.
impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = if self.has_token() { "***" } else { "" };
        f.debug_struct("Environment")
            .field("app_token", &token)
            .field("python_env", &self.python_env)
            .finish()
    }
}

fn or_default(value: Option<String>, default: &str) -> String {
    value
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Reads the process environment. Never fails; missing values become defaults.
/// Non-Unicode values are decoded lossily rather than discarded.
pub fn init_defaults() -> Environment {
    Environment::from_lookup(|key| {
        env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn empty_values_fall_back_to_defaults() {
        let env =
            Environment::from_lookup(lookup_from(&[(APP_TOKEN_KEY, ""), (PYTHON_ENV_KEY, "")]));

        assert_eq!(env, Environment::default());
    }

    #[test]
    fn production_match_is_exact() {
        let prod = Environment::from_lookup(lookup_from(&[(PYTHON_ENV_KEY, "production")]));
        let upper = Environment::from_lookup(lookup_from(&[(PYTHON_ENV_KEY, "Production")]));

        assert!(prod.is_production());
        assert!(!upper.is_production());
        assert!(!Environment::default().is_production());
    }

    #[test]
    fn debug_masks_token() {
        let env = Environment::from_lookup(lookup_from(&[(APP_TOKEN_KEY, "secret123")]));
        let rendered = format!("{env:?}");

        assert!(!rendered.contains("secret123"));
        assert!(rendered.contains("***"));
        assert!(rendered.contains("development"));
    }

    #[test]
    fn or_default_keeps_non_empty_values() {
        assert_eq!(or_default(None, "development"), "development");
        assert_eq!(or_default(Some(String::new()), "development"), "development");
        assert_eq!(or_default(Some(" ".to_string()), "development"), " ");
    }
}
