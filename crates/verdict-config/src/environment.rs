use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Environment variable selecting the deployment environment
pub const ENVIRONMENT_VAR: &str = "APP_ENV";

/// Process-wide development/production flag
///
/// Only the literal `production` selects [`Environment::Production`];
/// every other value, including an unset variable, is development.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    /// Read the environment from `APP_ENV`
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(ENVIRONMENT_VAR).ok().as_deref())
    }

    pub fn from_value(value: Option<&str>) -> Self {
        match value {
            Some("production") => Self::Production,
            _ => Self::Development,
        }
    }

    /// Whether diagnostic detail may be disclosed in responses
    pub const fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }

    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl From<String> for Environment {
    fn from(value: String) -> Self {
        Self::from_value(Some(&value))
    }
}

impl FromStr for Environment {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_value(Some(s)))
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => f.write_str("development"),
            Self::Production => f.write_str("production"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_variable_is_development() {
        temp_env::with_var_unset(ENVIRONMENT_VAR, || {
            assert_eq!(Environment::from_env(), Environment::Development);
        });
    }

    #[test]
    fn production_literal_is_production() {
        temp_env::with_var(ENVIRONMENT_VAR, Some("production"), || {
            let env = Environment::from_env();
            assert!(env.is_production());
            assert!(!env.is_development());
        });
    }

    #[test]
    fn other_values_are_development() {
        for value in ["test", "staging", "Production", ""] {
            temp_env::with_var(ENVIRONMENT_VAR, Some(value), || {
                assert_eq!(Environment::from_env(), Environment::Development, "{value}");
            });
        }
    }

    #[test]
    fn parses_and_displays() {
        assert_eq!("production".parse::<Environment>().unwrap(), Environment::Production);
        assert_eq!(Environment::Production.to_string(), "production");
        assert_eq!(Environment::Development.to_string(), "development");
    }
}
