use crate::utils::error::ScoutError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const ENVIRONMENT_VAR: &str = "SCOUT_ENV";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

/// Values an environment forces onto the `app` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvOverride {
    pub debug: bool,
    pub api_base_url: &'static str,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }

    pub fn overrides(&self) -> EnvOverride {
        match self {
            Environment::Development => EnvOverride {
                debug: true,
                api_base_url: "http://localhost:3000",
            },
            Environment::Staging => EnvOverride {
                debug: true,
                api_base_url: "https://staging-api.yourapp.com",
            },
            Environment::Production => EnvOverride {
                debug: false,
                api_base_url: "https://api.yourapp.com",
            },
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ScoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" => Ok(Environment::Development),
            "staging" => Ok(Environment::Staging),
            "production" => Ok(Environment::Production),
            _ => Err(ScoutError::UnknownEnvironmentError {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_environment() {
        assert_eq!(
            "production".parse::<Environment>().unwrap(),
            Environment::Production
        );
        assert_eq!(
            " Staging ".parse::<Environment>().unwrap(),
            Environment::Staging
        );
        assert!("qa".parse::<Environment>().is_err());
    }

    #[test]
    fn test_production_overrides() {
        let overrides = Environment::Production.overrides();
        assert!(!overrides.debug);
        assert_eq!(overrides.api_base_url, "https://api.yourapp.com");
    }
}
