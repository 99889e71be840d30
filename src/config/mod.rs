#[cfg(feature = "cli")]
pub mod cli;
pub mod environment;

pub use environment::{EnvOverride, Environment, ENVIRONMENT_VAR};

use crate::utils::error::{Result, ScoutError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Frozen configuration handed to every component.
pub type SharedConfig = Arc<AppConfig>;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub apis: ApisConfig,
    pub app: AppSettings,
    pub cache: CacheConfig,
    pub security: SecurityConfig,
    pub analytics: AnalyticsConfig,
    pub error_messages: ErrorMessages,
    pub features: FeatureFlags,
    pub notifications: NotificationsConfig,
    pub development: DevelopmentConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApisConfig {
    pub jobs: ApiConfig,
    pub skills: ApiConfig,
    pub resume: ApiConfig,
    pub military: ApiConfig,
}

impl Default for ApisConfig {
    fn default() -> Self {
        Self {
            jobs: ApiConfig::new(
                100,
                5000,
                &[
                    ("search", "/api/v1/search"),
                    ("details", "/api/v1/job-details"),
                    ("analytics", "/api/v1/analytics"),
                ],
            ),
            skills: ApiConfig::new(
                50,
                3000,
                &[
                    ("assessment", "/api/v1/assessment"),
                    ("analysis", "/api/v1/analysis"),
                    ("recommendations", "/api/v1/recommendations"),
                ],
            ),
            resume: ApiConfig::new(
                30,
                10000,
                &[
                    ("parse", "/api/v1/parse"),
                    ("generate", "/api/v1/generate"),
                    ("optimize", "/api/v1/optimize"),
                ],
            ),
            military: ApiConfig::new(
                50,
                5000,
                &[
                    ("translate", "/api/v1/translate"),
                    ("search", "/api/v1/search"),
                    ("details", "/api/v1/details"),
                ],
            ),
        }
    }
}

/// One external REST API. When `endpoint` is unset the environment's
/// `app.api_base_url` is used as the base.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    pub key: String,
    /// Requests per minute. Informational.
    pub rate_limit: u32,
    /// Milliseconds.
    pub timeout: u64,
    pub endpoints: BTreeMap<String, String>,
}

impl ApiConfig {
    fn new(rate_limit: u32, timeout: u64, routes: &[(&str, &str)]) -> Self {
        Self {
            endpoint: None,
            key: "YOUR_API_KEY".to_string(),
            rate_limit,
            timeout,
            endpoints: routes
                .iter()
                .map(|(name, path)| (name.to_string(), path.to_string()))
                .collect(),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(60, 5000, &[])
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub name: String,
    pub version: String,
    pub environment: Environment,
    pub debug: bool,
    pub api_base_url: String,
    pub default_location: String,
    /// Miles.
    pub default_radius: u32,
    pub max_search_results: u32,
    pub pagination: PaginationConfig,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "SCOUT Career Platform".to_string(),
            version: "1.0.0".to_string(),
            environment: Environment::Development,
            debug: true,
            api_base_url: Environment::Development
                .overrides()
                .api_base_url
                .to_string(),
            default_location: "United States".to_string(),
            default_radius: 50,
            max_search_results: 100,
            pagination: PaginationConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    pub items_per_page: u32,
    pub max_pages: u32,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            items_per_page: 20,
            max_pages: 5,
        }
    }
}

/// Cache durations are in seconds, `max_size` in MB. Nothing caches yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub enabled: bool,
    pub duration: u64,
    pub max_size: u64,
    pub types: BTreeMap<String, u64>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            duration: 3600,
            max_size: 100,
            types: BTreeMap::from([
                ("jobs".to_string(), 1800),
                ("skills".to_string(), 86400),
                ("military".to_string(), 604800),
            ]),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    pub cors_enabled: bool,
    pub allowed_origins: Vec<String>,
    pub rate_limit: RateLimitWindow,
    pub headers: BTreeMap<String, String>,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            cors_enabled: true,
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "https://your-production-domain.com".to_string(),
            ],
            rate_limit: RateLimitWindow::default(),
            headers: BTreeMap::from([
                (
                    "Content-Security-Policy".to_string(),
                    "default-src 'self'".to_string(),
                ),
                ("X-Frame-Options".to_string(), "SAMEORIGIN".to_string()),
                ("X-Content-Type-Options".to_string(), "nosniff".to_string()),
            ]),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RateLimitWindow {
    /// Milliseconds.
    pub window: u64,
    pub max: u32,
}

impl Default for RateLimitWindow {
    fn default() -> Self {
        Self {
            window: 900_000,
            max: 100,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    pub enabled: bool,
    pub provider: String,
    pub tracking_id: String,
    pub track_events: bool,
    pub categories: Vec<String>,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            provider: "YOUR_ANALYTICS_PROVIDER".to_string(),
            tracking_id: "YOUR_TRACKING_ID".to_string(),
            track_events: true,
            categories: ["search", "assessment", "resume", "military"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorMessages {
    pub api: ApiErrorMessages,
    pub validation: ValidationMessages,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiErrorMessages {
    pub not_found: String,
    pub server_error: String,
    pub rate_limit: String,
    pub timeout: String,
    pub unauthorized: String,
}

impl Default for ApiErrorMessages {
    fn default() -> Self {
        Self {
            not_found: "The requested resource was not found.".to_string(),
            server_error: "An unexpected server error occurred.".to_string(),
            rate_limit: "Rate limit exceeded. Please try again later.".to_string(),
            timeout: "The request timed out. Please try again.".to_string(),
            unauthorized: "Unauthorized access. Please check your credentials.".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationMessages {
    pub required: String,
    pub invalid: String,
    pub too_long: String,
    pub too_short: String,
}

impl Default for ValidationMessages {
    fn default() -> Self {
        Self {
            required: "This field is required.".to_string(),
            invalid: "Please enter a valid value.".to_string(),
            too_long: "The input exceeds maximum length.".to_string(),
            too_short: "The input is too short.".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureFlags {
    pub compare_jobs: bool,
    pub skills_assessment: bool,
    pub resume_builder: bool,
    pub military_translator: bool,
    pub salary_estimator: bool,
    pub career_path: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            compare_jobs: true,
            skills_assessment: true,
            resume_builder: true,
            military_translator: true,
            salary_estimator: true,
            career_path: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationsConfig {
    pub enabled: bool,
    pub position: String,
    /// Milliseconds.
    pub duration: u64,
    pub types: BTreeMap<String, NotificationStyle>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationStyle {
    pub icon: String,
    pub class_name: String,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        let style = |icon: &str, class_name: &str| NotificationStyle {
            icon: icon.to_string(),
            class_name: class_name.to_string(),
        };

        Self {
            enabled: true,
            position: "top-right".to_string(),
            duration: 5000,
            types: BTreeMap::from([
                ("success".to_string(), style("✓", "success-notification")),
                ("error".to_string(), style("✕", "error-notification")),
                ("warning".to_string(), style("⚠", "warning-notification")),
                ("info".to_string(), style("ℹ", "info-notification")),
            ]),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DevelopmentConfig {
    pub logging: LoggingConfig,
    pub mocking: MockingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub enabled: bool,
    /// debug, info, warn or error
    pub level: String,
    /// `json` or `compact`
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: "debug".to_string(),
            format: "json".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MockingConfig {
    pub enabled: bool,
    /// Milliseconds.
    pub delay: u64,
}

impl Default for MockingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            delay: 1000,
        }
    }
}

impl AppConfig {
    /// Load a TOML overlay; fields missing from the file keep their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content)?;
        let overlay: toml::Table = toml::from_str(&processed)?;

        let toml::Value::Table(mut merged) = toml::Value::try_from(AppConfig::default())? else {
            return Err(ScoutError::ConfigError {
                message: "default configuration is not a table".to_string(),
            });
        };
        merge_tables(&mut merged, overlay);
        Ok(toml::Value::Table(merged).try_into::<AppConfig>()?)
    }

    /// Replaces `${VAR}` with the variable's value; unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| ScoutError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Apply the environment override and freeze.
    pub fn resolve(mut self, env: Environment) -> SharedConfig {
        let overrides = env.overrides();
        self.app.environment = env;
        self.app.debug = overrides.debug;
        self.app.api_base_url = overrides.api_base_url.to_string();

        tracing::debug!(
            environment = %env,
            api_base_url = %self.app.api_base_url,
            "Configuration resolved"
        );
        Arc::new(self)
    }

    /// Like [`AppConfig::resolve`], but an unknown environment name leaves the
    /// configuration without any override.
    pub fn resolve_named(self, env_name: &str) -> SharedConfig {
        match env_name.parse::<Environment>() {
            Ok(env) => self.resolve(env),
            Err(e) => {
                tracing::warn!("{}; using configuration without overrides", e);
                Arc::new(self)
            }
        }
    }

    /// Absolute URL for a named route of an API.
    pub fn endpoint_url(&self, api: &ApiConfig, route: &str) -> Result<Url> {
        let base = api.endpoint.as_deref().unwrap_or(&self.app.api_base_url);
        let path = api
            .endpoints
            .get(route)
            .ok_or_else(|| ScoutError::ConfigError {
                message: format!("no '{}' route configured", route),
            })?;

        let url = format!(
            "{}/{}",
            base.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Ok(Url::parse(&url)?)
    }
}

/// Deep merge: tables merge key by key, any other value replaces the base.
fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match value {
            toml::Value::Table(overlay_table) => {
                if let Some(toml::Value::Table(base_table)) = base.get_mut(&key) {
                    merge_tables(base_table, overlay_table);
                } else {
                    base.insert(key, toml::Value::Table(overlay_table));
                }
            }
            value => {
                base.insert(key, value);
            }
        }
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("app.api_base_url", &self.app.api_base_url)?;

        let apis = [
            ("apis.jobs", &self.apis.jobs),
            ("apis.skills", &self.apis.skills),
            ("apis.resume", &self.apis.resume),
            ("apis.military", &self.apis.military),
        ];
        for (name, api) in apis {
            if let Some(endpoint) = &api.endpoint {
                validation::validate_url(&format!("{}.endpoint", name), endpoint)?;
            }
            validation::validate_non_empty_string(&format!("{}.key", name), &api.key)?;
            validation::validate_positive_number(&format!("{}.timeout", name), api.timeout, 1)?;
        }

        validation::validate_one_of(
            "development.logging.format",
            &self.development.logging.format,
            &["json", "compact"],
        )?;
        validation::validate_one_of(
            "development.logging.level",
            &self.development.logging.level,
            &["debug", "info", "warn", "error"],
        )?;

        Ok(())
    }
}
