//! Configuration schema and layered loading
//!
//! Settings are resolved once at startup and then passed around explicitly
//! (usually behind an `Arc`). Priority, highest first:
//!
//! 1. Command-line flags (applied by the binary after [`Settings::load`])
//! 2. Environment variables (a `.env` file is loaded into the environment by the binary)
//! 3. TOML configuration file
//! 4. Built-in defaults (code constants below)
//!
//! Environment variable names follow the plain upper-cased names used by
//! existing deployments (`OPENAI_API_KEY`, `MAX_TEXT_LENGTH`, ...). Settings
//! that were added later use a `FACTIFY_` prefix.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

/// Environment variable naming an explicit TOML config file
pub const CONFIG_PATH_ENV: &str = "FACTIFY_CONFIG";

/// Default OpenAI-compatible API root
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Default Google Fact Check Tools API root
pub const DEFAULT_FACT_CHECK_BASE_URL: &str = "https://factchecktools.googleapis.com/v1alpha1";

/// Complete service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app_name: String,
    pub version: String,
    pub debug: bool,
    pub server: ServerConfig,
    pub credentials: Credentials,
    pub ai: AiConfig,
    pub fact_check: FactCheckConfig,
    pub limits: TextLimits,
    pub security: SecurityConfig,
    pub logging: LoggingConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: "Factify API".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            debug: false,
            server: ServerConfig::default(),
            credentials: Credentials::default(),
            ai: AiConfig::default(),
            fact_check: FactCheckConfig::default(),
            limits: TextLimits::default(),
            security: SecurityConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// HTTP listener and CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Allowed cross-origin callers; `"*"` allows any origin
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            allowed_origins: vec!["*".to_string()],
        }
    }
}

impl ServerConfig {
    /// True when any origin may call the API
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o.trim() == "*")
    }
}

/// Upstream provider credentials
///
/// `Debug` is implemented by hand so keys never reach the logs.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    pub openai_api_key: Option<String>,
    pub google_fact_check_api_key: Option<String>,
    pub anthropic_api_key: Option<String>,
    pub google_ai_api_key: Option<String>,
}

impl Credentials {
    pub fn openai(&self) -> Option<&str> {
        valid_key(&self.openai_api_key)
    }

    pub fn google_fact_check(&self) -> Option<&str> {
        valid_key(&self.google_fact_check_api_key)
    }

    pub fn anthropic(&self) -> Option<&str> {
        valid_key(&self.anthropic_api_key)
    }

    pub fn google_ai(&self) -> Option<&str> {
        valid_key(&self.google_ai_api_key)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("openai_api_key", &redact(&self.openai_api_key))
            .field("google_fact_check_api_key", &redact(&self.google_fact_check_api_key))
            .field("anthropic_api_key", &redact(&self.anthropic_api_key))
            .field("google_ai_api_key", &redact(&self.google_ai_api_key))
            .finish()
    }
}

/// AI analysis provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Provider selector: "openai", "anthropic" or "google"
    pub provider: String,
    pub model: String,
    pub base_url: String,
    pub timeout_seconds: u64,
    pub max_tokens: u32,
    pub temperature: f32,
    /// Characters of the AI assessment quoted in the analysis text
    pub excerpt_chars: usize,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            provider: "openai".to_string(),
            model: "gpt-4".to_string(),
            base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            timeout_seconds: 30,
            max_tokens: 1200,
            temperature: 0.2,
            excerpt_chars: 300,
        }
    }
}

impl AiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

/// Fact-check database lookup configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FactCheckConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
    /// Provider query length limit (characters)
    pub query_max_chars: usize,
    /// Only request claim reviews newer than this many days
    pub max_age_days: u32,
    /// Claim items kept per database response
    pub max_claims: usize,
    pub language_code: String,
}

impl Default for FactCheckConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_FACT_CHECK_BASE_URL.to_string(),
            timeout_seconds: 15,
            query_max_chars: 500,
            max_age_days: 365,
            max_claims: 5,
            language_code: "en".to_string(),
        }
    }
}

impl FactCheckConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

/// Request text bounds and response caps
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TextLimits {
    pub min_text_length: usize,
    pub max_text_length: usize,
    pub max_sources: usize,
}

impl Default for TextLimits {
    fn default() -> Self {
        Self {
            min_text_length: 10,
            max_text_length: 5000,
            max_sources: 5,
        }
    }
}

/// Declared for deployment tooling; nothing in this service enforces these
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    pub secret_key: String,
    pub rate_limit_per_minute: u32,
    pub database_url: String,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            secret_key: "your-secret-key-change-in-production".to_string(),
            rate_limit_per_minute: 60,
            database_url: "sqlite:///./factify.db".to_string(),
        }
    }
}

impl fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurityConfig")
            .field("secret_key", &"***")
            .field("rate_limit_per_minute", &self.rate_limit_per_minute)
            .field("database_url", &self.database_url)
            .finish()
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level or filter directive (trace, debug, info, warn, error)
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(Error::Config(format!("Unknown log format: {}", other))),
        }
    }
}

impl Settings {
    /// Load settings: defaults → TOML file (if any) → environment
    ///
    /// `config_path` is an explicit file (e.g. from `--config`); it must exist.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut settings = match resolve_config_path(config_path)? {
            Some(path) => {
                info!("Loading configuration from {}", path.display());
                Self::from_toml_file(&path)?
            }
            None => {
                info!("No configuration file found, using built-in defaults");
                Self::default()
            }
        };

        settings.apply_env(|key| std::env::var(key).ok())?;
        settings.validate()?;
        Ok(settings)
    }

    /// Parse a TOML file; missing sections and keys take their defaults
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Read {} failed: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut settings: Self = toml::from_str(content)?;
        settings.ai.provider = settings.ai.provider.trim().to_ascii_lowercase();
        Ok(settings)
    }

    /// Overlay values from an environment lookup
    ///
    /// Empty values are ignored. Unparseable numbers are a configuration error.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = EnvReader { lookup };

        if let Some(v) = env.parse::<Flag>("DEBUG")? {
            self.debug = v.0;
        }

        if let Some(v) = env.string("FACTIFY_HOST") {
            self.server.host = v;
        }
        if let Some(v) = env.parse("FACTIFY_PORT")? {
            self.server.port = v;
        }
        if let Some(v) = env.string("ALLOWED_ORIGINS") {
            self.server.allowed_origins = split_list(&v);
        }

        if let Some(v) = env.string("OPENAI_API_KEY") {
            self.credentials.openai_api_key = Some(v);
        }
        if let Some(v) = env.string("GOOGLE_FACT_CHECK_API_KEY") {
            self.credentials.google_fact_check_api_key = Some(v);
        }
        if let Some(v) = env.string("ANTHROPIC_API_KEY") {
            self.credentials.anthropic_api_key = Some(v);
        }
        if let Some(v) = env.string("GOOGLE_AI_API_KEY") {
            self.credentials.google_ai_api_key = Some(v);
        }

        if let Some(v) = env.string("FACTIFY_AI_PROVIDER") {
            self.ai.provider = v.to_ascii_lowercase();
        }
        if let Some(v) = env.string("FACTIFY_OPENAI_BASE_URL") {
            self.ai.base_url = v;
        }
        if let Some(v) = env.parse("TIMEOUT_SECONDS")? {
            self.ai.timeout_seconds = v;
        }

        if let Some(v) = env.string("FACTIFY_FACT_CHECK_BASE_URL") {
            self.fact_check.base_url = v;
        }
        if let Some(v) = env.parse("FACTIFY_FACT_CHECK_TIMEOUT_SECONDS")? {
            self.fact_check.timeout_seconds = v;
        }

        if let Some(v) = env.parse("MIN_TEXT_LENGTH")? {
            self.limits.min_text_length = v;
        }
        if let Some(v) = env.parse("MAX_TEXT_LENGTH")? {
            self.limits.max_text_length = v;
        }

        if let Some(v) = env.string("SECRET_KEY") {
            self.security.secret_key = v;
        }
        if let Some(v) = env.parse("RATE_LIMIT_PER_MINUTE")? {
            self.security.rate_limit_per_minute = v;
        }
        if let Some(v) = env.string("DATABASE_URL") {
            self.security.database_url = v;
        }

        if let Some(v) = env.string("FACTIFY_LOG_LEVEL") {
            self.logging.level = v;
        }
        if let Some(v) = env.parse("FACTIFY_LOG_FORMAT")? {
            self.logging.format = v;
        }

        Ok(())
    }

    /// Reject settings the service cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.limits.min_text_length == 0 {
            return Err(Error::Config("min_text_length must be at least 1".to_string()));
        }
        if self.limits.min_text_length > self.limits.max_text_length {
            return Err(Error::Config(format!(
                "min_text_length ({}) exceeds max_text_length ({})",
                self.limits.min_text_length, self.limits.max_text_length
            )));
        }
        if self.limits.max_sources == 0 {
            return Err(Error::Config("max_sources must be at least 1".to_string()));
        }
        if self.ai.timeout_seconds == 0 || self.fact_check.timeout_seconds == 0 {
            return Err(Error::Config("Provider timeouts must be greater than zero".to_string()));
        }
        if self.ai.excerpt_chars == 0 {
            return Err(Error::Config("ai.excerpt_chars must be at least 1".to_string()));
        }
        if !(0.0..=2.0).contains(&self.ai.temperature) {
            return Err(Error::Config(format!(
                "AI temperature {} outside 0.0-2.0",
                self.ai.temperature
            )));
        }
        Ok(())
    }
}

/// Validate API key (non-empty, non-whitespace)
pub fn is_valid_key(key: &str) -> bool {
    !key.trim().is_empty()
}

fn valid_key(key: &Option<String>) -> Option<&str> {
    key.as_deref().filter(|k| is_valid_key(k))
}

fn redact(key: &Option<String>) -> Option<&'static str> {
    valid_key(key).map(|_| "***")
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Pick the TOML file to read, if any
///
/// Priority: explicit path → `FACTIFY_CONFIG` → `<config_dir>/factify/factify.toml`.
/// Explicit paths must exist; the platform default is optional.
fn resolve_config_path(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        return require_file(path.to_path_buf());
    }

    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        if !path.trim().is_empty() {
            return require_file(PathBuf::from(path));
        }
    }

    let default_path = dirs::config_dir().map(|d| d.join("factify").join("factify.toml"));
    match default_path {
        Some(path) if path.exists() => Ok(Some(path)),
        Some(path) => {
            debug!("Default config file not present: {}", path.display());
            Ok(None)
        }
        None => Ok(None),
    }
}

fn require_file(path: PathBuf) -> Result<Option<PathBuf>> {
    if path.is_file() {
        Ok(Some(path))
    } else {
        Err(Error::Config(format!("Config file not found: {}", path.display())))
    }
}

struct EnvReader<F> {
    lookup: F,
}

impl<F> EnvReader<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn string(&self, key: &str) -> Option<String> {
        (self.lookup)(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        match self.string(key) {
            Some(raw) => raw
                .parse::<T>()
                .map(Some)
                .map_err(|e| Error::Config(format!("{}={:?} is invalid: {}", key, raw, e))),
            None => Ok(None),
        }
    }
}

/// Boolean accepting the usual environment spellings
struct Flag(bool);

impl FromStr for Flag {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(Flag(true)),
            "0" | "false" | "no" | "off" => Ok(Flag(false)),
            other => Err(format!("expected a boolean, got {}", other)),
        }
    }
}
