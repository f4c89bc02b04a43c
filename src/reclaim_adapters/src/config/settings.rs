use std::sync::LazyLock;

use axum::http::HeaderValue;
use axum::http::header::InvalidHeaderValue;
use secrecy::Secret;
use serde::Deserialize;

use super::constants::{CONFIG_FILE_NAME, env, prod};

static SETTINGS: LazyLock<ReclaimServiceSetting> = LazyLock::new(|| {
    ReclaimServiceSetting::build().expect("Failed to load reclaim service settings")
});

/// Service settings, sourced from an optional `reclaim.json` file with
/// environment variables taking precedence.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ReclaimServiceSetting {
    pub app: AppSetting,
    pub postgres: PostgresSetting,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AppSetting {
    pub address: String,
    pub allowed_origins: Option<AllowedOrigins>,
}

impl Default for AppSetting {
    fn default() -> Self {
        Self {
            address: prod::APP_ADDRESS.to_string(),
            allowed_origins: None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PostgresSetting {
    pub url: Secret<String>,
}

impl Default for PostgresSetting {
    fn default() -> Self {
        Self {
            url: Secret::new(prod::DATABASE_URL.to_string()),
        }
    }
}

impl ReclaimServiceSetting {
    pub fn load() -> &'static Self {
        &SETTINGS
    }

    fn build() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let file = config::File::with_name(CONFIG_FILE_NAME).required(false);
        let mut settings: ReclaimServiceSetting = config::Config::builder()
            .add_source(file)
            .build()?
            .try_deserialize()?;

        if let Ok(address) = std::env::var(env::APP_ADDRESS_ENV_VAR) {
            settings.app.address = address;
        }
        if let Ok(url) = std::env::var(env::DATABASE_URL_ENV_VAR) {
            settings.postgres.url = Secret::new(url);
        }
        if let Ok(raw) = std::env::var(env::ALLOWED_ORIGINS_ENV_VAR) {
            let origins: Vec<String> = raw
                .split(',')
                .map(|part| part.trim().to_string())
                .filter(|part| !part.is_empty())
                .collect();
            let origins = AllowedOrigins::try_from(origins)
                .map_err(|e| config::ConfigError::Message(e.to_string()))?;
            settings.app.allowed_origins = Some(origins);
        }

        Ok(settings)
    }
}

/// Origins the browser-facing CORS layer will accept.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "Vec<String>")]
pub struct AllowedOrigins(Vec<HeaderValue>);

impl AllowedOrigins {
    pub fn contains(&self, origin: &HeaderValue) -> bool {
        self.0.contains(origin)
    }
}

impl TryFrom<Vec<String>> for AllowedOrigins {
    type Error = InvalidHeaderValue;

    fn try_from(values: Vec<String>) -> Result<Self, Self::Error> {
        values
            .iter()
            .map(|value| HeaderValue::from_str(value))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}
