//! Configuração do serviço carregada de variáveis de ambiente.
//!
//! # Environment Variables
//! - `HOST` - Bind address (default: 0.0.0.0)
//! - `PORT` - Listen port (default: 8080)
//! - `APP_USER_GENERATION_DEFAULT_COUNT` - Usuários gerados quando count <= 0 (default: 10)
//! - `APP_USER_GENERATION_MAX_COUNT` - Máximo por chamada de geração (default: 100)
//! - `APP_MOCK_DATA_ENABLE_INITIAL_DATA` - Popula usuários de exemplo no boot (default: true)
//! - `APP_MOCK_DATA_INITIAL_USERS_COUNT` - Quantos usuários de exemplo criar (default: 5)
//! - `CORS_ALLOWED_ORIGINS` - Origens separadas por vírgula (default: portal em localhost:4200)

use std::env;
use std::str::FromStr;

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_GENERATION_COUNT: u32 = 10;
const MAX_GENERATION_COUNT: u32 = 100;
const DEFAULT_INITIAL_USERS_COUNT: i64 = 5;
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:4200,http://127.0.0.1:4200";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Invalid user generation limits: default={default_count}, max={max_count}")]
    InvalidGenerationLimits { default_count: u32, max_count: u32 },
}

/// Limites de geração de usuários aleatórios
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationLimits {
    pub default_count: u32,
    pub max_count: u32,
}

impl Default for GenerationLimits {
    fn default() -> Self {
        Self {
            default_count: DEFAULT_GENERATION_COUNT,
            max_count: MAX_GENERATION_COUNT,
        }
    }
}

/// População inicial de usuários de exemplo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockDataConfig {
    pub enable_initial_data: bool,
    pub initial_users_count: usize,
}

impl Default for MockDataConfig {
    fn default() -> Self {
        Self {
            enable_initial_data: true,
            initial_users_count: DEFAULT_INITIAL_USERS_COUNT as usize,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub user_generation: GenerationLimits,
    pub mock_data: MockDataConfig,
    pub cors_allowed_origins: Vec<String>,
}

impl AppConfig {
    /// Carrega a configuração do ambiente do processo
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Carrega a configuração a partir de uma função de lookup (permite testes sem tocar no env)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = parse_var(&lookup, "PORT", DEFAULT_PORT)?;

        let user_generation = GenerationLimits {
            default_count: parse_var(
                &lookup,
                "APP_USER_GENERATION_DEFAULT_COUNT",
                DEFAULT_GENERATION_COUNT,
            )?,
            max_count: parse_var(&lookup, "APP_USER_GENERATION_MAX_COUNT", MAX_GENERATION_COUNT)?,
        };
        user_generation.validate()?;

        let mock_data = MockDataConfig {
            enable_initial_data: parse_var(&lookup, "APP_MOCK_DATA_ENABLE_INITIAL_DATA", true)?,
            // Valores negativos significam "nenhum usuário", sem derrubar o boot
            initial_users_count: usize::try_from(
                parse_var(&lookup, "APP_MOCK_DATA_INITIAL_USERS_COUNT", DEFAULT_INITIAL_USERS_COUNT)?
                    .max(0),
            )
            .unwrap_or(0),
        };

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|| DEFAULT_CORS_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();

        Ok(Self {
            host,
            port,
            user_generation,
            mock_data,
            cors_allowed_origins,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl GenerationLimits {
    /// default precisa ser atendível: 1 <= default <= max
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_count == 0 || self.default_count == 0 || self.default_count > self.max_count {
            return Err(ConfigError::InvalidGenerationLimits {
                default_count: self.default_count,
                max_count: self.max_count,
            });
        }
        Ok(())
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .to_lowercase()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), format!("{raw:?}: {e}"))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.user_generation, GenerationLimits { default_count: 10, max_count: 100 });
        assert_eq!(
            config.mock_data,
            MockDataConfig { enable_initial_data: true, initial_users_count: 5 }
        );
        assert_eq!(
            config.cors_allowed_origins,
            vec!["http://localhost:4200".to_string(), "http://127.0.0.1:4200".to_string()]
        );
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("PORT", "9000"),
            ("APP_USER_GENERATION_DEFAULT_COUNT", "3"),
            ("APP_USER_GENERATION_MAX_COUNT", "20"),
            ("APP_MOCK_DATA_ENABLE_INITIAL_DATA", "FALSE"),
            ("APP_MOCK_DATA_INITIAL_USERS_COUNT", "2"),
            ("CORS_ALLOWED_ORIGINS", " http://portal.local , "),
        ])
        .unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.user_generation, GenerationLimits { default_count: 3, max_count: 20 });
        assert!(!config.mock_data.enable_initial_data);
        assert_eq!(config.mock_data.initial_users_count, 2);
        assert_eq!(config.cors_allowed_origins, vec!["http://portal.local".to_string()]);
    }

    #[test]
    fn test_negative_initial_users_count_means_none() {
        let config = load(&[("APP_MOCK_DATA_INITIAL_USERS_COUNT", "-1")]).unwrap();
        assert_eq!(config.mock_data.initial_users_count, 0);
    }

    #[test]
    fn test_invalid_number_is_rejected() {
        let err = load(&[("APP_USER_GENERATION_MAX_COUNT", "lots")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "APP_USER_GENERATION_MAX_COUNT"));
    }

    #[test]
    fn test_default_above_max_is_rejected() {
        let err = load(&[
            ("APP_USER_GENERATION_DEFAULT_COUNT", "50"),
            ("APP_USER_GENERATION_MAX_COUNT", "10"),
        ])
        .unwrap_err();

        assert_eq!(
            err,
            ConfigError::InvalidGenerationLimits { default_count: 50, max_count: 10 }
        );
    }

    #[test]
    fn test_zero_limits_are_rejected() {
        assert!(load(&[("APP_USER_GENERATION_DEFAULT_COUNT", "0")]).is_err());
        assert!(load(&[("APP_USER_GENERATION_MAX_COUNT", "0")]).is_err());
    }
}
