//! Configuração do binário de demonstração, lida do ambiente.
//!
//! | Variável | Padrão | Descrição |
//! |----------|--------|-----------|
//! | `RUST_LOG` | `info` | Filtro do `tracing-subscriber` |
//! | `SISESP_MODE` | `forward` | `forward` ou `backward` |
//! | `SISESP_GOAL` | `vehicle` | Objetivo do encadeamento para trás |

use std::str::FromStr;

use thiserror::Error;

use crate::demo::VEHICLE_GOAL;

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid SISESP_MODE {0:?}, expected \"forward\" or \"backward\"")]
    InvalidMode(String),
}

/// Estratégia de inferência a rodar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Forward,
    Backward,
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "forward" | "fwd" => Ok(Mode::Forward),
            "backward" | "bwd" => Ok(Mode::Backward),
            _ => Err(ConfigError::InvalidMode(s.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub log_filter: String,
    pub mode: Mode,
    pub goal: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            mode: Mode::Forward,
            goal: VEHICLE_GOAL.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Monta a configuração a partir de uma função de busca de variáveis.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        let mode = match lookup("SISESP_MODE") {
            Some(raw) => raw.parse()?,
            None => defaults.mode,
        };
        Ok(Self {
            log_filter: lookup("RUST_LOG").unwrap_or(defaults.log_filter),
            mode,
            goal: lookup("SISESP_GOAL").unwrap_or(defaults.goal),
        })
    }
}
