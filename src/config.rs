//! Configuración central de la aplicación.
//! Carga variables de entorno (.env) en una `AppConfig` inmutable; un valor
//! inválido es un `CoreError::Config`, nunca un valor por defecto silencioso.
use once_cell::sync::Lazy;
use std::env;

use crate::errors::core_error::CoreError;
use flow_domain::DEFAULT_THEMES;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenvy::dotenv(); // ignora error si no existe .env
});

/// Configuración global de la aplicación.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Filtro de logging (sintaxis `EnvFilter`).
    pub log_filter: String,
    /// Usuario por defecto de la demo.
    pub user_id: String,
    /// Progreso externo usado cuando no hay fuente real.
    pub progress_value: u32,
    /// Temas de la ruta de lecciones, en orden.
    pub themes: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { log_filter: "info".to_string(),
               user_id: "demo-user".to_string(),
               progress_value: 0,
               themes: DEFAULT_THEMES.iter().map(|t| t.to_string()).collect() }
    }
}

impl AppConfig {
    /// Lee `READFLOW_*` del entorno (tras cargar `.env`).
    pub fn from_env() -> Result<Self, CoreError> {
        Lazy::force(&DOTENV_LOADED);
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Variante testeable: `lookup` resuelve cada clave.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
        where F: Fn(&str) -> Option<String>
    {
        let mut cfg = Self::default();
        if let Some(filter) = lookup("READFLOW_LOG") {
            cfg.log_filter = filter;
        }
        if let Some(user) = lookup("READFLOW_USER_ID") {
            cfg.user_id = user;
        }
        if let Some(raw) = lookup("READFLOW_PROGRESS") {
            cfg.progress_value =
                raw.trim()
                   .parse()
                   .map_err(|_| CoreError::Config(format!("READFLOW_PROGRESS inválido: {raw}")))?;
        }
        if let Some(raw) = lookup("READFLOW_THEMES") {
            let themes: Vec<String> = raw.split(',')
                                         .map(|t| t.trim().to_string())
                                         .filter(|t| !t.is_empty())
                                         .collect();
            if themes.is_empty() {
                return Err(CoreError::Config("READFLOW_THEMES no contiene temas".into()));
            }
            cfg.themes = themes;
        }
        Ok(cfg)
    }
}

/// Inicializa el logging de los binarios. Los crates de librería emiten vía `log`.
pub fn init_logging(filter: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter));
    let _ = tracing_subscriber::fmt().with_env_filter(env_filter).try_init();
}
