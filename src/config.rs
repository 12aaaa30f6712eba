// src/config.rs
use crate::error::{AppError, AppResult};
use std::net::{IpAddr, SocketAddr};

pub const DEFAULT_DATABASE_URL: &str = "sqlite:database.db";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

/// Configuração lida do ambiente. O `.env` é carregado pelo `main`.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        Self::from_vars(
            std::env::var("DATABASE_URL").ok(),
            std::env::var("HOST").ok(),
            std::env::var("PORT").ok(),
        )
    }

    // Recebe os valores já lidos do ambiente
    fn from_vars(
        database_url: Option<String>,
        host: Option<String>,
        port: Option<String>,
    ) -> AppResult<Self> {
        let database_url = database_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let host = host.unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host: IpAddr = host
            .trim()
            .parse()
            .map_err(|e| AppError::Config(format!("HOST inválido '{}': {}", host, e)))?;

        let port = match port {
            Some(p) => p
                .trim()
                .parse::<u16>()
                .map_err(|e| AppError::Config(format!("PORT inválida '{}': {}", p, e)))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            host,
            port,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
