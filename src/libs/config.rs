use std::net::{AddrParseError, IpAddr, SocketAddr};
use std::path::PathBuf;

use super::variable::{get_environment_variable_or, get_parsed_environment_variable_or};

pub const DEFAULT_CSV_PATH: &str = "data/products.csv";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8001;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub csv_path: PathBuf,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            csv_path: PathBuf::from(get_environment_variable_or("CSV_PATH", DEFAULT_CSV_PATH)),
            host: get_environment_variable_or("HOST", DEFAULT_HOST),
            port: get_parsed_environment_variable_or("PORT", DEFAULT_PORT),
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        let ip: IpAddr = self.host.parse()?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn socket_addr_from_parts() {
        let config = Config {
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            host: "127.0.0.1".to_string(),
            port: 9000,
        };
        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:9000");

        let bad = Config {
            host: "localhost:1".to_string(),
            ..config
        };
        assert!(bad.socket_addr().is_err());
    }
}
