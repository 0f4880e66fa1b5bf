use std::net::IpAddr;
use std::path::PathBuf;
use clap::{Parser, ValueEnum};

#[derive(Parser, Clone, Debug)]
pub struct Config {
    #[clap(env, long, default_value = "development")]
    pub environment: String,

    #[clap(env, long, default_value = "0.0.0.0")]
    pub host: IpAddr,

    #[clap(env, long, default_value_t = 3000)]
    pub port: u16,

    /// Comma separated list of allowed origins, `*` allows any origin.
    #[clap(env, long, default_value = "*")]
    pub origin_urls: String,

    #[clap(env, long, value_enum, default_value_t = StorageBackend::File)]
    pub storage: StorageBackend,

    /// Only read when `storage` is `file`.
    #[clap(env, long, default_value = "database.json")]
    pub database_file: PathBuf,

    /// Directory with the front end, served for any path the API does not handle.
    #[clap(env, long)]
    pub static_dir: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    File,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_storage_backend_and_paths() {
        let config = Config::try_parse_from([
            "vegas-suggestions-backend",
            "--storage",
            "memory",
            "--port",
            "8080",
            "--static-dir",
            "public",
        ])
        .unwrap();

        assert_eq!(config.storage, StorageBackend::Memory);
        assert_eq!(config.port, 8080);
        assert_eq!(config.static_dir, Some(PathBuf::from("public")));
    }

    #[test]
    fn rejects_unknown_storage_backend() {
        let result = Config::try_parse_from(["vegas-suggestions-backend", "--storage", "postgres"]);
        assert!(result.is_err());
    }
}
