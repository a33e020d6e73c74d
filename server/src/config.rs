//! Runtime configuration, read from command-line flags and environment.

use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
};

use clap::Parser;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(author, version, about = "In-memory todo REST API", long_about = None)]
pub struct Config {
    /// Interface to listen on
    #[arg(long, env = "TODO_API_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Origins allowed to make cross-origin requests (comma separated)
    #[arg(
        long = "cors-origin",
        env = "TODO_API_CORS_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub cors_origins: Vec<String>,

    /// Directory served under /docs
    #[arg(long, env = "TODO_API_DOCS_DIR", default_value = "./static")]
    pub docs_dir: PathBuf,

    /// Start with a few demonstration todos
    #[arg(long)]
    pub seed_demo: bool,
}

impl Config {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
            cors_origins: vec!["http://localhost:3000".to_string()],
            docs_dir: PathBuf::from("./static"),
            seed_demo: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    /// Default declared on the clap argument `id`, independent of the environment.
    fn declared_default(id: &str) -> String {
        let command = Config::command();
        let arg = command
            .get_arguments()
            .find(|arg| arg.get_id().as_str() == id)
            .unwrap_or_else(|| panic!("no argument {id}"));
        arg.get_default_values()
            .iter()
            .map(|value| value.to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(",")
    }

    #[test]
    fn declared_defaults_match_default_impl() {
        let defaults = Config::default();
        assert_eq!(declared_default("host"), defaults.host.to_string());
        assert_eq!(declared_default("port"), defaults.port.to_string());
        assert_eq!(declared_default("cors_origins"), defaults.cors_origins.join(","));
        assert_eq!(declared_default("docs_dir"), defaults.docs_dir.display().to_string());
        assert!(!defaults.seed_demo);
    }

    #[test]
    fn default_values_parse_back_to_default_impl() {
        let defaults = Config::default();
        let parsed = Config::try_parse_from([
            "todo-api".to_string(),
            "--host".to_string(),
            declared_default("host"),
            "--port".to_string(),
            declared_default("port"),
            "--cors-origin".to_string(),
            declared_default("cors_origins"),
            "--docs-dir".to_string(),
            declared_default("docs_dir"),
        ])
        .unwrap();
        assert_eq!(parsed, defaults);
    }

    #[test]
    fn flags_override_defaults() {
        let parsed = Config::try_parse_from([
            "todo-api",
            "--host",
            "127.0.0.1",
            "-p",
            "9000",
            "--cors-origin",
            "http://a.test,http://b.test",
            "--docs-dir",
            "/srv/docs",
            "--seed-demo",
        ])
        .unwrap();
        assert_eq!(parsed.bind_addr(), "127.0.0.1:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(parsed.cors_origins, vec!["http://a.test", "http://b.test"]);
        assert_eq!(parsed.docs_dir, PathBuf::from("/srv/docs"));
        assert!(parsed.seed_demo);
    }

    #[test]
    fn rejects_invalid_port() {
        assert!(Config::try_parse_from(["todo-api", "--port", "70000"]).is_err());
    }
}
