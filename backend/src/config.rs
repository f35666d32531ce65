//! Command line and environment settings of the dev host.

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "saber-backend", version, about = "Serves the Saber web client")]
pub struct HostConfig {
    /// Interface to bind.
    #[arg(long, env = "SABER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, env = "SABER_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Do not open the system browser on start.
    #[arg(long, env = "SABER_NO_BROWSER")]
    pub no_browser: bool,
}

impl HostConfig {
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
