//! Server Config

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Args;

/// Listening address of the product page server.
#[derive(Debug, Args)]
pub struct ServerRuntimeConfig {
    /// IP address to listen on
    #[arg(
        short = 'H',
        long,
        env = "SERVER_HOST",
        default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED)
    )]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "SERVER_PORT", default_value_t = 3000)]
    pub port: u16,
}

impl ServerRuntimeConfig {
    /// Address the listener binds to.
    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
