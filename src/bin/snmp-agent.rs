//! Agent entry point.
//!
//! Binds `0.0.0.0:16100` unless told otherwise and answers GET requests for
//! systemName, uptime and cpu until the process is stopped.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use snmp_text::{Agent, AgentConfig};

/// SNMPv1-style agent speaking the pipe-delimited text protocol
#[derive(Parser, Debug)]
#[command(name = "snmp-agent", version, about)]
struct Cli {
    /// Address to listen on
    #[arg(long, env = "SNMP_AGENT_BIND", default_value = "0.0.0.0:16100")]
    bind: SocketAddr,

    /// Receive buffer size in bytes
    #[arg(long, default_value_t = snmp_text::protocol::MAX_DATAGRAM_SIZE)]
    buffer_size: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = AgentConfig {
        bind_addr: cli.bind,
        buffer_size: cli.buffer_size,
        poll_interval: Duration::from_millis(500),
    };

    let mut server = Agent::standard()
        .bind(&config)
        .with_context(|| format!("failed to bind agent on {}", config.bind_addr))?;
    server.serve_forever();

    Ok(())
}
