//! Manager entry point.
//!
//! `snmp-manager [HOST] [PORT]` opens the interactive menu. With one or more
//! `--get <OID>` flags it performs those GETs and exits instead.

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use snmp_text::protocol::{DEFAULT_COMMUNITY, DEFAULT_PORT, oid_name};
use snmp_text::{Manager, ManagerConfig};

/// SNMPv1-style manager speaking the pipe-delimited text protocol
#[derive(Parser, Debug)]
#[command(name = "snmp-manager", version, about)]
struct Cli {
    /// Agent host
    #[arg(env = "SNMP_AGENT_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Agent UDP port
    #[arg(env = "SNMP_AGENT_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Community string sent with each request
    #[arg(long, env = "SNMP_COMMUNITY", default_value = DEFAULT_COMMUNITY)]
    community: String,

    /// Reply timeout in milliseconds
    #[arg(long, env = "SNMP_TIMEOUT_MS", default_value_t = 3000)]
    timeout_ms: u64,

    /// GET this OID and exit (repeatable)
    #[arg(long = "get", value_name = "OID")]
    oids: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let manager = Manager::new(ManagerConfig {
        community: cli.community.clone(),
        timeout: Duration::from_millis(cli.timeout_ms),
        ..ManagerConfig::default()
    });

    tracing::info!(host = %cli.host, port = cli.port, "SNMP manager targeting agent");

    if cli.oids.is_empty() {
        let stdin = io::stdin();
        return snmp_text::manager::run_menu(
            &manager,
            &cli.host,
            cli.port,
            stdin.lock(),
            io::stdout(),
        )
        .context("menu I/O failed");
    }

    let mut failed = false;
    for oid in &cli.oids {
        match manager.send_get_request(oid, &cli.host, cli.port) {
            Ok(value) => {
                let name = oid_name(oid).unwrap_or("Unknown OID");
                println!("{name} (OID {oid}) = {value}");
            }
            Err(err) => {
                eprintln!("ERROR: OID {oid}: {err}");
                failed = true;
            }
        }
    }

    if failed {
        anyhow::bail!("one or more GET requests failed");
    }
    Ok(())
}
