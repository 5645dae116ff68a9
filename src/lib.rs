//! SNMPv1-style monitoring over a pipe-delimited text protocol
//!
//! A manager asks an agent for one scalar value, identified by an OID, in a
//! single UDP request/reply turn. Messages are UTF-8 text:
//!
//! ```text
//! SNMP|1|public|GET|42|1
//! SNMP|1|public|RESPONSE|42|0|0|1|my-host
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use snmp_text::agent::Agent;
//! use snmp_text::protocol::{decode, encode_get_request};
//!
//! let agent = Agent::standard();
//! let reply = agent.handle_message(&encode_get_request("2", 7, "1", "public"));
//!
//! let fields = decode(&reply);
//! assert_eq!(fields[3], "RESPONSE");
//! assert_eq!(fields[4], "7");
//! assert_eq!(fields[5], "0");
//! ```
//!
//! Use [`agent::AgentServer`] to serve an agent over UDP and
//! [`manager::Manager`] to query it.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod agent;
pub mod manager;
pub mod protocol;
pub mod transport;

pub use agent::{Agent, AgentConfig, AgentServer};
pub use manager::{Manager, ManagerConfig, ManagerError};
pub use protocol::{DEFAULT_PORT, ErrorStatus, GetRequest, PduType, Response};
