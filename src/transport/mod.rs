//! UDP transport shared by the agent and the manager

mod socket;

pub use socket::{SocketBinding, SocketError, resolve};
