//! Minimal blocking UDP socket wrapper used by both endpoints.

use std::io;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, ToSocketAddrs, UdpSocket};
use std::sync::Arc;
use std::time::Duration;

/// Error type for socket operations.
#[derive(Debug, thiserror::Error)]
pub enum SocketError {
    /// No datagram arrived before the read timeout elapsed
    #[error("timed out waiting for a datagram")]
    TimedOut,
    /// Host/port pair did not resolve to any address
    #[error("could not resolve {host}:{port}")]
    Unresolved {
        /// Host as supplied by the caller
        host: String,
        /// Port as supplied by the caller
        port: u16,
    },
    /// Underlying I/O error
    #[error("{0}")]
    Io(#[from] io::Error),
}

impl SocketError {
    /// Map read-timeout errors onto [`SocketError::TimedOut`].
    fn from_recv(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut => Self::TimedOut,
            _ => Self::Io(err),
        }
    }
}

/// Resolve a host/port pair to the first matching socket address.
pub fn resolve(host: &str, port: u16) -> Result<SocketAddr, SocketError> {
    (host, port)
        .to_socket_addrs()?
        .next()
        .ok_or_else(|| SocketError::Unresolved {
            host: host.to_string(),
            port,
        })
}

/// Binding for a UDP socket.
#[derive(Debug, Clone)]
pub struct SocketBinding {
    socket: Arc<UdpSocket>,
}

impl SocketBinding {
    /// Bind to the provided address.
    pub fn bind(addr: SocketAddr) -> Result<Self, SocketError> {
        let socket = UdpSocket::bind(addr)?;
        socket.set_nonblocking(false)?;
        Ok(Self {
            socket: Arc::new(socket),
        })
    }

    /// Bind an ephemeral port on the wildcard address of `remote`'s family.
    pub fn bind_ephemeral_for(remote: SocketAddr) -> Result<Self, SocketError> {
        let local = match remote {
            SocketAddr::V4(_) => SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0)),
            SocketAddr::V6(_) => SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0)),
        };
        Self::bind(local)
    }

    /// Set socket read timeout.
    pub fn set_read_timeout(&self, timeout: Option<Duration>) -> Result<(), SocketError> {
        self.socket.set_read_timeout(timeout)?;
        Ok(())
    }

    /// Send bytes to a remote address.
    pub fn send_to(&self, buf: &[u8], addr: SocketAddr) -> Result<usize, SocketError> {
        Ok(self.socket.send_to(buf, addr)?)
    }

    /// Receive bytes into the provided buffer.
    ///
    /// Returns [`SocketError::TimedOut`] when a read timeout is set and expires.
    pub fn recv_from(&self, buf: &mut [u8]) -> Result<(usize, SocketAddr), SocketError> {
        self.socket.recv_from(buf).map_err(SocketError::from_recv)
    }

    /// Access the local address for this binding.
    pub fn local_addr(&self) -> Result<SocketAddr, SocketError> {
        Ok(self.socket.local_addr()?)
    }
}
