//! HTTP server utility methods

use crate::server::server::HttpServer;
use crate::utils::error::ServiceError;

impl HttpServer {
    /// Turn a bind failure into a config error that names the address
    pub(crate) fn format_bind_error(error: std::io::Error, bind_addr: &str) -> ServiceError {
        if error.kind() == std::io::ErrorKind::AddrInUse {
            return ServiceError::config(format!(
                "Address {} is already in use; set server.port or ITEMS_PORT to a free port",
                bind_addr
            ));
        }

        ServiceError::config(format!("Failed to bind {}: {}", bind_addr, error))
    }
}
