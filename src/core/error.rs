//! Server start-up errors.

/// Invalid configuration values.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("SMART_SAVER_ADDR is not a socket address: {value:?}")]
    InvalidAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("SMART_SAVER_LOG is not a valid tracing filter: {value:?}")]
    InvalidLogFilter {
        value: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },
}

/// Errors that stop the server from starting or serving.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to read Leptos configuration: {0}")]
    Leptos(String),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_bind_error_names_address_and_keeps_source() {
        let err = ServerError::Bind {
            addr: "127.0.0.1:3000".parse().unwrap(),
            source: std::io::Error::from(std::io::ErrorKind::AddrInUse),
        };

        assert!(err.to_string().starts_with("Failed to bind 127.0.0.1:3000"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_io_error_converts_to_serve() {
        let err: ServerError = std::io::Error::other("listener closed").into();

        assert!(matches!(err, ServerError::Serve(_)));
        assert_eq!(err.to_string(), "Server error: listener closed");
    }

    #[test]
    fn test_invalid_addr_keeps_parse_source() {
        let source = "nope".parse::<std::net::SocketAddr>().unwrap_err();
        let err = ConfigError::InvalidAddr {
            value: "nope".to_string(),
            source,
        };

        assert_eq!(
            err.to_string(),
            r#"SMART_SAVER_ADDR is not a socket address: "nope""#
        );
        assert!(err.source().is_some());
    }
}
