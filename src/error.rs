//! Unified error model for the connector core.
//! All validation failures surface synchronously at construction time; once a
//! registry is built, listing its factories cannot fail. Hosts translate these
//! errors into their own diagnostics, so no logging happens here.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ConnectorError {
    /// Construction-time validation failure (empty connector name, empty
    /// batch registration, missing or malformed configuration key).
    /// Not retryable: the host must supply corrected input and reconstruct.
    #[error("invalid connector configuration: {message}")]
    InvalidConfiguration { message: String },

    /// The same connector name was registered twice within one registry.
    /// Registration never silently overwrites.
    #[error("duplicate connector name: {name}")]
    DuplicateConnectorName { name: String },

    /// A downstream provider failed to produce a connector instance from a
    /// factory descriptor.
    #[error("failed to create connector '{name}': {message}")]
    ConnectorCreation { name: String, message: String },
}

impl ConnectorError {
    pub fn invalid_configuration<S: Into<String>>(message: S) -> Self {
        ConnectorError::InvalidConfiguration { message: message.into() }
    }

    pub fn duplicate_name<S: Into<String>>(name: S) -> Self {
        ConnectorError::DuplicateConnectorName { name: name.into() }
    }

    pub fn creation<S: Into<String>>(name: S, message: S) -> Self {
        ConnectorError::ConnectorCreation { name: name.into(), message: message.into() }
    }
}

pub type ConnectorResult<T> = Result<T, ConnectorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_context() {
        let e = ConnectorError::invalid_configuration("connector name is empty");
        assert_eq!(e.to_string(), "invalid connector configuration: connector name is empty");

        let e = ConnectorError::duplicate_name("hive");
        assert_eq!(e.to_string(), "duplicate connector name: hive");

        let e = ConnectorError::creation("hive", "metastore unreachable");
        assert_eq!(e.to_string(), "failed to create connector 'hive': metastore unreachable");
    }

    #[test]
    fn variants_match_on_shape() {
        let e = ConnectorError::duplicate_name("kv");
        assert!(matches!(e, ConnectorError::DuplicateConnectorName { ref name } if name == "kv"));
    }
}
