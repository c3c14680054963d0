//! connector-core
//! --------------
//! Embeddable connector-factory registry and metastore-client lifecycle core
//! for a SQL query engine's storage connector plugin. The host supplies a
//! connector name (and optionally a pre-built metastore client) up front,
//! then asks the registry which connector factories it exposes; each factory
//! descriptor bundles the validated name, the host execution context and the
//! metastore handle, and instantiates the actual connector through the
//! downstream [`factory::ConnectorProvider`] seam.
//!
//! Construction validates; listing cannot fail. All registry state is fixed
//! at construction, so a published registry is safe to share across threads.

pub mod config;
pub mod context;
pub mod error;
pub mod factory;
pub mod metastore;
pub mod registry;

pub use config::ConnectorConfig;
pub use context::ExecutionContext;
pub use error::{ConnectorError, ConnectorResult};
pub use factory::{Connector, ConnectorFactory, ConnectorProvider};
pub use metastore::{MetastoreClient, MetastoreHandle};
pub use registry::{ConnectorRegistry, ConnectorRegistryBuilder};
