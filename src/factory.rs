//! Connector factory descriptors and the downstream instantiation seam.
//!
//! A [`ConnectorFactory`] is the immutable value a host receives when it asks
//! the registry what it can instantiate: the validated connector name, the
//! host execution context, and the metastore handle (supplied or deferred).
//! Actual connector construction lives behind the [`ConnectorProvider`] trait
//! so this core stays free of metastore I/O and engine wiring.

use std::sync::Arc;

use crate::config::ConnectorConfig;
use crate::context::ExecutionContext;
use crate::error::{ConnectorError, ConnectorResult};
use crate::metastore::MetastoreHandle;

/// An instantiated connector, as seen by this core.
pub trait Connector: Send + Sync {
    /// The catalog name this instance was created under.
    fn name(&self) -> &str;
}

/// Downstream instantiation seam.
///
/// Implementations live with the connector itself: given the factory's name,
/// the host's configuration mapping, the metastore handle and the execution
/// context, produce one connector instance. When the handle is
/// [`MetastoreHandle::Deferred`] the provider builds and owns its own
/// metastore client; a supplied handle must be used as-is and never closed.
pub trait ConnectorProvider: Send + Sync {
    fn create(
        &self,
        name: &str,
        config: &ConnectorConfig,
        metastore: &MetastoreHandle,
        context: &ExecutionContext,
    ) -> ConnectorResult<Box<dyn Connector>>;
}

/// Immutable descriptor for one named connector capability.
///
/// Built fresh on every registry listing; never mutated afterwards. Two
/// descriptors from consecutive listings are equivalent: same name string,
/// same metastore handle identity, same context identity.
#[derive(Debug, Clone)]
pub struct ConnectorFactory {
    name: String,
    context: ExecutionContext,
    metastore: MetastoreHandle,
    provider: Option<Arc<dyn ConnectorProvider>>,
}

impl ConnectorFactory {
    pub(crate) fn new(
        name: String,
        context: ExecutionContext,
        metastore: MetastoreHandle,
        provider: Option<Arc<dyn ConnectorProvider>>,
    ) -> Self {
        Self { name, context, metastore, provider }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn context(&self) -> &ExecutionContext {
        &self.context
    }

    pub fn metastore(&self) -> &MetastoreHandle {
        &self.metastore
    }

    /// Instantiate the connector through the wired provider.
    ///
    /// The `context` argument is the per-instantiation collaborator supplied
    /// by the host at catalog-configuration time; the descriptor's own
    /// context is the plugin-scoped one captured at registry construction.
    /// Fails with [`ConnectorError::ConnectorCreation`] when no provider was
    /// wired into the registry.
    pub fn create(
        &self,
        config: &ConnectorConfig,
        context: &ExecutionContext,
    ) -> ConnectorResult<Box<dyn Connector>> {
        let provider = self.provider.as_ref().ok_or_else(|| {
            ConnectorError::creation(self.name.as_str(), "no connector provider wired")
        })?;
        provider.create(&self.name, config, &self.metastore, context)
    }
}

impl std::fmt::Debug for dyn Connector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Connector").field(&self.name()).finish()
    }
}

impl std::fmt::Debug for dyn ConnectorProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ConnectorProvider")
    }
}
