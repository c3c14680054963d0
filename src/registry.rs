//! Connector registry.
//!
//! The registry owns validated connector identity and the optional metastore
//! handle, and answers one query: which connector factories does this plugin
//! instance expose. Validation happens strictly at construction; by the time
//! [`ConnectorRegistry::connector_factories`] is callable the names are
//! known-valid, so listing never fails.
//!
//! All state is fixed at construction. There is no interior mutability, so
//! listing is safe from any number of threads without coordination; the
//! registry itself is the published, terminal `Ready` state.

use std::sync::Arc;
use tracing::debug;

use crate::context::ExecutionContext;
use crate::error::{ConnectorError, ConnectorResult};
use crate::factory::{ConnectorFactory, ConnectorProvider};
use crate::metastore::MetastoreHandle;

fn validate_name(name: &str) -> ConnectorResult<()> {
    if name.is_empty() {
        return Err(ConnectorError::invalid_configuration("connector name is empty"));
    }
    Ok(())
}

/// Immutable set of named connector capabilities under one plugin instance.
#[derive(Debug, Clone)]
pub struct ConnectorRegistry {
    // Insertion order is the listing order.
    entries: Vec<(String, MetastoreHandle)>,
    context: ExecutionContext,
    provider: Option<Arc<dyn ConnectorProvider>>,
}

impl ConnectorRegistry {
    /// Single connector name, no pre-supplied metastore: the downstream
    /// connector builds its own client from configuration.
    pub fn new(name: impl Into<String>) -> ConnectorResult<Self> {
        Self::with_metastore(name, MetastoreHandle::Deferred)
    }

    /// Single connector name with an explicit metastore handle, supplied or
    /// deferred. A supplied client stays owned by the host; the registry
    /// only holds a shared reference.
    pub fn with_metastore(
        name: impl Into<String>,
        metastore: MetastoreHandle,
    ) -> ConnectorResult<Self> {
        let name = name.into();
        validate_name(&name)?;
        debug!(target: "connector_core::registry", "registry ready: name='{}' metastore={:?}", name, metastore);
        Ok(Self {
            entries: vec![(name, metastore)],
            context: ExecutionContext::default(),
            provider: None,
        })
    }

    /// Replace the execution context threaded into each descriptor.
    pub fn with_context(mut self, context: ExecutionContext) -> Self {
        self.context = context;
        self
    }

    /// Wire the downstream instantiation seam into each descriptor.
    pub fn with_provider(mut self, provider: Arc<dyn ConnectorProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Ordered, freshly-built descriptors, one per registered name.
    ///
    /// Pure and idempotent: consecutive calls return equivalent descriptors
    /// (same name strings, same handle and context identity). Always at
    /// least one element; exactly one for the single-name constructors.
    pub fn connector_factories(&self) -> Vec<ConnectorFactory> {
        debug!(target: "connector_core::registry", "listing {} connector factories", self.entries.len());
        self.entries
            .iter()
            .map(|(name, handle)| {
                ConnectorFactory::new(
                    name.clone(),
                    self.context.clone(),
                    handle.clone(),
                    self.provider.clone(),
                )
            })
            .collect()
    }

    /// Registered names, in insertion order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(n, _)| n.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn context(&self) -> &ExecutionContext {
        &self.context
    }
}

/// Batch registration path for hosts configuring several connector names
/// under one plugin instance.
///
/// Entries keep insertion order; the same supplied metastore handle may back
/// several names (the `Arc` is shared, never cloned into distinct clients).
/// Duplicate names fail at [`build`] rather than silently overwriting.
///
/// [`build`]: ConnectorRegistryBuilder::build
#[derive(Debug, Default)]
pub struct ConnectorRegistryBuilder {
    entries: Vec<(String, MetastoreHandle)>,
    context: Option<ExecutionContext>,
    provider: Option<Arc<dyn ConnectorProvider>>,
}

impl ConnectorRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a name with no pre-supplied metastore.
    pub fn register(self, name: impl Into<String>) -> Self {
        self.register_with_metastore(name, MetastoreHandle::Deferred)
    }

    /// Register a name with an explicit metastore handle.
    pub fn register_with_metastore(
        mut self,
        name: impl Into<String>,
        metastore: MetastoreHandle,
    ) -> Self {
        self.entries.push((name.into(), metastore));
        self
    }

    pub fn context(mut self, context: ExecutionContext) -> Self {
        self.context = Some(context);
        self
    }

    pub fn provider(mut self, provider: Arc<dyn ConnectorProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Validate every entry and publish the registry.
    ///
    /// Fails with `InvalidConfiguration` when no name was registered or any
    /// name is empty, and with `DuplicateConnectorName` on the first name
    /// registered twice.
    pub fn build(self) -> ConnectorResult<ConnectorRegistry> {
        if self.entries.is_empty() {
            return Err(ConnectorError::invalid_configuration("no connector names registered"));
        }
        for (i, (name, _)) in self.entries.iter().enumerate() {
            validate_name(name)?;
            if self.entries[..i].iter().any(|(seen, _)| seen == name) {
                return Err(ConnectorError::duplicate_name(name.as_str()));
            }
        }
        debug!(target: "connector_core::registry", "registry ready: {} names", self.entries.len());
        Ok(ConnectorRegistry {
            entries: self.entries,
            context: self.context.unwrap_or_default(),
            provider: self.provider,
        })
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod registry_tests;
