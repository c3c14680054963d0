//! Metastore client handle.
//!
//! A registry may be constructed with a pre-built metadata-store client
//! (embedding and test scenarios where the host shares one client across
//! catalogs) or without one, in which case the downstream connector lazily
//! builds and owns its own client from configuration. The registry only ever
//! holds a shared, non-owning reference and never closes or invalidates a
//! supplied client.

use std::fmt;
use std::sync::Arc;

/// Narrow surface this core needs from a metadata-store client.
///
/// Everything a real metastore does (schemas, tables, partitions) belongs to
/// the downstream connector; the registry only carries the client through and
/// labels it in diagnostics.
pub trait MetastoreClient: Send + Sync {
    /// Diagnostic label for the backing store, e.g. a thrift URI.
    fn endpoint(&self) -> &str;
}

/// Presence or deliberate absence of a pre-supplied metastore client.
///
/// Modelled as a sum type rather than a nullable reference so "caller forgot
/// to specify" cannot be expressed: `Deferred` is always an explicit choice.
#[derive(Clone)]
pub enum MetastoreHandle {
    /// Host-supplied shared client; the host retains lifecycle ownership.
    Supplied(Arc<dyn MetastoreClient>),
    /// No pre-built client; the downstream connector creates and owns its own.
    Deferred,
}

impl MetastoreHandle {
    pub fn supplied(client: Arc<dyn MetastoreClient>) -> Self {
        MetastoreHandle::Supplied(client)
    }

    pub fn is_supplied(&self) -> bool {
        matches!(self, MetastoreHandle::Supplied(_))
    }

    /// The supplied client, if any.
    pub fn client(&self) -> Option<&Arc<dyn MetastoreClient>> {
        match self {
            MetastoreHandle::Supplied(c) => Some(c),
            MetastoreHandle::Deferred => None,
        }
    }

    /// Identity comparison: both deferred, or both pointing at the same
    /// client allocation. Supplied clients are never compared by value.
    pub fn same_client(&self, other: &MetastoreHandle) -> bool {
        match (self, other) {
            (MetastoreHandle::Deferred, MetastoreHandle::Deferred) => true,
            (MetastoreHandle::Supplied(a), MetastoreHandle::Supplied(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for MetastoreHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetastoreHandle::Supplied(c) => f.debug_tuple("Supplied").field(&c.endpoint()).finish(),
            MetastoreHandle::Deferred => f.write_str("Deferred"),
        }
    }
}
