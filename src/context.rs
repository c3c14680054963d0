//! Opaque host execution context.
//!
//! Hosts with a plugin-isolation model (separate code-loading scopes per
//! plugin) thread a context handle through each connector factory so the
//! downstream connector can resolve plugin-local resources. This core never
//! inspects the context; it only carries it from the registry into each
//! descriptor unchanged.

use std::fmt;
use std::sync::Arc;

/// Cheaply-cloneable opaque handle to the host's execution context.
///
/// Two clones of the same context compare equal under [`same_context`];
/// independently constructed contexts never do, even with the same label.
///
/// [`same_context`]: ExecutionContext::same_context
#[derive(Clone)]
pub struct ExecutionContext {
    token: Arc<str>,
}

impl ExecutionContext {
    /// Create a context identified by a host-chosen label. The label is used
    /// only for diagnostics.
    pub fn new(label: impl Into<String>) -> Self {
        Self { token: Arc::from(label.into()) }
    }

    pub fn label(&self) -> &str {
        &self.token
    }

    /// Identity comparison: true only for clones of the same context.
    pub fn same_context(&self, other: &ExecutionContext) -> bool {
        Arc::ptr_eq(&self.token, &other.token)
    }
}

impl Default for ExecutionContext {
    fn default() -> Self {
        Self::new("embedded")
    }
}

impl fmt::Debug for ExecutionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecutionContext").field("label", &self.label()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_identity_but_fresh_contexts_do_not() {
        let a = ExecutionContext::new("host");
        let b = a.clone();
        assert!(a.same_context(&b));

        let c = ExecutionContext::new("host");
        assert!(!a.same_context(&c));
        assert_eq!(a.label(), c.label());
    }
}
