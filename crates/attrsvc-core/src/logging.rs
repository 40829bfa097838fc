//! Explicit logging handle.
//!
//! Components receive a [`Logger`] at construction and emit events with its
//! span as the explicit parent, so every line a component writes carries the
//! service and component names regardless of the ambient span context.

use tracing::Span;

/// Logging handle passed into each component.
#[derive(Debug, Clone)]
pub struct Logger {
    span: Span,
}

impl Logger {
    /// Creates the root handle for a service process.
    #[must_use]
    pub fn new(service: &'static str) -> Self {
        Self {
            span: tracing::info_span!("service", name = service),
        }
    }

    /// Derives a handle for a component of this service.
    #[must_use]
    pub fn component(&self, component: &'static str) -> Self {
        Self {
            span: tracing::info_span!(parent: &self.span, "component", name = component),
        }
    }

    /// A handle that attaches no span context.
    #[must_use]
    pub fn detached() -> Self {
        Self { span: Span::none() }
    }

    /// Returns the span events should be parented to.
    #[must_use]
    pub const fn span(&self) -> &Span {
        &self.span
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::detached()
    }
}
