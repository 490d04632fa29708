//! Layout errors and the per-pass build report.

use thiserror::Error;

/// Layout errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// An element was given an inconsistent set of edges or labels.
    #[error("Malformed input for {element}: {reason}")]
    MalformedInput { element: String, reason: String },
    /// Deck bounds were read before post placement resolved them.
    #[error("Deck bounds are not ready: post placement has not resolved the southern edge")]
    NotReady,
    /// Deck bounds were back-filled a second time.
    #[error("Deck bounds were already resolved by post placement")]
    AlreadyResolved,
}

impl LayoutError {
    /// Shorthand for a [`LayoutError::MalformedInput`].
    pub fn malformed(element: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            element: element.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for layout operations.
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Element-level failures collected during a layout pass.
///
/// A failure recorded here aborted only the element it names; siblings were
/// still built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildReport {
    errors: Vec<LayoutError>,
}

impl BuildReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure.
    pub fn record(&mut self, error: LayoutError) {
        log::warn!("{}", error);
        self.errors.push(error);
    }

    /// Append every failure from another report.
    pub fn merge(&mut self, other: BuildReport) {
        self.errors.extend(other.errors);
    }

    /// Check if no failures were recorded.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Recorded failures, in the order they happened.
    pub fn errors(&self) -> &[LayoutError] {
        &self.errors
    }
}
