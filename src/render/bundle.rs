//! Compiled bundle artifact.

/// An immutable compiled program produced by the external bundler.
///
/// The engine never inspects the source; it only hands it to a worker's
/// backend. Exactly one bundle is "current" at a time, shared as an
/// `Arc<Bundle>` so a swap never mutates what in-flight renders hold.
#[derive(Debug, Clone)]
pub struct Bundle {
    label: String,
    source: String,
}

impl Bundle {
    /// Wrap a compiled artifact. `label` identifies the build in logs
    /// (e.g. a content hash or build counter).
    pub fn new(label: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            source: source.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}
