//! Configuration for dependency analysis.

/// Configuration for building a [`DependencyGraph`].
///
/// [`DependencyGraph`]: crate::DependencyGraph
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Whether references inside function bodies count as dependencies
    pub(crate) function_bodies: bool,
    /// Whether a definition may reference itself without forming a cycle
    pub(crate) allow_self_references: bool,
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether function bodies contribute dependencies.
    ///
    /// Off by default: only parameter types are dependencies, matching
    /// [`get_references`](crate::get_references).
    pub fn function_bodies(mut self, value: bool) -> Self {
        self.function_bodies = value;
        self
    }

    /// Set whether direct self-references are exempt from cycle detection.
    ///
    /// Off by default: `A -> A` is reported as a cycle.
    pub fn allow_self_references(mut self, value: bool) -> Self {
        self.allow_self_references = value;
        self
    }
}
