// Defaults for parameters
const REQUIRE_SPANNING_DEFAULT: bool = true;

/// A wrapper around the parameters that control how the disconnection planner treats its input.
/// Only use if you want to relax input checking. Otherwise use
/// `Severance::default_params()` to instantiate the planner with default parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeveranceParams {
    pub(crate) require_spanning: bool,
}

/// Builder object to set custom parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParamBuilder {
    require_spanning: Option<bool>,
}

impl SeveranceParams {
    /// Enters the builder pattern, allowing custom parameters to be set using
    /// various setter methods.
    ///
    /// # Returns
    /// * the parameter configuration builder
    pub fn builder() -> ParamBuilder {
        ParamBuilder::default()
    }
}

impl Default for SeveranceParams {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ParamBuilder {
    /// Sets whether the edges must span the whole network, i.e. there must be exactly one fewer
    /// edge than there are nodes. When disabled, a forest (several disjoint trees) is accepted
    /// and each tree is disconnected independently. Node indices, weights and the absence of
    /// cycles are checked either way.
    /// Defaults to true.
    ///
    /// # Parameters
    /// * require_spanning - whether to reject a forest that leaves some nodes unconnected
    ///
    /// # Returns
    /// * the parameter configuration builder
    pub fn require_spanning(mut self, require_spanning: bool) -> ParamBuilder {
        self.require_spanning = Some(require_spanning);
        self
    }

    /// Finishes the building of the parameter configuration.
    ///
    /// # Returns
    /// * The completed planner configuration.
    pub fn build(self) -> SeveranceParams {
        SeveranceParams {
            require_spanning: self.require_spanning.unwrap_or(REQUIRE_SPANNING_DEFAULT),
        }
    }
}
