//! VBSS configuration.

/// Configuration for Value-Biased Stochastic Sampling.
///
/// # Examples
///
/// ```
/// use u_tsp::vbss::VbssConfig;
///
/// let config = VbssConfig::default()
///     .with_samples(500)
///     .with_bias(4.0)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VbssConfig {
    /// Number of independent tours to construct.
    pub samples: usize,

    /// Bias exponent `b` of the weighting `1 / distance^b`.
    ///
    /// Larger values prefer nearer cities more strongly; `0` is a uniform
    /// random choice.
    pub bias: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for VbssConfig {
    fn default() -> Self {
        Self {
            samples: 10_000,
            bias: 7.0,
            seed: None,
        }
    }
}

impl VbssConfig {
    pub fn with_samples(mut self, n: usize) -> Self {
        self.samples = n;
        self
    }

    pub fn with_bias(mut self, bias: f64) -> Self {
        self.bias = bias;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.samples == 0 {
            return Err("samples must be at least 1".into());
        }
        if !self.bias.is_finite() || self.bias < 0.0 {
            return Err(format!(
                "bias must be finite and non-negative, got {}",
                self.bias
            ));
        }
        Ok(())
    }
}
