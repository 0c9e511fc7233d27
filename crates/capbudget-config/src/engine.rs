//! Engine configuration.

use serde::{Deserialize, Serialize};

use capbudget_analytics::irr::IrrSolverConfig;
use capbudget_analytics::plausibility::PlausibilityBounds;

use crate::error::{Validate, ValidationError};

/// Top-level configuration for the engine and its front ends.
///
/// Every field has a default, so a file only needs the values it changes.
///
/// # Example
///
/// ```rust
/// use capbudget_config::{EngineConfig, Validate};
///
/// let config: EngineConfig = toml::from_str(
///     r#"
///     default_discount_rate = 0.08
///
///     [irr]
///     tolerance = 1e-6
///     "#,
/// )
/// .unwrap();
///
/// assert_eq!(config.default_discount_rate, 0.08);
/// assert_eq!(config.irr.max_iterations, 100);
/// assert!(config.is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Discount rate used when none is supplied.
    #[serde(default = "default_discount_rate")]
    pub default_discount_rate: f64,

    /// IRR solver settings.
    #[serde(default)]
    pub irr: IrrSolverConfig,

    /// Ranges for the plausibility check.
    #[serde(default)]
    pub plausibility: PlausibilityBounds,

    /// Presentation settings.
    #[serde(default)]
    pub output: OutputSettings,
}

fn default_discount_rate() -> f64 {
    0.10
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_discount_rate: default_discount_rate(),
            irr: IrrSolverConfig::default(),
            plausibility: PlausibilityBounds::default(),
            output: OutputSettings::default(),
        }
    }
}

impl EngineConfig {
    /// Sets the default discount rate.
    #[must_use]
    pub fn with_default_discount_rate(mut self, rate: f64) -> Self {
        self.default_discount_rate = rate;
        self
    }

    /// Sets the IRR solver settings.
    #[must_use]
    pub fn with_irr(mut self, irr: IrrSolverConfig) -> Self {
        self.irr = irr;
        self
    }
}

/// How numbers are rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Decimal places for currency amounts.
    #[serde(default = "default_decimal_places")]
    pub decimal_places: usize,

    /// Prefix for currency amounts.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_decimal_places() -> usize {
    2
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            decimal_places: default_decimal_places(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl Validate for EngineConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if !self.default_discount_rate.is_finite() || self.default_discount_rate <= -1.0 {
            errors.push(ValidationError::with_rule(
                "default_discount_rate",
                format!(
                    "Discount rate {} must be finite and greater than -1",
                    self.default_discount_rate
                ),
                "valid_rate",
            ));
        }

        errors.extend(validate_irr(&self.irr));
        errors.extend(validate_plausibility(&self.plausibility));
        errors.extend(self.output.validate());

        errors
    }
}

impl Validate for OutputSettings {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.decimal_places > 10 {
            errors.push(ValidationError::with_rule(
                "output.decimal_places",
                "Decimal places cannot exceed 10",
                "max_precision",
            ));
        }

        errors
    }
}

fn validate_irr(irr: &IrrSolverConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if !(irr.tolerance > 0.0 && irr.tolerance.is_finite()) {
        errors.push(ValidationError::with_rule(
            "irr.tolerance",
            "Tolerance must be positive",
            "valid_tolerance",
        ));
    }

    if irr.max_iterations == 0 {
        errors.push(ValidationError::with_rule(
            "irr.max_iterations",
            "Max iterations must be at least 1",
            "valid_iterations",
        ));
    }

    if !(irr.min_derivative >= 0.0) {
        errors.push(ValidationError::new(
            "irr.min_derivative",
            "Minimum derivative cannot be negative",
        ));
    }

    if !(irr.lower_bound > -1.0) {
        errors.push(ValidationError::with_rule(
            "irr.lower_bound",
            format!("Lower bound {} must be greater than -1", irr.lower_bound),
            "valid_rate",
        ));
    }

    if !(irr.lower_bound < irr.upper_bound) || !irr.upper_bound.is_finite() {
        errors.push(ValidationError::new(
            "irr.upper_bound",
            format!(
                "Upper bound {} must be finite and above the lower bound {}",
                irr.upper_bound, irr.lower_bound
            ),
        ));
    }

    if irr.seeds.is_empty() {
        errors.push(ValidationError::with_rule(
            "irr.seeds",
            "At least one seed is required",
            "non_empty",
        ));
    }

    for (i, seed) in irr.seeds.iter().enumerate() {
        if !(*seed >= irr.lower_bound && *seed <= irr.upper_bound) {
            errors.push(ValidationError::new(
                format!("irr.seeds[{i}]"),
                format!(
                    "Seed {seed} lies outside [{}, {}]",
                    irr.lower_bound, irr.upper_bound
                ),
            ));
        }
    }

    if irr.scan_points < 2 {
        errors.push(ValidationError::new(
            "irr.scan_points",
            "Scan needs at least 2 intervals",
        ));
    }

    if !(irr.root_separation > 0.0) {
        errors.push(ValidationError::new(
            "irr.root_separation",
            "Root separation must be positive",
        ));
    }

    if !(irr.max_residual > 0.0 && irr.max_residual.is_finite()) {
        errors.push(ValidationError::new(
            "irr.max_residual",
            "Residual threshold must be positive",
        ));
    }

    errors
}

fn validate_plausibility(bounds: &PlausibilityBounds) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if !(bounds.max_abs_npv > 0.0) {
        errors.push(ValidationError::new(
            "plausibility.max_abs_npv",
            "NPV limit must be positive",
        ));
    }
    if !(bounds.min_irr < bounds.max_irr) {
        errors.push(ValidationError::new(
            "plausibility.max_irr",
            "IRR range is empty",
        ));
    }
    if !(bounds.max_payback > 0.0) {
        errors.push(ValidationError::new(
            "plausibility.max_payback",
            "Payback limit must be positive",
        ));
    }
    if !(bounds.min_profitability_index < bounds.max_profitability_index) {
        errors.push(ValidationError::new(
            "plausibility.max_profitability_index",
            "Profitability index range is empty",
        ));
    }

    errors
}
