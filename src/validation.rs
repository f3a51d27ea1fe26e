//! Validation System - Rule/Policy Separation
//!
//! Rules produce structured violations.
//! Policy: errors block rendering, warnings are reported and logged.

use serde::{Deserialize, Serialize};

use crate::config::SealConfig;
use crate::layout::FONT_SIZE;

/// Years shown after the start year
const YEAR_SPAN: i64 = 5;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ViolationSeverity {
    Error,
    Warning,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationViolation {
    pub rule: String,
    pub severity: ViolationSeverity,
    pub message: String,
    pub expected: Option<String>,
    pub actual: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub violations: Vec<ValidationViolation>,
}

impl ValidationResult {
    pub fn has_errors(&self) -> bool {
        self.violations.iter().any(|v| v.severity == ViolationSeverity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationViolation> {
        self.violations.iter().filter(|v| v.severity == ViolationSeverity::Warning)
    }

    /// "rule: message" for every error, joined with "; "
    pub fn error_summary(&self) -> String {
        self.violations
            .iter()
            .filter(|v| v.severity == ViolationSeverity::Error)
            .map(|v| format!("{}: {}", v.rule, v.message))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Validation rule trait - produces violations
pub trait SealRule {
    fn name(&self) -> &'static str;
    fn validate(&self, config: &SealConfig) -> Vec<ValidationViolation>;
}

// --- Concrete Rules ---

pub struct PositiveRadiusRule;

impl SealRule for PositiveRadiusRule {
    fn name(&self) -> &'static str { "positive_radius" }

    fn validate(&self, config: &SealConfig) -> Vec<ValidationViolation> {
        [("outer radius", config.outer_radius), ("inner radius", config.inner_radius)]
            .into_iter()
            .filter(|(_, r)| !(r.is_finite() && *r > 0.0))
            .map(|(what, r)| ValidationViolation {
                rule: self.name().to_string(),
                severity: ViolationSeverity::Error,
                message: format!("{what} must be a positive number"),
                expected: Some("> 0 mm".to_string()),
                actual: Some(format!("{r}")),
            })
            .collect()
    }
}

pub struct RadiusOrderRule;

impl SealRule for RadiusOrderRule {
    fn name(&self) -> &'static str { "radius_order" }

    fn validate(&self, config: &SealConfig) -> Vec<ValidationViolation> {
        if config.inner_radius < config.outer_radius {
            return vec![];
        }

        vec![ValidationViolation {
            rule: self.name().to_string(),
            severity: ViolationSeverity::Error,
            message: "inner radius must be smaller than outer radius".to_string(),
            expected: Some(format!("< {} mm", config.outer_radius)),
            actual: Some(format!("{} mm", config.inner_radius)),
        }]
    }
}

/// Upper bound for either radius (10 m)
pub const MAX_RADIUS_MM: f64 = 10_000.0;

pub struct MaxRadiusRule;

impl SealRule for MaxRadiusRule {
    fn name(&self) -> &'static str { "max_radius" }

    fn validate(&self, config: &SealConfig) -> Vec<ValidationViolation> {
        [("outer radius", config.outer_radius), ("inner radius", config.inner_radius)]
            .into_iter()
            .filter(|(_, r)| r.is_finite() && *r > MAX_RADIUS_MM)
            .map(|(what, r)| ValidationViolation {
                rule: self.name().to_string(),
                severity: ViolationSeverity::Error,
                message: format!("{what} is too large"),
                expected: Some(format!("<= {MAX_RADIUS_MM} mm")),
                actual: Some(format!("{r} mm")),
            })
            .collect()
    }
}

/// The newest year label is `start_year + 5` and must stay representable.
pub struct StartYearRangeRule;

impl SealRule for StartYearRangeRule {
    fn name(&self) -> &'static str { "start_year_range" }

    fn validate(&self, config: &SealConfig) -> Vec<ValidationViolation> {
        let max = i64::MAX - YEAR_SPAN;
        if config.start_year <= max {
            return vec![];
        }

        vec![ValidationViolation {
            rule: self.name().to_string(),
            severity: ViolationSeverity::Error,
            message: "start year too large".to_string(),
            expected: Some(format!("<= {max}")),
            actual: Some(config.start_year.to_string()),
        }]
    }
}

/// Labels are FONT_SIZE tall; a thinner ring lets them spill over its edges.
pub struct RingWidthRule;

impl SealRule for RingWidthRule {
    fn name(&self) -> &'static str { "ring_width" }

    fn validate(&self, config: &SealConfig) -> Vec<ValidationViolation> {
        let width = config.ring_width();
        if !(width > 0.0 && width < FONT_SIZE) {
            return vec![];
        }

        vec![ValidationViolation {
            rule: self.name().to_string(),
            severity: ViolationSeverity::Warning,
            message: "ring is narrower than the label font size".to_string(),
            expected: Some(format!(">= {FONT_SIZE} mm")),
            actual: Some(format!("{width} mm")),
        }]
    }
}

/// Validator orchestrates rules and applies policy
pub struct Validator {
    rules: Vec<Box<dyn SealRule>>,
}

impl Validator {
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(PositiveRadiusRule),
                Box::new(RadiusOrderRule),
                Box::new(MaxRadiusRule),
                Box::new(StartYearRangeRule),
                Box::new(RingWidthRule),
            ],
        }
    }

    pub fn validate(&self, config: &SealConfig) -> ValidationResult {
        let violations: Vec<_> = self.rules
            .iter()
            .flat_map(|rule| rule.validate(config))
            .collect();

        let valid = !violations.iter().any(|v| v.severity == ViolationSeverity::Error);

        ValidationResult { valid, violations }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_clean() {
        let result = Validator::new().validate(&SealConfig::default());
        assert!(result.valid);
        assert!(result.violations.is_empty());
    }

    #[test]
    fn test_inverted_radii_rejected() {
        let result = Validator::new().validate(&SealConfig::with_radii(20.0, 30.0));
        assert!(!result.valid);
        assert!(result.has_errors());
        assert!(result.error_summary().contains("radius_order"));
    }

    #[test]
    fn test_equal_radii_rejected() {
        let result = Validator::new().validate(&SealConfig::with_radii(25.0, 25.0));
        assert!(!result.valid);
    }

    #[test]
    fn test_non_finite_radius_rejected() {
        let result = Validator::new().validate(&SealConfig::with_radii(f64::NAN, 20.0));
        assert!(!result.valid);
        assert!(result.violations.iter().any(|v| v.rule == "positive_radius"));

        let result = Validator::new().validate(&SealConfig::with_radii(30.0, -1.0));
        assert!(!result.valid);
    }

    #[test]
    fn test_huge_radius_rejected() {
        let result = Validator::new().validate(&SealConfig::with_radii(1e305, 1.0));
        assert!(!result.valid);
        assert!(result.error_summary().contains("max_radius"));

        let result = Validator::new().validate(&SealConfig::with_radii(MAX_RADIUS_MM, 20.0));
        assert!(result.valid);
    }

    #[test]
    fn test_start_year_range() {
        let validator = Validator::new();

        let result = validator.validate(&SealConfig::default().with_start_year(i64::MAX));
        assert!(!result.valid);
        assert!(result.error_summary().contains("start_year_range"));

        let result = validator.validate(&SealConfig::default().with_start_year(i64::MAX - 5));
        assert!(result.valid);

        let result = validator.validate(&SealConfig::default().with_start_year(i64::MIN));
        assert!(result.valid);
    }

    #[test]
    fn test_thin_ring_only_warns() {
        let result = Validator::new().validate(&SealConfig::with_radii(30.0, 27.0));
        assert!(result.valid);
        assert_eq!(result.warnings().count(), 1);
        assert!(result.error_summary().is_empty());
    }
}
