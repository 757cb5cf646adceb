//! Validation and normalisation utilities for CropEye inputs
//!
//! Provider data is loosely typed (numbers arrive as strings with units,
//! method names arrive in any casing), so everything is normalised here
//! before it reaches the engines.

use crate::error::{EngineError, EngineResult};

// ============================================================================
// Provider Value Parsing
// ============================================================================

/// Parse a provider measurement such as `"12.3 mm"`, `"28.9 °C"` or `"4"`.
/// Only the first whitespace-separated token is read.
pub fn parse_measurement(value: &str) -> Option<f64> {
    let token = value.split_whitespace().next()?;
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Normalise a planting method for lookup: lowercase, trimmed,
/// runs of underscores/spaces/hyphens collapsed to one hyphen
pub fn normalize_method(value: &str) -> String {
    let lowered = value.trim().to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut pending_sep = false;

    for c in lowered.chars() {
        if c == '_' || c == '-' || c.is_whitespace() {
            pending_sep = true;
            continue;
        }
        if pending_sep && !out.is_empty() {
            out.push('-');
        }
        pending_sep = false;
        out.push(c);
    }
    out
}

/// Case, whitespace and hyphen insensitive name comparison
pub fn names_match(a: &str, b: &str) -> bool {
    normalize_method(a) == normalize_method(b)
}

/// Require a non-empty string field
pub fn require_non_empty<'a>(value: Option<&'a str>, field: &str) -> EngineResult<&'a str> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(EngineError::validation(field, "must be a non-empty string")),
    }
}

// ============================================================================
// Agronomic Range Validations
// ============================================================================

/// Detection percentages are affected-pixel shares
pub fn validate_percentage(value: f64) -> Result<(), &'static str> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err("Percentage must be between 0 and 100");
    }
    Ok(())
}

/// Crop coefficients for sugarcane stay well under 2
pub fn validate_kc(kc: f64) -> Result<(), &'static str> {
    if !kc.is_finite() || kc < 0.0 {
        return Err("Crop coefficient cannot be negative");
    }
    if kc > 2.0 {
        return Err("Crop coefficient cannot exceed 2");
    }
    Ok(())
}

/// Evapotranspiration and rainfall readings in mm/day
pub fn validate_depth_mm(value: f64) -> Result<(), &'static str> {
    if !value.is_finite() || value < 0.0 {
        return Err("Depth in mm cannot be negative");
    }
    Ok(())
}

/// Plot identifiers come from the farm-context provider
pub fn validate_plot_id(plot_id: &str) -> Result<(), &'static str> {
    if plot_id.trim().is_empty() {
        return Err("Plot id cannot be empty");
    }
    if plot_id.len() > 128 {
        return Err("Plot id must be at most 128 characters");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Provider Value Parsing Tests
    // ========================================================================

    #[test]
    fn test_parse_measurement_with_units() {
        assert_eq!(parse_measurement("12.3 mm"), Some(12.3));
        assert_eq!(parse_measurement("28.9 °C"), Some(28.9));
        assert_eq!(parse_measurement("  4 "), Some(4.0));
        assert_eq!(parse_measurement("0.0 mm"), Some(0.0));
    }

    #[test]
    fn test_parse_measurement_invalid() {
        assert_eq!(parse_measurement(""), None);
        assert_eq!(parse_measurement("mm 12"), None);
        assert_eq!(parse_measurement("NaN"), None);
        assert_eq!(parse_measurement("n/a"), None);
    }

    #[test]
    fn test_normalize_method() {
        assert_eq!(normalize_method("3 Eye Bud"), "3-eye-bud");
        assert_eq!(normalize_method(" single_bud_chip "), "single-bud-chip");
        assert_eq!(normalize_method("Two  Eye__Bud"), "two-eye-bud");
        assert_eq!(normalize_method("sett-method"), "sett-method");
        assert_eq!(normalize_method("sett - method"), "sett-method");
    }

    #[test]
    fn test_names_match() {
        assert!(names_match("Grand Growth", "grand-growth"));
        assert!(names_match("grand_growth", "GRAND GROWTH"));
        assert!(!names_match("Grand Growth", "Maturity"));
    }

    #[test]
    fn test_require_non_empty() {
        assert_eq!(require_non_empty(Some(" x "), "f").unwrap(), "x");
        assert!(require_non_empty(Some("   "), "f").is_err());
        assert!(require_non_empty(None, "f").is_err());
    }

    // ========================================================================
    // Agronomic Range Tests
    // ========================================================================

    #[test]
    fn test_validate_percentage() {
        assert!(validate_percentage(0.0).is_ok());
        assert!(validate_percentage(55.5).is_ok());
        assert!(validate_percentage(100.0).is_ok());
        assert!(validate_percentage(-0.1).is_err());
        assert!(validate_percentage(100.1).is_err());
        assert!(validate_percentage(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_kc() {
        assert!(validate_kc(0.0).is_ok());
        assert!(validate_kc(1.25).is_ok());
        assert!(validate_kc(-0.1).is_err());
        assert!(validate_kc(2.5).is_err());
    }

    #[test]
    fn test_validate_depth_mm() {
        assert!(validate_depth_mm(0.0).is_ok());
        assert!(validate_depth_mm(12.3).is_ok());
        assert!(validate_depth_mm(-1.0).is_err());
    }

    #[test]
    fn test_validate_plot_id() {
        assert!(validate_plot_id("GAT12_P3").is_ok());
        assert!(validate_plot_id("  ").is_err());
        assert!(validate_plot_id(&"x".repeat(129)).is_err());
    }
}
