// 📝 Form parsing - HTML form fields to numbers and names
//
// Every numeric field falls back to a default instead of failing the request.

use crate::store::DEFAULT_NAME;
use serde::Deserialize;
use tracing::warn;

/// Capacity used when the create form leaves it out
pub const DEFAULT_CAPACITY: f64 = 100.0;

/// Parse a form value as a float, falling back to `default`.
///
/// Missing, empty, unparseable and non-finite values all yield the default.
pub fn safe_float(value: Option<&str>, default: f64) -> f64 {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return default;
    };

    match raw.parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => parsed,
        _ => {
            warn!(value = %raw, default, "Invalid number in form, using default");
            default
        }
    }
}

/// Trimmed name, or `fallback` when missing or blank
fn name_or(value: Option<&str>, fallback: &str) -> String {
    match value.map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => fallback.to_string(),
    }
}

// ============================================================================
// FORMS
// ============================================================================

/// POST /warehouse/create
#[derive(Debug, Default, Deserialize)]
pub struct CreateWarehouseForm {
    pub name: Option<String>,
    /// Capacity
    pub tilavuus: Option<String>,
    /// Initial level
    pub alku_saldo: Option<String>,
}

impl CreateWarehouseForm {
    pub fn name(&self) -> String {
        name_or(self.name.as_deref(), DEFAULT_NAME)
    }

    pub fn capacity(&self) -> f64 {
        safe_float(self.tilavuus.as_deref(), DEFAULT_CAPACITY)
    }

    pub fn initial_level(&self) -> f64 {
        safe_float(self.alku_saldo.as_deref(), 0.0)
    }
}

/// POST /warehouse/:id/edit
#[derive(Debug, Default, Deserialize)]
pub struct EditWarehouseForm {
    pub name: Option<String>,
    pub tilavuus: Option<String>,
}

impl EditWarehouseForm {
    /// New name, keeping `current` when the field is missing or blank
    pub fn name(&self, current: &str) -> String {
        name_or(self.name.as_deref(), current)
    }

    /// New capacity, keeping `current` when the field is missing or invalid
    pub fn capacity(&self, current: f64) -> f64 {
        safe_float(self.tilavuus.as_deref(), current)
    }
}

/// POST /warehouse/:id/add and /warehouse/:id/remove
#[derive(Debug, Default, Deserialize)]
pub struct AmountForm {
    pub amount: Option<String>,
}

impl AmountForm {
    pub fn amount(&self) -> f64 {
        safe_float(self.amount.as_deref(), 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_float_valid_values() {
        assert_eq!(safe_float(Some("10.5"), 0.0), 10.5);
        assert_eq!(safe_float(Some("42"), 0.0), 42.0);
        assert_eq!(safe_float(Some(" 7 "), 0.0), 7.0);
        assert_eq!(safe_float(Some("-3"), 0.0), -3.0);
    }

    #[test]
    fn test_safe_float_falls_back_to_default() {
        assert_eq!(safe_float(Some("invalid"), 0.0), 0.0);
        assert_eq!(safe_float(None, 0.0), 0.0);
        assert_eq!(safe_float(Some(""), 0.0), 0.0);
        assert_eq!(safe_float(Some("invalid"), 100.0), 100.0);
    }

    #[test]
    fn test_safe_float_rejects_non_finite() {
        assert_eq!(safe_float(Some("NaN"), 1.0), 1.0);
        assert_eq!(safe_float(Some("inf"), 1.0), 1.0);
        assert_eq!(safe_float(Some("-infinity"), 1.0), 1.0);
    }

    #[test]
    fn test_create_form_defaults() {
        let form = CreateWarehouseForm::default();

        assert_eq!(form.name(), "Unnamed");
        assert_eq!(form.capacity(), 100.0);
        assert_eq!(form.initial_level(), 0.0);
    }

    #[test]
    fn test_create_form_blank_name_uses_default() {
        let form = CreateWarehouseForm {
            name: Some("   ".to_string()),
            tilavuus: Some("abc".to_string()),
            alku_saldo: Some("12".to_string()),
        };

        assert_eq!(form.name(), "Unnamed");
        assert_eq!(form.capacity(), 100.0);
        assert_eq!(form.initial_level(), 12.0);
    }

    #[test]
    fn test_edit_form_keeps_current_values() {
        let form = EditWarehouseForm {
            name: None,
            tilavuus: Some("not a number".to_string()),
        };

        assert_eq!(form.name("Varasto A"), "Varasto A");
        assert_eq!(form.capacity(150.0), 150.0);
    }

    #[test]
    fn test_amount_form() {
        let form = AmountForm {
            amount: Some("30".to_string()),
        };
        assert_eq!(form.amount(), 30.0);
        assert_eq!(AmountForm::default().amount(), 0.0);
    }
}
