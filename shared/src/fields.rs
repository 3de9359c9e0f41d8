//! Data-header field types
//!
//! The data header shows a fixed set of labeled fields describing the
//! current management context. Labels and their order are fixed; values
//! arrive from the backend.

use serde::{Deserialize, Serialize};

/// A labeled display field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldEntry {
    /// Display label
    pub label: String,

    /// Display value, empty until the backend populates it
    #[serde(default)]
    pub value: String,
}

impl FieldEntry {
    /// Create a field with an empty value
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: String::new(),
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }
}

/// Labels of the data-header fields, in display order
pub const HEADER_LABELS: [&str; 5] = [
    "Órgano desconcentrado",
    "Código de centro gestor",
    "Establecimiento de salud",
    "Actividad",
    "Prioridad",
];

/// The data-header field set with empty values
pub fn header_fields() -> Vec<FieldEntry> {
    HEADER_LABELS.iter().map(|label| FieldEntry::new(*label)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_fields_fixed_order() {
        let fields = header_fields();

        assert_eq!(fields.len(), 5);
        assert_eq!(fields[0].label, "Órgano desconcentrado");
        assert_eq!(fields[1].label, "Código de centro gestor");
        assert_eq!(fields[2].label, "Establecimiento de salud");
        assert_eq!(fields[3].label, "Actividad");
        assert_eq!(fields[4].label, "Prioridad");
    }

    #[test]
    fn test_header_fields_start_empty() {
        assert!(header_fields().iter().all(|f| f.value.is_empty()));
    }

    #[test]
    fn test_with_value() {
        let field = FieldEntry::new("Actividad").with_value("Inmunizaciones");
        assert_eq!(field.value, "Inmunizaciones");
    }
}
