//! Administrative module descriptors
//!
//! The home screen offers one navigation button per module. Each module
//! carries a display title, the route its button navigates to, and the
//! short name used when reporting a selection.

use serde::{Deserialize, Serialize};

/// The administrative modules reachable from the home screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Module {
    AdminOeAe,
    Gestion,
    Formulacion,
    Pagos,
}

impl Module {
    /// All modules in home-screen order
    pub const ALL: [Module; 4] = [
        Module::AdminOeAe,
        Module::Gestion,
        Module::Formulacion,
        Module::Pagos,
    ];

    /// Display title shown on the module button
    pub fn title(self) -> &'static str {
        match self {
            Module::AdminOeAe => "Administración OE/AE",
            Module::Gestion => "Gestión",
            Module::Formulacion => "Formulación",
            Module::Pagos => "Pagos",
        }
    }

    /// Route the module button navigates to
    pub fn route(self) -> &'static str {
        match self {
            Module::AdminOeAe => "/admin-oe-ae",
            Module::Gestion => "/gestion",
            Module::Formulacion => "/formulation",
            Module::Pagos => "/pagos",
        }
    }

    /// Short name used when reporting a module selection
    pub fn name(self) -> &'static str {
        match self {
            Module::AdminOeAe => "admin-oe-ae",
            Module::Gestion => "gestion",
            Module::Formulacion => "formulation",
            Module::Pagos => "pagos",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_routes() {
        assert_eq!(Module::AdminOeAe.route(), "/admin-oe-ae");
        assert_eq!(Module::Gestion.route(), "/gestion");
        assert_eq!(Module::Formulacion.route(), "/formulation");
        assert_eq!(Module::Pagos.route(), "/pagos");
    }

    #[test]
    fn test_module_order() {
        let titles: Vec<_> = Module::ALL.iter().map(|m| m.title()).collect();
        assert_eq!(
            titles,
            vec!["Administración OE/AE", "Gestión", "Formulación", "Pagos"]
        );
    }
}
