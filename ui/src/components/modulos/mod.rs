//! Module navigation components

mod boton;
mod panel;

pub use boton::BotonModulo;
pub use panel::PanelModulos;
