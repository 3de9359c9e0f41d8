//! Data-header components

mod tabla;

pub use tabla::DatosCabecera;
