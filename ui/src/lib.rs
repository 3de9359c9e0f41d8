//! SIGES UI Library
//!
//! This crate provides the SIGES user interface - the single-page
//! administrative UI of the SIGES platform.
//!
//! # Modules
//!
//! - [`app`]: Root application component and routing
//! - [`client`]: Backend data client for the header fields
//! - [`components`]: UI components (module buttons, data header)
//! - [`nav`]: Navigation trigger core and router collaborator
//! - [`state`]: Global state management

pub mod app;
pub mod client;
pub mod components;
pub mod nav;
pub mod state;

pub use app::App;
