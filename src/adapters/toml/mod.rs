//! TOML-based link store
//!
//! Implements `LinkStore` using the configuration file.
//!
//! - [`store`] - `LinkStore` implementation

pub mod store;

pub use store::TomlLinkStore;
