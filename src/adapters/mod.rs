//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `http/` - Course service client
//! - `svn/` - Subversion command line client
//! - `toml/` - Link store kept in the configuration file
//! - `console/` - Interactive link prompt

pub mod console;
pub mod http;
pub mod svn;
pub mod toml;

pub use console::ConsolePrompt;
pub use http::HttpCourseSource;
pub use svn::SvnClient;
pub use toml::TomlLinkStore;
