//! Configuration loading for the salary calculator service.
//!
//! This module loads the service settings and request defaults from YAML
//! files in a configuration directory.
//!
//! # Example
//!
//! ```no_run
//! use salary_calculator::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Binding to: {}", config.server().bind_address);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CalculatorConfig, InputDefaults, ServerConfig};
