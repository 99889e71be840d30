pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::{Cli, Command};

pub use crate::adapters::fragments::{fragment_source, HttpFragments, LocalFragments};
pub use crate::config::{AppConfig, Environment, SharedConfig};
pub use crate::core::events::{EventOutcome, UiEvent};
pub use crate::core::loader::{LoadOutcome, ScoutApp};
pub use crate::core::page::Page;
pub use crate::domain::module::ModuleName;
pub use crate::utils::error::{Result, ScoutError};
