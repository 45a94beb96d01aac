pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, OutputFormat};

pub use config::roster::RosterConfig;
pub use core::{cage::Cage, intersection::has_intersection};
pub use domain::model::{Bird, BirdKind};
pub use domain::ports::Animal;
pub use utils::error::{CageError, Result};
