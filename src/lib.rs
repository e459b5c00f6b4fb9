pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use self::adapters::storage::LocalStorage;
pub use self::core::{engine::RosterEngine, greeter::Greeter, loader::RecordLoader, pipeline::RosterPipeline};
pub use self::domain::model::{AgePolicy, LoadResult, OutputFormat, Person, Target};
pub use self::utils::error::{Result, RosterError};
