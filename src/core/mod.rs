pub mod engine;
pub mod greeter;
pub mod loader;
pub mod pipeline;
pub mod report;

pub use crate::domain::model::{LoadResult, Person, RosterReport, Target};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
