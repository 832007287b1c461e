pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};
pub use core::{engine::ReadmeEngine, pipeline::ReadmePipeline};
pub use utils::error::{ReadmeError, Result};
