pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::messages::{Locale, Messages};
pub use crate::core::{
    engine::{CalcEngine, Outcome},
    pipeline::SimplePipeline,
};
pub use utils::error::{CalcError, ErrorKind, Result};
