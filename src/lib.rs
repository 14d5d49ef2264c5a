#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::core::client::HttpRobotClient;
pub use crate::core::navigator::Navigator;
pub use crate::core::progress::ConsoleProgress;
pub use crate::domain::model::{Direction, HallDimensions};
pub use crate::domain::ports::{ConfigProvider, ProgressSink, RobotApi};
pub use crate::utils::error::{Result, RobotError};
