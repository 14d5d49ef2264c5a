pub mod client;
pub mod navigator;
pub mod progress;

pub use crate::domain::model::{Direction, HallDimensions};
pub use crate::domain::ports::{ConfigProvider, ProgressSink, RobotApi};
pub use crate::utils::error::Result;
