use crate::domain::model::Direction;
use crate::domain::ports::ProgressSink;

/// Default sink for interactive runs: one stdout line per move and per
/// milestone.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleProgress;

impl ProgressSink for ConsoleProgress {
    fn moved(&self, direction: Direction, distance: u32) {
        println!("Moved {} {} m", direction, distance);
    }

    fn event(&self, message: &str) {
        println!("{}", message);
    }
}
