use crate::domain::model::{Direction, HallDimensions};
use crate::domain::ports::{ProgressSink, RobotApi};
use crate::utils::error::Result;

/// Fixed probe length for every exploratory move.
const STEP: u32 = 5;

/// Drives one robot through the full measure-center-escape sequence. All
/// user-visible narration goes through the injected [`ProgressSink`].
pub struct Navigator<A: RobotApi, P: ProgressSink> {
    api: A,
    email: String,
    progress: P,
}

impl<A: RobotApi, P: ProgressSink> Navigator<A, P> {
    pub fn new(api: A, email: impl Into<String>, progress: P) -> Self {
        Self {
            api,
            email: email.into(),
            progress,
        }
    }

    /// Probe one direction until the hall wall stops the robot, returning
    /// the total distance covered.
    ///
    /// A zero reported distance is the sole exit condition; any positive
    /// result continues the loop. The external contract promises a wall in
    /// every direction, and no local bound is imposed on top of it: if the
    /// server never reports zero, this call never terminates.
    pub async fn move_until_blocked(&self, id: &str, direction: Direction) -> Result<u32> {
        let mut total = 0;
        loop {
            let moved = self.api.move_robot(id, direction, STEP).await?;
            self.progress.moved(direction, moved);
            if moved == 0 {
                break;
            }
            total += moved;
        }
        Ok(total)
    }

    /// Walk the robot right by `target_x`, then up by `target_y`.
    ///
    /// Remaining distance is decremented by what the server reports, not
    /// by what was requested, so an under-delivering move is followed by
    /// smaller corrective moves instead of stalling or overshooting. The
    /// x axis is fully resolved before the y axis begins.
    pub async fn move_to_center(&self, id: &str, target_x: u32, target_y: u32) -> Result<()> {
        for (direction, target) in [(Direction::Right, target_x), (Direction::Up, target_y)] {
            let mut remaining = target;
            while remaining > 0 {
                let step = remaining.min(STEP);
                let moved = self.api.move_robot(id, direction, step).await?;
                self.progress.moved(direction, moved);
                remaining = remaining.saturating_sub(moved);
            }
        }
        Ok(())
    }

    /// Measure the hall by probing all four directions in fixed order:
    /// right, left, up, down.
    ///
    /// Opposite directions can report asymmetric totals since the robot
    /// does not start at a wall, so each axis takes the larger of its pair.
    pub async fn measure_hall(&self, id: &str) -> Result<HallDimensions> {
        let mut width = 0;
        let mut height = 0;
        for direction in [
            Direction::Right,
            Direction::Left,
            Direction::Up,
            Direction::Down,
        ] {
            let distance = self.move_until_blocked(id, direction).await?;
            if direction.is_horizontal() {
                width = width.max(distance);
            } else {
                height = height.max(distance);
            }
        }
        Ok(HallDimensions { width, height })
    }

    /// Full run: create a robot, measure the hall, walk to its center and
    /// attempt the escape.
    ///
    /// Returns whether the escape was granted. A denied escape is a normal
    /// outcome; only request failures surface as errors.
    pub async fn start(&self) -> Result<bool> {
        let id = self.api.create_robot(&self.email).await?;
        self.progress.event(&format!("Robot ID: {}", id));

        self.progress.event("Measuring hall dimensions…");
        let hall = self.measure_hall(&id).await?;
        self.progress.event(&format!(
            "Hall dimensions: W={} m, H={} m",
            hall.width, hall.height
        ));

        let (center_x, center_y) = hall.center();
        self.progress.event(&format!(
            "Center is approximately at x={}, y={}",
            center_x, center_y
        ));

        self.progress.event("Navigating to center…");
        self.move_to_center(&id, center_x, center_y).await?;

        self.progress.event("Escaping…");
        let escaped = self.api.escape(&id).await?;
        if escaped {
            self.progress.event("Escape succeeded! 🎉");
        } else {
            self.progress.event("Escape failed.");
        }

        Ok(escaped)
    }
}
