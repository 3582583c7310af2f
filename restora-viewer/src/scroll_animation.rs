//! Smooth scrolling for pan and fit requests

use restora_core::viewport::Point;
use std::time::{Duration, Instant};

const DURATION: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy)]
pub struct ScrollAnimation {
    from: Point,
    to: Point,
    started: Option<Instant>,
    duration: Duration,
}

impl ScrollAnimation {
    pub fn new(from: Point, to: Point) -> Self {
        Self {
            from,
            to,
            started: None,
            duration: DURATION,
        }
    }

    pub fn target(&self) -> Point {
        self.to
    }

    /// Offset to show at `now` and whether the animation has finished.
    ///
    /// The first sample anchors the start time.
    pub fn sample(&mut self, now: Instant) -> (Point, bool) {
        let started = *self.started.get_or_insert(now);
        let elapsed = now.saturating_duration_since(started);
        if elapsed >= self.duration {
            return (self.to, true);
        }

        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        // ease-out cubic
        let eased = 1.0 - (1.0 - t).powi(3);
        let point = Point::new(
            self.from.x + (self.to.x - self.from.x) * eased,
            self.from.y + (self.to.y - self.from.y) * eased,
        );
        (point, false)
    }
}
