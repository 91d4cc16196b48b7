//! Dashed border stroke animation.

use serde::{Deserialize, Serialize};

/// Dash pattern and how fast it crawls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashStyle {
    pub dash_length: f64,
    pub dash_space: f64,
    /// Frames per second the frame counter advances at
    pub fps: f64,
    /// Seconds for the pattern to move by one full period
    pub period_seconds: f64,
}

impl Default for DashStyle {
    fn default() -> Self {
        Self {
            dash_length: 6.0,
            dash_space: 4.0,
            fps: 60.0,
            period_seconds: 0.8,
        }
    }
}

impl DashStyle {
    /// Length of one dash plus its gap.
    pub fn period(&self) -> f64 {
        self.dash_length + self.dash_space
    }

    /// Offset advance per frame.
    pub fn speed(&self) -> f64 {
        self.period() / self.fps / self.period_seconds
    }
}

/// Current dash offset of the border stroke.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashAnimation {
    style: DashStyle,
    offset: f64,
    frame: u64,
}

impl DashAnimation {
    pub fn new(style: DashStyle) -> Self {
        Self {
            style,
            offset: 0.0,
            frame: 0,
        }
    }

    /// Move the pattern to where it should be at `frame`.
    pub fn tick(&mut self, frame: u64) {
        self.frame = frame;
        self.offset = (frame as f64 * self.style.speed()) % self.style.period();
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn style(&self) -> &DashStyle {
        &self.style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_wraps_each_period() {
        let mut animation = DashAnimation::new(DashStyle::default());
        // 0.8 s at 60 fps is 48 frames per period
        animation.tick(24);
        assert!((animation.offset() - 5.0).abs() < 1e-9);

        animation.tick(48);
        assert!(animation.offset() < 1e-9 || (animation.offset() - 10.0).abs() < 1e-9);

        animation.tick(60);
        assert!((animation.offset() - 2.5).abs() < 1e-9);
    }

    #[test]
    fn offset_stays_within_period() {
        let mut animation = DashAnimation::new(DashStyle::default());
        for frame in 0..1000 {
            animation.tick(frame);
            assert!(animation.offset() >= 0.0);
            assert!(animation.offset() < animation.style().period());
        }
    }
}
