use std::time::Duration;

/// Braille "dot" cycle, one glyph per frame.
const SPINNER_FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Interval between animation ticks (10 FPS)
pub const SPINNER_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpinnerState {
    frame: usize,
}

impl SpinnerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self) {
        self.frame = (self.frame + 1) % SPINNER_FRAMES.len();
    }

    pub fn glyph(&self) -> &'static str {
        SPINNER_FRAMES[self.frame]
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn frame_count() -> usize {
        SPINNER_FRAMES.len()
    }
}

#[cfg(any(test, feature = "test-support"))]
impl SpinnerState {
    pub fn at_frame(frame: usize) -> Self {
        Self {
            frame: frame % SPINNER_FRAMES.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_first_frame() {
        let spinner = SpinnerState::new();

        assert_eq!(spinner.frame(), 0);
        assert_eq!(spinner.glyph(), "⣾");
    }

    #[test]
    fn tick_advances_one_frame() {
        let mut spinner = SpinnerState::new();

        spinner.tick();

        assert_eq!(spinner.frame(), 1);
        assert_eq!(spinner.glyph(), "⣽");
    }

    #[test]
    fn tick_wraps_after_last_frame() {
        let mut spinner = SpinnerState::new();

        for _ in 0..SpinnerState::frame_count() {
            spinner.tick();
        }

        assert_eq!(spinner, SpinnerState::new());
    }

    #[test]
    fn every_glyph_is_a_single_char() {
        for glyph in SPINNER_FRAMES {
            assert_eq!(glyph.chars().count(), 1, "{glyph:?}");
        }
    }

    #[test]
    fn at_frame_wraps_out_of_range_index() {
        let spinner = SpinnerState::at_frame(SPINNER_FRAMES.len() + 2);

        assert_eq!(spinner.frame(), 2);
    }
}
