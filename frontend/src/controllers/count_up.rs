/// Cubic ease-out over `[0, 1]`.
pub fn ease_out_cubic(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

/// Frame counter for a number that counts up from zero to its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountUp {
    frames: u32,
    frame: u32,
    started: bool,
}

impl CountUp {
    pub fn new(frames: u32) -> Self {
        Self {
            frames: frames.max(1),
            frame: 0,
            started: false,
        }
    }

    /// Claims the single run this counter gets. Returns `false` once a run
    /// has already been started, finished or not.
    pub fn begin(&mut self) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        true
    }

    /// Milliseconds between frames so the whole run takes `duration_ms`.
    pub fn frame_interval_ms(&self, duration_ms: u32) -> u32 {
        (duration_ms / self.frames).max(1)
    }

    /// Moves one frame forward and returns the eased progress.
    pub fn advance(&mut self) -> f64 {
        if self.frame < self.frames {
            self.frame += 1;
        }
        self.eased()
    }

    pub fn eased(&self) -> f64 {
        ease_out_cubic(self.frame as f64 / self.frames as f64)
    }

    pub fn is_done(&self) -> bool {
        self.frame >= self.frames
    }
}

/// Whole-number value shown at `eased` progress, floored like a counter.
pub fn whole_value(target: u32, eased: f64) -> u32 {
    (target as f64 * eased).floor() as u32
}

/// Value rounded to `decimals` places at `eased` progress.
pub fn decimal_value(target: f64, eased: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (target * eased * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_hits_the_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);
        assert!(ease_out_cubic(0.5) > 0.5);
    }

    #[test]
    fn runs_to_completion_and_holds() {
        let mut count = CountUp::new(60);
        assert_eq!(count.frame_interval_ms(2000), 33);
        let mut last = 0.0;
        for _ in 0..60 {
            let now = count.advance();
            assert!(now >= last);
            last = now;
        }
        assert!(count.is_done());
        assert_eq!(count.advance(), 1.0);
        assert_eq!(whole_value(94, count.eased()), 94);
    }

    #[test]
    fn runs_only_once() {
        let mut count = CountUp::new(3);
        assert!(count.begin());
        assert!(!count.begin());
        count.advance();
        count.advance();
        count.advance();
        assert!(count.is_done());
        assert!(!count.begin());
    }

    #[test]
    fn zero_frames_is_treated_as_one() {
        let mut count = CountUp::new(0);
        assert_eq!(count.advance(), 1.0);
        assert!(count.is_done());
    }

    #[test]
    fn values_are_floored_or_rounded() {
        assert_eq!(whole_value(90, 0.5), 45);
        assert_eq!(whole_value(87, 0.5), 43);
        assert_eq!(decimal_value(4.2, 0.5, 1), 2.1);
        assert_eq!(decimal_value(120.0, 0.25, 0), 30.0);
    }
}
