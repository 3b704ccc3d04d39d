pub const COUNT_DURATION_MS: u32 = 2000;
pub const COUNT_TICK_MS: u32 = 16;

/// Count-up from zero to a target in fixed increments.
///
/// `start` is one-shot: once an animation has been started it can never be
/// armed again, even after it has finished.
#[derive(Clone, Debug, PartialEq)]
pub struct CountUp {
    target: u32,
    step: f64,
    current: f64,
    started: bool,
    finished: bool,
}

impl CountUp {
    pub fn new(target: u32, duration_ms: u32, tick_ms: u32) -> Self {
        let ticks = (f64::from(duration_ms) / f64::from(tick_ms.max(1))).max(1.0);
        Self {
            target,
            step: f64::from(target) / ticks,
            current: 0.0,
            started: false,
            finished: false,
        }
    }

    pub fn with_defaults(target: u32) -> Self {
        Self::new(target, COUNT_DURATION_MS, COUNT_TICK_MS)
    }

    /// Arms the animation. Returns `false` if it was already started.
    pub fn start(&mut self) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        true
    }

    pub fn is_running(&self) -> bool {
        self.started && !self.finished
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advances one tick. Returns whether another tick is needed.
    pub fn tick(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.current += self.step;
        if self.current >= f64::from(self.target) {
            self.current = f64::from(self.target);
            self.finished = true;
        }
        !self.finished
    }

    /// The number to display.
    pub fn value(&self) -> u32 {
        self.current.floor() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reaches_target_exactly() {
        let mut counter = CountUp::new(100, 2000, 16);
        assert!(counter.start());

        let mut previous = counter.value();
        let mut ticks = 0;
        while counter.tick() {
            ticks += 1;
            assert!(counter.value() >= previous);
            assert!(counter.value() <= 100);
            previous = counter.value();
        }
        assert_eq!(counter.value(), 100);
        assert!(counter.is_finished());
        // 2000 / 16 = 125 ticks, float drift may add one
        assert!(ticks <= 126, "took {ticks} ticks");
    }

    #[test]
    fn test_does_not_move_before_start() {
        let mut counter = CountUp::with_defaults(75);
        assert!(!counter.tick());
        assert_eq!(counter.value(), 0);
    }

    #[test]
    fn test_start_is_one_shot() {
        let mut counter = CountUp::with_defaults(5);
        assert!(counter.start());
        while counter.tick() {}
        assert!(!counter.start());
        assert!(!counter.tick());
        assert_eq!(counter.value(), 5);
    }

    #[test]
    fn test_large_target_terminates() {
        let mut counter = CountUp::with_defaults(4500);
        counter.start();
        let mut ticks = 0;
        while counter.tick() {
            ticks += 1;
            assert!(ticks < 200);
        }
        assert_eq!(counter.value(), 4500);
    }

    #[test]
    fn test_zero_target_and_zero_duration() {
        let mut zero = CountUp::with_defaults(0);
        zero.start();
        assert!(!zero.tick());
        assert_eq!(zero.value(), 0);

        let mut instant = CountUp::new(42, 0, 16);
        instant.start();
        assert!(!instant.tick());
        assert_eq!(instant.value(), 42);
    }
}
