pub const TYPE_INTERVAL_MS: u32 = 100;
pub const DELETE_INTERVAL_MS: u32 = 50;
/// How long a fully typed string stays on screen before deleting starts.
pub const HOLD_MS: u32 = 2000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Deleting,
}

/// Typing/deleting cycle over a fixed list of strings.
///
/// The engine does not own a timer. The caller waits [`Typewriter::delay_ms`],
/// calls [`Typewriter::tick`] and repeats; each tick moves the text by at
/// most one character.
#[derive(Clone, Debug, PartialEq)]
pub struct Typewriter {
    sources: &'static [&'static str],
    index: usize,
    shown: usize,
    phase: Phase,
    delay_ms: u32,
}

impl Typewriter {
    pub fn new(sources: &'static [&'static str]) -> Self {
        Self {
            sources,
            index: 0,
            shown: 0,
            phase: Phase::Typing,
            delay_ms: TYPE_INTERVAL_MS,
        }
    }

    pub fn source(&self) -> &'static str {
        self.sources.get(self.index).copied().unwrap_or("")
    }

    /// Milliseconds to wait before the next tick.
    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// The visible prefix of the current source string.
    pub fn text(&self) -> &'static str {
        let source = self.source();
        match source.char_indices().nth(self.shown) {
            Some((end, _)) => &source[..end],
            None => source,
        }
    }

    pub fn tick(&mut self) {
        let len = self.source().chars().count();
        match self.phase {
            Phase::Typing if self.shown >= len => {
                self.phase = Phase::Deleting;
                self.delay_ms = HOLD_MS + DELETE_INTERVAL_MS;
            }
            Phase::Typing => {
                self.shown += 1;
                self.delay_ms = TYPE_INTERVAL_MS;
            }
            Phase::Deleting if self.shown == 0 => {
                self.phase = Phase::Typing;
                self.index = (self.index + 1) % self.sources.len().max(1);
                self.delay_ms = TYPE_INTERVAL_MS;
            }
            Phase::Deleting => {
                self.shown -= 1;
                self.delay_ms = DELETE_INTERVAL_MS;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static TWO: &[&str] = &["A", "BB"];

    #[test]
    fn test_cycle_for_two_strings() {
        let mut engine = Typewriter::new(TWO);
        assert_eq!(engine.text(), "");

        let mut seen = Vec::new();
        for _ in 0..11 {
            engine.tick();
            seen.push(engine.text());
        }
        assert_eq!(seen, vec!["A", "A", "", "", "B", "BB", "BB", "B", "", "", "A"]);
    }

    #[test]
    fn test_delays_follow_phase() {
        let mut engine = Typewriter::new(TWO);
        assert_eq!(engine.delay_ms(), TYPE_INTERVAL_MS);

        engine.tick(); // "A"
        assert_eq!(engine.delay_ms(), TYPE_INTERVAL_MS);

        engine.tick(); // full string observed, hold before deleting
        assert_eq!(engine.phase, Phase::Deleting);
        assert_eq!(engine.delay_ms(), HOLD_MS + DELETE_INTERVAL_MS);

        engine.tick(); // ""
        assert_eq!(engine.delay_ms(), DELETE_INTERVAL_MS);

        engine.tick(); // empty observed, move on
        assert_eq!(engine.phase, Phase::Typing);
        assert_eq!(engine.index, 1);
        assert_eq!(engine.delay_ms(), TYPE_INTERVAL_MS);
    }

    #[test]
    fn test_text_never_exceeds_source() {
        static TITLES: &[&str] = &["Full Stack Developer", "Rust", "Ünïcödé ✓"];
        let mut engine = Typewriter::new(TITLES);
        for _ in 0..500 {
            engine.tick();
            assert!(engine.text().chars().count() <= engine.source().chars().count());
            assert!(engine.source().starts_with(engine.text()));
        }
    }

    #[test]
    fn test_index_wraps_around() {
        let mut engine = Typewriter::new(TWO);
        // "A" takes 4 ticks to come and go, "BB" takes 6
        for _ in 0..10 {
            engine.tick();
        }
        assert_eq!(engine.index, 0);
        assert_eq!(engine.phase, Phase::Typing);
    }

    #[test]
    fn test_empty_list_stays_empty() {
        static NONE: &[&str] = &[];
        let mut engine = Typewriter::new(NONE);
        for _ in 0..10 {
            engine.tick();
            assert_eq!(engine.text(), "");
        }
    }
}
