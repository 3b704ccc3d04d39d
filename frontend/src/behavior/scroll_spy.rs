use std::rc::Rc;

use yew::prelude::*;

/// Distance from the top of the viewport used as the "reading line" when
/// deciding which section is active. Covers the fixed navbar.
pub const HEADER_OFFSET: f64 = 100.0;

/// Past this many pixels of scroll the navbar switches to its solid background.
pub const SCROLLED_THRESHOLD: f64 = 50.0;

/// Gap left above a section when the navbar scrolls to it.
pub const NAV_HEIGHT: f64 = 80.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Projects,
    Skills,
    Contact,
}

impl SectionId {
    /// Declaration order. Also the order the tracker walks sections in.
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Contact,
    ];

    pub fn first() -> Self {
        Self::ALL[0]
    }

    /// The DOM id of the section element.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Projects => "projects",
            SectionId::Skills => "skills",
            SectionId::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Projects => "Projects",
            SectionId::Skills => "Skills",
            SectionId::Contact => "Contact",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// Picks the active section for a scroll position.
///
/// Sections are measured fresh on every call and walked in declaration
/// order; when two of them contain the reading line the later one wins.
/// Sections missing from the page are passed as `None` and skipped. If
/// nothing contains the reading line (e.g. the gap of a section divider)
/// the `current` section stays active.
pub fn active_section<I>(scroll_y: f64, sections: I, current: SectionId) -> SectionId
where
    I: IntoIterator<Item = (SectionId, Option<SectionBounds>)>,
{
    let position = scroll_y + HEADER_OFFSET;
    sections
        .into_iter()
        .filter_map(|(id, bounds)| bounds.map(|b| (id, b)))
        .filter(|(_, bounds)| bounds.contains(position))
        .map(|(id, _)| id)
        .last()
        .unwrap_or(current)
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD
}

/// Navbar state derived from the scroll position.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollSpy {
    pub active: SectionId,
    pub scrolled: bool,
}

impl Default for ScrollSpy {
    fn default() -> Self {
        Self {
            active: SectionId::first(),
            scrolled: false,
        }
    }
}

/// One reading taken in a scroll handler.
pub struct ScrollSample {
    pub scroll_y: f64,
    pub sections: Vec<(SectionId, Option<SectionBounds>)>,
}

impl ScrollSpy {
    pub fn observe(&self, sample: ScrollSample) -> Self {
        Self {
            active: active_section(sample.scroll_y, sample.sections, self.active),
            scrolled: is_scrolled(sample.scroll_y),
        }
    }
}

impl Reducible for ScrollSpy {
    type Action = ScrollSample;

    fn reduce(self: Rc<Self>, sample: Self::Action) -> Rc<Self> {
        let next = self.observe(sample);
        if next == *self {
            self
        } else {
            next.into()
        }
    }
}

/// Where the window should scroll to so that a section starts just below the navbar.
pub fn scroll_target(offset_top: f64) -> f64 {
    (offset_top - NAV_HEIGHT).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<(SectionId, Option<SectionBounds>)> {
        vec![
            (SectionId::Home, Some(SectionBounds::new(0.0, 800.0))),
            (SectionId::About, Some(SectionBounds::new(900.0, 700.0))),
            (SectionId::Projects, Some(SectionBounds::new(1700.0, 900.0))),
            (SectionId::Skills, Some(SectionBounds::new(2700.0, 800.0))),
            (SectionId::Contact, Some(SectionBounds::new(3600.0, 900.0))),
        ]
    }

    #[test]
    fn test_top_of_page_is_first_section() {
        assert_eq!(active_section(0.0, page(), SectionId::first()), SectionId::Home);
        assert_eq!(SectionId::first(), SectionId::Home);
    }

    #[test]
    fn test_reading_line_includes_header_offset() {
        // 850 + 100 = 950 lands inside about
        assert_eq!(active_section(850.0, page(), SectionId::Home), SectionId::About);
        // 750 + 100 = 850 is in the divider gap, previous section stays
        assert_eq!(active_section(750.0, page(), SectionId::Home), SectionId::Home);
    }

    #[test]
    fn test_section_interval_is_half_open() {
        let bounds = SectionBounds::new(100.0, 50.0);
        assert!(bounds.contains(100.0));
        assert!(bounds.contains(149.9));
        assert!(!bounds.contains(150.0));
    }

    #[test]
    fn test_later_section_wins_on_overlap() {
        let overlapping = vec![
            (SectionId::Home, Some(SectionBounds::new(0.0, 1000.0))),
            (SectionId::About, Some(SectionBounds::new(900.0, 500.0))),
        ];
        assert_eq!(active_section(850.0, overlapping, SectionId::Home), SectionId::About);
    }

    #[test]
    fn test_missing_sections_are_skipped() {
        let sparse = vec![
            (SectionId::Home, Some(SectionBounds::new(0.0, 800.0))),
            (SectionId::About, None),
            (SectionId::Projects, Some(SectionBounds::new(800.0, 400.0))),
        ];
        assert_eq!(active_section(750.0, sparse, SectionId::Home), SectionId::Projects);
    }

    #[test]
    fn test_active_section_is_always_declared() {
        let mut current = SectionId::first();
        let mut y = 0.0;
        while y < 6000.0 {
            current = active_section(y, page(), current);
            assert!(SectionId::ALL.contains(&current));
            y += 37.0;
        }
    }

    #[test]
    fn test_repeated_scroll_at_same_position_is_stable() {
        for y in [0.0, 760.0, 1234.0, 3000.0, 9000.0] {
            let once = active_section(y, page(), SectionId::Home);
            let twice = active_section(y, page(), once);
            let thrice = active_section(y, page(), twice);
            assert_eq!(once, twice);
            assert_eq!(twice, thrice);
        }
    }

    #[test]
    fn test_spy_tracks_section_and_background() {
        let spy = Rc::new(ScrollSpy::default());
        assert_eq!(spy.active, SectionId::Home);
        assert!(!spy.scrolled);

        let spy = spy.reduce(ScrollSample { scroll_y: 1800.0, sections: page() });
        assert_eq!(spy.active, SectionId::Projects);
        assert!(spy.scrolled);

        let spy = spy.reduce(ScrollSample { scroll_y: 0.0, sections: page() });
        assert_eq!(*spy, ScrollSpy::default());
    }

    #[test]
    fn test_spy_keeps_same_state_for_same_position() {
        let spy = Rc::new(ScrollSpy::default())
            .reduce(ScrollSample { scroll_y: 1000.0, sections: page() });
        let again = spy.clone().reduce(ScrollSample { scroll_y: 1000.0, sections: page() });
        assert!(Rc::ptr_eq(&spy, &again));
    }

    #[test]
    fn test_scrolled_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
    }

    #[test]
    fn test_scroll_target_leaves_room_for_nav() {
        assert_eq!(scroll_target(900.0), 820.0);
        assert_eq!(scroll_target(20.0), 0.0);
    }
}
