//! Open/close contract shared by the floating social menus.
//!
//! The sidebar, dock and orbit widgets all drive a [`MenuState`] with the
//! same events and differ only in how they lay the links out.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    /// Click on the widget's own toggle button.
    Toggle,
    /// Any window scroll.
    Scroll,
    /// Pointer pressed somewhere outside the widget root.
    PointerDownOutside,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    pub fn next(self, event: MenuEvent) -> Self {
        match (self, event) {
            (MenuState::Closed, MenuEvent::Toggle) => MenuState::Open,
            (MenuState::Open, _) => MenuState::Closed,
            (MenuState::Closed, _) => MenuState::Closed,
        }
    }
}

/// Which presentation of the social menu the page mounts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuVariant {
    #[default]
    Sidebar,
    Dock,
    Orbit,
}

/// Dock magnification for the icon at `index` while `hovered` is under the pointer.
pub fn dock_scale(hovered: Option<usize>, index: usize) -> f64 {
    let Some(hovered) = hovered else {
        return 1.0;
    };
    match hovered.abs_diff(index) {
        0 => 1.5,
        1 => 1.2,
        2 => 1.1,
        _ => 1.0,
    }
}

pub const ORBIT_RADIUS: f64 = 120.0;

/// Offset in pixels from the orbit centre for a link placed at `angle_deg`.
pub fn orbit_offset(angle_deg: f64, radius: f64) -> (f64, f64) {
    let rad = angle_deg.to_radians();
    (rad.cos() * radius, rad.sin() * radius)
}

/// Evenly spaced angles for `count` links, starting at 0°.
pub fn orbit_angles(count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    let step = 360.0 / count as f64;
    (0..count).map(|i| i as f64 * step).collect()
}

/// `target` for an outbound link: mail and phone links stay in the current tab.
pub fn link_target(href: &str) -> &'static str {
    if href.starts_with("mailto:") || href.starts_with("tel:") {
        "_self"
    } else {
        "_blank"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_on_mount() {
        assert_eq!(MenuState::default(), MenuState::Closed);
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn test_toggle_opens_and_closes() {
        let open = MenuState::Closed.next(MenuEvent::Toggle);
        assert!(open.is_open());
        assert_eq!(open.next(MenuEvent::Toggle), MenuState::Closed);
    }

    #[test]
    fn test_scroll_closes_open_menu() {
        let open = MenuState::Closed.next(MenuEvent::Toggle);
        assert_eq!(open.next(MenuEvent::Scroll), MenuState::Closed);
    }

    #[test]
    fn test_outside_pointer_closes_open_menu() {
        let open = MenuState::Closed.next(MenuEvent::Toggle);
        assert_eq!(open.next(MenuEvent::PointerDownOutside), MenuState::Closed);
    }

    #[test]
    fn test_closing_events_never_open() {
        assert_eq!(MenuState::Closed.next(MenuEvent::Scroll), MenuState::Closed);
        assert_eq!(
            MenuState::Closed.next(MenuEvent::PointerDownOutside),
            MenuState::Closed
        );
    }

    #[test]
    fn test_dock_scale_falls_off_with_distance() {
        assert_eq!(dock_scale(None, 3), 1.0);
        assert_eq!(dock_scale(Some(3), 3), 1.5);
        assert_eq!(dock_scale(Some(3), 2), 1.2);
        assert_eq!(dock_scale(Some(3), 4), 1.2);
        assert_eq!(dock_scale(Some(3), 5), 1.1);
        assert_eq!(dock_scale(Some(3), 0), 1.0);
    }

    #[test]
    fn test_orbit_geometry() {
        assert_eq!(orbit_angles(8), vec![0.0, 45.0, 90.0, 135.0, 180.0, 225.0, 270.0, 315.0]);
        assert!(orbit_angles(0).is_empty());

        let (x, y) = orbit_offset(0.0, ORBIT_RADIUS);
        assert!((x - 120.0).abs() < 1e-9);
        assert!(y.abs() < 1e-9);

        let (x, y) = orbit_offset(90.0, ORBIT_RADIUS);
        assert!(x.abs() < 1e-9);
        assert!((y - 120.0).abs() < 1e-9);
    }

    #[test]
    fn test_link_target() {
        assert_eq!(link_target("mailto:someone@example.com"), "_self");
        assert_eq!(link_target("tel:+10000000"), "_self");
        assert_eq!(link_target("https://github.com/amit59684"), "_blank");
    }
}
