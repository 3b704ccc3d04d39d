pub const PORTFOLIO_URL: &str = "https://amitadhikary.com";
pub const PORTFOLIO_CONTACT_URL: &str = "https://amitadhikary.com#contact";

/// Scroll distance after which the navbar gets its solid background.
pub const SCROLLED_THRESHOLD: f64 = 50.0;

pub struct FooterLink {
    pub name: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const FOOTER_SOCIALS: &[FooterLink] = &[
    FooterLink { name: "GitHub", href: "https://github.com/amitadhikary02", icon: "⌥" },
    FooterLink { name: "LinkedIn", href: "https://linkedin.com/in/amit-adhikary-02", icon: "in" },
    FooterLink { name: "Email", href: "mailto:amitadhikary0604@gmail.com", icon: "✉" },
];

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD
}

pub fn link_target(href: &str) -> &'static str {
    if href.starts_with("mailto:") {
        "_self"
    } else {
        "_blank"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrolled_is_strictly_past_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
    }

    #[test]
    fn test_mail_links_stay_in_tab() {
        assert_eq!(link_target(FOOTER_SOCIALS[2].href), "_self");
        assert_eq!(link_target(FOOTER_SOCIALS[0].href), "_blank");
    }

    #[test]
    fn test_contact_link_points_into_portfolio() {
        assert!(PORTFOLIO_CONTACT_URL.starts_with(PORTFOLIO_URL));
        assert!(PORTFOLIO_CONTACT_URL.ends_with("#contact"));
    }
}
