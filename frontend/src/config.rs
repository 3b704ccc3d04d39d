use crate::behavior::menu::MenuVariant;

/// Apps Script endpoint that appends contact submissions to the sheet.
pub const FORM_ENDPOINT: &str =
    "https://script.google.com/macros/s/AKfycbwT06_AM7sRbUc1bNB-ThLhX_47XzbRi2VEadJphk1Z7Pa32vZW_aN72RBkBazWYS0v/exec";

pub const PHOTOS_URL: &str = "https://photos.amitadhikary.com";

pub const RESUME_PATH: &str = "/assets/images/Amit_Adhikary_resume.pdf";

/// Social links presentation mounted by the app shell.
pub const SOCIAL_MENU_VARIANT: MenuVariant = MenuVariant::Sidebar;

#[cfg(debug_assertions)]
pub fn get_asset_root() -> &'static str {
    "/assets/images" // trunk serve
}

#[cfg(not(debug_assertions))]
pub fn get_asset_root() -> &'static str {
    "https://amitadhikary.com/assets/images"
}

pub fn asset(path: &str) -> String {
    format!("{}/{}", get_asset_root(), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_joins_with_single_slash() {
        assert_eq!(asset("/Projects/maze.png"), format!("{}/Projects/maze.png", get_asset_root()));
        assert_eq!(asset("TS/java.png"), format!("{}/TS/java.png", get_asset_root()));
    }
}
