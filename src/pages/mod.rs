//! Page Views
//!
//! One component per route.

mod about;
mod donate;
mod home;
mod login;
mod not_found;
mod pet_detail;
mod pets;
mod signup;

pub use about::AboutPage;
pub use donate::DonatePage;
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use pet_detail::PetDetailPage;
pub use pets::PetsPage;
pub use signup::SignupPage;

use crate::config::SITE_TITLE;

/// Browser tab title for a page, `None` for the landing page
pub fn page_title(section: Option<&str>) -> String {
    match section {
        Some(section) => format!("{} | {}", section, SITE_TITLE),
        None => SITE_TITLE.to_string(),
    }
}

fn set_page_title(section: Option<&str>) {
    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        doc.set_title(&page_title(section));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_title() {
        assert_eq!(page_title(None), "Animal Care");
        assert_eq!(page_title(Some("Donate")), "Donate | Animal Care");
    }
}
