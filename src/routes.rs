//! Route Table
//!
//! Pages reachable by URL path and the links shown in the navigation bar.
//! This is the only path table: the app shell renders whatever
//! `Page::from_path` resolves for the current location.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// A routed page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Portfolio,
    /// Routed but not linked from the navigation bar
    Success,
    NotFound,
}

impl Page {
    /// Pages linked from the navigation bar, in order
    pub const NAV: [Page; 3] = [Page::Home, Page::About, Page::Portfolio];

    /// Pages with a concrete path; everything else is `NotFound`
    pub const ROUTED: [Page; 4] = [Page::Home, Page::About, Page::Portfolio, Page::Success];

    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::About => "/about",
            Page::Portfolio => "/portfolio",
            Page::Success => "/success",
            // Any unmatched path
            Page::NotFound => "*",
        }
    }

    /// Text of the navigation link
    pub fn nav_label(&self) -> &'static str {
        match self {
            Page::Home => "首頁",
            Page::About => "關於我",
            Page::Portfolio => "我的作品集",
            Page::Success => "成功",
            Page::NotFound => "找不到頁面",
        }
    }

    /// Document title while the page is shown
    pub fn title(&self) -> String {
        match self {
            Page::Home => SITE_TITLE.to_string(),
            other => format!("{} | {}", other.nav_label(), SITE_TITLE),
        }
    }

    /// Resolve a location path; trailing slashes are ignored
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ROUTED
            .into_iter()
            .find(|page| page.path() == normalized)
            .unwrap_or(Page::NotFound)
    }
}

/// Page for the current location; must be called inside `<Router>`
pub fn use_current_page() -> Memo<Page> {
    let location = use_location();
    Memo::new(move |_| Page::from_path(&location.pathname.get()))
}

/// Brand text in the navigation bar
pub const SITE_TITLE: &str = "不知道要取什麼";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(Page::from_path("/"), Page::Home);
        assert_eq!(Page::from_path(""), Page::Home);
        assert_eq!(Page::from_path("/about"), Page::About);
        assert_eq!(Page::from_path("/about/"), Page::About);
        assert_eq!(Page::from_path("/portfolio"), Page::Portfolio);
        assert_eq!(Page::from_path("/success"), Page::Success);
        assert_eq!(Page::from_path("/unknown-path"), Page::NotFound);
        assert_eq!(Page::from_path("/About"), Page::NotFound);
        assert_eq!(Page::from_path("/about/me"), Page::NotFound);
    }

    #[test]
    fn test_every_routed_page_resolves_from_its_own_path() {
        for page in Page::ROUTED {
            assert_eq!(Page::from_path(page.path()), page);
            if page != Page::Home {
                assert_eq!(Page::from_path(&format!("{}/", page.path())), page);
            }
        }
        assert!(!Page::ROUTED.contains(&Page::NotFound));
        assert_eq!(Page::from_path(Page::NotFound.path()), Page::NotFound);
        // Every linked page is routed
        assert!(Page::NAV.iter().all(|page| Page::ROUTED.contains(page)));
    }

    #[test]
    fn test_success_is_not_linked() {
        assert!(!Page::NAV.contains(&Page::Success));
        let labels: Vec<&str> = Page::NAV.iter().map(|p| p.nav_label()).collect();
        assert_eq!(labels, vec!["首頁", "關於我", "我的作品集"]);
    }

    #[test]
    fn test_titles() {
        assert_eq!(Page::Home.title(), "不知道要取什麼");
        assert_eq!(Page::About.title(), "關於我 | 不知道要取什麼");
    }
}
