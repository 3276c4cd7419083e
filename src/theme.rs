//! Theme
//!
//! Static visual configuration rendered into a global stylesheet.

/// Visual configuration shared by every page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub font_family: &'static str,
    pub heading_size: &'static str,
    pub heading_weight: &'static str,
    pub body_size: &'static str,
    pub button_radius: &'static str,
    pub button_padding: &'static str,
    pub nav_background: &'static str,
    pub card_max_width: &'static str,
    /// Viewport width at or below which the compact layout applies
    pub mobile_breakpoint: &'static str,
}

pub const THEME: Theme = Theme {
    primary: "#1976d2",
    secondary: "#dc004e",
    font_family: "Arial",
    heading_size: "2rem",
    heading_weight: "bold",
    body_size: "1rem",
    button_radius: "8px",
    button_padding: "8px 16px",
    nav_background: "black",
    card_max_width: "600px",
    mobile_breakpoint: "600px",
};

impl Theme {
    /// Global stylesheet for the app shell
    pub fn to_css(&self) -> String {
        format!(
            r#":root {{
  --primary: {primary};
  --secondary: {secondary};
  --font-family: {font};
  --heading-size: {heading_size};
  --body-size: {body_size};
  --button-radius: {radius};
  --button-padding: {padding};
  --nav-background: {nav};
}}
* {{ box-sizing: border-box; }}
body {{ margin: 0; font-family: var(--font-family); font-size: var(--body-size); }}
h4, .page-heading {{ font-size: var(--heading-size); font-weight: {heading_weight}; }}
button {{ border-radius: var(--button-radius); padding: var(--button-padding); }}
.app-shell {{ display: flex; flex-direction: column; min-height: 100vh; }}
.nav-bar {{ display: flex; align-items: center; padding: 0 16px; min-height: 64px; background: var(--nav-background); color: #fff; }}
.nav-brand {{ flex-grow: 1; font-size: 1.25rem; }}
.nav-link {{ color: inherit; text-decoration: none; border-radius: var(--button-radius); padding: var(--button-padding); transition: background-color 0.3s ease; }}
.nav-link:hover, .nav-link.active {{ background-color: rgba(165, 165, 165, 0.1); }}
.page-container {{ flex: 1; padding: 20px; }}
.search-card {{ max-width: {card}; margin: 16px auto 0; padding: 16px; border-radius: 4px; box-shadow: 0 1px 3px rgba(0, 0, 0, 0.2); }}
.search-grid {{ display: grid; grid-template-columns: 1fr 1fr; gap: 16px; }}
.search-grid .full {{ grid-column: 1 / -1; }}
.search-grid label {{ display: flex; flex-direction: column; gap: 4px; }}
.search-submit {{ width: 100%; background: black; color: #fff; border: none; }}
.search-submit:hover {{ background: #424242; }}
.home-heading {{ text-align: center; margin: 32px 0 16px; }}
@media (max-width: {breakpoint}) {{
  .page-container {{ padding: 10px; }}
  .search-grid {{ grid-template-columns: 1fr; }}
}}
"#,
            primary = self.primary,
            secondary = self.secondary,
            font = self.font_family,
            heading_size = self.heading_size,
            heading_weight = self.heading_weight,
            body_size = self.body_size,
            radius = self.button_radius,
            padding = self.button_padding,
            nav = self.nav_background,
            card = self.card_max_width,
            breakpoint = self.mobile_breakpoint,
        )
    }
}
