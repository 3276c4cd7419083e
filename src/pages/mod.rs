//! Pages
//!
//! One component per route.

mod about;
mod home;
mod not_found;
mod portfolio;
mod success;

pub use about::AboutPage;
pub use home::HomePage;
pub use not_found::NotFound;
pub use portfolio::PortfolioPage;
pub use success::SuccessPage;
