mod footer;
mod navbar;
mod scroll_to_top;
mod twitter_timeline;

pub use footer::footer;
pub use navbar::{navbar, NAV_SECTIONS};
pub use scroll_to_top::scroll_to_top;
pub use twitter_timeline::twitter_timeline;
