pub mod components;
pub mod fragments;
pub mod layouts;
pub mod pages;

pub use fragments::{event_card, event_list, events_empty, events_error, events_loading};
pub use layouts::{base, PageConfig};
pub use pages::home_page;
