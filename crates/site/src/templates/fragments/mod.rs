mod event_card;
mod event_list;

pub use event_card::event_card;
pub use event_list::{event_list, events_empty, events_error, events_loading};
