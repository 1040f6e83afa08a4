mod fragments;
mod home;

pub use fragments::events_fragment_handler;
pub use home::index_handler;
