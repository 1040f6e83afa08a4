pub mod dom;
pub mod interactions;
mod routes;
pub mod schedule;
mod startup;
pub mod templates;
mod utils;

pub use routes::*;
pub use startup::*;
pub use utils::*;
