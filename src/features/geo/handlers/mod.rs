pub mod proximity_handler;

pub use proximity_handler::{__path_find_nearby, find_nearby};
