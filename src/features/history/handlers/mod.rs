pub mod history_handler;

pub use history_handler::{__path_get_history, get_history};
