mod title_handler;

pub use title_handler::*;
