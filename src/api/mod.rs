pub mod process;

pub use process::{handle_process, __path_handle_process};
