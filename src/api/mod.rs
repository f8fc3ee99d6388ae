pub mod files;
pub mod listing;
pub mod process;

pub use files::handle_file;
pub use listing::{__path_handle_command_list, __path_handle_file_list};
pub use listing::{handle_command_list, handle_file_list, handle_index, pipe_list};
pub use process::{handle_process, ErrorResponse, __path_handle_process};
