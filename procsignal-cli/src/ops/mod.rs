mod list;
mod output;
mod signal;

pub use list::list_processes;
pub use output::OutputFormat;
pub use signal::{parse_signal, signal_processes};
