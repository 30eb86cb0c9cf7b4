//! Core library for signaling processes by name: /proc enumeration, name resolution, and signal dispatch.

mod config;
mod dispatcher;
mod error;
mod source;

pub use config::{ProcConfig, DEFAULT_PROC_ROOT, PROC_ROOT_ENV};
pub use dispatcher::{signal_procs, KillSender, SignalDispatcher, SignalSender};
pub use error::{ProcError, Result};
pub use source::{
    base_name, parse_cmdline, parse_status_name, ProcessHandle, ProcessInfo, ProcessSource,
    TRUNCATED_NAME_LEN,
};
