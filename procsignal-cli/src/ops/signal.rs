use super::output::print_json;
use super::OutputFormat;
use nix::sys::signal::Signal;
use procsignal_core::{signal_procs, ProcConfig};
use serde::Serialize;
use std::str::FromStr;
use tracing::info;

#[derive(Debug, Serialize)]
struct SignalReport<'a> {
    name: &'a str,
    signal: i32,
    pids: Vec<u32>,
}

/// 向名为 `name` 的所有进程发送信号并输出已投递的 pid。
pub fn signal_processes(
    config: ProcConfig,
    name: &str,
    signal: i32,
    output: OutputFormat,
) -> anyhow::Result<()> {
    let pids = signal_procs(config, name, signal)?;
    if pids.is_empty() {
        info!(name, "no matching process");
    }
    match output {
        OutputFormat::Json => print_json(&SignalReport { name, signal, pids })?,
        OutputFormat::Table => {
            for pid in pids {
                println!("{pid}");
            }
        }
    }
    Ok(())
}

/// 解析信号参数：数字，或不区分大小写的名称（`TERM` / `SIGTERM`）。
pub fn parse_signal(raw: &str) -> Result<i32, String> {
    let raw = raw.trim();
    if let Ok(num) = raw.parse::<i32>() {
        return Ok(num);
    }
    let upper = raw.to_ascii_uppercase();
    let full = if upper.starts_with("SIG") {
        upper
    } else {
        format!("SIG{upper}")
    };
    Signal::from_str(&full)
        .map(|sig| sig as i32)
        .map_err(|_| format!("unknown signal: {raw}"))
}
