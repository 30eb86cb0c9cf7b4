//! 进程信息源：读取 /proc 根目录枚举 pid，并解析每个进程的名称。

use crate::config::ProcConfig;
use crate::error::{ProcError, Result};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

mod name;
mod records;

pub use records::{base_name, parse_cmdline, parse_status_name, TRUNCATED_NAME_LEN};

/// 一次枚举得到的进程快照；名称在首次解析后缓存。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessHandle {
    pid: u32,
    name: Option<String>,
}

impl ProcessHandle {
    pub fn new(pid: u32) -> Self {
        Self { pid, name: None }
    }

    pub fn pid(&self) -> u32 {
        self.pid
    }

    /// 已缓存的名称；尚未解析时为 None。
    pub fn cached_name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// 对外输出的进程摘要（pid + 解析后的名称）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessInfo {
    pub pid: u32,
    pub name: String,
}

/// 基于 /proc 伪文件系统的进程信息源。
#[derive(Debug, Clone, Default)]
pub struct ProcessSource {
    config: ProcConfig,
}

impl ProcessSource {
    pub fn new(config: ProcConfig) -> Self {
        Self { config }
    }

    /// 列出根目录下所有数字命名的条目，按 pid 升序返回。
    ///
    /// 非数字条目直接跳过；根目录本身无法读取时返回 `Enumerate` 错误。
    pub fn enumerate(&self) -> Result<Vec<ProcessHandle>> {
        let root = self.config.root();
        let enumerate_err = |source| ProcError::Enumerate {
            path: root.to_path_buf(),
            source,
        };
        let mut pids = Vec::new();
        for entry in fs::read_dir(root).map_err(enumerate_err)? {
            let entry = entry.map_err(enumerate_err)?;
            if let Some(pid) = entry.file_name().to_str().and_then(parse_pid) {
                pids.push(pid);
            }
        }
        pids.sort_unstable();
        Ok(pids.into_iter().map(ProcessHandle::new).collect())
    }

    /// 读取 <root>/<pid>/cmdline 并拆分为参数列表。
    pub fn cmdline(&self, handle: &ProcessHandle) -> Result<Vec<String>> {
        let raw = self.read_record(handle.pid, "cmdline")?;
        Ok(parse_cmdline(&raw))
    }

    fn record_path(&self, pid: u32, record: &str) -> PathBuf {
        self.config.path(&[pid.to_string().as_str(), record])
    }

    fn read_record(&self, pid: u32, record: &str) -> Result<Vec<u8>> {
        let path = self.record_path(pid, record);
        fs::read(&path).map_err(|source| ProcError::Read { pid, path, source })
    }
}

/// 目录名必须全部为 ASCII 数字，且落在宿主 pid_t 的非负范围内。
fn parse_pid(name: &str) -> Option<u32> {
    if name.is_empty() || !name.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    name.parse::<i32>().ok().map(|pid| pid as u32)
}
