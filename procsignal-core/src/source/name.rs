//! 名称解析：status 中的短名称 + 截断名称恢复。

use super::records::recover_truncated;
use super::*;
use tracing::{debug, trace};

impl ProcessSource {
    /// 解析进程名称，结果缓存在 handle 上，后续调用不再读取文件。
    ///
    /// 短名称长度达到 [`TRUNCATED_NAME_LEN`] 时读取 cmdline 尝试恢复完整名称；
    /// cmdline 为空时保留短名称。status/cmdline 读取失败原样返回。
    pub fn resolve_name<'h>(&self, handle: &'h mut ProcessHandle) -> Result<&'h str> {
        if handle.name.is_none() {
            let name = self.read_name(handle)?;
            handle.name = Some(name);
        }
        Ok(handle.name.as_deref().unwrap_or_default())
    }

    /// 枚举并解析名称，返回摘要列表。
    ///
    /// 只读视图：解析期间已退出的进程跳过，其他读取错误仍然返回。
    pub fn processes(&self) -> Result<Vec<ProcessInfo>> {
        let mut out = Vec::new();
        for mut handle in self.enumerate()? {
            let name = match self.resolve_name(&mut handle) {
                Ok(name) => name.to_string(),
                Err(err) if err.is_process_gone() => {
                    debug!(pid = handle.pid, "process exited during listing");
                    continue;
                }
                Err(err) => return Err(err),
            };
            out.push(ProcessInfo {
                pid: handle.pid,
                name,
            });
        }
        Ok(out)
    }

    fn read_name(&self, handle: &ProcessHandle) -> Result<String> {
        let pid = handle.pid;
        let raw = self.read_record(pid, "status")?;
        let short = parse_status_name(&String::from_utf8_lossy(&raw)).unwrap_or_default();
        if short.len() < TRUNCATED_NAME_LEN {
            return Ok(short);
        }
        let args = self.cmdline(handle)?;
        match recover_truncated(&short, &args) {
            Some(full) => {
                trace!(pid, short = %short, full = %full, "recovered truncated process name");
                Ok(full)
            }
            None => Ok(short),
        }
    }
}
