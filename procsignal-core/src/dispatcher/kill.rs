//! 信号投递：通过 kill(2) 向进程发送信号。

use super::*;
use nix::errno::Errno;
use nix::libc;

/// 信号投递的抽象，便于在测试中替换。
pub trait SignalSender {
    fn send(&self, pid: u32, signal: i32) -> Result<()>;
}

/// 默认实现：直接调用 kill(2)，信号编号原样传给宿主。
///
/// 实时信号同样可用；宿主不认识的编号返回 EINVAL，0 只做存在性/权限探测。
#[derive(Debug, Clone, Copy, Default)]
pub struct KillSender;

impl SignalSender for KillSender {
    fn send(&self, pid: u32, signal: i32) -> Result<()> {
        let signal_err = |source| ProcError::Signal {
            pid,
            signal,
            source,
        };
        // 超出 pid_t 的值不能传给 kill(2)：负数会指向进程组或所有进程
        let raw_pid = libc::pid_t::try_from(pid).map_err(|_| signal_err(Errno::ESRCH))?;
        if raw_pid == 0 {
            return Err(signal_err(Errno::ESRCH));
        }
        // SAFETY: kill(2) 只接收两个整数参数，不涉及内存访问
        let res = unsafe { libc::kill(raw_pid, signal) };
        Errno::result(res).map(drop).map_err(signal_err)
    }
}
