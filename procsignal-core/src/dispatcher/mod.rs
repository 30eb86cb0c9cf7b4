//! 按名称分发信号：枚举进程、解析名称、对精确匹配的进程投递信号。

use crate::config::ProcConfig;
use crate::error::{ProcError, Result};
use crate::source::ProcessSource;
use tracing::{debug, info, instrument};

mod kill;

pub use kill::{KillSender, SignalSender};

/// 信号分发器：持有进程信息源与信号投递实现。
#[derive(Debug, Clone)]
pub struct SignalDispatcher<S = KillSender> {
    source: ProcessSource,
    sender: S,
}

impl SignalDispatcher {
    pub fn new(source: ProcessSource) -> Self {
        Self::with_sender(source, KillSender)
    }
}

impl<S: SignalSender> SignalDispatcher<S> {
    pub fn with_sender(source: ProcessSource, sender: S) -> Self {
        Self { source, sender }
    }

    /// 向所有名称为 `name` 的进程发送 `signal`，返回已投递的 pid（按枚举顺序）。
    ///
    /// 信号编号不做限制，由宿主在投递时判定是否有效。
    /// 名称解析或投递失败立即中止，已投递的信号不会回滚。无匹配时返回空列表。
    #[instrument(skip(self))]
    pub fn signal_by_name(&self, name: &str, signal: i32) -> Result<Vec<u32>> {
        let mut signaled = Vec::new();
        for mut handle in self.source.enumerate()? {
            if self.source.resolve_name(&mut handle)? != name {
                continue;
            }
            debug!(pid = handle.pid(), "process name matched");
            self.sender.send(handle.pid(), signal)?;
            info!(pid = handle.pid(), signal, "signal delivered");
            signaled.push(handle.pid());
        }
        if signaled.is_empty() {
            debug!("no process matched");
        }
        Ok(signaled)
    }
}

/// 单一入口：以给定根目录配置向名为 `name` 的进程发送信号。
pub fn signal_procs(config: ProcConfig, name: &str, signal: i32) -> Result<Vec<u32>> {
    SignalDispatcher::new(ProcessSource::new(config)).signal_by_name(name, signal)
}
