use nix::errno::Errno;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Common result type for core operations.
pub type Result<T> = std::result::Result<T, ProcError>;

#[derive(Debug, Error)]
pub enum ProcError {
    #[error("failed to list process directory {}: {source}", .path.display())]
    Enumerate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read {} for process {pid}: {source}", .path.display())]
    Read {
        pid: u32,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to send signal {signal} to process {pid}: {source}")]
    Signal {
        pid: u32,
        signal: i32,
        #[source]
        source: Errno,
    },
}

impl ProcError {
    /// 进程在枚举之后已退出：记录文件消失或信号投递返回 ESRCH。
    ///
    /// 核心逻辑不吞掉这类错误，由调用方决定忽略还是整体重试。
    pub fn is_process_gone(&self) -> bool {
        match self {
            ProcError::Read { source, .. } => source.kind() == io::ErrorKind::NotFound,
            ProcError::Signal { source, .. } => *source == Errno::ESRCH,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_record_counts_as_gone() {
        let err = ProcError::Read {
            pid: 42,
            path: PathBuf::from("/proc/42/status"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert!(err.is_process_gone());
    }

    #[test]
    fn permission_denied_is_not_gone() {
        let err = ProcError::Signal {
            pid: 1,
            signal: 15,
            source: Errno::EPERM,
        };
        assert!(!err.is_process_gone());
        let err = ProcError::Signal {
            pid: 1,
            signal: 15,
            source: Errno::ESRCH,
        };
        assert!(err.is_process_gone());
    }

    #[test]
    fn enumerate_error_mentions_path() {
        let err = ProcError::Enumerate {
            path: PathBuf::from("/nope"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert!(err.to_string().contains("/nope"));
    }
}
