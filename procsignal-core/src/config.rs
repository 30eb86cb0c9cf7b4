//! /proc 根目录配置：显式传入组件，环境变量仅作为构造时的覆盖来源。

use std::env;
use std::path::{Path, PathBuf};

/// 覆盖 /proc 根目录的环境变量名
pub const PROC_ROOT_ENV: &str = "HOST_PROC";
/// 默认的进程信息根目录
pub const DEFAULT_PROC_ROOT: &str = "/proc";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcConfig {
    root: PathBuf,
}

impl ProcConfig {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// 读取 HOST_PROC；未设置或为空时回退到 /proc。
    pub fn from_env() -> Self {
        let root = env::var(PROC_ROOT_ENV)
            .ok()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PROC_ROOT));
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// 以普通 path join 的方式拼接子路径：<root>/<parts...>
    pub fn path<S: AsRef<Path>>(&self, parts: &[S]) -> PathBuf {
        parts
            .iter()
            .fold(self.root.clone(), |acc, part| acc.join(part))
    }
}

impl Default for ProcConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PROC_ROOT)
    }
}
