use super::output::print_processes;
use super::OutputFormat;
use procsignal_core::ProcessSource;

/// 列出进程及解析后的名称，可按名称精确过滤。
pub fn list_processes(
    source: &ProcessSource,
    name: Option<&str>,
    output: OutputFormat,
) -> anyhow::Result<()> {
    let mut list = source.processes()?;
    if let Some(name) = name {
        list.retain(|p| p.name == name);
    }
    print_processes(&list, output)
}
