use clap::ValueEnum;
use procsignal_core::ProcessInfo;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

pub fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// 以表格或 JSON 输出进程列表。
pub fn print_processes(list: &[ProcessInfo], output: OutputFormat) -> anyhow::Result<()> {
    match output {
        OutputFormat::Json => print_json(list)?,
        OutputFormat::Table => println!("{}", render_table(list)),
    }
    Ok(())
}

fn render_table(list: &[ProcessInfo]) -> String {
    let width = list
        .iter()
        .map(|p| p.pid.to_string().len())
        .max()
        .unwrap_or(0)
        .max("PID".len());
    let mut out = format!("{:>width$}  NAME", "PID");
    for p in list {
        out.push('\n');
        out.push_str(&format!("{:>width$}  {}", p.pid, p.name));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_aligns_pid_column() {
        let list = vec![
            ProcessInfo { pid: 1, name: "init".into() },
            ProcessInfo { pid: 12345, name: "helper".into() },
        ];
        assert_eq!(
            render_table(&list),
            "  PID  NAME\n    1  init\n12345  helper"
        );
    }

    #[test]
    fn table_header_only_when_empty() {
        assert_eq!(render_table(&[]), "PID  NAME");
    }
}
