//! /proc/<pid>/status 与 /proc/<pid>/cmdline 的解析。

/// 内核截断 comm 名称的长度；达到该长度的名称视为可能被截断。
pub const TRUNCATED_NAME_LEN: usize = 15;

/// 从 status 记录中取出 `Name` 字段。
///
/// 每行按第一个 tab 拆分为 `key:` 与 value；没有 tab 的行跳过。
/// 出现多个 `Name` 行时以最后一个为准。
pub fn parse_status_name(text: &str) -> Option<String> {
    let mut name = None;
    for line in text.split('\n') {
        let Some((key, value)) = line.split_once('\t') else {
            continue;
        };
        if key.trim_end_matches(':') == "Name" {
            name = Some(value.trim_matches(|c| c == ' ' || c == '\t').to_string());
        }
    }
    name
}

/// 解析 NUL 分隔的命令行；去掉一个结尾 NUL 后再拆分，空记录返回空列表。
pub fn parse_cmdline(raw: &[u8]) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    let raw = raw.strip_suffix(&[0u8]).unwrap_or(raw);
    raw.split(|b| *b == 0)
        .map(|arg| String::from_utf8_lossy(arg).into_owned())
        .collect()
}

/// 路径最后一段；忽略结尾的 `/`，空路径返回 `.`，全为 `/` 时返回 `/`。
pub fn base_name(path: &str) -> &str {
    if path.is_empty() {
        return ".";
    }
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/";
    }
    match trimmed.rfind('/') {
        Some(idx) => &trimmed[idx + 1..],
        None => trimmed,
    }
}

/// 截断名称恢复：用 cmdline 第一个参数替换被截断的 status 名称。
///
/// 第一个参数的 base name 以截断名称为前缀时采用 base name，否则采用原始参数。
pub(super) fn recover_truncated(short: &str, args: &[String]) -> Option<String> {
    let first = args.first()?;
    let extended = base_name(first);
    if extended.starts_with(short) {
        Some(extended.to_string())
    } else {
        Some(first.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_name_is_trimmed() {
        let status = "Name:\t  sshd \t\nUmask:\t0022\nState:\tS (sleeping)\n";
        assert_eq!(parse_status_name(status).as_deref(), Some("sshd"));
    }

    #[test]
    fn status_without_name_line() {
        assert_eq!(parse_status_name("State:\tR (running)\nno tab here\n"), None);
        assert_eq!(parse_status_name(""), None);
    }

    #[test]
    fn status_key_colons_are_stripped() {
        assert_eq!(parse_status_name("Name::\tfoo").as_deref(), Some("foo"));
        // 只在第一个 tab 处拆分，value 内部的 tab 保留
        assert_eq!(
            parse_status_name("Name:\ta\tb\n").as_deref(),
            Some("a\tb")
        );
    }

    #[test]
    fn last_name_line_wins() {
        let status = "Name:\tfirst\nName:\tsecond\n";
        assert_eq!(parse_status_name(status).as_deref(), Some("second"));
    }

    #[test]
    fn cmdline_strips_single_trailing_nul() {
        assert_eq!(
            parse_cmdline(b"/usr/bin/python3\0-m\0http.server\0"),
            vec!["/usr/bin/python3", "-m", "http.server"]
        );
        assert_eq!(parse_cmdline(b"a\0\0"), vec!["a", ""]);
        assert_eq!(parse_cmdline(b"single"), vec!["single"]);
    }

    #[test]
    fn cmdline_empty_has_no_args() {
        assert!(parse_cmdline(b"").is_empty());
        assert_eq!(parse_cmdline(b"\0"), vec![""]);
    }

    #[test]
    fn base_name_edge_cases() {
        assert_eq!(base_name("/usr/bin/foo"), "foo");
        assert_eq!(base_name("/usr/bin/foo/"), "foo");
        assert_eq!(base_name("foo"), "foo");
        assert_eq!(base_name(""), ".");
        assert_eq!(base_name("///"), "/");
    }

    #[test]
    fn recovery_prefers_base_name_when_prefixed() {
        let args = vec!["/usr/bin/averylongprocessname-extended".to_string()];
        assert_eq!(
            recover_truncated("averylongprocessname", &args).as_deref(),
            Some("averylongprocessname-extended")
        );
    }

    #[test]
    fn recovery_keeps_raw_arg_when_unrelated() {
        let args = vec!["/opt/tool/run.sh".to_string(), "--flag".to_string()];
        assert_eq!(
            recover_truncated("averylongprocessname", &args).as_deref(),
            Some("/opt/tool/run.sh")
        );
        assert_eq!(recover_truncated("averylongprocessname", &[]), None);
    }
}
