use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static UNSAFE_CHARS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_.-]").expect("Invalid filename regex"));

// Windows 保留设备名
const WINDOWS_DEVICE_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "LPT1", "LPT2", "LPT3",
];

/// 将客户端提供的文件名转换为可安全落盘的名称
///
/// - NFKD 分解后丢弃非 ASCII 字符（`é` 变为 `e`）
/// - 路径分隔符视为空白，空白折叠为 `_`
/// - 只保留 `[A-Za-z0-9_.-]`
/// - 去掉首尾的 `.` 和 `_`
/// - 仅在 Windows 上为保留设备名加 `_` 前缀
///
/// 结果可能为空字符串，由调用方决定如何处理。
pub fn secure_filename(filename: &str) -> String {
    let ascii: String = filename
        .nfkd()
        .filter(char::is_ascii)
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();

    let joined = ascii.split_whitespace().collect::<Vec<_>>().join("_");
    let cleaned = UNSAFE_CHARS_RE.replace_all(&joined, "");
    let mut name = cleaned.trim_matches(|c| c == '.' || c == '_').to_string();

    let stem = name.split('.').next().unwrap_or_default().to_ascii_uppercase();
    if cfg!(windows) && WINDOWS_DEVICE_NAMES.contains(&stem.as_str()) {
        name = format!("_{name}");
    }

    name
}
