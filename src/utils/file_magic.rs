/// PDF 文件头
const PDF_MAGIC: &[u8] = b"%PDF";

/// 验证文件内容是否以 PDF 魔术字节开头
///
/// # Arguments
/// * `data` - 文件内容的前几个字节
pub fn is_pdf(data: &[u8]) -> bool {
    data.starts_with(PDF_MAGIC)
}
