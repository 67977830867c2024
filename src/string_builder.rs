//! 语句拼接工具：按段写入，段与段之间用单个空格分隔。

#[derive(Debug, Default, Clone)]
pub(crate) struct StringBuilder {
    buf: String,
}

impl StringBuilder {
    pub(crate) fn new() -> Self {
        Self { buf: String::new() }
    }

    /// 开始一个新段：非首段时先写入一个空格，再写入 `keyword`。
    ///
    /// 返回底层缓冲区，调用方继续写入该段剩余内容。
    pub(crate) fn write_leading(&mut self, keyword: &str) -> &mut String {
        if !self.buf.is_empty() {
            self.buf.push(' ');
        }
        self.buf.push_str(keyword);
        &mut self.buf
    }

    pub(crate) fn into_string(self) -> String {
        self.buf
    }
}

/// 把 `items` 逐个写入 `out`，相邻两项之间写入 `sep`。
pub(crate) fn write_separated<I, T>(
    out: &mut String,
    items: I,
    sep: &str,
    mut write: impl FnMut(&mut String, T),
) where
    I: IntoIterator<Item = T>,
{
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push_str(sep);
        }
        write(out, item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_space_only_between_segments() {
        let mut sb = StringBuilder::new();
        sb.write_leading("SELECT").push_str(" a");
        sb.write_leading("FROM").push_str(" t");
        assert_eq!(sb.into_string(), "SELECT a FROM t");
    }

    #[test]
    fn separated_skips_trailing_separator() {
        let mut out = String::new();
        write_separated(&mut out, ["a", "b", "c"], ", ", |out, s| out.push_str(s));
        assert_eq!(out, "a, b, c");
    }
}
