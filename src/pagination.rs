//! 分页子句：MySQL 风格的 `LIMIT ... OFFSET ...` 与 ANSI 风格的 `OFFSET ... FETCH NEXT ...`。
//!
//! 两者逻辑上互斥，但这里不强制；同时设置时都会渲染，`QueryBuilder::validate` 会报告冲突。

use crate::string_builder::StringBuilder;

/// 分页快照：`count` 为 0 表示未分页。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pagination {
    pub count: u64,
    pub offset: u64,
}

impl Pagination {
    pub fn new(count: u64, offset: u64) -> Self {
        Self { count, offset }
    }

    /// 按页码（从 1 开始）计算分页窗口；`page` 为 0 时按第 1 页处理。
    pub fn page(page: u64, page_size: u64) -> Self {
        Self {
            count: page_size,
            offset: page.saturating_sub(1).saturating_mul(page_size),
        }
    }

    pub fn is_set(&self) -> bool {
        self.count > 0
    }
}

#[derive(Debug, Default, Clone)]
pub(crate) struct Limit {
    pub(crate) page: Pagination,
}

impl Limit {
    /// 返回当前值并清零。
    pub(crate) fn take(&mut self) -> Pagination {
        std::mem::take(&mut self.page)
    }

    pub(crate) fn write_to(&self, buf: &mut StringBuilder) {
        if !self.page.is_set() {
            return;
        }
        let out = buf.write_leading("LIMIT");
        out.push_str(&format!(" {} OFFSET {}", self.page.count, self.page.offset));
    }
}

#[derive(Debug, Default, Clone)]
pub(crate) struct Fetch {
    pub(crate) page: Pagination,
}

impl Fetch {
    pub(crate) fn take(&mut self) -> Pagination {
        std::mem::take(&mut self.page)
    }

    pub(crate) fn write_to(&self, buf: &mut StringBuilder) {
        if !self.page.is_set() {
            return;
        }
        let out = buf.write_leading("OFFSET");
        out.push_str(&format!(
            " {} ROWS FETCH NEXT {} ROWS ONLY",
            self.page.offset, self.page.count
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render_limit(l: &Limit) -> String {
        let mut buf = StringBuilder::new();
        l.write_to(&mut buf);
        buf.into_string()
    }

    fn render_fetch(f: &Fetch) -> String {
        let mut buf = StringBuilder::new();
        f.write_to(&mut buf);
        buf.into_string()
    }

    #[test]
    fn limit_renders_count_then_offset() {
        let l = Limit {
            page: Pagination::new(10, 20),
        };
        assert_eq!(render_limit(&l), "LIMIT 10 OFFSET 20");
    }

    #[test]
    fn fetch_renders_offset_then_count() {
        let f = Fetch {
            page: Pagination::new(10, 20),
        };
        assert_eq!(render_fetch(&f), "OFFSET 20 ROWS FETCH NEXT 10 ROWS ONLY");
    }

    #[test]
    fn zero_count_is_omitted_even_with_offset() {
        let l = Limit {
            page: Pagination::new(0, 20),
        };
        assert_eq!(render_limit(&l), "");
        let f = Fetch {
            page: Pagination::new(0, 20),
        };
        assert_eq!(render_fetch(&f), "");
    }

    #[test]
    fn take_resets() {
        let mut l = Limit {
            page: Pagination::new(10, 5),
        };
        assert_eq!(l.take(), Pagination::new(10, 5));
        assert_eq!(l.page, Pagination::default());
    }

    #[test]
    fn page_window() {
        assert_eq!(Pagination::page(3, 25), Pagination::new(25, 50));
        assert_eq!(Pagination::page(1, 25), Pagination::new(25, 0));
        assert_eq!(Pagination::page(0, 25), Pagination::new(25, 0));
    }
}
