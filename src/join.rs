//! JOIN 列表：按调用顺序渲染，不去重也不重排。

use crate::condition::Condition;
use crate::expr::Expr;
use crate::flavor::Flavor;
use crate::string_builder::StringBuilder;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinType {
    Inner,
    Left,
    Right,
    Full,
    Cross,
}

impl JoinType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Inner => "INNER JOIN",
            Self::Left => "LEFT JOIN",
            Self::Right => "RIGHT JOIN",
            Self::Full => "FULL JOIN",
            Self::Cross => "CROSS JOIN",
        }
    }
}

impl fmt::Display for JoinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct JoinItem {
    pub join_type: JoinType,
    pub table: Expr,
    /// 只有 `CROSS JOIN` 可以没有 ON。
    pub on: Option<Condition>,
}

#[derive(Debug, Default, Clone)]
pub(crate) struct Joins {
    items: Vec<JoinItem>,
}

impl Joins {
    pub(crate) fn push(&mut self, item: JoinItem) {
        self.items.push(item);
    }

    pub(crate) fn items(&self) -> &[JoinItem] {
        &self.items
    }

    pub(crate) fn write_to(&self, buf: &mut StringBuilder, flavor: Flavor) {
        for item in &self.items {
            let out = buf.write_leading(item.join_type.as_str());
            out.push(' ');
            item.table.write_to(out, flavor);
            if let Some(on) = &item.on
                && !on.is_empty()
            {
                out.push_str(" ON ");
                on.write_to(out, flavor);
            }
        }
    }
}
