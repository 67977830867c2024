//! WhereClause：有序的条件序列，渲染为 `WHERE ...` 或 `HAVING ...`。
//!
//! 同一类型也是 `where_group` 使用的临时收集器：回调拿到一个空的 `WhereClause`，
//! 追加条件后返回，父级再把收集到的条件提升为一个条件组。

use crate::arg::Arg;
use crate::condition::{Combinator, Condition, Operator, write_conditions};
use crate::expr::Expr;
use crate::flavor::Flavor;
use crate::string_builder::StringBuilder;

#[derive(Debug, Default, Clone)]
pub struct WhereClause {
    conditions: Vec<Condition>,
}

impl WhereClause {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, condition: Condition) {
        self.conditions.push(condition);
    }

    pub fn extend(&mut self, conditions: impl IntoIterator<Item = Condition>) {
        self.conditions.extend(conditions);
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// 没有任何会被渲染的条件（空组不算）。
    pub fn is_empty(&self) -> bool {
        self.conditions.iter().all(Condition::is_empty)
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    /// 追加一个 AND 条件。
    pub fn where_(mut self, field: impl Into<Expr>, op: Operator, value: impl Into<Arg>) -> Self {
        self.push(Condition::new(field, op, value));
        self
    }

    /// 追加一个 OR 条件。
    pub fn where_or(
        mut self,
        field: impl Into<Expr>,
        op: Operator,
        value: impl Into<Arg>,
    ) -> Self {
        self.push(Condition::new(field, op, value).or());
        self
    }

    /// 追加一个以 AND 连接的括号组。
    pub fn where_group(mut self, f: impl FnOnce(WhereClause) -> WhereClause) -> Self {
        self.extend(lift_group(f, Combinator::And));
        self
    }

    /// 追加一个以 OR 连接的括号组。
    pub fn where_or_group(mut self, f: impl FnOnce(WhereClause) -> WhereClause) -> Self {
        self.extend(lift_group(f, Combinator::Or));
        self
    }

    /// 批量追加已构造好的条件，保留它们各自的 combinator。
    pub fn where_condition(mut self, conditions: impl IntoIterator<Item = Condition>) -> Self {
        self.extend(conditions);
        self
    }

    /// 把全部条件合并为一个条件组；没有条件时返回 `None`。
    pub fn into_group(self) -> Option<Condition> {
        if self.is_empty() {
            return None;
        }
        Some(Condition::group(self.conditions))
    }

    /// 只渲染条件表达式（不含关键字）。
    pub fn to_sql(&self, flavor: Flavor) -> String {
        let mut out = String::new();
        write_conditions(&mut out, &self.conditions, flavor);
        out
    }

    pub(crate) fn write_clause(&self, buf: &mut StringBuilder, keyword: &str, flavor: Flavor) {
        if self.is_empty() {
            return;
        }
        let out = buf.write_leading(keyword);
        out.push(' ');
        write_conditions(out, &self.conditions, flavor);
    }
}

/// 在一个全新的收集器上运行 `f`，把结果提升为一个条件组。
pub(crate) fn lift_group(
    f: impl FnOnce(WhereClause) -> WhereClause,
    combinator: Combinator,
) -> Option<Condition> {
    f(WhereClause::new())
        .into_group()
        .map(|g| g.with_combinator(combinator))
}
