//! SQL 片段：字段、表或选择列。要么是原样文本，要么是嵌套的子查询。

use crate::flavor::Flavor;
use crate::query::QueryBuilder;

#[derive(Debug, Clone)]
pub enum Expr {
    /// 原样文本（列名、表名、函数调用等），不做转义。
    Raw(String),
    /// 子查询；渲染为 `(...)`，带别名时为 `(...) AS alias`。
    SubQuery(Box<QueryBuilder>),
}

impl Expr {
    pub fn raw(sql: impl Into<String>) -> Self {
        Self::Raw(sql.into())
    }

    pub fn sub_query(&self) -> Option<&QueryBuilder> {
        match self {
            Self::SubQuery(qb) => Some(qb),
            Self::Raw(_) => None,
        }
    }

    /// 用于错误信息：子查询统一显示为 `(subquery)`。
    pub(crate) fn label(&self) -> String {
        match self {
            Self::Raw(s) => s.clone(),
            Self::SubQuery(_) => "(subquery)".to_string(),
        }
    }

    pub(crate) fn write_to(&self, out: &mut String, flavor: Flavor) {
        match self {
            Self::Raw(s) => out.push_str(s),
            Self::SubQuery(qb) => qb.write_embedded(out, flavor),
        }
    }
}

impl From<&str> for Expr {
    fn from(v: &str) -> Self {
        Self::Raw(v.to_string())
    }
}

impl From<String> for Expr {
    fn from(v: String) -> Self {
        Self::Raw(v)
    }
}

impl From<&String> for Expr {
    fn from(v: &String) -> Self {
        Self::Raw(v.clone())
    }
}

impl From<QueryBuilder> for Expr {
    fn from(v: QueryBuilder) -> Self {
        Self::SubQuery(Box::new(v))
    }
}

impl From<&QueryBuilder> for Expr {
    fn from(v: &QueryBuilder) -> Self {
        Self::SubQuery(Box::new(v.clone()))
    }
}

impl From<&mut QueryBuilder> for Expr {
    fn from(v: &mut QueryBuilder) -> Self {
        Self::SubQuery(Box::new(v.clone()))
    }
}

/// 允许 `select("id")`、`select(["id", "name"])`、`select(vec![...])` 等多种写法。
pub trait IntoExprs {
    fn extend_into_exprs(self, dst: &mut Vec<Expr>);
}

impl IntoExprs for &str {
    fn extend_into_exprs(self, dst: &mut Vec<Expr>) {
        dst.push(self.into());
    }
}

impl IntoExprs for String {
    fn extend_into_exprs(self, dst: &mut Vec<Expr>) {
        dst.push(self.into());
    }
}

impl IntoExprs for Expr {
    fn extend_into_exprs(self, dst: &mut Vec<Expr>) {
        dst.push(self);
    }
}

impl IntoExprs for QueryBuilder {
    fn extend_into_exprs(self, dst: &mut Vec<Expr>) {
        dst.push(self.into());
    }
}

impl IntoExprs for &QueryBuilder {
    fn extend_into_exprs(self, dst: &mut Vec<Expr>) {
        dst.push(self.into());
    }
}

impl IntoExprs for &mut QueryBuilder {
    fn extend_into_exprs(self, dst: &mut Vec<Expr>) {
        dst.push(self.into());
    }
}

impl<T: Into<Expr>, const N: usize> IntoExprs for [T; N] {
    fn extend_into_exprs(self, dst: &mut Vec<Expr>) {
        dst.extend(self.into_iter().map(Into::into));
    }
}

impl<T: Into<Expr>> IntoExprs for Vec<T> {
    fn extend_into_exprs(self, dst: &mut Vec<Expr>) {
        dst.extend(self.into_iter().map(Into::into));
    }
}

impl<T: Into<Expr> + Clone> IntoExprs for &[T] {
    fn extend_into_exprs(self, dst: &mut Vec<Expr>) {
        dst.extend(self.iter().cloned().map(Into::into));
    }
}

pub(crate) fn collect_exprs(value: impl IntoExprs) -> Vec<Expr> {
    let mut dst = Vec::new();
    value.extend_into_exprs(&mut dst);
    dst
}

/// 字段名列表：`group_by("a")`、`group_by(["a", "b"])`。
pub trait IntoStrings {
    fn extend_into_strings(self, dst: &mut Vec<String>);
}

impl IntoStrings for &str {
    fn extend_into_strings(self, dst: &mut Vec<String>) {
        dst.push(self.to_string());
    }
}

impl IntoStrings for String {
    fn extend_into_strings(self, dst: &mut Vec<String>) {
        dst.push(self);
    }
}

impl<T: Into<String>, const N: usize> IntoStrings for [T; N] {
    fn extend_into_strings(self, dst: &mut Vec<String>) {
        dst.extend(self.into_iter().map(Into::into));
    }
}

impl<T: Into<String>> IntoStrings for Vec<T> {
    fn extend_into_strings(self, dst: &mut Vec<String>) {
        dst.extend(self.into_iter().map(Into::into));
    }
}

impl<T: Into<String> + Clone> IntoStrings for &[T] {
    fn extend_into_strings(self, dst: &mut Vec<String>) {
        dst.extend(self.iter().cloned().map(Into::into));
    }
}

pub(crate) fn collect_strings(value: impl IntoStrings) -> Vec<String> {
    let mut dst = Vec::new();
    value.extend_into_strings(&mut dst);
    dst
}
