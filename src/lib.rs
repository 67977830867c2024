//! halo-query：可嵌套的 SELECT 语句构建器，把链式调用渲染为内联字面量的 SQL 文本。

pub mod arg;
pub mod clause;
pub mod condition;
#[cfg(test)]
mod condition_tests;
pub mod expr;
pub mod flavor;
pub mod join;
pub mod literal;
pub mod pagination;
pub mod query;
mod string_builder;
pub mod validate;
pub mod value;
pub mod valuer;
pub mod where_clause;

pub use crate::arg::{Arg, list, raw, valuer};
pub use crate::clause::Order;
pub use crate::condition::{Combinator, Condition, ConditionKind, Operator};
pub use crate::expr::{Expr, IntoExprs, IntoStrings};
pub use crate::flavor::{
    DefaultFlavorGuard, Flavor, default_flavor, set_default_flavor, set_default_flavor_scoped,
};
pub use crate::join::{JoinItem, JoinType};
pub use crate::literal::{LiteralError, format_value};
pub use crate::pagination::Pagination;
pub use crate::query::QueryBuilder;
pub use crate::validate::BuildError;
pub use crate::value::SqlValue;
pub use crate::valuer::{SqlValuer, ValuerError};
pub use crate::where_clause::WhereClause;

/// 便捷命名空间：`use halo_query::prelude::*;` 一次导入常用类型。
pub mod prelude {
    pub use crate::{
        Arg, Combinator, Condition, Flavor, JoinType, Operator, Order, Pagination, QueryBuilder,
        SqlValue, WhereClause, list, raw,
    };
}
