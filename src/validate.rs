//! 可选的校验：找出渲染后必然无效的组合。
//!
//! `QueryBuilder::build` 永远不会失败；需要提前发现问题时调用 `validate` 或 `try_build`。

use crate::arg::Arg;
use crate::condition::{Condition, ConditionKind, Operator};
use crate::expr::Expr;
use crate::flavor::Flavor;
use crate::join::JoinType;
use crate::literal::{self, LiteralError};
use crate::pagination::Pagination;
use crate::query::QueryBuilder;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BuildError {
    #[error("query has no FROM table")]
    MissingFrom,
    #[error("both LIMIT {limit:?} and FETCH {fetch:?} are set")]
    ConflictingPagination { limit: Pagination, fetch: Pagination },
    #[error("derived table in {clause} has no alias")]
    DerivedTableWithoutAlias { clause: &'static str },
    #[error("{join_type} {table} has no ON condition")]
    MissingJoinCondition { join_type: JoinType, table: String },
    #[error("`{field} {operator}` expects exactly two values, got {got}")]
    BetweenArity {
        field: String,
        operator: Operator,
        got: usize,
    },
    #[error(transparent)]
    Literal(#[from] LiteralError),
}

impl QueryBuilder {
    /// 检查整棵查询树（包括所有嵌套子查询）。
    pub fn validate(&self) -> Result<(), BuildError> {
        let flavor = self.flavor();
        let res = check_query(self, flavor);
        if let Err(e) = &res {
            tracing::debug!(error = %e, %flavor, "select rejected by validation");
        }
        res
    }

    /// 先校验再渲染。
    pub fn try_build(&self) -> Result<String, BuildError> {
        self.validate()?;
        Ok(self.build())
    }
}

fn check_query(qb: &QueryBuilder, flavor: Flavor) -> Result<(), BuildError> {
    for col in &qb.select.columns {
        check_expr(col, flavor)?;
    }

    let table = qb.from.table.as_ref().ok_or(BuildError::MissingFrom)?;
    if let Some(sub) = table.sub_query()
        && sub.alias().is_none()
        && qb.from.alias.is_none()
    {
        return Err(BuildError::DerivedTableWithoutAlias { clause: "FROM" });
    }
    check_expr(table, flavor)?;

    for join in qb.joins.items() {
        if let Some(sub) = join.table.sub_query()
            && sub.alias().is_none()
        {
            return Err(BuildError::DerivedTableWithoutAlias { clause: "JOIN" });
        }
        check_expr(&join.table, flavor)?;
        match &join.on {
            Some(on) if !on.is_empty() => check_condition(on, flavor)?,
            _ if join.join_type != JoinType::Cross => {
                return Err(BuildError::MissingJoinCondition {
                    join_type: join.join_type,
                    table: join.table.label(),
                });
            }
            _ => {}
        }
    }

    for c in qb.where_clause.conditions() {
        check_condition(c, flavor)?;
    }
    for c in qb.having.conditions() {
        check_condition(c, flavor)?;
    }

    if qb.limit.page.is_set() && qb.fetch.page.is_set() {
        return Err(BuildError::ConflictingPagination {
            limit: qb.limit.page,
            fetch: qb.fetch.page,
        });
    }

    Ok(())
}

fn check_expr(expr: &Expr, flavor: Flavor) -> Result<(), BuildError> {
    match expr {
        Expr::Raw(_) => Ok(()),
        Expr::SubQuery(qb) => check_query(qb, flavor),
    }
}

fn check_condition(c: &Condition, flavor: Flavor) -> Result<(), BuildError> {
    match c.kind() {
        ConditionKind::Group(children) => {
            for child in children {
                check_condition(child, flavor)?;
            }
            Ok(())
        }
        ConditionKind::Leaf {
            field,
            operator,
            value,
        } => {
            check_expr(field, flavor)?;
            if operator.is_null_check() {
                return Ok(());
            }
            if operator.is_range() {
                let got = match value {
                    Arg::List(items) => items.len(),
                    _ => 1,
                };
                if got != 2 {
                    return Err(BuildError::BetweenArity {
                        field: field.label(),
                        operator: *operator,
                        got,
                    });
                }
            }
            check_arg(value, flavor)
        }
    }
}

fn check_arg(arg: &Arg, flavor: Flavor) -> Result<(), BuildError> {
    match arg {
        Arg::Value(v) => {
            literal::format_value(v, flavor)?;
        }
        Arg::Valuer(v) => {
            let v = v.value().map_err(LiteralError::from)?;
            literal::format_value(&v, flavor)?;
        }
        Arg::Raw(_) => {}
        Arg::List(items) => {
            for item in items {
                check_arg(item, flavor)?;
            }
        }
        Arg::SubQuery(qb) => check_query(qb, flavor)?,
    }
    Ok(())
}
