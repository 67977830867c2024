//! QueryBuilder：链式构建 SELECT 语句并渲染为 SQL 文本。
//!
//! 所有修改方法都接收 `&mut self` 并返回 `&mut Self`，可以连续调用；
//! 渲染只读取当前状态，不会修改 builder，可以重复调用。
//!
//! builder 内部没有任何同步机制：同一实例不应被多个线程同时修改。

use crate::arg::Arg;
use crate::clause::{FromClause, GroupByClause, Order, OrderByClause, SelectClause};
use crate::condition::{Combinator, Condition, Operator};
use crate::expr::{Expr, IntoExprs, IntoStrings, collect_exprs, collect_strings};
use crate::flavor::{Flavor, default_flavor};
use crate::join::{JoinItem, JoinType, Joins};
use crate::pagination::{Fetch, Limit, Pagination};
use crate::string_builder::StringBuilder;
use crate::where_clause::{WhereClause, lift_group};
use std::fmt;

const COUNT_ALIAS: &str = "count_sub";

#[derive(Debug, Default, Clone)]
pub struct QueryBuilder {
    pub(crate) select: SelectClause,
    pub(crate) from: FromClause,
    pub(crate) joins: Joins,
    pub(crate) where_clause: WhereClause,
    pub(crate) group_by: GroupByClause,
    pub(crate) having: WhereClause,
    pub(crate) order_by: OrderByClause,
    pub(crate) limit: Limit,
    pub(crate) fetch: Fetch,
    pub(crate) alias: Option<String>,
    flavor: Option<Flavor>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 固定本 builder 的 Flavor，返回之前生效的 Flavor。
    pub fn set_flavor(&mut self, flavor: Flavor) -> Flavor {
        let old = self.flavor();
        self.flavor = Some(flavor);
        old
    }

    /// 固定的 Flavor；未设置时为进程默认值。
    pub fn flavor(&self) -> Flavor {
        self.flavor.unwrap_or_else(default_flavor)
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// 追加选择列（文本或子查询）。
    pub fn select(&mut self, cols: impl IntoExprs) -> &mut Self {
        self.select.columns.extend(collect_exprs(cols));
        self
    }

    pub fn distinct(&mut self) -> &mut Self {
        self.select.distinct = true;
        self
    }

    /// 设置 FROM 表，替换之前的设置。子查询作为派生表时需要别名。
    pub fn from(&mut self, table: impl Into<Expr>) -> &mut Self {
        self.from.table = Some(table.into());
        self.from.alias = None;
        self
    }

    pub fn from_as(&mut self, table: impl Into<Expr>, alias: impl Into<String>) -> &mut Self {
        self.from.table = Some(table.into());
        self.from.alias = Some(alias.into());
        self
    }

    pub fn join(
        &mut self,
        join_type: JoinType,
        table: impl Into<Expr>,
        on: Condition,
    ) -> &mut Self {
        self.joins.push(JoinItem {
            join_type,
            table: table.into(),
            on: Some(on),
        });
        self
    }

    pub fn inner_join(&mut self, table: impl Into<Expr>, on: Condition) -> &mut Self {
        self.join(JoinType::Inner, table, on)
    }

    pub fn left_join(&mut self, table: impl Into<Expr>, on: Condition) -> &mut Self {
        self.join(JoinType::Left, table, on)
    }

    pub fn right_join(&mut self, table: impl Into<Expr>, on: Condition) -> &mut Self {
        self.join(JoinType::Right, table, on)
    }

    pub fn full_join(&mut self, table: impl Into<Expr>, on: Condition) -> &mut Self {
        self.join(JoinType::Full, table, on)
    }

    pub fn cross_join(&mut self, table: impl Into<Expr>) -> &mut Self {
        self.joins.push(JoinItem {
            join_type: JoinType::Cross,
            table: table.into(),
            on: None,
        });
        self
    }

    pub fn where_(
        &mut self,
        field: impl Into<Expr>,
        op: Operator,
        value: impl Into<Arg>,
    ) -> &mut Self {
        self.where_clause.push(Condition::new(field, op, value));
        self
    }

    pub fn where_or(
        &mut self,
        field: impl Into<Expr>,
        op: Operator,
        value: impl Into<Arg>,
    ) -> &mut Self {
        self.where_clause
            .push(Condition::new(field, op, value).with_combinator(Combinator::Or));
        self
    }

    /// 在临时收集器上构造条件，并作为一个括号组以 AND 追加。
    ///
    /// ```
    /// use halo_query::{Operator, QueryBuilder};
    ///
    /// let mut qb = QueryBuilder::new();
    /// qb.select("*")
    ///     .from("t")
    ///     .where_("a", Operator::Equal, 1)
    ///     .where_group(|w| {
    ///         w.where_("b", Operator::Equal, 2)
    ///             .where_or("c", Operator::Equal, 3)
    ///     });
    /// assert_eq!(qb.build(), "SELECT * FROM t WHERE a = 1 AND (b = 2 OR c = 3)");
    /// ```
    pub fn where_group(&mut self, f: impl FnOnce(WhereClause) -> WhereClause) -> &mut Self {
        self.where_clause.extend(lift_group(f, Combinator::And));
        self
    }

    pub fn where_or_group(&mut self, f: impl FnOnce(WhereClause) -> WhereClause) -> &mut Self {
        self.where_clause.extend(lift_group(f, Combinator::Or));
        self
    }

    /// 追加预先构造好的条件片段，保留它们各自的 combinator。
    pub fn where_condition(
        &mut self,
        conditions: impl IntoIterator<Item = Condition>,
    ) -> &mut Self {
        self.where_clause.extend(conditions);
        self
    }

    pub fn having(
        &mut self,
        field: impl Into<Expr>,
        op: Operator,
        value: impl Into<Arg>,
    ) -> &mut Self {
        self.having.push(Condition::new(field, op, value));
        self
    }

    pub fn having_or(
        &mut self,
        field: impl Into<Expr>,
        op: Operator,
        value: impl Into<Arg>,
    ) -> &mut Self {
        self.having
            .push(Condition::new(field, op, value).with_combinator(Combinator::Or));
        self
    }

    pub fn having_group(&mut self, f: impl FnOnce(WhereClause) -> WhereClause) -> &mut Self {
        self.having.extend(lift_group(f, Combinator::And));
        self
    }

    pub fn having_condition(
        &mut self,
        conditions: impl IntoIterator<Item = Condition>,
    ) -> &mut Self {
        self.having.extend(conditions);
        self
    }

    pub fn group_by(&mut self, fields: impl IntoStrings) -> &mut Self {
        self.group_by.fields.extend(collect_strings(fields));
        self
    }

    /// 追加排序字段；多次调用按调用顺序输出。
    pub fn order_by(&mut self, field: impl Into<String>, order: Order) -> &mut Self {
        self.order_by.items.push((field.into(), order));
        self
    }

    pub fn order_by_asc(&mut self, field: impl Into<String>) -> &mut Self {
        self.order_by(field, Order::Asc)
    }

    pub fn order_by_desc(&mut self, field: impl Into<String>) -> &mut Self {
        self.order_by(field, Order::Desc)
    }

    /// `LIMIT <count> OFFSET <offset>`；`count` 为 0 时不输出。
    pub fn limit(&mut self, count: u64, offset: u64) -> &mut Self {
        self.set_limit(Pagination::new(count, offset))
    }

    pub fn set_limit(&mut self, page: Pagination) -> &mut Self {
        self.limit.page = page;
        self
    }

    /// 返回当前 LIMIT 设置并清除，用于从分页查询派生不分页的查询。
    pub fn remove_limit(&mut self) -> Pagination {
        self.limit.take()
    }

    /// `OFFSET <offset> ROWS FETCH NEXT <count> ROWS ONLY`；`count` 为 0 时不输出。
    pub fn fetch(&mut self, offset: u64, count: u64) -> &mut Self {
        self.set_fetch(Pagination::new(count, offset))
    }

    pub fn set_fetch(&mut self, page: Pagination) -> &mut Self {
        self.fetch.page = page;
        self
    }

    pub fn remove_fetch(&mut self) -> Pagination {
        self.fetch.take()
    }

    /// 设置别名后，整条语句渲染为 `(...) AS alias`，可作为派生表或条件中的子查询。
    pub fn as_(&mut self, alias: impl Into<String>) -> &mut Self {
        self.alias = Some(alias.into());
        self
    }

    /// 派生总数查询：去掉 ORDER BY 与分页后包一层 `SELECT COUNT(*)`。
    pub fn count_query(&self) -> QueryBuilder {
        let mut inner = self.clone();
        inner.order_by = OrderByClause::default();
        inner.limit = Limit::default();
        inner.fetch = Fetch::default();
        inner.alias = Some(COUNT_ALIAS.to_string());

        let mut qb = QueryBuilder::new();
        qb.flavor = self.flavor;
        qb.select("COUNT(*)").from(inner);
        qb
    }

    /// 按本 builder 的 Flavor 渲染。
    pub fn build(&self) -> String {
        self.build_with_flavor(self.flavor())
    }

    /// 按指定 Flavor 渲染；嵌套的子查询使用同一个 Flavor。
    pub fn build_with_flavor(&self, flavor: Flavor) -> String {
        let mut out = String::new();
        self.write_to(&mut out, flavor);
        tracing::trace!(%flavor, sql = %out, "select rendered");
        out
    }

    fn render_segments(&self, flavor: Flavor) -> String {
        let mut buf = StringBuilder::new();
        self.select.write_to(&mut buf, flavor);
        self.from.write_to(&mut buf, flavor);
        self.joins.write_to(&mut buf, flavor);
        self.where_clause.write_clause(&mut buf, "WHERE", flavor);
        self.group_by.write_to(&mut buf);
        self.having.write_clause(&mut buf, "HAVING", flavor);
        self.order_by.write_to(&mut buf);
        self.limit.write_to(&mut buf);
        self.fetch.write_to(&mut buf);
        buf.into_string()
    }

    pub(crate) fn write_to(&self, out: &mut String, flavor: Flavor) {
        let body = self.render_segments(flavor);
        match &self.alias {
            Some(alias) => write_aliased(out, &body, alias),
            None => out.push_str(&body),
        }
    }

    /// 以指定别名作为派生表输出，忽略自身的别名。
    pub(crate) fn write_derived(&self, out: &mut String, flavor: Flavor, alias: &str) {
        write_aliased(out, &self.render_segments(flavor), alias);
    }

    /// 作为子查询嵌入时总是带括号。
    pub(crate) fn write_embedded(&self, out: &mut String, flavor: Flavor) {
        let body = self.render_segments(flavor);
        match &self.alias {
            Some(alias) => write_aliased(out, &body, alias),
            None => {
                out.push('(');
                out.push_str(&body);
                out.push(')');
            }
        }
    }
}

fn write_aliased(out: &mut String, body: &str, alias: &str) {
    out.push('(');
    out.push_str(body);
    out.push_str(") AS ");
    out.push_str(alias);
}

impl fmt::Display for QueryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}
