//! 简单子句：SELECT、FROM、GROUP BY、ORDER BY。

use crate::expr::Expr;
use crate::flavor::Flavor;
use crate::string_builder::{StringBuilder, write_separated};

#[derive(Debug, Default, Clone)]
pub(crate) struct SelectClause {
    pub(crate) columns: Vec<Expr>,
    pub(crate) distinct: bool,
}

impl SelectClause {
    /// 没有列时输出 `SELECT *`。
    pub(crate) fn write_to(&self, buf: &mut StringBuilder, flavor: Flavor) {
        let out = buf.write_leading("SELECT");
        if self.distinct {
            out.push_str(" DISTINCT");
        }
        out.push(' ');
        if self.columns.is_empty() {
            out.push('*');
            return;
        }
        write_separated(out, &self.columns, ", ", |out, c| c.write_to(out, flavor));
    }
}

#[derive(Debug, Default, Clone)]
pub(crate) struct FromClause {
    pub(crate) table: Option<Expr>,
    pub(crate) alias: Option<String>,
}

impl FromClause {
    pub(crate) fn write_to(&self, buf: &mut StringBuilder, flavor: Flavor) {
        let Some(table) = &self.table else {
            return;
        };
        let out = buf.write_leading("FROM");
        out.push(' ');
        match (table, &self.alias) {
            // `from_as` 的别名取代子查询自带的别名
            (Expr::SubQuery(qb), Some(alias)) => qb.write_derived(out, flavor, alias),
            (table, alias) => {
                table.write_to(out, flavor);
                if let Some(alias) = alias {
                    out.push_str(" AS ");
                    out.push_str(alias);
                }
            }
        }
    }
}

#[derive(Debug, Default, Clone)]
pub(crate) struct GroupByClause {
    pub(crate) fields: Vec<String>,
}

impl GroupByClause {
    pub(crate) fn write_to(&self, buf: &mut StringBuilder) {
        if self.fields.is_empty() {
            return;
        }
        let out = buf.write_leading("GROUP BY");
        out.push(' ');
        out.push_str(&self.fields.join(", "));
    }
}

/// 排序方向。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    #[default]
    Asc,
    Desc,
}

impl Order {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

#[derive(Debug, Default, Clone)]
pub(crate) struct OrderByClause {
    pub(crate) items: Vec<(String, Order)>,
}

impl OrderByClause {
    pub(crate) fn write_to(&self, buf: &mut StringBuilder) {
        if self.items.is_empty() {
            return;
        }
        let out = buf.write_leading("ORDER BY");
        out.push(' ');
        write_separated(out, &self.items, ", ", |out, (field, order)| {
            out.push_str(field);
            out.push(' ');
            out.push_str(order.as_str());
        });
    }
}
