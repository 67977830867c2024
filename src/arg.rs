//! 条件右侧的取值：字面量、延迟求值、原样片段、列表或子查询。

use crate::flavor::Flavor;
use crate::literal;
use crate::query::QueryBuilder;
use crate::string_builder::write_separated;
use crate::value::SqlValue;
use crate::valuer::SqlValuer;

/// Raw：原样拼入 SQL（例如另一张表的列名），不做任何转义。
pub fn raw(expr: impl Into<String>) -> Arg {
    Arg::Raw(expr.into())
}

/// List：渲染为 `(a, b, c)`；`IN`/`BETWEEN` 的取值通常用它构造。
pub fn list(items: impl IntoIterator<Item = impl Into<Arg>>) -> Arg {
    Arg::List(items.into_iter().map(Into::into).collect())
}

/// 把自定义 `SqlValuer` 包装为参数。
pub fn valuer(v: impl SqlValuer + 'static) -> Arg {
    Arg::Valuer(Box::new(v))
}

#[derive(Debug, Clone)]
pub enum Arg {
    Value(SqlValue),
    Valuer(Box<dyn SqlValuer>),
    Raw(String),
    List(Vec<Arg>),
    SubQuery(Box<QueryBuilder>),
}

impl Arg {
    pub(crate) fn write_to(&self, out: &mut String, flavor: Flavor) {
        match self {
            Self::Value(v) => write_literal(out, v, flavor),
            Self::Valuer(v) => match v.value() {
                Ok(v) => write_literal(out, &v, flavor),
                Err(e) => {
                    tracing::warn!(error = %e, "sql valuer failed, rendering NULL");
                    out.push_str("NULL");
                }
            },
            Self::Raw(s) => out.push_str(s),
            Self::List(items) => {
                out.push('(');
                write_separated(out, items, ", ", |out, a| a.write_to(out, flavor));
                out.push(')');
            }
            Self::SubQuery(qb) => qb.write_embedded(out, flavor),
        }
    }
}

fn write_literal(out: &mut String, v: &SqlValue, flavor: Flavor) {
    if let Err(e) = literal::write_value(out, v, flavor) {
        tracing::warn!(error = %e, %flavor, "literal cannot be formatted, rendering NULL");
        out.push_str("NULL");
    }
}

impl PartialEq for Arg {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Value(a), Self::Value(b)) => a == b,
            (Self::Raw(a), Self::Raw(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            // valuer 与子查询没有可比较的身份
            _ => false,
        }
    }
}

impl From<SqlValue> for Arg {
    fn from(v: SqlValue) -> Self {
        Self::Value(v)
    }
}

macro_rules! impl_from_value {
    ($($t:ty),*) => {
        $(impl From<$t> for Arg {
            fn from(v: $t) -> Self {
                Self::Value(SqlValue::from(v))
            }
        })*
    };
}

impl_from_value!(
    (),
    bool,
    i8,
    i16,
    i32,
    i64,
    isize,
    u8,
    u16,
    u32,
    u64,
    usize,
    f32,
    f64,
    String,
    &str,
    &String,
    Vec<u8>,
    time::Date,
    time::OffsetDateTime
);

impl<T> From<Option<T>> for Arg
where
    T: Into<SqlValue>,
{
    fn from(v: Option<T>) -> Self {
        Self::Value(SqlValue::from_option(v))
    }
}

impl<T: Into<Arg>, const N: usize> From<[T; N]> for Arg {
    fn from(v: [T; N]) -> Self {
        list(v)
    }
}

impl From<Box<dyn SqlValuer>> for Arg {
    fn from(v: Box<dyn SqlValuer>) -> Self {
        Self::Valuer(v)
    }
}

impl From<QueryBuilder> for Arg {
    fn from(v: QueryBuilder) -> Self {
        Self::SubQuery(Box::new(v))
    }
}

impl From<&QueryBuilder> for Arg {
    fn from(v: &QueryBuilder) -> Self {
        Self::SubQuery(Box::new(v.clone()))
    }
}

impl From<&mut QueryBuilder> for Arg {
    fn from(v: &mut QueryBuilder) -> Self {
        Self::SubQuery(Box::new(v.clone()))
    }
}
