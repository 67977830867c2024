//! 条件表达式树：单个谓词（叶子）或带括号的谓词组。

use crate::arg::Arg;
use crate::expr::Expr;
use crate::flavor::Flavor;
use crate::string_builder::write_separated;
use std::fmt;

/// 连接同级条件的逻辑运算符。序列中首个条件的 combinator 不会被输出。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Combinator {
    #[default]
    And,
    Or,
}

impl Combinator {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

/// 比较运算符。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Equal,
    NotEqual,
    GreaterThan,
    GreaterEqualThan,
    LessThan,
    LessEqualThan,
    Like,
    NotLike,
    ILike,
    NotILike,
    In,
    NotIn,
    IsNull,
    IsNotNull,
    Between,
    NotBetween,
}

impl Operator {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Equal => "=",
            Self::NotEqual => "<>",
            Self::GreaterThan => ">",
            Self::GreaterEqualThan => ">=",
            Self::LessThan => "<",
            Self::LessEqualThan => "<=",
            Self::Like => "LIKE",
            Self::NotLike => "NOT LIKE",
            Self::ILike => "ILIKE",
            Self::NotILike => "NOT ILIKE",
            Self::In => "IN",
            Self::NotIn => "NOT IN",
            Self::IsNull => "IS NULL",
            Self::IsNotNull => "IS NOT NULL",
            Self::Between => "BETWEEN",
            Self::NotBetween => "NOT BETWEEN",
        }
    }

    pub fn is_membership(self) -> bool {
        matches!(self, Self::In | Self::NotIn)
    }

    pub fn is_null_check(self) -> bool {
        matches!(self, Self::IsNull | Self::IsNotNull)
    }

    pub fn is_range(self) -> bool {
        matches!(self, Self::Between | Self::NotBetween)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub enum ConditionKind {
    Leaf {
        field: Expr,
        operator: Operator,
        value: Arg,
    },
    Group(Vec<Condition>),
}

/// 一个条件：叶子谓词或谓词组，外加相对前一个同级条件的 combinator。
#[derive(Debug, Clone)]
pub struct Condition {
    combinator: Combinator,
    kind: ConditionKind,
}

impl Condition {
    /// `<field> <operator> <value>`。`IS NULL` / `IS NOT NULL` 会忽略 `value`。
    pub fn new(field: impl Into<Expr>, operator: Operator, value: impl Into<Arg>) -> Self {
        Self {
            combinator: Combinator::And,
            kind: ConditionKind::Leaf {
                field: field.into(),
                operator,
                value: value.into(),
            },
        }
    }

    /// 列与列比较，右侧原样输出，常用于 `JOIN ... ON`。
    pub fn columns(left: impl Into<Expr>, operator: Operator, right: impl Into<String>) -> Self {
        Self::new(left, operator, Arg::Raw(right.into()))
    }

    pub fn group(children: impl IntoIterator<Item = Condition>) -> Self {
        Self {
            combinator: Combinator::And,
            kind: ConditionKind::Group(children.into_iter().collect()),
        }
    }

    pub fn and(self) -> Self {
        self.with_combinator(Combinator::And)
    }

    pub fn or(self) -> Self {
        self.with_combinator(Combinator::Or)
    }

    pub fn with_combinator(mut self, combinator: Combinator) -> Self {
        self.combinator = combinator;
        self
    }

    pub fn combinator(&self) -> Combinator {
        self.combinator
    }

    pub fn kind(&self) -> &ConditionKind {
        &self.kind
    }

    /// 不含任何叶子的条件组（包括只嵌套了空组的组），渲染时整体省略。
    pub fn is_empty(&self) -> bool {
        match &self.kind {
            ConditionKind::Leaf { .. } => false,
            ConditionKind::Group(children) => children.iter().all(Condition::is_empty),
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self.kind, ConditionKind::Group(_))
    }

    /// 单独渲染这个条件（不含 combinator）。
    pub fn to_sql(&self, flavor: Flavor) -> String {
        let mut out = String::new();
        self.write_to(&mut out, flavor);
        out
    }

    pub(crate) fn write_to(&self, out: &mut String, flavor: Flavor) {
        match &self.kind {
            ConditionKind::Group(_) if self.is_empty() => {}
            ConditionKind::Group(children) => {
                out.push('(');
                write_conditions(out, children, flavor);
                out.push(')');
            }
            ConditionKind::Leaf {
                field,
                operator,
                value,
            } => write_leaf(out, field, *operator, value, flavor),
        }
    }
}

fn write_leaf(out: &mut String, field: &Expr, op: Operator, value: &Arg, flavor: Flavor) {
    // 空集合：IN 恒假，NOT IN 恒真
    if op.is_membership()
        && let Arg::List(items) = value
        && items.is_empty()
    {
        out.push_str(if op == Operator::In { "0 = 1" } else { "0 = 0" });
        return;
    }

    field.write_to(out, flavor);
    out.push(' ');
    out.push_str(op.as_str());
    if op.is_null_check() {
        return;
    }
    out.push(' ');

    match value {
        Arg::List(items) if op.is_range() => {
            write_separated(out, items, " AND ", |out, a| a.write_to(out, flavor));
        }
        Arg::List(_) | Arg::SubQuery(_) => value.write_to(out, flavor),
        _ if op.is_membership() => {
            out.push('(');
            value.write_to(out, flavor);
            out.push(')');
        }
        _ => value.write_to(out, flavor),
    }
}

/// 按各自的 combinator 连接同级条件，首个条件的 combinator 省略；空组跳过。
pub(crate) fn write_conditions(out: &mut String, conditions: &[Condition], flavor: Flavor) {
    let rendered = conditions.iter().filter(|c| !c.is_empty());
    for (i, c) in rendered.enumerate() {
        if i > 0 {
            out.push(' ');
            out.push_str(c.combinator.as_str());
            out.push(' ');
        }
        c.write_to(out, flavor);
    }
}
