//! 字面量格式化：把 `SqlValue` 按 Flavor 写成可直接拼入 SQL 的文本。
//!
//! 安全警告：内联字面量永远不如预编译参数安全；这里按值类型做转义，
//! 但字段名、表名等 `Raw` 片段不会做任何处理。

use crate::flavor::Flavor;
use crate::valuer::ValuerError;
use crate::value::SqlValue;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// 字面量无法格式化。
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LiteralError {
    #[error("{0}")]
    Valuer(#[from] ValuerError),
    #[error("non-finite float {0} has no sql literal")]
    NonFiniteFloat(f64),
    #[error("failed to format date/time literal: {0}")]
    DateFormat(String),
}

impl From<time::error::Format> for LiteralError {
    fn from(e: time::error::Format) -> Self {
        Self::DateFormat(e.to_string())
    }
}

const DATE: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");
const DATETIME_MICROS: &[BorrowedFormatItem<'_>] = format_description!(
    "[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:6]"
);
const DATETIME_MILLIS: &[BorrowedFormatItem<'_>] = format_description!(
    "[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:3]"
);
const DATETIME_MICROS_OFFSET: &[BorrowedFormatItem<'_>] = format_description!(
    "[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:6] [offset_hour sign:mandatory]:[offset_minute]"
);

/// 格式化单个值。出错时 `out` 保持不变。
pub fn write_value(out: &mut String, v: &SqlValue, flavor: Flavor) -> Result<(), LiteralError> {
    match v {
        SqlValue::Null => out.push_str("NULL"),
        SqlValue::Bool(b) => {
            let s = match (flavor.numeric_bool(), *b) {
                (true, true) => "1",
                (true, false) => "0",
                (false, true) => "TRUE",
                (false, false) => "FALSE",
            };
            out.push_str(s);
        }
        SqlValue::I64(n) => out.push_str(&n.to_string()),
        SqlValue::U64(n) => out.push_str(&n.to_string()),
        SqlValue::F64(n) => {
            if !n.is_finite() {
                return Err(LiteralError::NonFiniteFloat(*n));
            }
            out.push_str(&n.to_string());
        }
        SqlValue::String(s) => quote_string(out, s.as_ref(), flavor),
        SqlValue::Bytes(b) => encode_bytes(out, b, flavor),
        SqlValue::Date(d) => encode_date(out, *d, flavor)?,
        SqlValue::DateTime(dt) => encode_datetime(out, *dt, flavor)?,
    }
    Ok(())
}

/// 便捷版本：直接返回字面量文本。
pub fn format_value(v: &SqlValue, flavor: Flavor) -> Result<String, LiteralError> {
    let mut out = String::new();
    write_value(&mut out, v, flavor)?;
    Ok(out)
}

fn quote_string(out: &mut String, s: &str, flavor: Flavor) {
    match flavor {
        Flavor::PostgreSQL => out.push('E'),
        Flavor::SQLServer => out.push('N'),
        _ => {}
    }

    out.push('\'');
    if flavor.backslash_escapes() {
        for ch in s.chars() {
            match ch {
                '\u{0000}' => out.push_str("\\0"),
                '\u{0008}' => out.push_str("\\b"),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                '\u{001a}' => out.push_str("\\Z"),
                '\'' => out.push_str("\\'"),
                '"' => out.push_str("\\\""),
                '\\' => out.push_str("\\\\"),
                _ => out.push(ch),
            }
        }
    } else {
        for ch in s.chars() {
            if ch == '\'' {
                out.push('\'');
            }
            out.push(ch);
        }
    }
    out.push('\'');
}

/// 字节串一律按十六进制输出；空字节串是空 blob，不是 NULL。
fn encode_bytes(out: &mut String, data: &[u8], flavor: Flavor) {
    match flavor {
        Flavor::MySQL | Flavor::SQLite => {
            out.push_str("X'");
            push_hex(out, data);
            out.push('\'');
        }
        Flavor::PostgreSQL => {
            out.push_str("E'\\\\x");
            push_hex(out, data);
            out.push_str("'::bytea");
        }
        Flavor::SQLServer => {
            out.push_str("0x");
            push_hex(out, data);
        }
        Flavor::Oracle => {
            out.push_str("hextoraw('");
            push_hex(out, data);
            out.push_str("')");
        }
    }
}

fn push_hex(out: &mut String, data: &[u8]) {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    for &b in data {
        out.push(HEX[((b >> 4) & 0xF) as usize] as char);
        out.push(HEX[(b & 0xF) as usize] as char);
    }
}

fn encode_date(out: &mut String, d: time::Date, flavor: Flavor) -> Result<(), LiteralError> {
    let s = d.format(DATE)?;
    if flavor == Flavor::Oracle {
        out.push_str("DATE ");
    }
    out.push('\'');
    out.push_str(&s);
    out.push('\'');
    Ok(())
}

fn encode_datetime(
    out: &mut String,
    dt: time::OffsetDateTime,
    flavor: Flavor,
) -> Result<(), LiteralError> {
    // 四舍五入到微秒：+500ns；越过最大日期时保留原值
    let dt = dt
        .checked_add(time::Duration::nanoseconds(500))
        .unwrap_or(dt);

    let s = match flavor {
        Flavor::MySQL => dt.format(DATETIME_MICROS)?,
        Flavor::SQLite => dt.format(DATETIME_MILLIS)?,
        Flavor::PostgreSQL | Flavor::SQLServer => dt.format(DATETIME_MICROS_OFFSET)?,
        Flavor::Oracle => {
            let s = dt.format(DATETIME_MICROS)?;
            out.push_str("to_timestamp('");
            out.push_str(&s);
            out.push_str("', 'YYYY-MM-DD HH24:MI:SS.FF')");
            return Ok(());
        }
    };

    out.push('\'');
    out.push_str(&s);
    out.push('\'');
    Ok(())
}
