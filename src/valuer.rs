//! SqlValuer：在渲染阶段才计算实际值的自定义类型。

use crate::value::SqlValue;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("sql valuer error: {0}")]
pub struct ValuerError(pub String);

/// 由调用方实现：把领域类型（枚举、ID 包装等）延迟转换为 `SqlValue`。
///
/// 渲染时调用 `value()`；失败时该值渲染为 `NULL`，`QueryBuilder::validate` 会报告错误。
pub trait SqlValuer: dyn_clone::DynClone + std::fmt::Debug {
    fn value(&self) -> Result<SqlValue, ValuerError>;
}

dyn_clone::clone_trait_object!(SqlValuer);
