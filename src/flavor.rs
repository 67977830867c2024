//! SQL Flavor（方言）：控制字面量的格式化规则。
//!
//! 进程内有一个默认 Flavor，没有固定 Flavor 的 builder 在渲染时读取它。

use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Mutex, MutexGuard};

static DEFAULT_FLAVOR: AtomicU8 = AtomicU8::new(Flavor::MySQL as u8);
// 只由 scoped guard 持有
static SCOPE_LOCK: Mutex<()> = Mutex::new(());

/// 方言枚举。只影响字面量渲染，不改变语句结构。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Flavor {
    #[default]
    MySQL,
    PostgreSQL,
    SQLite,
    SQLServer,
    Oracle,
}

impl Flavor {
    /// 全部方言，下标即存入原子变量的编码。
    pub const ALL: [Flavor; 5] = [
        Self::MySQL,
        Self::PostgreSQL,
        Self::SQLite,
        Self::SQLServer,
        Self::Oracle,
    ];

    fn decode(code: u8) -> Self {
        Self::ALL
            .get(usize::from(code))
            .copied()
            .unwrap_or_default()
    }

    /// 字符串里的 `'` 是否用反斜杠转义（否则按标准 SQL 写成 `''`）。
    pub(crate) fn backslash_escapes(self) -> bool {
        matches!(self, Self::MySQL | Self::PostgreSQL)
    }

    /// 布尔值是否只能写成 `1/0`。
    pub(crate) fn numeric_bool(self) -> bool {
        matches!(self, Self::SQLServer | Self::Oracle)
    }
}

pub fn default_flavor() -> Flavor {
    Flavor::decode(DEFAULT_FLAVOR.load(Ordering::Relaxed))
}

/// 替换进程默认 Flavor，返回旧值。已经固定 Flavor 的 builder 不受影响。
pub fn set_default_flavor(flavor: Flavor) -> Flavor {
    Flavor::decode(DEFAULT_FLAVOR.swap(flavor as u8, Ordering::Relaxed))
}

/// 作用域内的默认 Flavor。drop 时恢复旧值并释放锁；
/// 同一时刻只有一个 guard 存活，并行测试之间不会看到彼此的设置。
pub struct DefaultFlavorGuard {
    previous: Flavor,
    _scope: MutexGuard<'static, ()>,
}

impl DefaultFlavorGuard {
    /// 进入作用域之前的默认值。
    pub fn previous(&self) -> Flavor {
        self.previous
    }
}

impl Drop for DefaultFlavorGuard {
    fn drop(&mut self) {
        set_default_flavor(self.previous);
    }
}

pub fn set_default_flavor_scoped(flavor: Flavor) -> DefaultFlavorGuard {
    // 持锁的测试 panic 后锁会中毒，恢复值已由 Drop 写回，可以继续使用
    let scope = SCOPE_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    DefaultFlavorGuard {
        previous: set_default_flavor(flavor),
        _scope: scope,
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
