//! # 分子几何数据模型
//!
//! 从 GAMESS 优化数据文件中截取的几何块，按原样保留每一行。
//!
//! ## 依赖关系
//! - 被 `parsers/geometry.rs`, `parsers/gamess_input.rs` 使用

use crate::error::{GamessToolsError, Result};

/// 选择哪一步优化的几何
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometrySelector {
    /// 最后一个几何块
    Last,
    /// 指定 NSERCH 步
    Iteration(u32),
}

impl GeometrySelector {
    /// 从命令行迭代号构建：-1 表示最后一步
    pub fn from_iteration(iteration: i64) -> Result<Self> {
        match iteration {
            -1 => Ok(GeometrySelector::Last),
            n if n >= 0 => u32::try_from(n)
                .map(GeometrySelector::Iteration)
                .map_err(|_| {
                    GamessToolsError::InvalidArgument(format!("iteration {} is too large", n))
                }),
            n => Err(GamessToolsError::InvalidArgument(format!(
                "iteration must be -1 (last) or a non-negative step, got {}",
                n
            ))),
        }
    }
}

impl std::fmt::Display for GeometrySelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeometrySelector::Last => write!(f, "last"),
            GeometrySelector::Iteration(n) => write!(f, "{}", n),
        }
    }
}

/// 几何块（每行以 `\n` 结尾）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Geometry {
    pub lines: Vec<String>,
}

impl Geometry {
    pub fn new(lines: Vec<String>) -> Self {
        Geometry { lines }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }
}
