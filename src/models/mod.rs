//! # 数据模型模块
//!
//! 定义电荷/自旋、优化检查结果、几何块与电离能结果行。
//!
//! ## 依赖关系
//! - 被 `parsers/` 和 `commands/` 使用
//! - 子模块: optimisation, geometry, ionisation

pub mod geometry;
pub mod ionisation;
pub mod optimisation;

pub use geometry::{Geometry, GeometrySelector};
pub use ionisation::IonisationRow;
pub use optimisation::{ChargeSpin, OptimisationReport};
