//! # 几何优化结果数据模型
//!
//! 存储从 GAMESS 优化日志中提取的电荷、自旋多重度与完成状态。
//!
//! ## 依赖关系
//! - 被 `parsers/gamess_log.rs`, `parsers/gamess_input.rs` 使用
//! - 被 `commands/patch_input.rs` 使用

use tracing::warn;

/// 正常结束标志（任一出现即可）
pub const TERMINATION_MARKERS: [&str; 2] = ["TERMINATED NORMALLY", "gracefully"];

/// 优化收敛标志
pub const EQUILIBRIUM_MARKER: &str = "EQUILIBRIUM GEOMETRY LOCATED";

/// 体系电荷与自旋多重度
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChargeSpin {
    /// 总电荷 (ICHARG)
    pub charge: i32,

    /// 自旋多重度 (MULT)
    pub multiplicity: u32,
}

impl Default for ChargeSpin {
    fn default() -> Self {
        ChargeSpin {
            charge: 0,
            multiplicity: 1,
        }
    }
}

impl ChargeSpin {
    pub fn new(charge: i32, multiplicity: u32) -> Self {
        ChargeSpin {
            charge,
            multiplicity,
        }
    }

    /// 开壳层体系（多重度不为 1）
    pub fn is_open_shell(&self) -> bool {
        self.multiplicity != 1
    }
}

/// GAMESS 几何优化日志检查结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptimisationReport {
    /// 出现 "TERMINATED NORMALLY" 或 "gracefully"
    pub terminated_normally: bool,

    /// 出现 "EQUILIBRIUM GEOMETRY LOCATED"
    pub equilibrium_located: bool,

    /// 日志中最后一次出现的 ICHARG
    pub charge: Option<i32>,

    /// 日志中最后一次出现的 MULT
    pub multiplicity: Option<u32>,
}

impl OptimisationReport {
    /// 优化是否成功完成
    pub fn is_successful(&self) -> bool {
        self.terminated_normally && self.equilibrium_located
    }

    /// 缺失的成功标志
    pub fn missing_markers(&self) -> Vec<String> {
        let mut missing = Vec::new();
        if !self.terminated_normally {
            missing.push(TERMINATION_MARKERS[0].to_string());
        }
        if !self.equilibrium_located {
            missing.push(EQUILIBRIUM_MARKER.to_string());
        }
        missing
    }

    /// 提取电荷与自旋，缺失值使用默认值并记录警告
    pub fn charge_spin(&self) -> ChargeSpin {
        let defaults = ChargeSpin::default();

        let charge = self.charge.unwrap_or_else(|| {
            warn!(
                "Setting charge to default {}, as it was not found in the geometry optimization output",
                defaults.charge
            );
            defaults.charge
        });

        let multiplicity = self.multiplicity.unwrap_or_else(|| {
            warn!(
                "Setting spin to default {}, as it was not found in the geometry optimization output",
                defaults.multiplicity
            );
            defaults.multiplicity
        });

        ChargeSpin::new(charge, multiplicity)
    }
}
