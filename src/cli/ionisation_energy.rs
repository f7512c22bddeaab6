//! # ionisation-energy 子命令 CLI 定义
//!
//! 拼接基态与氧化态分子的结果表格
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/ionisation_energy.rs`

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 电离能类型（取决于氧化态分子的计算方式）
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum IonisationType {
    /// Oxidised molecule was re-optimised
    #[default]
    Adiabatic,
    /// Oxidised molecule kept the base geometry
    Vertical,
}

impl std::fmt::Display for IonisationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IonisationType::Adiabatic => write!(f, "adiabatic"),
            IonisationType::Vertical => write!(f, "vertical"),
        }
    }
}

/// ionisation-energy 子命令参数
#[derive(Args, Debug)]
pub struct IonisationEnergyArgs {
    /// Results table of the base molecule (needs 'label' and 'homo' columns)
    pub base_results: PathBuf,

    /// Results table of the oxidised molecule (needs 'excitation-energy' and 'osc-str-max')
    pub oxidised_results: PathBuf,

    /// The type of the ionisation potential
    #[arg(short = 't', long = "type", value_enum, default_value_t = IonisationType::Adiabatic)]
    pub ionisation_type: IonisationType,

    /// The output filename
    #[arg(short, long, default_value = "ionisation_energy.csv", value_name = "OUTPUT")]
    pub output: PathBuf,
}
