//! # patch-input 子命令 CLI 定义
//!
//! 用优化日志中的电荷/自旋和优化几何改写 GAMESS 输入模板
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/patch_input.rs`

use clap::Args;
use std::path::PathBuf;

/// patch-input 子命令参数
#[derive(Args, Debug)]
pub struct PatchInputArgs {
    /// GAMESS molecule data file containing the optimisation geometries
    pub geometry_source: PathBuf,

    /// GAMESS input file used as the template
    pub template: PathBuf,

    /// The iteration to get the configuration from (-1 for the last one)
    #[arg(
        short,
        long,
        default_value_t = 0,
        allow_negative_numbers = true,
        value_name = "ITERATION"
    )]
    pub iteration: i64,

    /// The output filename
    #[arg(short, long, default_value = "gamess.inp", value_name = "OUTPUT")]
    pub output: PathBuf,

    /// GAMESS optimisation log to check for successful completion; charge and spin are read from it
    #[arg(
        short = 'c',
        long = "check-optimisation",
        alias = "checkOptimisation",
        value_name = "CHECK"
    )]
    pub check_optimisation: Option<PathBuf>,
}
