//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `parsers/`, `models/`, `utils/`
//! - 子模块: patch_input, ionisation_energy

pub mod ionisation_energy;
pub mod patch_input;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::PatchInput(args) => patch_input::execute(args),
        Commands::IonisationEnergy(args) => ionisation_energy::execute(args),
    }
}
