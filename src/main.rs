//! # gamess-tools - GAMESS 工作流辅助工具
//!
//! 将 GAMESS 计算流程中的零散脚本统一成单一可执行文件。
//!
//! ## 子命令
//! - `patch-input`       - 用几何优化结果（电荷、自旋、几何）改写 GAMESS 输入
//! - `ionisation-energy` - 拼接基态与氧化态结果，输出电离能表格
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (GAMESS 日志、几何、输入模板、结果表格)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (输出与日志)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod error;
mod models;
mod parsers;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = utils::logging::setup_logging(cli.log_level, cli.log_file.as_deref()) {
        utils::output::print_error(&e);
        std::process::exit(1);
    }

    tracing::info!("Started {} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&e);
        std::process::exit(1);
    }
}
