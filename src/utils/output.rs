//! # 美化输出工具
//!
//! 统一终端输出样式：`[*]` 信息、`[OK]` 成功、`[WARN]` 警告、`[ERR]` 错误。
//! 详细诊断走 `tracing`（stderr），这里只负责面向用户的摘要。
//!
//! ## 依赖关系
//! - 被所有 `commands/` 模块和 `main.rs` 使用
//! - 使用 `colored` crate

use colored::Colorize;
use std::error::Error;
use std::io::Write;

/// 在 stderr 打印成功消息（不混入 stdout 的结果输出）
pub fn eprint_success(msg: &str) {
    write_success(&mut std::io::stderr(), msg).ok();
}

/// 向指定输出写成功消息
pub fn write_success(out: &mut impl Write, msg: &str) -> std::io::Result<()> {
    writeln!(out, "{} {}", "[OK]".green().bold(), msg)
}

/// 打印错误及其完整原因链
pub fn print_error(err: &dyn Error) {
    eprintln!("{} {}", "[ERR]".red().bold(), err);
    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("      {} {}", "caused by:".dimmed(), cause);
        source = cause.source();
    }
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印对齐的键值行
pub fn print_field(label: &str, value: impl std::fmt::Display) {
    println!("    {:<20} {}", label.dimmed(), value);
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    println!("{} {}", "[DONE]".green().bold(), msg);
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}
