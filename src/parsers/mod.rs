//! # 解析器模块
//!
//! 提供 GAMESS 日志、优化数据文件、输入模板和结果表格的解析器。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: gamess_log, geometry, gamess_input, results_table

pub mod gamess_input;
pub mod gamess_log;
pub mod geometry;
pub mod results_table;
