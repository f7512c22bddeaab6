//! # 日志初始化
//!
//! 基于 `tracing-subscriber` 输出到 stderr，可选同时写入日志文件。
//!
//! ## 日志级别
//! 沿用数值级别：≤0 trace、≤10 debug、≤20 info、≤30 warn、其余 error。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `tracing-subscriber` crate

use crate::error::{GamessToolsError, Result};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*};

/// 数值级别转换为过滤级别
pub fn level_from_numeric(level: i32) -> LevelFilter {
    match level {
        i32::MIN..=0 => LevelFilter::TRACE,
        1..=10 => LevelFilter::DEBUG,
        11..=20 => LevelFilter::INFO,
        21..=30 => LevelFilter::WARN,
        _ => LevelFilter::ERROR,
    }
}

/// 初始化全局日志
pub fn setup_logging(level: i32, log_file: Option<&Path>) -> Result<()> {
    let level_filter = level_from_numeric(level);

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(level_filter)
        .with(stderr_layer);

    if let Some(path) = log_file {
        let file = File::create(path).map_err(|e| GamessToolsError::write(path, e))?;

        let file_layer = fmt::layer()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(true);

        subscriber
            .with(file_layer)
            .try_init()
            .map_err(|e| GamessToolsError::LoggingSetup(e.to_string()))?;
    } else {
        subscriber
            .try_init()
            .map_err(|e| GamessToolsError::LoggingSetup(e.to_string()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_levels() {
        assert_eq!(level_from_numeric(0), LevelFilter::TRACE);
        assert_eq!(level_from_numeric(10), LevelFilter::DEBUG);
        assert_eq!(level_from_numeric(20), LevelFilter::INFO);
        assert_eq!(level_from_numeric(30), LevelFilter::WARN);
        assert_eq!(level_from_numeric(40), LevelFilter::ERROR);
        assert_eq!(level_from_numeric(50), LevelFilter::ERROR);
        assert_eq!(level_from_numeric(-7), LevelFilter::TRACE);
        assert_eq!(level_from_numeric(1000), LevelFilter::ERROR);
    }

    #[test]
    fn test_unwritable_log_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        // 目录不能作为日志文件打开
        let result = setup_logging(30, Some(dir.path()));
        assert!(matches!(
            result,
            Err(GamessToolsError::FileWriteError { .. })
        ));
    }
}
