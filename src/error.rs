//! # 统一错误处理模块
//!
//! 定义 gamess-tools 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// gamess-tools 统一错误类型
#[derive(Error, Debug)]
pub enum GamessToolsError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse {format} file: {path}\nReason: {reason}")]
    ParseError {
        format: String,
        path: String,
        reason: String,
    },

    #[error("Column '{column}' not found in {path}")]
    MissingColumn { path: String, column: String },

    // ─────────────────────────────────────────────────────────────
    // GAMESS 结果检查
    // ─────────────────────────────────────────────────────────────
    #[error(
        "Optimisation did not execute successfully and check-optimisation is set. Aborting\n\
         {path} is missing: {}",
        .missing.join(", ")
    )]
    OptimisationIncomplete { path: String, missing: Vec<String> },

    #[error("Cannot find {target}")]
    GeometryNotFound { target: String },

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 参数 / 环境错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to set up logging: {0}")]
    LoggingSetup(String),
}

impl GamessToolsError {
    /// 将 `std::io::Error` 包装为读取错误，文件不存在时转为 `FileNotFound`
    pub fn read(path: &std::path::Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            GamessToolsError::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            GamessToolsError::FileReadError {
                path: path.display().to_string(),
                source,
            }
        }
    }

    /// 将 `std::io::Error` 包装为写入错误
    pub fn write(path: &std::path::Path, source: std::io::Error) -> Self {
        GamessToolsError::FileWriteError {
            path: path.display().to_string(),
            source,
        }
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, GamessToolsError>;
