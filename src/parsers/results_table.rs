//! # 结果表格解析器
//!
//! 读取带表头的分隔文本表格，自动识别分隔符。
//!
//! ## 支持的分隔符
//! - `,` / `\t` / `;` / `|`：表头中出现且每个采样行出现次数一致
//! - 以上都不满足时按连续空白分隔
//!
//! 单元格保留原始文本，不做数值转换。
//!
//! ## 依赖关系
//! - 被 `commands/ionisation_energy.rs` 使用
//! - 使用 `csv` crate

use crate::error::{GamessToolsError, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// 候选分隔符（按优先级）
const CANDIDATE_DELIMITERS: [u8; 4] = [b',', b'\t', b';', b'|'];

/// 识别分隔符时采样的行数
const SNIFF_LINES: usize = 10;

/// 表格分隔方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Byte(u8),
    Whitespace,
}

/// 带表头的文本表格
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// 来源（用于错误信息）
    pub source: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 按列名取整列
    pub fn column(&self, name: &str) -> Result<Vec<String>> {
        let idx = self
            .headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| GamessToolsError::MissingColumn {
                path: self.source.clone(),
                column: name.to_string(),
            })?;

        Ok(self
            .rows
            .iter()
            .map(|row| row.get(idx).cloned().unwrap_or_default())
            .collect())
    }
}

/// 读取表格文件
pub fn read_table(path: &Path) -> Result<Table> {
    let content = fs::read_to_string(path).map_err(|e| GamessToolsError::read(path, e))?;
    parse_table(&content, &path.display().to_string())
}

/// 从字符串内容解析表格
pub fn parse_table(content: &str, source: &str) -> Result<Table> {
    let delimiter = sniff_delimiter(content).ok_or_else(|| GamessToolsError::ParseError {
        format: "table".to_string(),
        path: source.to_string(),
        reason: "File is empty".to_string(),
    })?;
    debug!("{}: using delimiter {:?}", source, delimiter);

    match delimiter {
        Delimiter::Byte(d) => parse_delimited(content, source, d),
        Delimiter::Whitespace => parse_whitespace(content, source),
    }
}

/// 识别分隔符，空内容返回 None
pub fn sniff_delimiter(content: &str) -> Option<Delimiter> {
    let sample: Vec<&str> = content
        .lines()
        .filter(|l| !l.trim().is_empty())
        .take(SNIFF_LINES)
        .collect();

    let header = *sample.first()?;

    let found = CANDIDATE_DELIMITERS.iter().copied().find(|&d| {
        let expected = count_unquoted(header, d);
        expected > 0 && sample.iter().all(|&line| count_unquoted(line, d) == expected)
    });

    Some(found.map(Delimiter::Byte).unwrap_or(Delimiter::Whitespace))
}

/// 统计双引号外的分隔符个数
fn count_unquoted(line: &str, delimiter: u8) -> usize {
    let mut in_quotes = false;
    let mut count = 0;
    for b in line.bytes() {
        if b == b'"' {
            in_quotes = !in_quotes;
        } else if b == delimiter && !in_quotes {
            count += 1;
        }
    }
    count
}

fn parse_delimited(content: &str, source: &str, delimiter: u8) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(Table {
        source: source.to_string(),
        headers,
        rows,
    })
}

fn parse_whitespace(content: &str, source: &str) -> Result<Table> {
    let mut lines = content
        .lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty());

    let headers: Vec<String> = match lines.next() {
        Some((_, header)) => header.split_whitespace().map(str::to_string).collect(),
        None => Vec::new(),
    };

    let mut rows = Vec::new();
    for (line_no, line) in lines {
        let row: Vec<String> = line.split_whitespace().map(str::to_string).collect();
        if row.len() != headers.len() {
            return Err(GamessToolsError::ParseError {
                format: "table".to_string(),
                path: source.to_string(),
                reason: format!(
                    "Line {} has {} fields, expected {}",
                    line_no + 1,
                    row.len(),
                    headers.len()
                ),
            });
        }
        rows.push(row);
    }

    Ok(Table {
        source: source.to_string(),
        headers,
        rows,
    })
}
