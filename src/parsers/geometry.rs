//! # GAMESS 优化几何块解析器
//!
//! 按 NSERCH 步号从优化数据文件中截取几何块。
//!
//! ## 数据文件片段
//! ```text
//!  DATA FROM NSERCH=   4
//!  COORDINATES OF SYMMETRY UNIQUE ATOMS (ANGS)
//!    ATOM   CHARGE       X              Y              Z
//!  ------------------------------------------------------------
//! O           8.0   0.0000000000   0.0000000000   0.1173000000
//! H           1.0   0.0000000000   0.7572000000  -0.4692000000
//! --- END OF GEOMETRY
//! ```
//! 几何块从标记行之后第 4 行开始，到第一行以 `---` 开头的行（不含）为止。
//!
//! ## 依赖关系
//! - 被 `commands/patch_input.rs` 使用
//! - 使用 `models/geometry.rs`

use crate::error::{GamessToolsError, Result};
use crate::models::{Geometry, GeometrySelector};
use regex::Regex;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// 几何块标记
pub const NSERCH_MARKER: &str = "DATA FROM NSERCH";

/// 标记行到几何块首行的偏移
const BLOCK_OFFSET: usize = 4;

/// 从文件提取几何块
pub fn extract_geometry_file(path: &Path, selector: GeometrySelector) -> Result<Geometry> {
    let content = fs::read_to_string(path).map_err(|e| GamessToolsError::read(path, e))?;
    extract_geometry(&content, selector)
}

/// 从字符串内容提取几何块
pub fn extract_geometry(content: &str, selector: GeometrySelector) -> Result<Geometry> {
    let lines: Vec<&str> = content.split_inclusive('\n').collect();

    let marker = find_marker(&lines, selector).ok_or_else(|| GamessToolsError::GeometryNotFound {
        target: match selector {
            GeometrySelector::Last => "any optimised geometry".to_string(),
            GeometrySelector::Iteration(n) => {
                format!("optimised geometry for iteration {}", n)
            }
        },
    })?;

    let start = marker + BLOCK_OFFSET;
    if start >= lines.len() {
        warn!(
            "Geometry marker at line {} is too close to the end of the file; geometry is empty",
            marker + 1
        );
        return Ok(Geometry::default());
    }

    let block: Vec<String> = lines[start..]
        .iter()
        .take_while(|line| !line.starts_with("---"))
        .map(|line| {
            let mut owned = line.to_string();
            if !owned.ends_with('\n') {
                owned.push('\n');
            }
            owned
        })
        .collect();

    for line in &block {
        info!("{}", line.trim_end());
    }

    Ok(Geometry::new(block))
}

/// 查找标记行号
fn find_marker(lines: &[&str], selector: GeometrySelector) -> Option<usize> {
    match selector {
        GeometrySelector::Last => lines.iter().rposition(|l| l.contains(NSERCH_MARKER)),
        GeometrySelector::Iteration(n) => {
            // 词边界避免 1 匹配到 12
            let re = Regex::new(&format!(r"{}=\s+{}\b", NSERCH_MARKER, n))
                .expect("NSERCH pattern is valid");
            lines.iter().position(|l| re.is_match(l))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(n: u32, oxygen_z: &str) -> String {
        format!(
            " DATA FROM NSERCH=   {n}\n \
COORDINATES OF SYMMETRY UNIQUE ATOMS (ANGS)\n   \
ATOM   CHARGE       X              Y              Z\n \
------------------------------------------------------------\n\
O           8.0   0.0000000000   0.0000000000   {oxygen_z}\n\
H           1.0   0.0000000000   0.7572000000  -0.4692000000\n\
H           1.0   0.0000000000  -0.7572000000  -0.4692000000\n\
--- ENERGY AND GRADIENT\n"
        )
    }

    fn data_file() -> String {
        [step(0, "0.1100000000"), step(1, "0.1150000000"), step(12, "0.1173000000")].concat()
    }

    #[test]
    fn test_last_geometry() {
        let geom = extract_geometry(&data_file(), GeometrySelector::Last).unwrap();
        assert_eq!(geom.len(), 3);
        assert!(geom.lines[0].starts_with("O "));
        assert!(geom.lines[0].contains("0.1173000000"));
        assert!(geom.lines.iter().all(|l| l.ends_with('\n')));
    }

    #[test]
    fn test_specific_iteration() {
        let geom = extract_geometry(&data_file(), GeometrySelector::Iteration(1)).unwrap();
        assert_eq!(geom.len(), 3);
        assert!(geom.lines[0].contains("0.1150000000"));
    }

    #[test]
    fn test_iteration_does_not_match_prefix() {
        // NSERCH=1 不能匹配 NSERCH=12
        let content = step(12, "0.1173000000");
        let err = extract_geometry(&content, GeometrySelector::Iteration(1)).unwrap_err();
        assert!(matches!(err, GamessToolsError::GeometryNotFound { .. }));
    }

    #[test]
    fn test_missing_iteration() {
        let err = extract_geometry(&data_file(), GeometrySelector::Iteration(5)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cannot find optimised geometry for iteration 5"
        );
    }

    #[test]
    fn test_no_geometry_at_all() {
        let err = extract_geometry("nothing here\n", GeometrySelector::Last).unwrap_err();
        assert_eq!(err.to_string(), "Cannot find any optimised geometry");
    }

    #[test]
    fn test_block_runs_to_end_of_file() {
        let content = " DATA FROM NSERCH=   0\n a\n b\n c\nC 6.0 0.0 0.0 0.0\nH 1.0 0.0 0.0 1.0";
        let geom = extract_geometry(content, GeometrySelector::Iteration(0)).unwrap();
        assert_eq!(
            geom.lines,
            vec!["C 6.0 0.0 0.0 0.0\n", "H 1.0 0.0 0.0 1.0\n"]
        );
    }

    #[test]
    fn test_marker_near_end_gives_empty_geometry() {
        let content = " DATA FROM NSERCH=   0\n a\n";
        let geom = extract_geometry(content, GeometrySelector::Last).unwrap();
        assert!(geom.is_empty());
    }
}
