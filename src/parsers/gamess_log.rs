//! # GAMESS 几何优化日志解析器
//!
//! 检查优化是否正常结束并收敛，提取 `$CONTRL` 回显中的 MULT 与 ICHARG。
//!
//! ## 日志片段
//! ```text
//!  $CONTRL SCFTYP=UHF RUNTYP=OPTIMIZE ICHARG=-1 MULT=2 $END
//!  ...
//!       ***** EQUILIBRIUM GEOMETRY LOCATED *****
//!  ...
//!  EXECUTION OF GAMESS TERMINATED NORMALLY
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/patch_input.rs` 使用
//! - 使用 `models/optimisation.rs`

use crate::error::{GamessToolsError, Result};
use crate::models::optimisation::{EQUILIBRIUM_MARKER, TERMINATION_MARKERS};
use crate::models::OptimisationReport;
use regex::Regex;
use std::fs;
use std::path::Path;
use tracing::{debug, info, trace, warn};

/// 解析 GAMESS 优化日志文件
pub fn parse_optimisation_log(path: &Path) -> Result<OptimisationReport> {
    let content = fs::read_to_string(path).map_err(|e| GamessToolsError::read(path, e))?;
    Ok(parse_optimisation_content(&content))
}

/// 从字符串内容解析优化日志
pub fn parse_optimisation_content(content: &str) -> OptimisationReport {
    let mult_re = keyword_regex("MULT");
    let charge_re = keyword_regex("ICHARG");

    let mut report = OptimisationReport::default();

    for line in content.lines() {
        trace!("{}", line);

        // "MULT=3"，同一行多次出现时取第一个
        if line.contains("MULT=") {
            debug!("{}", line);
            match capture_int::<u32>(&mult_re, line) {
                Some(mult) => {
                    info!("Spin {}", mult);
                    report.multiplicity = Some(mult);
                }
                None => warn!("Could not read spin multiplicity from: {}", line.trim()),
            }
        }

        // "ICHARG=-1"，保留符号
        if line.contains("ICHARG=") {
            debug!("{}", line);
            match capture_int::<i32>(&charge_re, line) {
                Some(charge) => {
                    info!("Charge {}", charge);
                    report.charge = Some(charge);
                }
                None => warn!("Could not read charge from: {}", line.trim()),
            }
        }

        if TERMINATION_MARKERS.iter().any(|m| line.contains(m)) {
            report.terminated_normally = true;
        }

        if line.contains(EQUILIBRIUM_MARKER) {
            report.equilibrium_located = true;
        }
    }

    report
}

impl OptimisationReport {
    /// 未成功完成时返回 `OptimisationIncomplete`
    pub fn ensure_successful(&self, path: &Path) -> Result<()> {
        if self.is_successful() {
            Ok(())
        } else {
            Err(GamessToolsError::OptimisationIncomplete {
                path: path.display().to_string(),
                missing: self.missing_markers(),
            })
        }
    }
}

/// `KEY=` 后紧跟的带符号整数
fn keyword_regex(key: &str) -> Regex {
    Regex::new(&format!(r"\b{}=\s*([+-]?\d+)", key)).expect("keyword pattern is valid")
}

fn capture_int<T: std::str::FromStr>(re: &Regex, line: &str) -> Option<T> {
    re.captures(line)?.get(1)?.as_str().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUCCESSFUL_LOG: &str = r#"
 INPUT CARD> $CONTRL SCFTYP=UHF RUNTYP=OPTIMIZE ICHARG=-1 MULT=3 $END
 $CONTRL OPTIONS
 SCFTYP=UHF          RUNTYP=OPTIMIZE     EXETYP=RUN
 MPLEVL=       0     CITYP =NONE         CCTYP =NONE
 ICHARG=      -1     MULT  =    3
      ***** EQUILIBRIUM GEOMETRY LOCATED *****
 EXECUTION OF GAMESS TERMINATED NORMALLY Mon Jan  6 10:00:00 2020
"#;

    #[test]
    fn test_successful_log() {
        let report = parse_optimisation_content(SUCCESSFUL_LOG);
        assert!(report.terminated_normally);
        assert!(report.equilibrium_located);
        assert!(report.is_successful());
        assert_eq!(report.charge, Some(-1));
        assert_eq!(report.multiplicity, Some(3));
        assert!(report.ensure_successful(Path::new("opt.log")).is_ok());
    }

    #[test]
    fn test_padded_value_is_read() {
        let report = parse_optimisation_content(" ICHARG=      -2     MULT=    2\n");
        assert_eq!(report.charge, Some(-2));
        assert_eq!(report.multiplicity, Some(2));
    }

    #[test]
    fn test_missing_equilibrium_marker_fails() {
        let log = " $CONTRL ICHARG=0 MULT=1 $END\n EXECUTION OF GAMESS TERMINATED NORMALLY\n";
        let report = parse_optimisation_content(log);
        assert!(report.terminated_normally);
        assert!(!report.is_successful());

        let err = report.ensure_successful(Path::new("opt.log")).unwrap_err();
        match err {
            GamessToolsError::OptimisationIncomplete { path, missing } => {
                assert_eq!(path, "opt.log");
                assert_eq!(missing, vec![EQUILIBRIUM_MARKER.to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_termination_marker_fails() {
        let log = "      ***** EQUILIBRIUM GEOMETRY LOCATED *****\n";
        let report = parse_optimisation_content(log);
        assert!(!report.is_successful());
        assert_eq!(
            report.missing_markers(),
            vec![TERMINATION_MARKERS[0].to_string()]
        );
    }

    #[test]
    fn test_graceful_exit_counts_as_termination() {
        let log = "ddikick.x: exited gracefully.\n EQUILIBRIUM GEOMETRY LOCATED\n";
        assert!(parse_optimisation_content(log).is_successful());
    }

    #[test]
    fn test_last_occurrence_wins() {
        let log = " ICHARG=0 MULT=1\n ICHARG=1 MULT=2\n";
        let report = parse_optimisation_content(log);
        assert_eq!(report.charge, Some(1));
        assert_eq!(report.multiplicity, Some(2));
    }

    #[test]
    fn test_unreadable_values_are_ignored() {
        // ICHARG 不是整数，MULT 为负数无法作为多重度
        let report = parse_optimisation_content(" $CONTRL ICHARG=X MULT=-3\n");
        assert_eq!(report.charge, None);
        assert_eq!(report.multiplicity, None);
        assert_eq!(report.charge_spin(), crate::models::ChargeSpin::default());
    }

    #[test]
    fn test_absent_keys_stay_none() {
        let report = parse_optimisation_content("EQUILIBRIUM GEOMETRY LOCATED\n");
        assert_eq!(report.charge, None);
        assert_eq!(report.multiplicity, None);
    }

    #[test]
    fn test_missing_file_is_reported() {
        let err = parse_optimisation_log(Path::new("/nonexistent/opt.log")).unwrap_err();
        assert!(matches!(err, GamessToolsError::FileNotFound { .. }));
    }
}
