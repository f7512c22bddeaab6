//! # GAMESS 输入模板处理
//!
//! 根据电荷与自旋改写输入模板的 `$CONTRL` 关键字，并拼接几何生成新的输入文件。
//!
//! ## 输出格式
//! ```text
//!  $CONTRL SCFTYP=UHF RUNTYP=TDDFT ICHARG=1 MULT=2 $END
//!  ...                          <- 模板中 $DATA 之前的所有行
//!  $DATA
//!                               <- 空标题行
//! C1
//! O           8.0   0.0000000000   0.0000000000   0.1173000000
//! ...
//!  $END
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/patch_input.rs` 使用
//! - 使用 `models/optimisation.rs`, `models/geometry.rs`

use crate::error::{GamessToolsError, Result};
use crate::models::{ChargeSpin, Geometry};
use regex::{NoExpand, Regex};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// 模板中 `$DATA` 组起始标记
const DATA_GROUP: &str = "$DATA";

/// 开壳层体系使用的 SCF 类型
pub const OPEN_SHELL_SCFTYP: &str = "UHF";

/// 改写后的模板头部
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchedTemplate {
    /// `$DATA` 之前的所有行（每行以 `\n` 结尾）
    pub lines: Vec<String>,
    /// 是否改写了 MULT
    pub multiplicity_set: bool,
    /// 是否改写了 ICHARG
    pub charge_set: bool,
    /// 是否改写了 SCFTYP
    pub scftyp_set: bool,
}

/// 读取并改写模板文件
pub fn patch_template_file(path: &Path, charge_spin: &ChargeSpin) -> Result<PatchedTemplate> {
    info!("opening {}", path.display());
    let content = fs::read_to_string(path).map_err(|e| GamessToolsError::read(path, e))?;
    Ok(patch_template(&content, charge_spin))
}

/// 改写模板内容
///
/// 只替换含关键字的第一个空白分隔词，保留行内其余空白（`$` 组需从第 2 列开始）。
pub fn patch_template(content: &str, charge_spin: &ChargeSpin) -> PatchedTemplate {
    let mult_re = token_regex("MULT");
    let charge_re = token_regex("ICHARG");
    let scftyp_re = token_regex("SCFTYP");

    let mult_token = format!("MULT={}", charge_spin.multiplicity);
    let charge_token = format!("ICHARG={}", charge_spin.charge);
    let scftyp_token = format!("SCFTYP={}", OPEN_SHELL_SCFTYP);

    let mut patched = PatchedTemplate::default();

    for line in content.split_inclusive('\n') {
        if line.contains(DATA_GROUP) {
            break;
        }

        let mut line = line.to_string();

        if line.contains("MULT") {
            debug!("{}", line.trim_end());
            line = mult_re.replacen(&line, 1, NoExpand(&mult_token)).into_owned();
            patched.multiplicity_set = true;
            info!("Set mult to {}", charge_spin.multiplicity);
        }

        if line.contains("ICHARG") {
            debug!("{}", line.trim_end());
            line = charge_re.replacen(&line, 1, NoExpand(&charge_token)).into_owned();
            patched.charge_set = true;
            info!("Set icharg to {}", charge_spin.charge);
        }

        if line.contains("SCFTYP") && charge_spin.is_open_shell() {
            debug!("{}", line.trim_end());
            line = scftyp_re.replacen(&line, 1, NoExpand(&scftyp_token)).into_owned();
            patched.scftyp_set = true;
            info!(
                "Set scftyp to {} as spin is not 1 hence is an openshell system",
                OPEN_SHELL_SCFTYP.to_lowercase()
            );
        }

        if !line.ends_with('\n') {
            line.push('\n');
        }
        patched.lines.push(line);
    }

    patched
}

/// 拼接模板头部与几何块
pub fn render_input(template: &PatchedTemplate, geometry: &Geometry) -> String {
    let mut out = String::new();
    for line in &template.lines {
        out.push_str(line);
    }
    out.push_str(" $DATA\n");
    out.push('\n');
    out.push_str("C1\n");
    for line in &geometry.lines {
        out.push_str(line);
    }
    out.push_str(" $END\n");
    out
}

/// 含关键字的空白分隔词
fn token_regex(key: &str) -> Regex {
    Regex::new(&format!(r"\S*{}\S*", key)).expect("token pattern is valid")
}
