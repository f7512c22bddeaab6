//! # patch-input 命令实现
//!
//! 用几何优化结果生成新的 GAMESS 输入文件（如 TDDFT 单点计算）。
//!
//! ## 功能
//! - 可选检查优化日志是否正常结束并收敛，失败时中止
//! - 从优化日志提取电荷与自旋（缺失时使用默认值 0 / 1）
//! - 按 NSERCH 步号截取优化几何
//! - 改写模板中的 MULT / ICHARG / SCFTYP 并写入新输入
//!
//! ## 依赖关系
//! - 使用 `cli/patch_input.rs` 定义的参数
//! - 使用 `parsers/gamess_log.rs`, `parsers/geometry.rs`, `parsers/gamess_input.rs`
//! - 使用 `utils/output.rs`

use crate::cli::patch_input::PatchInputArgs;
use crate::error::{GamessToolsError, Result};
use crate::models::{ChargeSpin, GeometrySelector};
use crate::parsers::{gamess_input, gamess_log, geometry};
use crate::utils::output;

use std::fs;
use std::path::Path;
use tracing::{error, info, warn};

/// 执行 patch-input 命令
pub fn execute(args: PatchInputArgs) -> Result<()> {
    output::print_header("Patching GAMESS Input");

    info!("\t0 {}", args.geometry_source.display());
    info!("\t1 {}", args.template.display());

    let selector = GeometrySelector::from_iteration(args.iteration)?;

    // ----------- 检查优化并提取电荷与自旋 -------------------
    let charge_spin = resolve_charge_spin(args.check_optimisation.as_deref())?;
    output::print_field("Charge", charge_spin.charge);
    output::print_field("Spin multiplicity", charge_spin.multiplicity);

    // ----------- 截取优化几何 -------------------
    let geometry = match geometry::extract_geometry_file(&args.geometry_source, selector) {
        Ok(g) => g,
        Err(e) => {
            error!("{}", e);
            return Err(e);
        }
    };
    if geometry.is_empty() {
        output::print_warning("Extracted geometry block is empty");
    }
    output::print_info(&format!(
        "Extracted geometry from '{}'",
        args.geometry_source.display()
    ));
    output::print_field("Iteration", selector);
    output::print_field("Geometry lines", geometry.len());

    // ----------- 写入新输入 -------------------
    let template = gamess_input::patch_template_file(&args.template, &charge_spin)?;
    if !template.multiplicity_set {
        warn!("No MULT keyword found in {}", args.template.display());
        output::print_warning("Template has no MULT keyword; spin multiplicity not set");
    }
    if !template.charge_set {
        warn!("No ICHARG keyword found in {}", args.template.display());
        output::print_warning("Template has no ICHARG keyword; charge not set");
    }

    let content = gamess_input::render_input(&template, &geometry);
    fs::write(&args.output, content).map_err(|e| GamessToolsError::write(&args.output, e))?;

    info!("written to {}", args.output.display());
    output::print_done(&format!("GAMESS input written to '{}'", args.output.display()));

    Ok(())
}

/// 确定电荷与自旋：有优化日志时检查并提取，否则使用默认值
fn resolve_charge_spin(optimisation_log: Option<&Path>) -> Result<ChargeSpin> {
    let Some(path) = optimisation_log else {
        let defaults = ChargeSpin::default();
        warn!(
            "Setting charge to default {}, because no geometry optimization output to check",
            defaults.charge
        );
        warn!(
            "Setting spin to default {}, because no geometry optimization output to check",
            defaults.multiplicity
        );
        return Ok(defaults);
    };

    let report = gamess_log::parse_optimisation_log(path)?;

    if let Err(e) = report.ensure_successful(path) {
        error!("Optimisation did not execute successfully and check-optimisation is set. Aborting");
        return Err(e);
    }

    info!("Optimisation completed successfully - proceeding to extract structure");
    output::eprint_success("Optimisation completed successfully - proceeding to extract structure");

    Ok(report.charge_spin())
}
