//! # ionisation-energy 命令实现
//!
//! 拼接基态分子与氧化态分子的结果表格，输出电离能 CSV。
//!
//! ## 功能
//! - 自动识别两个输入表格的分隔符
//! - 基态取 `label`, `homo`（重命名为 `koopmans`）
//! - 氧化态取 `excitation-energy`, `osc-str-max`
//! - 按行号拼接，打印终端表格并写出 CSV
//!
//! ## 依赖关系
//! - 使用 `cli/ionisation_energy.rs` 定义的参数
//! - 使用 `parsers/results_table.rs`, `models/ionisation.rs`
//! - 使用 `utils/output.rs`

use crate::cli::ionisation_energy::IonisationEnergyArgs;
use crate::error::{GamessToolsError, Result};
use crate::models::IonisationRow;
use crate::parsers::results_table::{self, Table};
use crate::utils::output;

use std::path::Path;
use tabled::Table as TextTable;
use tracing::{info, warn};

/// 基态表格所需列
pub const BASE_COLUMNS: [&str; 2] = ["label", "homo"];

/// 氧化态表格所需列
pub const OXIDISED_COLUMNS: [&str; 2] = ["excitation-energy", "osc-str-max"];

/// 执行 ionisation-energy 命令
pub fn execute(args: IonisationEnergyArgs) -> Result<()> {
    output::print_header(&format!(
        "Joining {} Ionisation Energy Results",
        capitalise(&args.ionisation_type.to_string())
    ));
    info!("Ionisation potential type: {}", args.ionisation_type);

    let base = results_table::read_table(&args.base_results)?;
    let oxidised = results_table::read_table(&args.oxidised_results)?;
    output::print_field("Ionisation type", args.ionisation_type);
    output::print_field("Base rows", base.len());
    output::print_field("Oxidised rows", oxidised.len());

    if base.is_empty() {
        output::print_warning(&format!("No rows in '{}'", args.base_results.display()));
    }

    let rows = join_results(&base, &oxidised)?;

    println!("Joined results are");
    println!("{}", TextTable::new(&rows));

    write_results_csv(&rows, &args.output)?;
    output::print_done(&format!(
        "Joined {} row(s) into '{}'",
        rows.len(),
        args.output.display()
    ));

    Ok(())
}

/// 按行号拼接两个表格
///
/// 输出行数与基态表格一致：氧化态缺少的行留空，多出的行丢弃。
pub fn join_results(base: &Table, oxidised: &Table) -> Result<Vec<IonisationRow>> {
    let [label_col, homo_col] = BASE_COLUMNS;
    let [excitation_col, osc_col] = OXIDISED_COLUMNS;

    let labels = base.column(label_col)?;
    let homo = base.column(homo_col)?;
    let excitation = oxidised.column(excitation_col)?;
    let osc = oxidised.column(osc_col)?;

    if base.len() != oxidised.len() {
        warn!(
            "Row count mismatch: {} has {} rows, {} has {} rows; joining on the base rows",
            base.source,
            base.len(),
            oxidised.source,
            oxidised.len()
        );
    }

    let cell = |col: &[String], i: usize| col.get(i).cloned().unwrap_or_default();

    Ok(labels
        .into_iter()
        .zip(homo)
        .enumerate()
        .map(|(i, (label, koopmans))| IonisationRow {
            label,
            koopmans,
            excitation_energy: cell(&excitation, i),
            osc_str_max: cell(&osc, i),
        })
        .collect())
}

/// 写出逗号分隔的 CSV（带表头，无索引列）
pub fn write_results_csv(rows: &[IonisationRow], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    if rows.is_empty() {
        // serialize 在没有记录时不会写表头
        wtr.write_record(["label", "koopmans", "excitation-energy", "osc-str-max"])?;
    }

    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()
        .map_err(|e| GamessToolsError::write(output_path, e))?;

    Ok(())
}

fn capitalise(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
