//! # 电离能结果数据模型
//!
//! 基态分子与氧化态分子结果按行拼接后的输出行。
//!
//! ## 依赖关系
//! - 被 `commands/ionisation_energy.rs` 使用
//! - 使用 `serde` 写 CSV，`tabled` 打印终端表格

use serde::Serialize;
use tabled::Tabled;

/// 拼接后的一行结果
///
/// 各字段保留输入表格中的原始文本，不做数值重排版。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Tabled)]
pub struct IonisationRow {
    #[serde(rename = "label")]
    #[tabled(rename = "label")]
    pub label: String,

    /// HOMO 能量，作为 Koopmans 电离能近似
    #[serde(rename = "koopmans")]
    #[tabled(rename = "koopmans")]
    pub koopmans: String,

    #[serde(rename = "excitation-energy")]
    #[tabled(rename = "excitation-energy")]
    pub excitation_energy: String,

    #[serde(rename = "osc-str-max")]
    #[tabled(rename = "osc-str-max")]
    pub osc_str_max: String,
}
