//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `patch-input`: 用优化结果改写 GAMESS 输入
//! - `ionisation-energy`: 拼接基态与氧化态结果计算电离能
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: patch_input, ionisation_energy

pub mod ionisation_energy;
pub mod patch_input;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// gamess-tools - GAMESS 工作流辅助工具
#[derive(Parser)]
#[command(name = "gamess-tools")]
#[command(version)]
#[command(about = "Helpers for GAMESS optimisation and excited-state workflows", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Logging level as a number (10 debug, 20 info, 30 warning, 40 error)
    #[arg(
        long = "log-level",
        alias = "logLevel",
        global = true,
        default_value_t = 30,
        allow_negative_numbers = true,
        value_name = "LOGGING"
    )]
    pub log_level: i32,

    /// Also write the log to this file (overwritten on each run)
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Patch a GAMESS input with charge, spin and geometry from an optimisation
    PatchInput(patch_input::PatchInputArgs),

    /// Join base and oxidised molecule results into an ionisation energy table
    IonisationEnergy(ionisation_energy::IonisationEnergyArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ionisation_energy::IonisationType;

    #[test]
    fn test_patch_input_defaults() {
        let cli = Cli::parse_from(["gamess-tools", "patch-input", "opt.dat", "template.inp"]);
        assert_eq!(cli.log_level, 30);
        assert!(cli.log_file.is_none());
        match cli.command {
            Commands::PatchInput(args) => {
                assert_eq!(args.iteration, 0);
                assert_eq!(args.output, PathBuf::from("gamess.inp"));
                assert!(args.check_optimisation.is_none());
            }
            _ => panic!("expected patch-input"),
        }
    }

    #[test]
    fn test_patch_input_negative_iteration_and_aliases() {
        let cli = Cli::parse_from([
            "gamess-tools",
            "patch-input",
            "--logLevel",
            "20",
            "-i",
            "-1",
            "--checkOptimisation",
            "opt.log",
            "opt.dat",
            "template.inp",
        ]);
        assert_eq!(cli.log_level, 20);
        match cli.command {
            Commands::PatchInput(args) => {
                assert_eq!(args.iteration, -1);
                assert_eq!(args.check_optimisation, Some(PathBuf::from("opt.log")));
            }
            _ => panic!("expected patch-input"),
        }
    }

    #[test]
    fn test_out_of_range_log_levels_are_accepted() {
        let cli = Cli::parse_from(["gamess-tools", "--logLevel", "1000", "patch-input", "a", "b"]);
        assert_eq!(cli.log_level, 1000);

        let cli = Cli::parse_from(["gamess-tools", "--log-level", "-5", "patch-input", "a", "b"]);
        assert_eq!(cli.log_level, -5);
    }

    #[test]
    fn test_ionisation_energy_args() {
        let cli = Cli::parse_from([
            "gamess-tools",
            "ionisation-energy",
            "-t",
            "vertical",
            "-o",
            "ie.csv",
            "base.csv",
            "ox.csv",
        ]);
        match cli.command {
            Commands::IonisationEnergy(args) => {
                assert_eq!(args.ionisation_type, IonisationType::Vertical);
                assert_eq!(args.output, PathBuf::from("ie.csv"));
                assert_eq!(args.base_results, PathBuf::from("base.csv"));
            }
            _ => panic!("expected ionisation-energy"),
        }
    }

    #[test]
    fn test_invalid_ionisation_type_is_rejected() {
        let result = Cli::try_parse_from([
            "gamess-tools",
            "ionisation-energy",
            "-t",
            "diabatic",
            "base.csv",
            "ox.csv",
        ]);
        assert!(result.is_err());
    }
}
