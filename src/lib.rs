// src/lib.rs

//! 発射条件のバッチから水平到達距離・最高到達高度・滞空時間を求め、
//! 最高高度の発射と長時間飛行の一覧をレポートする。

pub mod config;
pub mod math;
pub mod simulation;

pub use config::{EvaluationSettings, LaunchRecord};
pub use simulation::error::LaunchError;
pub use simulation::evaluator::{evaluate_batch, evaluate_file};
pub use simulation::report::write_report;
pub use simulation::ResultSet;
