// src/simulation/evaluator.rs

use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::{projectile_id, EvaluationSettings, LaunchRecord};
use crate::math::{flight_time, horizontal_distance, max_height};
use crate::simulation::error::LaunchError;
use crate::simulation::load_launches::load_launches;
use crate::simulation::ResultSet;

/// 1発分の計算結果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchMetrics {
    pub distance: f64,    // 水平到達距離 (m)
    pub height: f64,      // 最高到達高度 (m)
    pub flight_time: f64, // 滞空時間 (s)
}

/// 3つの運動量をまとめて計算する
pub fn compute_metrics(record: &LaunchRecord) -> LaunchMetrics {
    LaunchMetrics {
        distance: horizontal_distance(record.initial_velocity, record.launch_angle),
        height: max_height(record.initial_velocity, record.launch_angle),
        flight_time: flight_time(record.initial_velocity, record.launch_angle),
    }
}

/// 物理的に不正な入力を確認する
///
/// 通常モードでは警告のみ、strict モードでは最初の不正入力でエラーを返す。
fn check_plausibility(records: &[LaunchRecord], strict: bool) -> Result<(), LaunchError> {
    for (index, record) in records.iter().enumerate() {
        if let Some(reason) = record.implausibility() {
            let id = projectile_id(index);
            if strict {
                return Err(LaunchError::InvalidLaunch { id, reason });
            }
            warn!(%id, %reason, "physically implausible launch, evaluating anyway");
        }
    }
    Ok(())
}

/// 発射条件の列をバッチ評価する
///
/// # 引数
/// - `records`: 入力順の発射条件
/// - `settings`: しきい値と strict フラグ
///
/// # 戻り値
/// - 距離、高度、長時間飛行の3つの結果 (いずれも入力順)
pub fn evaluate_batch(
    records: &[LaunchRecord],
    settings: &EvaluationSettings,
) -> Result<ResultSet, LaunchError> {
    settings.validate()?;
    if records.is_empty() {
        return Err(LaunchError::EmptyBatch);
    }
    check_plausibility(records, settings.strict)?;

    let mut results = ResultSet {
        distances: Vec::with_capacity(records.len()),
        heights: Vec::with_capacity(records.len()),
        long_flights: Vec::new(),
        min_flight_time: settings.min_flight_time,
    };

    for (index, record) in records.iter().enumerate() {
        let id = projectile_id(index);
        let metrics = compute_metrics(record);
        debug!(
            %id,
            velocity = record.initial_velocity,
            angle = record.launch_angle,
            distance = metrics.distance,
            height = metrics.height,
            flight_time = metrics.flight_time,
            "evaluated launch"
        );

        results.distances.push((id.clone(), metrics.distance));
        results.heights.push((id.clone(), metrics.height));
        if metrics.flight_time > settings.min_flight_time {
            results.long_flights.push((id, metrics.flight_time));
        }
    }

    info!(
        launches = records.len(),
        long_flights = results.long_flights.len(),
        "batch evaluated"
    );
    Ok(results)
}

/// ファイルから読み込んでバッチ評価する
pub fn evaluate_file<P: AsRef<Path>>(
    path: P,
    settings: &EvaluationSettings,
) -> Result<ResultSet, LaunchError> {
    let records = load_launches(path)?;
    evaluate_batch(&records, settings)
}
