// src/math/kinematics.rs

/// 重力加速度 (m/s²)
pub const GRAVITY: f64 = 9.8;

/// 水平到達距離を計算する純粋関数
///
/// 発射点と着地点が同じ高さであることを前提とする。
///
/// # 引数
/// - `initial_velocity`: 初速 (m/s)
/// - `launch_angle`: 発射角 (度)
///
/// # 戻り値
/// - 水平到達距離 (m)
pub fn horizontal_distance(initial_velocity: f64, launch_angle: f64) -> f64 {
    let theta = launch_angle.to_radians();
    initial_velocity.powi(2) * (2.0 * theta).sin() / GRAVITY
}

/// 最高到達高度を計算する純粋関数
///
/// # 引数
/// - `initial_velocity`: 初速 (m/s)
/// - `launch_angle`: 発射角 (度)
///
/// # 戻り値
/// - 最高到達高度 (m)
pub fn max_height(initial_velocity: f64, launch_angle: f64) -> f64 {
    let theta = launch_angle.to_radians();
    initial_velocity.powi(2) * theta.sin().powi(2) / (2.0 * GRAVITY)
}

/// 滞空時間を計算する純粋関数
///
/// # 引数
/// - `initial_velocity`: 初速 (m/s)
/// - `launch_angle`: 発射角 (度)
///
/// # 戻り値
/// - 滞空時間 (s)
pub fn flight_time(initial_velocity: f64, launch_angle: f64) -> f64 {
    let theta = launch_angle.to_radians();
    2.0 * initial_velocity * theta.sin() / GRAVITY
}
