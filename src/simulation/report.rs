// src/simulation/report.rs

use std::io::Write;

use crate::simulation::error::LaunchError;
use crate::simulation::ResultSet;

/// 浮動小数点数を最短表現で整形する (`0.0`, `40.816326530612244`, `3.885327643080634e-06`)
///
/// 指数表記の場合は符号付き2桁以上の指数にそろえる。
fn fmt_value(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    let repr = format!("{:?}", value);
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => repr,
    }
}

/// 各発射の水平到達距離を入力順に書き込む
pub fn write_distances<W: Write>(writer: &mut W, results: &ResultSet) -> Result<(), std::io::Error> {
    for (id, distance) in &results.distances {
        writeln!(writer, "{}: Max Distance - {} meters", id, fmt_value(*distance))?;
    }
    Ok(())
}

/// 最高到達高度が最大の発射を書き込む
pub fn write_highest<W: Write>(writer: &mut W, results: &ResultSet) -> Result<(), std::io::Error> {
    if let Some((id, height)) = results.highest() {
        writeln!(
            writer,
            "Projectile with Highest Maximum Height: {} - Max Height: {} meters",
            id,
            fmt_value(height)
        )?;
    }
    Ok(())
}

/// しきい値を超えた滞空時間を書き込む
pub fn write_long_flights<W: Write>(writer: &mut W, results: &ResultSet) -> Result<(), std::io::Error> {
    writeln!(
        writer,
        "Launches with Flight Time Exceeding {} Seconds:",
        results.min_flight_time
    )?;
    for (id, time) in &results.long_flights {
        writeln!(writer, "{}: Flight Time - {} seconds", id, fmt_value(*time))?;
    }
    Ok(())
}

/// レポート全体の書き込み
///
/// # 引数
/// - `writer`: 出力先
/// - `results`: バッチ評価の結果
pub fn write_report<W: Write>(writer: &mut W, results: &ResultSet) -> Result<(), LaunchError> {
    write_distances(writer, results)?;
    writeln!(writer)?;
    write_highest(writer, results)?;
    writeln!(writer)?;
    write_long_flights(writer, results)?;
    writer.flush()?;
    Ok(())
}
