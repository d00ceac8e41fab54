// src/simulation/mod.rs

pub mod error;
pub mod evaluator;
pub mod load_launches;
pub mod report;

/// 識別子と値の組 (入力順を保持する)
pub type Keyed = Vec<(String, f64)>;

/// バッチ評価の結果全体を表す構造体
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultSet {
    pub distances: Keyed,    // 各発射の水平到達距離 (m)
    pub heights: Keyed,      // 各発射の最高到達高度 (m)
    pub long_flights: Keyed, // しきい値を超えた発射の滞空時間 (s)
    pub min_flight_time: f64, // 適用したしきい値 (s)
}

impl ResultSet {
    /// 最高到達高度が最大の発射を返す (同値なら先に現れたもの)
    ///
    /// NaN の高度は比較できないため候補から除く。すべて NaN なら `None`。
    pub fn highest(&self) -> Option<(&str, f64)> {
        let mut best: Option<(&str, f64)> = None;
        for (id, height) in &self.heights {
            if height.is_nan() {
                continue;
            }
            match best {
                Some((_, current)) if *height <= current => {}
                _ => best = Some((id.as_str(), *height)),
            }
        }
        best
    }
}
