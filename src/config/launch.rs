// src/config/launch.rs

use serde::Deserialize;

use crate::simulation::error::LaunchError;

/// 入力ファイル上の1発分の記述
///
/// 欠損フィールドを識別子付きのエラーとして報告するため、全フィールドを `Option` で受ける。
#[derive(Debug, Deserialize, Clone, Default)]
pub struct LaunchEntry {
    #[serde(rename = "InitialVelocity")]
    pub initial_velocity: Option<f64>, // 初速 (m/s)
    #[serde(rename = "LaunchAngle")]
    pub launch_angle: Option<f64>, // 発射角 (度)
}

/// 検証済みの発射条件
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchRecord {
    pub initial_velocity: f64, // 初速 (m/s)
    pub launch_angle: f64,     // 発射角 (度)
}

impl LaunchRecord {
    pub fn new(initial_velocity: f64, launch_angle: f64) -> Self {
        Self {
            initial_velocity,
            launch_angle,
        }
    }

    /// 物理的に意味を持たない入力であれば、その理由を返す
    pub fn implausibility(&self) -> Option<String> {
        if !self.initial_velocity.is_finite() || !self.launch_angle.is_finite() {
            return Some("velocity and angle must be finite".to_string());
        }
        if self.initial_velocity < 0.0 {
            return Some(format!(
                "negative initial velocity ({} m/s)",
                self.initial_velocity
            ));
        }
        if !(0.0..=90.0).contains(&self.launch_angle) {
            return Some(format!(
                "launch angle {} deg outside [0, 90]",
                self.launch_angle
            ));
        }
        None
    }
}

/// 1始まりの位置から識別子を生成する
pub fn projectile_id(index: usize) -> String {
    format!("Projectile{}", index + 1)
}

impl LaunchEntry {
    /// 必須フィールドの有無を確認して `LaunchRecord` に変換する
    ///
    /// # 引数
    /// - `index`: 入力配列内の0始まりの位置
    pub fn into_record(self, index: usize) -> Result<LaunchRecord, LaunchError> {
        let initial_velocity = self
            .initial_velocity
            .ok_or_else(|| LaunchError::MissingField {
                id: projectile_id(index),
                field: "InitialVelocity",
            })?;
        let launch_angle = self.launch_angle.ok_or_else(|| LaunchError::MissingField {
            id: projectile_id(index),
            field: "LaunchAngle",
        })?;
        Ok(LaunchRecord::new(initial_velocity, launch_angle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projectile_id_is_one_based() {
        assert_eq!(projectile_id(0), "Projectile1");
        assert_eq!(projectile_id(9), "Projectile10");
    }

    #[test]
    fn test_into_record_missing_angle() {
        let entry = LaunchEntry {
            initial_velocity: Some(20.0),
            launch_angle: None,
        };
        match entry.into_record(2) {
            Err(LaunchError::MissingField { id, field }) => {
                assert_eq!(id, "Projectile3");
                assert_eq!(field, "LaunchAngle");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_into_record_missing_velocity() {
        let err = LaunchEntry::default().into_record(0).unwrap_err();
        assert!(matches!(
            err,
            LaunchError::MissingField { field: "InitialVelocity", .. }
        ));
    }

    #[test]
    fn test_implausibility() {
        assert_eq!(LaunchRecord::new(20.0, 45.0).implausibility(), None);
        assert_eq!(LaunchRecord::new(0.0, 0.0).implausibility(), None);
        assert_eq!(LaunchRecord::new(0.0, 90.0).implausibility(), None);
        assert!(LaunchRecord::new(-1.0, 45.0).implausibility().is_some());
        assert!(LaunchRecord::new(10.0, 91.0).implausibility().is_some());
        assert!(LaunchRecord::new(10.0, -0.5).implausibility().is_some());
        assert!(LaunchRecord::new(f64::NAN, 10.0).implausibility().is_some());
    }
}
