// src/config/settings.rs

use serde::Deserialize;

use crate::simulation::error::LaunchError;

/// 長時間飛行とみなす滞空時間のデフォルト値 (s)
pub const DEFAULT_MIN_FLIGHT_TIME: f64 = 4.0;

/// 設定ファイルの内容 (全キー省略可)
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SettingsFile {
    pub min_flight_time: Option<f64>, // 滞空時間のしきい値 (s)
    pub strict: Option<bool>,         // 物理的に不正な入力をエラーにする
}

/// 評価時の設定
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluationSettings {
    pub min_flight_time: f64,
    pub strict: bool,
}

impl Default for EvaluationSettings {
    fn default() -> Self {
        Self {
            min_flight_time: DEFAULT_MIN_FLIGHT_TIME,
            strict: false,
        }
    }
}

impl EvaluationSettings {
    /// 設定ファイルの値をデフォルト値に重ねる
    pub fn from_file(file: &SettingsFile) -> Self {
        let defaults = Self::default();
        Self {
            min_flight_time: file.min_flight_time.unwrap_or(defaults.min_flight_time),
            strict: file.strict.unwrap_or(defaults.strict),
        }
    }

    /// コマンドラインの値を重ねる
    ///
    /// # 引数
    /// - `min_flight_time`: 指定があればファイルの値より優先する
    /// - `strict`: `true` の場合のみ strict モードを有効にする (ファイルの `true` は打ち消さない)
    pub fn with_overrides(self, min_flight_time: Option<f64>, strict: bool) -> Self {
        Self {
            min_flight_time: min_flight_time.unwrap_or(self.min_flight_time),
            strict: self.strict || strict,
        }
    }

    pub fn validate(&self) -> Result<(), LaunchError> {
        if !self.min_flight_time.is_finite() || self.min_flight_time < 0.0 {
            return Err(LaunchError::InvalidSettings(format!(
                "min_flight_time must be a finite non-negative number, got {}",
                self.min_flight_time
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = EvaluationSettings::default();
        assert_eq!(settings.min_flight_time, 4.0);
        assert!(!settings.strict);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_from_partial_file() {
        let file: SettingsFile = serde_yaml::from_str("strict: true\n").unwrap();
        let settings = EvaluationSettings::from_file(&file);
        assert_eq!(settings.min_flight_time, DEFAULT_MIN_FLIGHT_TIME);
        assert!(settings.strict);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result: Result<SettingsFile, _> = serde_yaml::from_str("gravity: 9.81\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_threshold_beats_file() {
        let file: SettingsFile = serde_yaml::from_str("min_flight_time: 6.0\n").unwrap();
        let settings = EvaluationSettings::from_file(&file).with_overrides(Some(2.5), false);
        assert_eq!(settings.min_flight_time, 2.5);

        let settings = EvaluationSettings::from_file(&file).with_overrides(None, false);
        assert_eq!(settings.min_flight_time, 6.0);
    }

    #[test]
    fn test_file_strict_survives_absent_flag() {
        let file: SettingsFile = serde_yaml::from_str("strict: true\n").unwrap();
        let settings = EvaluationSettings::from_file(&file).with_overrides(None, false);
        assert!(settings.strict);

        let settings = EvaluationSettings::default().with_overrides(None, true);
        assert!(settings.strict);
    }

    #[test]
    fn test_non_finite_cli_threshold_rejected() {
        for value in [f64::NAN, f64::INFINITY] {
            let settings = EvaluationSettings::default().with_overrides(Some(value), false);
            assert!(matches!(
                settings.validate(),
                Err(LaunchError::InvalidSettings(_))
            ));
        }
    }

    #[test]
    fn test_negative_threshold_rejected() {
        let settings = EvaluationSettings {
            min_flight_time: -1.0,
            strict: false,
        };
        assert!(matches!(
            settings.validate(),
            Err(LaunchError::InvalidSettings(_))
        ));
    }
}
