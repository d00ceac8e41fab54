// src/simulation/load_launches.rs

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::info;

use crate::config::{EvaluationSettings, LaunchEntry, LaunchRecord, SettingsFile};
use crate::simulation::error::LaunchError;

/// 入力ファイルの形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
}

impl InputFormat {
    /// 拡張子から形式を判定する (`.yaml` / `.yml` 以外は JSON)
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => InputFormat::Yaml,
            _ => InputFormat::Json,
        }
    }
}

/// ファイル全体を読み込んで指定の型にデシリアライズする
fn read_structured<T: DeserializeOwned>(path: &Path, format: InputFormat) -> Result<T, LaunchError> {
    let file = File::open(path).map_err(|source| LaunchError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    match format {
        InputFormat::Json => serde_json::from_reader(reader).map_err(|source| LaunchError::Json {
            path: path.to_path_buf(),
            source,
        }),
        InputFormat::Yaml => serde_yaml::from_reader(reader).map_err(|source| LaunchError::Yaml {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// 必須フィールドを確認しながら入力順に `LaunchRecord` へ変換する
pub fn records_from_entries(entries: Vec<LaunchEntry>) -> Result<Vec<LaunchRecord>, LaunchError> {
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| entry.into_record(index))
        .collect()
}

/// 発射条件の読み込み
///
/// # 引数
/// - `path`: 入力ファイルのパス (JSON または YAML の配列)
///
/// # 戻り値
/// - 入力順の発射条件
pub fn load_launches<P: AsRef<Path>>(path: P) -> Result<Vec<LaunchRecord>, LaunchError> {
    let path = path.as_ref();
    let format = InputFormat::from_path(path);
    let entries: Vec<LaunchEntry> = read_structured(path, format)?;
    let records = records_from_entries(entries)?;
    info!(path = %path.display(), count = records.len(), ?format, "loaded launch records");
    Ok(records)
}

/// 設定ファイルの読み込み
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<EvaluationSettings, LaunchError> {
    let path = path.as_ref();
    let file: SettingsFile = read_structured(path, InputFormat::Yaml)?;
    let settings = EvaluationSettings::from_file(&file);
    settings.validate()?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(InputFormat::from_path(Path::new("file.json")), InputFormat::Json);
        assert_eq!(InputFormat::from_path(Path::new("a/b.YML")), InputFormat::Yaml);
        assert_eq!(InputFormat::from_path(Path::new("launches.yaml")), InputFormat::Yaml);
        assert_eq!(InputFormat::from_path(Path::new("launches")), InputFormat::Json);
    }

    #[test]
    fn test_records_keep_input_order() {
        let entries: Vec<LaunchEntry> = serde_json::from_str(
            r#"[{"InitialVelocity": 20, "LaunchAngle": 45},
                {"InitialVelocity": 30.5, "LaunchAngle": 30, "Comment": "ignored"}]"#,
        )
        .unwrap();
        let records = records_from_entries(entries).unwrap();
        assert_eq!(
            records,
            vec![LaunchRecord::new(20.0, 45.0), LaunchRecord::new(30.5, 30.0)]
        );
    }

    #[test]
    fn test_missing_field_fails_whole_batch() {
        let entries: Vec<LaunchEntry> = serde_json::from_str(
            r#"[{"InitialVelocity": 20, "LaunchAngle": 45}, {"InitialVelocity": 30}]"#,
        )
        .unwrap();
        let err = records_from_entries(entries).unwrap_err();
        assert_eq!(err.to_string(), "Projectile2: missing required field `LaunchAngle`");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_launches("definitely/not/here.json").unwrap_err();
        assert!(matches!(err, LaunchError::Io { .. }));
    }
}
