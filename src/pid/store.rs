use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use crate::pid::tuning::TuningInputs;

/// 튜닝 설정 저장소에서 발생 가능한 오류.
#[derive(Debug)]
pub enum StoreError {
    /// 설정 이름이 비어 있음
    EmptyName,
    /// 해당 이름의 설정 없음
    NotFound(String),
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::EmptyName => write!(f, "설정 이름이 비어 있습니다"),
            StoreError::NotFound(name) => write!(f, "설정을 찾을 수 없음: {name}"),
            StoreError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            StoreError::Serde(e) => write!(f, "저장 파일 파싱 오류: {e}"),
            StoreError::Serialize(e) => write!(f, "저장 파일 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        StoreError::Io(value)
    }
}

impl From<toml::de::Error> for StoreError {
    fn from(value: toml::de::Error) -> Self {
        StoreError::Serde(value)
    }
}

impl From<toml::ser::Error> for StoreError {
    fn from(value: toml::ser::Error) -> Self {
        StoreError::Serialize(value)
    }
}

/// 저장 파일 내용. 설정 이름을 키로 하는 튜닝 입력 모음.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    configs: BTreeMap<String, TuningInputs>,
}

/// 이름으로 키잉되는 PID 튜닝 설정 저장소. TOML 파일 하나로 영속화한다.
///
/// 파일이 없으면 빈 저장소로 취급하고, 같은 이름으로 저장하면 덮어쓴다.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// 지정한 경로를 저장 파일로 사용하는 저장소를 만든다.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read(&self) -> Result<StoreFile, StoreError> {
        if !self.path.exists() {
            return Ok(StoreFile::default());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(toml::from_str(&content)?)
    }

    fn write(&self, file: &StoreFile) -> Result<(), StoreError> {
        let content = toml::to_string_pretty(file)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    /// 튜닝 입력을 이름으로 저장한다. 같은 이름이 있으면 덮어쓰고,
    /// 빈 이름은 거부한다.
    pub fn save(&self, name: &str, inputs: TuningInputs) -> Result<(), StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::EmptyName);
        }
        let mut file = self.read()?;
        file.configs.insert(name.to_string(), inputs);
        self.write(&file)
    }

    /// 저장된 모든 설정을 (이름, 입력) 쌍으로 반환한다.
    pub fn list(&self) -> Result<Vec<(String, TuningInputs)>, StoreError> {
        Ok(self.read()?.configs.into_iter().collect())
    }

    /// 이름으로 설정을 읽는다.
    pub fn load(&self, name: &str) -> Result<TuningInputs, StoreError> {
        self.read()?
            .configs
            .get(name.trim())
            .copied()
            .ok_or_else(|| StoreError::NotFound(name.trim().to_string()))
    }

    /// 이름으로 설정을 삭제한다. 없는 이름이면 아무 일도 하지 않는다.
    pub fn delete(&self, name: &str) -> Result<(), StoreError> {
        let mut file = self.read()?;
        file.configs.remove(name.trim());
        self.write(&file)
    }
}
