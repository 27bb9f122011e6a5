use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::pid::SimulationSettings;

/// 애플리케이션 설정을 표현한다.
///
/// 시뮬레이션 클램프 한계는 원 모델에서 물리적 근거 없이 정한 예시값이므로
/// 기본값으로 두되 여기서 조정할 수 있게 한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// PID 시뮬레이션 기본 설정
    pub simulation: SimulationSettings,
    /// PID 튜닝 설정 저장 파일 경로
    pub store_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            simulation: SimulationSettings::default(),
            store_path: "pid_configs.toml".to_string(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 직렬화/역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// 지정한 경로에서 설정을 로드하거나, 파일이 없으면 기본 설정을 만들어
/// 같은 경로에 저장한 뒤 반환한다.
pub fn load_or_default_from(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save_to(path)?;
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 지정한 경로에 저장한다.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
