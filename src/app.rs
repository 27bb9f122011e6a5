use std::path::Path;

use crate::config::Config;
use crate::pid::store;
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
///
/// 계산기별 입력 오류(신호 레인지, 탱크 치수 등)는 각 메뉴에서 메시지로
/// 안내하고 복구하므로 여기에는 포함하지 않는다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 튜닝 설정 저장소 오류
    Store(store::StoreError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Store(e) => write!(f, "저장소 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<store::StoreError> for AppError {
    fn from(value: store::StoreError) -> Self {
        AppError::Store(value)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다. 설정 변경은 지정한 경로에
/// 저장한다.
pub fn run(config: &mut Config, config_path: &Path) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu()? {
            MenuChoice::PidTuning => ui_cli::handle_pid_tuning(config)?,
            MenuChoice::SignalScaling => ui_cli::handle_signal_scaling()?,
            MenuChoice::TankLevel => ui_cli::handle_tank_level()?,
            MenuChoice::Calibration => ui_cli::handle_calibration()?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(config)?;
                config.save_to(config_path)?;
            }
            MenuChoice::Exit => {
                config.save_to(config_path)?;
                println!("프로그램을 종료합니다.");
                break;
            }
        }
    }
    Ok(())
}
