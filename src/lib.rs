//! 핵심 계산 로직을 라이브러리로 분리하여 CLI 뿐 아니라 추후 GUI 확장도 쉽게 한다.

pub mod app;
pub mod calibration;
pub mod config;
pub mod level;
pub mod pid;
pub mod signal;
pub mod ui_cli;
