//! 설정 파일 로드/저장 회귀 테스트.
use std::path::PathBuf;

use instrumentation_toolbox::config::load_or_default_from;

fn temp_path(tag: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "itb_config_test_{tag}_{}.toml",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    path
}

#[test]
fn missing_file_creates_defaults_at_given_path() {
    let path = temp_path("missing");
    let cfg = load_or_default_from(&path).expect("load");
    assert!(path.exists(), "기본 설정 파일이 생성되어야 한다");
    assert_eq!(cfg.simulation.dt, 0.1);
    assert_eq!(cfg.simulation.total_time, 100.0);
    assert_eq!(cfg.simulation.integral_limit, 10.0);
    assert_eq!(cfg.simulation.output_min, 0.0);
    assert_eq!(cfg.simulation.output_max, 2.0);
    let _ = std::fs::remove_file(path);
}

#[test]
fn save_to_and_reload_roundtrip() {
    let path = temp_path("roundtrip");
    let mut cfg = load_or_default_from(&path).expect("load");
    cfg.simulation.integral_limit = 5.0;
    cfg.simulation.output_max = 1.5;
    cfg.store_path = "custom_configs.toml".to_string();
    cfg.save_to(&path).expect("save");

    let reloaded = load_or_default_from(&path).expect("reload");
    assert_eq!(reloaded.simulation, cfg.simulation);
    assert_eq!(reloaded.store_path, "custom_configs.toml");
    let _ = std::fs::remove_file(path);
}
