use std::io::{self, Write};

use crate::app::AppError;
use crate::calibration::{self, CalibrationStatus};
use crate::config::Config;
use crate::level::{self, TankGeometry};
use crate::pid::{
    compute_gains, simulate_with, ConfigStore, ControllerGains, PlantParameters,
    SimulationSample, StoreError, TuningInputs, TuningRule,
};
use crate::signal::{self, SignalInput, SignalRange};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    PidTuning,
    SignalScaling,
    TankLevel,
    Calibration,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu() -> Result<MenuChoice, AppError> {
    println!("\n=== Instrumentation Toolbox ===");
    println!("1) PID 튜닝/시뮬레이션");
    println!("2) 4-20mA 신호 변환");
    println!("3) 탱크 레벨/체적/질량");
    println!("4) 교정 오차 점검");
    println!("5) 설정");
    println!("0) 종료");
    loop {
        let sel = read_line("메뉴 선택: ")?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::PidTuning),
            "2" => return Ok(MenuChoice::SignalScaling),
            "3" => return Ok(MenuChoice::TankLevel),
            "4" => return Ok(MenuChoice::Calibration),
            "5" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("잘못된 입력입니다. 다시 선택하세요."),
        }
    }
}

/// PID 튜닝/시뮬레이션 메뉴를 처리한다.
pub fn handle_pid_tuning(cfg: &Config) -> Result<(), AppError> {
    let store = ConfigStore::new(&cfg.store_path);
    let mut current: Option<TuningInputs> = None;
    loop {
        println!("\n-- PID 튜닝/시뮬레이션 --");
        println!("1) Ku/Tu 입력 및 시뮬레이션  2) 설정 저장  3) 저장 목록  4) 불러오기  5) 삭제  0) 돌아가기");
        let sel = read_line("선택: ")?;
        match sel.trim() {
            "1" => {
                let inputs = read_tuning_inputs()?;
                if let Some(inputs) = inputs {
                    run_tuning(cfg, &inputs);
                    current = Some(inputs);
                } else {
                    println!("미정의: Ku/Tu는 0보다 큰 숫자여야 합니다.");
                }
            }
            "2" => {
                let Some(inputs) = current else {
                    println!("먼저 Ku/Tu를 입력하세요.");
                    continue;
                };
                let name = read_line("설정 이름: ")?;
                match store.save(name.trim(), inputs) {
                    Ok(()) => println!("저장했습니다: {}", name.trim()),
                    Err(StoreError::EmptyName) => println!("설정 이름을 입력하세요."),
                    Err(e) => return Err(e.into()),
                }
            }
            "3" => {
                let configs = store.list()?;
                if configs.is_empty() {
                    println!("저장된 설정이 없습니다.");
                }
                for (name, inputs) in configs {
                    println!(
                        "  {name}: Ku={} Tu={} 룰={}",
                        inputs.ku,
                        inputs.tu,
                        inputs.rule.label()
                    );
                }
            }
            "4" => {
                let name = read_line("불러올 이름: ")?;
                match store.load(name.trim()) {
                    Ok(inputs) => {
                        run_tuning(cfg, &inputs);
                        current = Some(inputs);
                    }
                    Err(StoreError::NotFound(n)) => println!("설정을 찾을 수 없음: {n}"),
                    Err(e) => return Err(e.into()),
                }
            }
            "5" => {
                let name = read_line("삭제할 이름: ")?;
                store.delete(name.trim())?;
                println!("삭제했습니다.");
            }
            "0" => return Ok(()),
            _ => println!("잘못된 선택입니다."),
        }
    }
}

/// Ku/Tu/룰을 문자열로 입력받는다. 숫자가 아니면 None.
fn read_tuning_inputs() -> Result<Option<TuningInputs>, AppError> {
    let ku = read_line("한계 게인 Ku: ")?;
    let tu = read_line("한계 주기 Tu: ")?;
    let rule = read_tuning_rule()?;
    Ok(TuningInputs::from_strings(&ku, &tu, rule))
}

fn read_tuning_rule() -> Result<TuningRule, AppError> {
    println!("튜닝 룰: 1=Z-N P  2=Z-N PI  3=Z-N PID");
    loop {
        let sel = read_line("선택: ")?;
        match sel.trim() {
            "1" => return Ok(TuningRule::P),
            "2" => return Ok(TuningRule::Pi),
            "3" => return Ok(TuningRule::Pid),
            _ => println!("잘못된 선택입니다."),
        }
    }
}

fn run_tuning(cfg: &Config, inputs: &TuningInputs) {
    let Some(gains) = compute_gains(inputs) else {
        println!("미정의: Ku/Tu는 0보다 큰 숫자여야 합니다.");
        return;
    };
    print_gains(&gains);
    let samples = simulate_with(&gains, &PlantParameters::default(), &cfg.simulation);
    print_simulation_summary(&samples);
}

/// 계산된 게인을 출력한다. Ti=+∞는 적분 동작 없음으로 표시한다.
pub fn print_gains(gains: &ControllerGains) {
    let ti = if gains.ti.is_finite() {
        format!("{:.3}", gains.ti)
    } else {
        "∞ (적분 없음)".to_string()
    };
    println!("Kp = {:.3}, Ti = {ti}, Td = {:.3}", gains.kp, gains.td);
}

/// 스텝 응답 궤적의 요약을 출력한다.
pub fn print_simulation_summary(samples: &[SimulationSample]) {
    if samples.is_empty() {
        println!("제어기가 비활성(Kp=0)이라 궤적이 없습니다.");
        return;
    }
    let max_pv = samples
        .iter()
        .map(|s| s.process_value)
        .fold(f64::MIN, f64::max);
    let last = samples[samples.len() - 1];
    println!("샘플 수: {}", samples.len());
    for &t in &[1.0, 5.0, 10.0, 25.0, 50.0, 100.0] {
        if let Some(s) = samples.iter().find(|s| (s.time - t).abs() < 1e-9) {
            println!("  t={:>5.1}s  SP={:.1}  PV={:.4}", s.time, s.setpoint, s.process_value);
        }
    }
    println!(
        "최대 PV: {:.4}, 최종 PV: {:.4}, 최종 오차: {:.4}",
        max_pv,
        last.process_value,
        last.setpoint - last.process_value
    );
}

/// 4-20mA 신호 변환 메뉴를 처리한다.
pub fn handle_signal_scaling() -> Result<(), AppError> {
    println!("\n-- 4-20mA 신호 변환 --");
    let lrv = read_f64("레인지 하한 LRV: ")?;
    let urv = read_f64("레인지 상한 URV: ")?;
    let range = SignalRange { lrv, urv };
    println!("입력 항목: 1=공정값  2=백분율(%)  3=전류(mA)");
    let input = loop {
        let sel = read_line("선택: ")?;
        match sel.trim() {
            "1" => break SignalInput::Value(read_f64("공정값: ")?),
            "2" => break SignalInput::Percent(read_f64("백분율 [%]: ")?),
            "3" => break SignalInput::Milliamp(read_f64("전류 [mA]: ")?),
            _ => println!("잘못된 선택입니다."),
        }
    };
    match signal::scale_signal(range, input) {
        Ok(reading) => println!(
            "공정값: {:.2}, 백분율: {:.2} %, 전류: {:.2} mA",
            reading.value, reading.percent, reading.milliamp
        ),
        Err(e) => println!("{e}"),
    }
    Ok(())
}

/// 탱크 레벨 계산 메뉴를 처리한다.
pub fn handle_tank_level() -> Result<(), AppError> {
    println!("\n-- 탱크 레벨/체적/질량 --");
    println!("형상: 1=수직 원통  2=수평 원통  3=직육면체  4=구형");
    let geometry = loop {
        let sel = read_line("선택: ")?;
        match sel.trim() {
            "1" => {
                break TankGeometry::VerticalCylinder {
                    diameter_m: read_f64("직경 [m]: ")?,
                    height_m: read_f64("높이 [m]: ")?,
                }
            }
            "2" => {
                break TankGeometry::HorizontalCylinder {
                    diameter_m: read_f64("직경 [m]: ")?,
                    length_m: read_f64("길이 [m]: ")?,
                }
            }
            "3" => {
                break TankGeometry::Rectangular {
                    width_m: read_f64("폭 [m]: ")?,
                    depth_m: read_f64("깊이 [m]: ")?,
                    height_m: read_f64("높이 [m]: ")?,
                }
            }
            "4" => {
                break TankGeometry::Sphere {
                    diameter_m: read_f64("직경 [m]: ")?,
                }
            }
            _ => println!("잘못된 선택입니다."),
        }
    };
    let input = level::LevelInput {
        geometry,
        level_m: read_f64("측정 액위 [m]: ")?,
        density_kg_m3: read_f64("유체 밀도 [kg/m³]: ")?,
    };
    match level::compute_level(input) {
        Ok(res) => println!(
            "체적: {:.3} m³, 질량: {:.3} kg, 충전율: {:.1} %",
            res.volume_m3, res.mass_kg, res.fill_percent
        ),
        Err(e) => println!("{e}"),
    }
    Ok(())
}

/// 교정 오차 점검 메뉴를 처리한다.
pub fn handle_calibration() -> Result<(), AppError> {
    println!("\n-- 교정 오차 점검 --");
    let input = calibration::CalibrationInput {
        setpoint: read_f64("기준값: ")?,
        measured: read_f64("지시값: ")?,
        span: read_f64("계기 스팬 (URV-LRV): ")?,
        tolerance_percent: read_f64("허용 오차 [%]: ")?,
    };
    match calibration::check_calibration(input) {
        Some(res) => {
            let verdict = match res.status {
                CalibrationStatus::InTolerance => "허용 오차 이내 (합격)",
                CalibrationStatus::OutOfTolerance => "허용 오차 초과 (불합격)",
            };
            println!(
                "절대 오차: {:.3}, 스팬 대비: {:.3} % → {verdict}",
                res.error, res.error_percent_of_span
            );
        }
        None => println!("유효하지 않은 입력입니다. 스팬은 0보다 커야 합니다."),
    }
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(cfg: &mut Config) -> Result<(), AppError> {
    println!("\n-- 설정 --");
    println!(
        "현재: dt={}s, 시간={}s, 적분 한계=±{}, 출력=[{}, {}], 저장 파일={}",
        cfg.simulation.dt,
        cfg.simulation.total_time,
        cfg.simulation.integral_limit,
        cfg.simulation.output_min,
        cfg.simulation.output_max,
        cfg.store_path
    );
    println!("1) 적분 한계 변경  2) 출력 한계 변경  3) 저장 파일 경로 변경  0) 돌아가기");
    let sel = read_line("선택: ")?;
    match sel.trim() {
        "1" => {
            let limit = read_f64("적분 누적 한계 (절대값): ")?;
            if limit > 0.0 {
                cfg.simulation.integral_limit = limit;
            } else {
                println!("0보다 큰 값을 입력하세요.");
            }
        }
        "2" => {
            let min = read_f64("출력 하한: ")?;
            let max = read_f64("출력 상한: ")?;
            if min < max {
                cfg.simulation.output_min = min;
                cfg.simulation.output_max = max;
            } else {
                println!("하한은 상한보다 작아야 합니다.");
            }
        }
        "3" => {
            let path = read_line("저장 파일 경로: ")?;
            if !path.trim().is_empty() {
                cfg.store_path = path.trim().to_string();
            }
        }
        _ => {}
    }
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("숫자를 입력하세요."),
        }
    }
}
