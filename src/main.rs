use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use instrumentation_toolbox::config::Config;
use instrumentation_toolbox::pid::{
    compute_gains, simulate_with, PlantParameters, TuningInputs, TuningRule,
};
use instrumentation_toolbox::{app, config, ui_cli};

/// 계장 계산 툴박스. 하위 명령 없이 실행하면 대화형 메뉴가 시작된다.
#[derive(Parser)]
#[command(name = "instrumentation_toolbox", about = "계장 계산 툴박스")]
struct Cli {
    /// 설정 파일 경로
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Ku/Tu와 튜닝 룰로 게인을 계산하고 스텝 응답을 시뮬레이션한다.
    Simulate {
        /// 한계 게인 Ku
        #[arg(long)]
        ku: String,
        /// 한계 주기 Tu
        #[arg(long)]
        tu: String,
        /// 튜닝 룰 ("Z-N P" | "Z-N PI" | "Z-N PID")
        #[arg(long, default_value = "Z-N PID")]
        rule: String,
        /// 궤적 CSV 출력 경로 (time,setpoint,process_value)
        #[arg(long)]
        csv: Option<PathBuf>,
    },
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 명령 또는 대화형 메뉴를 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default_from(&cli.config)?;
    match cli.command {
        Some(Command::Simulate { ku, tu, rule, csv }) => run_simulate(&cfg, &ku, &tu, &rule, csv),
        None => {
            app::run(&mut cfg, &cli.config)?;
            Ok(())
        }
    }
}

/// 한 번의 튜닝+시뮬레이션을 수행하고 결과를 출력한다.
fn run_simulate(
    cfg: &Config,
    ku: &str,
    tu: &str,
    rule: &str,
    csv: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let rule = TuningRule::parse(rule)?;
    let Some(inputs) = TuningInputs::from_strings(ku, tu, rule) else {
        println!("미정의: Ku/Tu는 숫자여야 합니다.");
        return Ok(());
    };
    let Some(gains) = compute_gains(&inputs) else {
        println!("미정의: Ku/Tu는 0보다 커야 합니다.");
        return Ok(());
    };
    ui_cli::print_gains(&gains);
    let samples = simulate_with(&gains, &PlantParameters::default(), &cfg.simulation);
    ui_cli::print_simulation_summary(&samples);

    if let Some(path) = csv {
        let mut out = String::from("time,setpoint,process_value\n");
        for s in &samples {
            out.push_str(&format!("{},{},{}\n", s.time, s.setpoint, s.process_value));
        }
        fs::write(&path, out)?;
        println!("궤적을 저장했습니다: {}", path.display());
    }
    Ok(())
}
