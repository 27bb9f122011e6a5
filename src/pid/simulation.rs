use serde::{Deserialize, Serialize};

use crate::pid::tuning::ControllerGains;

/// 기준 2차 공정의 고정 파라미터.
///
/// `Tp1·Tp2·y'' + (Tp1+Tp2)·y' + y = K·u` 형태의 선형 2차계를 나타낸다.
#[derive(Debug, Clone, Copy)]
pub struct PlantParameters {
    /// 공정 게인 K
    pub gain: f64,
    /// 1차 시정수 Tp1
    pub tau1: f64,
    /// 2차 시정수 Tp2
    pub tau2: f64,
}

impl Default for PlantParameters {
    fn default() -> Self {
        Self {
            gain: 1.0,
            tau1: 5.0,
            tau2: 2.0,
        }
    }
}

/// 시뮬레이션 설정.
///
/// 적분 누적 한계(±10)와 액추에이터 출력 한계([0, 2])는 물리적으로 유도된
/// 값이 아니라 예시용 기본값이며, config.toml에서 조정할 수 있다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationSettings {
    /// 적분 스텝 간격 [s]
    pub dt: f64,
    /// 전체 시뮬레이션 시간 [s]
    pub total_time: f64,
    /// 적분 누적값의 와인드업 한계 (절대값)
    pub integral_limit: f64,
    /// 액추에이터 출력 하한
    pub output_min: f64,
    /// 액추에이터 출력 상한
    pub output_max: f64,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            dt: 0.1,
            total_time: 100.0,
            integral_limit: 10.0,
            output_min: 0.0,
            output_max: 2.0,
        }
    }
}

/// 궤적의 한 샘플. 해당 스텝의 제어기/공정 갱신이 적용되기 전 상태를 기록한다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationSample {
    /// 시각 [s]
    pub time: f64,
    /// 설정값
    pub setpoint: f64,
    /// 공정값
    pub process_value: f64,
}

/// 한 회 실행 동안만 유지되는 제어기 내부 상태. 실행 간에 공유되지 않는다.
#[derive(Debug, Default)]
struct ControllerState {
    last_error: f64,
    integral: f64,
}

impl ControllerState {
    /// 한 스텝의 제어기 출력을 계산한다.
    ///
    /// 순서: 적분 누적 → 와인드업 클램프 → 미분 → 게인 환산 → 출력 합성 →
    /// 출력 클램프 → 오차 저장. Ti=+∞(적분 동작 없음)에서는 유한성 검사로
    /// Ki를 정확히 0으로 두어 NaN이 생기지 않게 한다.
    fn update(&mut self, gains: &ControllerGains, error: f64, settings: &SimulationSettings) -> f64 {
        self.integral += error * settings.dt;
        if gains.ti > 0.0 {
            self.integral = self
                .integral
                .clamp(-settings.integral_limit, settings.integral_limit);
        }
        let derivative = (error - self.last_error) / settings.dt;
        let ki = if gains.ti.is_finite() && gains.ti > 0.0 {
            gains.kp / gains.ti
        } else {
            0.0
        };
        let kd = gains.kp * gains.td;
        let output = gains.kp * error + ki * self.integral + kd * derivative;
        let output = output.clamp(settings.output_min, settings.output_max);
        self.last_error = error;
        output
    }
}

/// 기본 시나리오의 설정값 프로파일. t<1에서 0, 이후 1인 지연 단위 스텝으로
/// 기동 과도와 스텝 응답을 분리한다.
fn setpoint_at(t: f64) -> f64 {
    if t < 1.0 {
        0.0
    } else {
        1.0
    }
}

/// 기본 공정/설정으로 폐루프 스텝 응답 궤적을 계산한다.
pub fn simulate(gains: &ControllerGains) -> Vec<SimulationSample> {
    simulate_with(gains, &PlantParameters::default(), &SimulationSettings::default())
}

/// 주어진 공정/설정으로 고정 스텝(명시적 오일러) 폐루프 시뮬레이션을 수행한다.
///
/// Kp=0이면 제어기가 꺼진 것으로 보고 빈 궤적을 반환한다(오류 아님).
/// 샘플 수는 `floor(total_time/dt) + 1`이고, 각 샘플은 그 스텝의 갱신 이전
/// 상태를 담으므로 첫 샘플은 항상 `(0, 0, 0)`이다. 시각은 `i·dt`로 계산해
/// 균일 간격의 단조 증가를 보장한다. 난수/시계 의존이 없어 동일 입력에는
/// 항상 동일한 궤적이 나온다.
pub fn simulate_with(
    gains: &ControllerGains,
    plant: &PlantParameters,
    settings: &SimulationSettings,
) -> Vec<SimulationSample> {
    if gains.kp == 0.0 {
        return Vec::new();
    }

    let steps = (settings.total_time / settings.dt).floor() as usize;
    let mut samples = Vec::with_capacity(steps + 1);
    let mut state = ControllerState::default();
    let mut process_value = 0.0_f64;
    let mut rate = 0.0_f64;

    for i in 0..=steps {
        let t = i as f64 * settings.dt;
        let setpoint = setpoint_at(t);
        samples.push(SimulationSample {
            time: t,
            setpoint,
            process_value,
        });

        let error = setpoint - process_value;
        let output = state.update(gains, error, settings);

        // 공정 갱신: (pv, rate) 상태쌍에 대한 명시적 오일러 적분
        let accel = (plant.gain * output - (plant.tau1 + plant.tau2) * rate - process_value)
            / (plant.tau1 * plant.tau2);
        rate += accel * settings.dt;
        process_value += rate * settings.dt;
    }
    samples
}
