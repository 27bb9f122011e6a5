//! 폐루프 스텝 응답 시뮬레이션 회귀 테스트.
use instrumentation_toolbox::pid::{
    compute_gains, simulate, ControllerGains, TuningInputs, TuningRule,
};

fn gains(ku: f64, tu: f64, rule: TuningRule) -> ControllerGains {
    compute_gains(&TuningInputs { ku, tu, rule }).expect("defined gains")
}

#[test]
fn zero_kp_returns_empty_trajectory() {
    let disabled = ControllerGains {
        kp: 0.0,
        ti: 0.0,
        td: 0.0,
    };
    assert!(simulate(&disabled).is_empty());
}

#[test]
fn trajectory_has_1001_samples_starting_at_rest() {
    let samples = simulate(&gains(2.2, 20.0, TuningRule::Pid));
    assert_eq!(samples.len(), 1001);
    assert_eq!(samples[0].time, 0.0);
    assert_eq!(samples[0].setpoint, 0.0);
    assert_eq!(samples[0].process_value, 0.0);
}

#[test]
fn time_axis_is_monotone_and_evenly_spaced() {
    let samples = simulate(&gains(2.2, 20.0, TuningRule::Pid));
    for pair in samples.windows(2) {
        let dt = pair[1].time - pair[0].time;
        assert!(dt > 0.0);
        assert!((dt - 0.1).abs() < 1e-9);
    }
    assert!((samples[1000].time - 100.0).abs() < 1e-9);
}

#[test]
fn setpoint_is_delayed_unit_step() {
    let samples = simulate(&gains(2.2, 20.0, TuningRule::Pid));
    for s in &samples {
        if s.time < 1.0 {
            assert_eq!(s.setpoint, 0.0, "t={}", s.time);
        } else {
            assert_eq!(s.setpoint, 1.0, "t={}", s.time);
        }
    }
}

#[test]
fn pid_converges_to_setpoint() {
    // Ku=2.2, Tu=20 → Kp=1.32, Ti=10, Td=2.5
    let samples = simulate(&gains(2.2, 20.0, TuningRule::Pid));
    let last = samples.last().expect("non-empty");
    assert!(
        (last.process_value - 1.0).abs() < 0.05,
        "final pv={}",
        last.process_value
    );
}

#[test]
fn p_only_has_no_nan_and_steady_state_offset() {
    // Kp=1.1, Ti=+∞ → 적분 동작이 없어 정상상태 오프셋이 남는다
    let samples = simulate(&gains(2.2, 20.0, TuningRule::P));
    for s in &samples {
        assert!(s.process_value.is_finite(), "t={}", s.time);
    }
    let last = samples.last().expect("non-empty");
    assert!(last.process_value > 0.2, "final pv={}", last.process_value);
    assert!(
        (1.0 - last.process_value).abs() > 0.1,
        "expected offset, final pv={}",
        last.process_value
    );
}

#[test]
fn identical_gains_yield_identical_trajectories() {
    let g = gains(2.2, 20.0, TuningRule::Pid);
    let first = simulate(&g);
    let second = simulate(&g);
    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a, b);
    }
}

#[test]
fn saturated_controller_keeps_process_bounded() {
    // 과도한 Ku에서도 출력 클램프([0,2])와 와인드업 한계 때문에 공정값이
    // 발산하지 않는다
    let samples = simulate(&gains(100.0, 20.0, TuningRule::Pid));
    assert_eq!(samples.len(), 1001);
    for s in &samples {
        assert!(s.process_value.is_finite());
        assert!(s.process_value > -0.5 && s.process_value < 2.5, "t={}", s.time);
    }
}
