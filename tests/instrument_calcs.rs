//! 신호 변환/탱크 레벨/교정 점검 회귀 테스트.
use std::f64::consts::PI;

use instrumentation_toolbox::calibration::{
    check_calibration, CalibrationInput, CalibrationStatus,
};
use instrumentation_toolbox::level::{compute_level, LevelInput, TankGeometry};
use instrumentation_toolbox::signal::{scale_signal, SignalError, SignalInput, SignalRange};

#[test]
fn signal_value_to_percent_and_current() {
    let range = SignalRange {
        lrv: 0.0,
        urv: 100.0,
    };
    let reading = scale_signal(range, SignalInput::Value(50.0)).expect("scale");
    assert!((reading.percent - 50.0).abs() < 1e-12);
    assert!((reading.milliamp - 12.0).abs() < 1e-12);
}

#[test]
fn signal_current_to_value_with_offset_range() {
    // 20~120 kPa 레인지에서 8mA는 25% = 45 kPa
    let range = SignalRange {
        lrv: 20.0,
        urv: 120.0,
    };
    let reading = scale_signal(range, SignalInput::Milliamp(8.0)).expect("scale");
    assert!((reading.percent - 25.0).abs() < 1e-12);
    assert!((reading.value - 45.0).abs() < 1e-12);
}

#[test]
fn signal_rejects_bad_range_and_out_of_range_current() {
    let bad = SignalRange {
        lrv: 100.0,
        urv: 0.0,
    };
    assert!(matches!(
        scale_signal(bad, SignalInput::Value(50.0)),
        Err(SignalError::InvalidRange)
    ));

    let range = SignalRange {
        lrv: 0.0,
        urv: 100.0,
    };
    assert!(matches!(
        scale_signal(range, SignalInput::Milliamp(3.5)),
        Err(SignalError::OutOfRange(_))
    ));
    assert!(matches!(
        scale_signal(range, SignalInput::Percent(120.0)),
        Err(SignalError::OutOfRange(_))
    ));
}

#[test]
fn vertical_cylinder_volume_and_mass() {
    let res = compute_level(LevelInput {
        geometry: TankGeometry::VerticalCylinder {
            diameter_m: 2.0,
            height_m: 5.0,
        },
        level_m: 3.0,
        density_kg_m3: 1000.0,
    })
    .expect("level");
    let expected = PI * 1.0 * 1.0 * 3.0;
    assert!((res.volume_m3 - expected).abs() < 1e-9);
    assert!((res.mass_kg - expected * 1000.0).abs() < 1e-6);
    assert!((res.fill_percent - 60.0).abs() < 1e-9);
}

#[test]
fn horizontal_cylinder_half_full() {
    let res = compute_level(LevelInput {
        geometry: TankGeometry::HorizontalCylinder {
            diameter_m: 2.0,
            length_m: 10.0,
        },
        level_m: 1.0,
        density_kg_m3: 1000.0,
    })
    .expect("level");
    // 반만 찬 수평 원통: π·r²·L/2
    assert!((res.volume_m3 - PI * 10.0 / 2.0).abs() < 1e-9);
    assert!((res.fill_percent - 50.0).abs() < 1e-9);
}

#[test]
fn sphere_full_level_matches_sphere_volume() {
    let res = compute_level(LevelInput {
        geometry: TankGeometry::Sphere { diameter_m: 2.0 },
        level_m: 2.0,
        density_kg_m3: 800.0,
    })
    .expect("level");
    assert!((res.volume_m3 - 4.0 * PI / 3.0).abs() < 1e-9);
    assert!((res.fill_percent - 100.0).abs() < 1e-9);
}

#[test]
fn level_above_full_height_is_clamped() {
    let geometry = TankGeometry::VerticalCylinder {
        diameter_m: 2.0,
        height_m: 5.0,
    };
    let over = compute_level(LevelInput {
        geometry,
        level_m: 10.0,
        density_kg_m3: 1000.0,
    })
    .expect("level");
    let full = compute_level(LevelInput {
        geometry,
        level_m: 5.0,
        density_kg_m3: 1000.0,
    })
    .expect("level");
    assert_eq!(over.volume_m3, full.volume_m3);
    assert!((over.fill_percent - 100.0).abs() < 1e-9);
}

#[test]
fn level_rejects_non_positive_dimensions() {
    let res = compute_level(LevelInput {
        geometry: TankGeometry::VerticalCylinder {
            diameter_m: 0.0,
            height_m: 5.0,
        },
        level_m: 1.0,
        density_kg_m3: 1000.0,
    });
    assert!(res.is_err());
}

#[test]
fn calibration_verdicts() {
    let input = CalibrationInput {
        setpoint: 50.0,
        measured: 50.5,
        span: 100.0,
        tolerance_percent: 1.0,
    };
    let res = check_calibration(input).expect("defined");
    assert!((res.error - 0.5).abs() < 1e-12);
    assert!((res.error_percent_of_span - 0.5).abs() < 1e-12);
    assert_eq!(res.status, CalibrationStatus::InTolerance);

    let out = check_calibration(CalibrationInput {
        measured: 52.0,
        ..input
    })
    .expect("defined");
    assert!((out.error_percent_of_span - 2.0).abs() < 1e-12);
    assert_eq!(out.status, CalibrationStatus::OutOfTolerance);
}

#[test]
fn calibration_invalid_span_is_idle() {
    let input = CalibrationInput {
        setpoint: 50.0,
        measured: 50.5,
        span: 0.0,
        tolerance_percent: 1.0,
    };
    assert!(check_calibration(input).is_none());
    assert!(check_calibration(CalibrationInput {
        span: f64::NAN,
        ..input
    })
    .is_none());
}
