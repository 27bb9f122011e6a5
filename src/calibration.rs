/// 교정 판정 상태.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalibrationStatus {
    /// 허용 오차 이내 (합격)
    InTolerance,
    /// 허용 오차 초과 (불합격)
    OutOfTolerance,
}

/// 교정 점검 입력.
#[derive(Debug, Clone, Copy)]
pub struct CalibrationInput {
    /// 기준값 (이상적인 값)
    pub setpoint: f64,
    /// 계기 지시값
    pub measured: f64,
    /// 계기 스팬 (URV-LRV)
    pub span: f64,
    /// 허용 오차 [% of span]
    pub tolerance_percent: f64,
}

/// 교정 점검 결과.
#[derive(Debug, Clone, Copy)]
pub struct CalibrationResult {
    /// 절대 오차 (지시값 - 기준값)
    pub error: f64,
    /// 스팬 대비 오차 백분율 [%]
    pub error_percent_of_span: f64,
    /// 허용 여부 판정
    pub status: CalibrationStatus,
}

/// 오차와 스팬 대비 백분율을 계산해 허용 여부를 판정한다.
///
/// 스팬이 0 이하이거나 입력이 유한하지 않으면 None(대기 상태)을 반환한다.
pub fn check_calibration(input: CalibrationInput) -> Option<CalibrationResult> {
    let values = [
        input.setpoint,
        input.measured,
        input.span,
        input.tolerance_percent,
    ];
    if values.iter().any(|v| !v.is_finite()) || input.span <= 0.0 {
        return None;
    }

    let error = input.measured - input.setpoint;
    let error_percent = error / input.span * 100.0;
    let status = if error_percent.abs() <= input.tolerance_percent {
        CalibrationStatus::InTolerance
    } else {
        CalibrationStatus::OutOfTolerance
    };
    Some(CalibrationResult {
        error,
        error_percent_of_span: error_percent,
        status,
    })
}
