/// 4-20mA 신호 변환에서 발생 가능한 오류.
#[derive(Debug)]
pub enum SignalError {
    /// LRV가 URV보다 크거나 같음
    InvalidRange,
    /// 허용 범위를 벗어난 입력 (mA는 4~20, %는 0~100)
    OutOfRange(&'static str),
}

impl std::fmt::Display for SignalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignalError::InvalidRange => write!(f, "LRV는 URV보다 작아야 합니다"),
            SignalError::OutOfRange(field) => write!(f, "허용 범위를 벗어난 입력: {field}"),
        }
    }
}

impl std::error::Error for SignalError {}

/// 계기 레인지 (LRV/URV). 공학 단위는 임의.
#[derive(Debug, Clone, Copy)]
pub struct SignalRange {
    /// 레인지 하한값 (4mA 지점)
    pub lrv: f64,
    /// 레인지 상한값 (20mA 지점)
    pub urv: f64,
}

impl SignalRange {
    /// 스팬(URV-LRV).
    pub fn span(&self) -> f64 {
        self.urv - self.lrv
    }

    fn validate(&self) -> Result<(), SignalError> {
        if !self.lrv.is_finite() || !self.urv.is_finite() || self.lrv >= self.urv {
            return Err(SignalError::InvalidRange);
        }
        Ok(())
    }
}

/// 변환 기준이 되는 입력 항목.
#[derive(Debug, Clone, Copy)]
pub enum SignalInput {
    /// 공정값 (공학 단위)
    Value(f64),
    /// 스팬 백분율 [%]
    Percent(f64),
    /// 루프 전류 [mA]
    Milliamp(f64),
}

/// 공정값/백분율/전류를 모두 환산한 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalReading {
    pub value: f64,
    pub percent: f64,
    pub milliamp: f64,
}

/// 공정값, 스팬 백분율, 루프 전류 중 하나를 받아 나머지 둘을 환산한다.
///
/// 전류는 4~20mA, 백분율은 0~100% 범위만 허용한다. 공정값은 레인지를
/// 벗어날 수 있으므로(오버레인지 표시) 범위 검사를 하지 않는다.
pub fn scale_signal(range: SignalRange, input: SignalInput) -> Result<SignalReading, SignalError> {
    range.validate()?;
    let span = range.span();
    let percent = match input {
        SignalInput::Value(v) => {
            if !v.is_finite() {
                return Err(SignalError::OutOfRange("공정값"));
            }
            (v - range.lrv) / span * 100.0
        }
        SignalInput::Percent(p) => {
            if !(0.0..=100.0).contains(&p) {
                return Err(SignalError::OutOfRange("백분율"));
            }
            p
        }
        SignalInput::Milliamp(ma) => {
            if !(4.0..=20.0).contains(&ma) {
                return Err(SignalError::OutOfRange("전류"));
            }
            (ma - 4.0) / 16.0 * 100.0
        }
    };
    Ok(SignalReading {
        value: range.lrv + percent / 100.0 * span,
        percent,
        milliamp: 4.0 + percent / 100.0 * 16.0,
    })
}
