use serde::{Deserialize, Serialize};

/// 튜닝 룰 선택 시 발생 가능한 오류.
#[derive(Debug)]
pub enum TuningError {
    /// 알 수 없는 튜닝 룰 라벨
    UnknownRule(String),
}

impl std::fmt::Display for TuningError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TuningError::UnknownRule(r) => write!(f, "알 수 없는 튜닝 룰: {r}"),
        }
    }
}

impl std::error::Error for TuningError {}

/// Ziegler-Nichols 폐루프 튜닝 룰 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuningRule {
    /// 비례 제어만
    P,
    /// 비례 + 적분
    Pi,
    /// 비례 + 적분 + 미분
    Pid,
}

impl TuningRule {
    /// 선택지 라벨("Z-N P" 등)을 파싱한다. 알 수 없는 라벨은 기본값으로
    /// 대체하지 않고 오류로 처리한다.
    pub fn parse(label: &str) -> Result<Self, TuningError> {
        match label.trim() {
            "Z-N P" | "P" => Ok(TuningRule::P),
            "Z-N PI" | "PI" => Ok(TuningRule::Pi),
            "Z-N PID" | "PID" => Ok(TuningRule::Pid),
            other => Err(TuningError::UnknownRule(other.to_string())),
        }
    }

    /// 화면 표시용 라벨.
    pub fn label(&self) -> &'static str {
        match self {
            TuningRule::P => "Z-N P",
            TuningRule::Pi => "Z-N PI",
            TuningRule::Pid => "Z-N PID",
        }
    }
}

/// 한계 감도 실험으로 얻은 튜닝 입력값.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TuningInputs {
    /// 한계 게인 Ku
    pub ku: f64,
    /// 한계 주기 Tu
    pub tu: f64,
    /// 적용할 튜닝 룰
    pub rule: TuningRule,
}

impl TuningInputs {
    /// 운전원이 입력한 문자열로부터 생성한다. 숫자가 아니면 None(미정의 상태)을
    /// 반환하며, 오류로 전파하지 않는다.
    pub fn from_strings(ku: &str, tu: &str, rule: TuningRule) -> Option<Self> {
        let ku = ku.trim().parse::<f64>().ok()?;
        let tu = tu.trim().parse::<f64>().ok()?;
        Some(Self { ku, tu, rule })
    }
}

/// 룰 표로부터 도출된 제어기 게인. 입력에 의해 완전히 결정되는 불변값이다.
///
/// `ti = +∞`는 적분 동작 없음을 뜻한다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerGains {
    /// 비례 게인
    pub kp: f64,
    /// 적분 시간
    pub ti: f64,
    /// 미분 시간
    pub td: f64,
}

/// Ziegler-Nichols 폐루프 룰 표에 따라 제어기 게인을 계산한다.
///
/// Ku/Tu가 양의 유한값이 아니면 None(미정의)을 반환한다.
///
/// | 룰  | Kp      | Ti     | Td   |
/// |-----|---------|--------|------|
/// | P   | 0.5·Ku  | +∞     | 0    |
/// | PI  | 0.45·Ku | Tu/1.2 | 0    |
/// | PID | 0.6·Ku  | Tu/2   | Tu/8 |
pub fn compute_gains(inputs: &TuningInputs) -> Option<ControllerGains> {
    if !inputs.ku.is_finite() || !inputs.tu.is_finite() || inputs.ku <= 0.0 || inputs.tu <= 0.0 {
        return None;
    }
    let gains = match inputs.rule {
        TuningRule::P => ControllerGains {
            kp: 0.5 * inputs.ku,
            ti: f64::INFINITY,
            td: 0.0,
        },
        TuningRule::Pi => ControllerGains {
            kp: 0.45 * inputs.ku,
            ti: inputs.tu / 1.2,
            td: 0.0,
        },
        TuningRule::Pid => ControllerGains {
            kp: 0.6 * inputs.ku,
            ti: inputs.tu / 2.0,
            td: inputs.tu / 8.0,
        },
    };
    Some(gains)
}
