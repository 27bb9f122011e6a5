use std::f64::consts::PI;

/// 탱크 레벨 계산에서 발생 가능한 오류.
#[derive(Debug)]
pub enum LevelError {
    /// 0 이하이거나 유한하지 않은 치수/물성
    InvalidInput(&'static str),
}

impl std::fmt::Display for LevelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LevelError::InvalidInput(field) => write!(f, "유효하지 않은 입력: {field}"),
        }
    }
}

impl std::error::Error for LevelError {}

/// 탱크 형상과 치수 [m].
#[derive(Debug, Clone, Copy)]
pub enum TankGeometry {
    /// 수직 원통
    VerticalCylinder { diameter_m: f64, height_m: f64 },
    /// 수평 원통 (부분 충전은 원호 단면으로 계산)
    HorizontalCylinder { diameter_m: f64, length_m: f64 },
    /// 직육면체
    Rectangular {
        width_m: f64,
        depth_m: f64,
        height_m: f64,
    },
    /// 구형 (부분 충전은 구관으로 계산)
    Sphere { diameter_m: f64 },
}

impl TankGeometry {
    /// 액위가 가질 수 있는 최대 높이 [m].
    pub fn full_height_m(&self) -> f64 {
        match *self {
            TankGeometry::VerticalCylinder { height_m, .. } => height_m,
            TankGeometry::HorizontalCylinder { diameter_m, .. } => diameter_m,
            TankGeometry::Rectangular { height_m, .. } => height_m,
            TankGeometry::Sphere { diameter_m } => diameter_m,
        }
    }

    fn validate(&self) -> Result<(), LevelError> {
        let dims = match *self {
            TankGeometry::VerticalCylinder {
                diameter_m,
                height_m,
            } => vec![("직경", diameter_m), ("높이", height_m)],
            TankGeometry::HorizontalCylinder {
                diameter_m,
                length_m,
            } => vec![("직경", diameter_m), ("길이", length_m)],
            TankGeometry::Rectangular {
                width_m,
                depth_m,
                height_m,
            } => vec![("폭", width_m), ("깊이", depth_m), ("높이", height_m)],
            TankGeometry::Sphere { diameter_m } => vec![("직경", diameter_m)],
        };
        for (name, value) in dims {
            if !value.is_finite() || value <= 0.0 {
                return Err(LevelError::InvalidInput(name));
            }
        }
        Ok(())
    }

    /// 액위 h까지 채웠을 때의 체적 [m³]. h는 [0, 최대높이] 범위를 가정한다.
    fn partial_volume_m3(&self, level_m: f64) -> f64 {
        match *self {
            TankGeometry::VerticalCylinder { diameter_m, .. } => {
                let r = diameter_m / 2.0;
                PI * r * r * level_m
            }
            TankGeometry::HorizontalCylinder {
                diameter_m,
                length_m,
            } => {
                // 원호(circular segment) 단면적 × 길이
                let r = diameter_m / 2.0;
                let h = level_m;
                let segment =
                    r * r * ((r - h) / r).acos() - (r - h) * (2.0 * r * h - h * h).sqrt();
                segment * length_m
            }
            TankGeometry::Rectangular {
                width_m, depth_m, ..
            } => width_m * depth_m * level_m,
            TankGeometry::Sphere { diameter_m } => {
                // 구관(spherical cap) 체적
                let r = diameter_m / 2.0;
                let h = level_m;
                PI * h * h * (3.0 * r - h) / 3.0
            }
        }
    }
}

/// 탱크 레벨 계산 입력.
#[derive(Debug, Clone, Copy)]
pub struct LevelInput {
    pub geometry: TankGeometry,
    /// 측정 액위 [m]
    pub level_m: f64,
    /// 유체 밀도 [kg/m³]
    pub density_kg_m3: f64,
}

/// 탱크 레벨 계산 결과.
#[derive(Debug, Clone, Copy)]
pub struct LevelResult {
    /// 유체 체적 [m³]
    pub volume_m3: f64,
    /// 유체 질량 [kg]
    pub mass_kg: f64,
    /// 충전율 [%]
    pub fill_percent: f64,
}

/// 액위로부터 체적과 질량을 계산한다.
///
/// 액위는 [0, 최대높이] 범위로 클램프하며, 치수/밀도가 양의 유한값이
/// 아니면 오류를 반환한다.
pub fn compute_level(input: LevelInput) -> Result<LevelResult, LevelError> {
    input.geometry.validate()?;
    if !input.level_m.is_finite() {
        return Err(LevelError::InvalidInput("액위"));
    }
    if !input.density_kg_m3.is_finite() || input.density_kg_m3 <= 0.0 {
        return Err(LevelError::InvalidInput("밀도"));
    }

    let full = input.geometry.full_height_m();
    let level = input.level_m.clamp(0.0, full);
    let volume = input.geometry.partial_volume_m3(level);
    Ok(LevelResult {
        volume_m3: volume,
        mass_kg: volume * input.density_kg_m3,
        fill_percent: level / full * 100.0,
    })
}
