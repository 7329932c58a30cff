use serde::{Deserialize, Serialize};

/// 파생 계산 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThrustError {
    /// 양수가 필요한 입력이 0 이하이거나 표본이 유효하지 않음
    InvalidPhysicalInput(&'static str),
}

impl std::fmt::Display for ThrustError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThrustError::InvalidPhysicalInput(msg) => {
                write!(f, "물리적으로 유효하지 않은 입력: {msg}")
            }
        }
    }
}

impl std::error::Error for ThrustError {}

/// (독립변수, 종속값) 쌍의 순서 테이블. 독립변수는 엄격히 증가한다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DerivedTable {
    pub points: Vec<(f64, f64)>,
}

impl DerivedTable {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }
}

/// 추력 테이블 계산 입력. 모든 값은 기준 단위로 이미 변환되어 있어야 한다.
///
/// 변환은 스칼라 변환기의 몫이며 여기서는 단위 계산을 하지 않는다.
/// 공식이 단일 단위계에서만 돌게 하여 단위 혼동 버그를 차단한다.
#[derive(Debug, Clone, Copy)]
pub struct ThrustModelInput {
    /// 모터 Kv [rpm/V]
    pub motor_kv_rpm_per_v: f64,
    /// 모터 내부 저항 [Ω]
    pub internal_resistance_ohm: f64,
    /// 배터리 전압 [V]
    pub battery_voltage_v: f64,
    /// 프로펠러 직경 [m]
    pub prop_diameter_m: f64,
    /// 프로펠러 피치 [m]
    pub prop_pitch_m: f64,
}

/// 프로펠러 디스크 하중 모델로 대기속도별 추력 테이블을 만든다.
///
/// 무부하 피치 속도 `v_p = Kv·V·pitch/60`, 전달 가능 출력 상한
/// `P = V²/(4R)`, 정지 추력 `T0 = (2ρAP²)^(1/3)` (A = πd²/4)로 잡고
/// 추력은 피치 속도까지 선형으로 감소한다고 근사한다.
///
/// 표본은 오름차순 정렬 후 중복을 제거하며(첫 값 유지) 결과의
/// 독립변수는 엄격히 증가한다. 부수 효과는 없다.
pub fn compute_thrust_table(
    input: &ThrustModelInput,
    airspeeds_mps: &[f64],
    air_density_kg_m3: f64,
) -> Result<DerivedTable, ThrustError> {
    if input.motor_kv_rpm_per_v <= 0.0 {
        return Err(ThrustError::InvalidPhysicalInput("모터 Kv는 양수여야 함"));
    }
    if input.internal_resistance_ohm <= 0.0 {
        return Err(ThrustError::InvalidPhysicalInput(
            "모터 내부 저항은 양수여야 함",
        ));
    }
    if input.battery_voltage_v <= 0.0 {
        return Err(ThrustError::InvalidPhysicalInput("배터리 전압은 양수여야 함"));
    }
    if input.prop_diameter_m <= 0.0 {
        return Err(ThrustError::InvalidPhysicalInput(
            "프로펠러 직경은 양수여야 함",
        ));
    }
    if input.prop_pitch_m <= 0.0 {
        return Err(ThrustError::InvalidPhysicalInput(
            "프로펠러 피치는 양수여야 함",
        ));
    }
    if air_density_kg_m3 <= 0.0 {
        return Err(ThrustError::InvalidPhysicalInput("공기 밀도는 양수여야 함"));
    }
    for &v in airspeeds_mps {
        if !v.is_finite() || v < 0.0 {
            return Err(ThrustError::InvalidPhysicalInput(
                "대기속도 표본은 0 이상의 유한값이어야 함",
            ));
        }
    }

    // 무부하 회전수 기준 피치 속도 [m/s]
    let pitch_speed =
        input.motor_kv_rpm_per_v * input.battery_voltage_v * input.prop_pitch_m / 60.0;
    // 최대 전력 전달 조건에서의 출력 상한 [W]
    let power_limit =
        input.battery_voltage_v * input.battery_voltage_v / (4.0 * input.internal_resistance_ohm);
    // 디스크 면적 [m²]과 운동량 이론 정지 추력 [N]
    let disk_area = std::f64::consts::PI * input.prop_diameter_m * input.prop_diameter_m / 4.0;
    let static_thrust =
        (2.0 * air_density_kg_m3 * disk_area * power_limit * power_limit).powf(1.0 / 3.0);

    let mut samples = airspeeds_mps.to_vec();
    samples.sort_by(f64::total_cmp);
    samples.dedup();

    let points = samples
        .into_iter()
        .map(|v| {
            let thrust = static_thrust * (1.0 - v / pitch_speed).max(0.0);
            (v, thrust)
        })
        .collect();

    Ok(DerivedTable { points })
}
