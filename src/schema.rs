use crate::quantity::Dimension;

/// 입력 필드 하나의 선언. 이름, 기대 차원, 필수 여부로 구성된다.
///
/// 대상 시뮬레이터가 기대하는 파라미터 집합이 바뀌면 이 테이블만 바꾸면
/// 되고 변환 로직은 손대지 않는다.
#[derive(Debug, Clone, Copy)]
pub struct FieldDeclaration {
    pub name: &'static str,
    pub dimension: Dimension,
    pub required: bool,
}

impl FieldDeclaration {
    pub const fn new(name: &'static str, dimension: Dimension, required: bool) -> Self {
        Self {
            name,
            dimension,
            required,
        }
    }
}

/// 파생 계산의 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivedKind {
    /// 날개 면적이 없으면 스팬×평균 시위로 채운다.
    WingArea,
    /// 모터/프로펠러/배터리 값으로 추력 테이블을 만든다.
    ThrustTable,
    /// 기하 형상과 CLα로 안정 미계수를 채운다.
    StabilityDerivatives,
    /// 비현실적인 조종면 최대 변위를 설정값으로 대체한다.
    ControlFallbacks,
}

/// 파생 계산 선언. 출력 키와 종류만 담고 실제 계산은 매퍼가 수행한다.
#[derive(Debug, Clone, Copy)]
pub struct DerivedSpec {
    pub output_key: &'static str,
    pub kind: DerivedKind,
}

use Dimension::*;

const fn f(name: &'static str, dimension: Dimension, required: bool) -> FieldDeclaration {
    FieldDeclaration::new(name, dimension, required)
}

/// 대상 시뮬레이터 파라미터 집합의 기본 스키마.
///
/// 필드 이름은 원본 입력 템플릿의 property 경로를 그대로 따른다.
static SCHEMA: &[FieldDeclaration] = &[
    // 기체 치수. 날개 면적은 없으면 스팬×평균 시위로 파생되므로 선택이다.
    f("metrics/wing_area", Area, false),
    f("metrics/wing_span", Length, true),
    f("metrics/chord_avg", Length, true),
    f("metrics/h_tail_area", Area, false),
    f("metrics/v_tail_area", Area, false),
    f("metrics/tail_arm", Length, false),
    f("metrics/ref_point/x", Length, false),
    f("metrics/ref_point/y", Length, false),
    f("metrics/ref_point/z", Length, false),
    // 질량/균형
    f("mass/empty_weight", Mass, true),
    f("mass/I/ixx", MomentOfInertia, true),
    f("mass/I/iyy", MomentOfInertia, true),
    f("mass/I/izz", MomentOfInertia, true),
    f("mass/CG/x", Length, false),
    f("mass/CG/y", Length, false),
    f("mass/CG/z", Length, false),
    f("mass/pointmass/mass", Mass, false),
    f("mass/pointmass/x", Length, false),
    f("mass/pointmass/y", Length, false),
    f("mass/pointmass/z", Length, false),
    // 추진계
    f("propulsion/motor_kv", RotationalSpeed, false),
    f("propulsion/motor_resistance", Resistance, false),
    f("propulsion/battery_voltage", Voltage, false),
    f("propulsion/battery_capacity", Capacity, false),
    f("propulsion/prop_diameter", Length, false),
    f("propulsion/prop_pitch", Length, false),
    f("propulsion/max_thrust", Force, false),
    f("propulsion/thruster/x", Length, false),
    f("propulsion/thruster/y", Length, false),
    f("propulsion/thruster/z", Length, false),
    // 조종면 최대 변위
    f("control/aileron_max", Angle, false),
    f("control/elevator_max", Angle, false),
    f("control/rudder_max", Angle, false),
    // 공력 계수 (무차원)
    f("aero/cl0", Dimensionless, false),
    f("aero/cl_alpha", Dimensionless, false),
    f("aero/cl_max", Dimensionless, false),
    f("aero/cd0", Dimensionless, false),
    f("aero/cf", Dimensionless, false),
    f("aero/cdb", Dimensionless, false),
    f("aero/k", Dimensionless, false),
    f("aero/cm0", Dimensionless, false),
    f("aero/cm_alpha", Dimensionless, false),
];

/// 파생 계산 목록. 선언 순서대로 실행되므로 날개 면적 채움이 앞에 온다.
static DERIVED: &[DerivedSpec] = &[
    DerivedSpec {
        output_key: "metrics/wing_area",
        kind: DerivedKind::WingArea,
    },
    DerivedSpec {
        output_key: "propulsion/thrust_table",
        kind: DerivedKind::ThrustTable,
    },
    DerivedSpec {
        output_key: "aero",
        kind: DerivedKind::StabilityDerivatives,
    },
    DerivedSpec {
        output_key: "control",
        kind: DerivedKind::ControlFallbacks,
    },
];

pub fn default_schema() -> &'static [FieldDeclaration] {
    SCHEMA
}

pub fn default_derived() -> &'static [DerivedSpec] {
    DERIVED
}

/// 이름으로 필드 선언을 찾는다.
pub fn find_field(schema: &[FieldDeclaration], name: &str) -> Option<FieldDeclaration> {
    schema.iter().copied().find(|d| d.name == name)
}
