use serde::{Deserialize, Serialize};

/// 다루는 물리량 차원을 나타낸다.
///
/// 단위 철자와 무관하게 "이 값이 어떤 종류의 양인가"를 구분하는 용도이며,
/// 스키마의 각 필드는 차원 하나를 선언한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dimension {
    Length,
    Area,
    Mass,
    MomentOfInertia,
    Angle,
    Voltage,
    Resistance,
    Capacity,
    RotationalSpeed,
    Force,
    Dimensionless,
}

impl Dimension {
    /// 기준 단위의 표기. 오류 메시지와 리포트 출력에 사용한다.
    pub fn base_unit(self) -> &'static str {
        match self {
            Dimension::Length => "m",
            Dimension::Area => "m2",
            Dimension::Mass => "kg",
            Dimension::MomentOfInertia => "kg*m2",
            Dimension::Angle => "rad",
            Dimension::Voltage => "V",
            Dimension::Resistance => "ohm",
            Dimension::Capacity => "Ah",
            Dimension::RotationalSpeed => "rpm",
            Dimension::Force => "N",
            Dimension::Dimensionless => "-",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Dimension::Length => "길이",
            Dimension::Area => "면적",
            Dimension::Mass => "질량",
            Dimension::MomentOfInertia => "관성모멘트",
            Dimension::Angle => "각도",
            Dimension::Voltage => "전압",
            Dimension::Resistance => "저항",
            Dimension::Capacity => "배터리 용량",
            Dimension::RotationalSpeed => "회전수",
            Dimension::Force => "힘",
            Dimension::Dimensionless => "무차원",
        };
        write!(f, "{name}({})", self.base_unit())
    }
}

/// 등록된 단위 철자 하나가 갖는 정보.
///
/// `factor_to_base`는 해당 단위의 값 1이 기준 단위로 몇이 되는지를 뜻한다.
/// 레지스트리는 프로세스 시작 시 고정되며 이후 변하지 않는다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitSpec {
    pub dimension: Dimension,
    pub factor_to_base: f64,
}

impl UnitSpec {
    pub const fn new(dimension: Dimension, factor_to_base: f64) -> Self {
        Self {
            dimension,
            factor_to_base,
        }
    }
}
