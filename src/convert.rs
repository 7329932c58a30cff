use crate::quantity::{Dimension, UnitSpec};
use crate::units;

/// 스칼라 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// 레지스트리에 등록되지 않은 단위 문자열
    UnrecognizedUnit(String),
    /// 단위 자체는 유효하나 필드가 요구하는 차원과 다름
    DimensionMismatch {
        unit: String,
        expected: Dimension,
        actual: Dimension,
    },
}

impl std::fmt::Display for ConvertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConvertError::UnrecognizedUnit(u) => write!(f, "알 수 없는 단위: {u}"),
            ConvertError::DimensionMismatch {
                unit,
                expected,
                actual,
            } => write!(
                f,
                "단위 차원 불일치: '{unit}'은(는) {actual}이며 {expected}이(가) 필요함"
            ),
        }
    }
}

impl std::error::Error for ConvertError {}

/// 단위 문자열을 레지스트리에서 찾는다. 실패는 `UnrecognizedUnit`.
pub fn resolve(unit: &str) -> Result<UnitSpec, ConvertError> {
    units::resolve(unit).ok_or_else(|| ConvertError::UnrecognizedUnit(unit.trim().to_string()))
}

/// 값을 기대 차원의 기준 단위로 변환한다.
///
/// 변환은 `value * factor_to_base` 곱 한 번이며 반올림하지 않는다.
/// 출력 자리수 조정은 문서 조립 단계의 몫이다.
pub fn convert(value: f64, unit: &str, expected: Dimension) -> Result<f64, ConvertError> {
    let spec = resolve(unit)?;
    if spec.dimension != expected {
        return Err(ConvertError::DimensionMismatch {
            unit: unit.trim().to_string(),
            expected,
            actual: spec.dimension,
        });
    }
    Ok(value * spec.factor_to_base)
}
