use super::length;

/// 면적 단위. 기준은 제곱미터이다. 계수는 길이 계수의 제곱으로만 구성한다.
pub const MM2_TO_M2: f64 = length::MM_TO_M * length::MM_TO_M;
pub const CM2_TO_M2: f64 = length::CM_TO_M * length::CM_TO_M;
pub const IN2_TO_M2: f64 = length::IN_TO_M * length::IN_TO_M;
pub const FT2_TO_M2: f64 = length::FT_TO_M * length::FT_TO_M;

/// 정규화된 철자를 제곱미터 환산 계수로 대응시킨다.
///
/// `mm2`/`mm^2`/`mm²`는 정규화 단계에서 모두 `mm2`로 합쳐진다.
pub fn factor(spelling: &str) -> Option<f64> {
    match spelling {
        "m2" | "sqm" => Some(1.0),
        "mm2" => Some(MM2_TO_M2),
        "cm2" => Some(CM2_TO_M2),
        "in2" | "sqin" => Some(IN2_TO_M2),
        "ft2" | "sqft" => Some(FT2_TO_M2),
        _ => None,
    }
}
