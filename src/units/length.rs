/// 길이 단위. 기준은 미터이다.
pub const MM_TO_M: f64 = 0.001;
pub const CM_TO_M: f64 = 0.01;
pub const KM_TO_M: f64 = 1000.0;
pub const IN_TO_M: f64 = 0.0254;
pub const FT_TO_M: f64 = 0.3048;

/// 정규화된 철자를 미터 환산 계수로 대응시킨다.
pub fn factor(spelling: &str) -> Option<f64> {
    match spelling {
        "m" | "meter" | "metre" => Some(1.0),
        "mm" => Some(MM_TO_M),
        "cm" => Some(CM_TO_M),
        "km" => Some(KM_TO_M),
        "in" | "inch" => Some(IN_TO_M),
        "ft" | "foot" => Some(FT_TO_M),
        _ => None,
    }
}
