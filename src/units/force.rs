use super::mass;

/// 힘 단위. 기준은 뉴턴이다.
///
/// RC 기체의 추력은 그램중(gf) 표기가 흔하므로 중력 단위도 받는다.
pub const STANDARD_GRAVITY: f64 = 9.80665;
pub const GF_TO_N: f64 = mass::G_TO_KG * STANDARD_GRAVITY;
pub const KGF_TO_N: f64 = STANDARD_GRAVITY;
pub const LBF_TO_N: f64 = mass::LB_TO_KG * STANDARD_GRAVITY;

/// 정규화된 철자를 뉴턴 환산 계수로 대응시킨다.
pub fn factor(spelling: &str) -> Option<f64> {
    match spelling {
        "n" | "newton" => Some(1.0),
        "gf" => Some(GF_TO_N),
        "kgf" => Some(KGF_TO_N),
        "lbf" => Some(LBF_TO_N),
        _ => None,
    }
}
