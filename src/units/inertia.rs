use super::{length, mass};

/// 관성모멘트 단위. 기준은 kg·m²이다.
///
/// 복합 단위 계수는 항상 질량 계수 × 길이 계수²의 곱으로 만든다.
/// 길이/질량 계수가 바뀌어도 여기가 어긋나지 않게 하기 위한 제약이다.
pub const GMM2_TO_KGM2: f64 = mass::G_TO_KG * length::MM_TO_M * length::MM_TO_M;
pub const GCM2_TO_KGM2: f64 = mass::G_TO_KG * length::CM_TO_M * length::CM_TO_M;
pub const KGCM2_TO_KGM2: f64 = length::CM_TO_M * length::CM_TO_M;
pub const SLUGFT2_TO_KGM2: f64 = mass::SLUG_TO_KG * length::FT_TO_M * length::FT_TO_M;

/// 정규화된 철자를 kg·m² 환산 계수로 대응시킨다.
///
/// `g·mm²`, `g*mm^2`, `gmm2` 등은 정규화 후 `g*mm2` 또는 `gmm2`가 된다.
pub fn factor(spelling: &str) -> Option<f64> {
    match spelling {
        "kg*m2" | "kgm2" => Some(1.0),
        "g*mm2" | "gmm2" => Some(GMM2_TO_KGM2),
        "g*cm2" | "gcm2" => Some(GCM2_TO_KGM2),
        "kg*cm2" | "kgcm2" => Some(KGCM2_TO_KGM2),
        "slug*ft2" | "slugft2" => Some(SLUGFT2_TO_KGM2),
        _ => None,
    }
}
