/// 질량 단위. 기준은 kg이다.
pub const G_TO_KG: f64 = 0.001;
pub const MG_TO_KG: f64 = 1.0e-6;
pub const LB_TO_KG: f64 = 0.45359237;
pub const SLUG_TO_KG: f64 = 14.59390294;

/// 정규화된 철자를 kg 환산 계수로 대응시킨다.
pub fn factor(spelling: &str) -> Option<f64> {
    match spelling {
        "kg" => Some(1.0),
        "g" | "gram" => Some(G_TO_KG),
        "mg" => Some(MG_TO_KG),
        "lb" | "lbs" | "lbm" => Some(LB_TO_KG),
        "slug" => Some(SLUG_TO_KG),
        _ => None,
    }
}
