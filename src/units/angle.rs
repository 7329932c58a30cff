/// 각도 단위. 기준은 라디안이다.
///
/// 도→라디안 계수는 π/180을 그대로 쓴다. 자릿수를 줄인 근사 상수를 쓰면
/// 반복 변환에서 ±1e-6 허용 오차를 벗어날 수 있다.
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// 정규화된 철자를 라디안 환산 계수로 대응시킨다.
pub fn factor(spelling: &str) -> Option<f64> {
    match spelling {
        "rad" | "radian" => Some(1.0),
        "deg" | "degree" | "°" => Some(DEG_TO_RAD),
        _ => None,
    }
}
