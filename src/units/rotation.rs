/// 회전수 단위. 기준은 rpm이다.
///
/// 모터 Kv(rpm/V)는 회전수 차원으로 취급한다. 입력 시트의 Kv 열은
/// `rpm/v` 단위로 표기되며 기준 단위 그 자체이므로 계수는 1이다.
pub const RPS_TO_RPM: f64 = 60.0;
pub const RADPS_TO_RPM: f64 = 60.0 / (2.0 * std::f64::consts::PI);

/// 정규화된 철자를 rpm 환산 계수로 대응시킨다.
pub fn factor(spelling: &str) -> Option<f64> {
    match spelling {
        "rpm" | "rpm/v" => Some(1.0),
        "rps" => Some(RPS_TO_RPM),
        "rad/s" | "rad/sec" => Some(RADPS_TO_RPM),
        _ => None,
    }
}
