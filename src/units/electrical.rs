/// 전기 단위. 기준은 전압 V, 저항 Ω, 배터리 용량 Ah이다.
pub const MV_TO_V: f64 = 0.001;
pub const MOHM_TO_OHM: f64 = 0.001;
pub const KOHM_TO_OHM: f64 = 1000.0;
pub const MAH_TO_AH: f64 = 0.001;

/// 정규화된 철자를 V 환산 계수로 대응시킨다.
pub fn voltage_factor(spelling: &str) -> Option<f64> {
    match spelling {
        "v" | "volt" => Some(1.0),
        "mv" => Some(MV_TO_V),
        _ => None,
    }
}

/// 정규화된 철자를 Ω 환산 계수로 대응시킨다.
pub fn resistance_factor(spelling: &str) -> Option<f64> {
    match spelling {
        "ohm" | "ω" => Some(1.0),
        "mohm" | "milliohm" => Some(MOHM_TO_OHM),
        "kohm" | "kiloohm" => Some(KOHM_TO_OHM),
        _ => None,
    }
}

/// 정규화된 철자를 Ah 환산 계수로 대응시킨다.
pub fn capacity_factor(spelling: &str) -> Option<f64> {
    match spelling {
        "ah" => Some(1.0),
        "mah" => Some(MAH_TO_AH),
        _ => None,
    }
}
