//! 레거시 .par 파서와 매퍼의 연동 테스트.
use std::path::Path;

use rc_fdm_converter::config::Config;
use rc_fdm_converter::mapper::map;
use rc_fdm_converter::par_file::{parse_file, parse_str, ParError};
use rc_fdm_converter::schema;

/// 원본 포맷 `값  줄번호:이름(단위)  설명`을 따르는 샘플 본문.
const SAMPLE_PAR: &str = "\
7.0      2:THRUST(N)       maximum thrust
0.35     3:RUDDER(rad)     rudder max deflection
0.35     4:ELEVATOR(rad)   elevator max deflection
0.005    5:AILERON(rad)    aileron max deflection
5.2      8:CLALPHA(1/rad)  lift curve slope
1.2      12:CLMAX(-)       max lift coefficient
-0.05    14:CM(-)          pitching moment
0.905    16:WSPAN(m)       wing span
0.114    17:CHORD(m)       mean chord
0.2      19:MASS(kg)       empty mass
0.00941  20:IXX(kg*m2)     roll inertia
0.00748  21:IYY(kg*m2)     pitch inertia
0.00922  22:IZZ(kg*m2)     yaw inertia
0.0066   23:HTAIL(m2)      horizontal tail area
0.0033   24:VTAIL(m2)      vertical tail area
0.4      25:TARM(m)        tail moment arm

SampleAircraft   1:NAME(-)  model name
this line does not match the format
";

#[test]
fn parses_numeric_lines_and_skips_junk() {
    let raw = parse_str(SAMPLE_PAR);
    assert_eq!(raw.len(), 16);
    assert_eq!(raw["metrics/wing_span"].value, 0.905);
    assert_eq!(raw["metrics/wing_span"].unit.as_deref(), Some("m"));
    assert_eq!(raw["mass/I/iyy"].value, 0.00748);
    assert_eq!(raw["propulsion/max_thrust"].unit.as_deref(), Some("N"));
    // 줄 1(기체 이름)은 수치가 아니므로 건너뛴다
    assert!(!raw.contains_key("fileheader/name"));
}

#[test]
fn par_record_maps_with_default_schema() {
    let raw = parse_str(SAMPLE_PAR);
    let set = map(
        &raw,
        schema::default_schema(),
        schema::default_derived(),
        &Config::default(),
    )
    .unwrap();

    // 기준 단위 값이 그대로 들어오고 날개 면적이 파생된다
    assert!((set.value("mass/empty_weight").unwrap() - 0.2).abs() < 1e-12);
    assert!((set.value("metrics/wing_area").unwrap() - 0.905 * 0.114).abs() < 1e-9);

    // 안정 미계수는 .par의 기하 형상과 CLα로 계산된다
    assert!(set.value("aero/cm_alpha").unwrap() < 0.0);
    assert!(set.value("aero/cn_beta").unwrap() > 0.0);

    // 모터 항목이 없으므로 추력 테이블은 생성되지 않는다
    assert!(set.table("propulsion/thrust_table").is_none());

    // 0.005 rad 에일러론은 비현실적이라 통상값으로 대체되고 경고가 남는다
    let est = Config::default().control_estimates.aileron_max_rad;
    assert_eq!(set.value("control/aileron_max").unwrap(), est);
    assert!(set.warnings.iter().any(|w| w.contains("aileron")));
}

#[test]
fn rejects_non_par_extension() {
    let err = parse_file(Path::new("aircraft.txt")).unwrap_err();
    assert!(matches!(err, ParError::InvalidExtension(_)));
}
