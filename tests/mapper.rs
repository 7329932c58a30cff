//! 파라미터 매퍼의 오류 누적과 파생 계산 통합 테스트.
use rc_fdm_converter::config::Config;
use rc_fdm_converter::convert::{self, ConvertError};
use rc_fdm_converter::mapper::{map, FieldErrorKind, RawInputRecord, RawValue};
use rc_fdm_converter::quantity::Dimension;
use rc_fdm_converter::schema::{self, FieldDeclaration};

use Dimension::*;

fn decl(name: &'static str, dim: Dimension, required: bool) -> FieldDeclaration {
    FieldDeclaration::new(name, dim, required)
}

#[test]
fn end_to_end_basic_conversion() {
    let schema = [
        decl("mass", Mass, true),
        decl("wingspan", Length, true),
        decl("wing_area", Area, true),
    ];
    let mut raw = RawInputRecord::new();
    raw.insert("mass".into(), RawValue::new(200.0, "g"));
    raw.insert("wingspan".into(), RawValue::new(905.0, "mm"));
    raw.insert("wing_area".into(), RawValue::new(103_000.0, "mm2"));

    let set = map(&raw, &schema, &[], &Config::default()).unwrap();
    assert!((set.value("mass").unwrap() - 0.2).abs() < 1e-6);
    assert!((set.value("wingspan").unwrap() - 0.905).abs() < 1e-6);
    assert!((set.value("wing_area").unwrap() - 0.103).abs() < 1e-6);
}

#[test]
fn accumulates_all_field_errors_in_one_pass() {
    // 10개 필드 중 정확히 3개가 불량: 누락 1, 미등록 단위 1, 차원 불일치 1
    let schema = [
        decl("mass", Mass, true),
        decl("wingspan", Length, true),
        decl("wing_area", Area, true),
        decl("chord", Length, true),
        decl("ixx", MomentOfInertia, true),
        decl("iyy", MomentOfInertia, true),
        decl("izz", MomentOfInertia, true),
        decl("cg_x", Length, true),
        decl("aileron_max", Angle, true),
        decl("battery_voltage", Voltage, true),
    ];
    let mut raw = RawInputRecord::new();
    raw.insert("mass".into(), RawValue::new(200.0, "g"));
    raw.insert("wingspan".into(), RawValue::new(905.0, "kg")); // 차원 불일치
    raw.insert("wing_area".into(), RawValue::new(103_000.0, "mm2"));
    raw.insert("chord".into(), RawValue::new(114.0, "mm"));
    raw.insert("ixx".into(), RawValue::new(9_410_000.0, "furlong")); // 미등록 단위
    raw.insert("iyy".into(), RawValue::new(7_480_000.0, "g*mm2"));
    raw.insert("izz".into(), RawValue::new(9_220_000.0, "g*mm2"));
    // cg_x 누락
    raw.insert("aileron_max".into(), RawValue::new(20.0, "deg"));
    raw.insert("battery_voltage".into(), RawValue::new(7.4, "v"));

    let err = map(&raw, &schema, &[], &Config::default()).unwrap_err();
    assert_eq!(err.errors.len(), 3, "{err}");

    let kind_of = |field: &str| {
        err.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.kind.clone())
            .expect(field)
    };
    assert!(matches!(kind_of("cg_x"), FieldErrorKind::MissingRequiredField));
    assert!(matches!(
        kind_of("ixx"),
        FieldErrorKind::Convert(ConvertError::UnrecognizedUnit(_))
    ));
    assert!(matches!(
        kind_of("wingspan"),
        FieldErrorKind::Convert(ConvertError::DimensionMismatch { .. })
    ));

    // 나머지 7개 필드는 개별 변환으로 여전히 계산 가능하다
    assert!((convert::convert(200.0, "g", Mass).unwrap() - 0.2).abs() < 1e-9);
    assert!((convert::convert(103_000.0, "mm2", Area).unwrap() - 0.103).abs() < 1e-9);
    assert!((convert::convert(114.0, "mm", Length).unwrap() - 0.114).abs() < 1e-9);
    assert!(
        (convert::convert(7_480_000.0, "g*mm2", MomentOfInertia).unwrap() - 0.00748).abs() < 1e-9
    );
    assert!(
        (convert::convert(9_220_000.0, "g*mm2", MomentOfInertia).unwrap() - 0.00922).abs() < 1e-9
    );
    assert!(
        (convert::convert(20.0, "deg", Angle).unwrap() - 20.0_f64.to_radians()).abs() < 1e-12
    );
    assert!((convert::convert(7.4, "v", Voltage).unwrap() - 7.4).abs() < 1e-12);
}

/// 기본 스키마용 원시 레코드. 필수 필드와 파생 입력을 모두 채운다.
fn full_raw_record() -> RawInputRecord {
    let mut raw = RawInputRecord::new();
    raw.insert("metrics/wing_span".into(), RawValue::new(905.0, "mm"));
    raw.insert("metrics/chord_avg".into(), RawValue::new(114.0, "mm"));
    raw.insert("metrics/h_tail_area".into(), RawValue::new(6600.0, "mm2"));
    raw.insert("metrics/v_tail_area".into(), RawValue::new(3300.0, "mm2"));
    raw.insert("metrics/tail_arm".into(), RawValue::new(400.0, "mm"));
    raw.insert("mass/empty_weight".into(), RawValue::new(200.0, "g"));
    raw.insert("mass/I/ixx".into(), RawValue::new(9_410_000.0, "g*mm2"));
    raw.insert("mass/I/iyy".into(), RawValue::new(7_480_000.0, "g*mm2"));
    raw.insert("mass/I/izz".into(), RawValue::new(9_220_000.0, "g*mm2"));
    raw.insert("propulsion/motor_kv".into(), RawValue::new(2300.0, "rpm/v"));
    raw.insert(
        "propulsion/motor_resistance".into(),
        RawValue::new(0.5, "ohm"),
    );
    raw.insert("propulsion/battery_voltage".into(), RawValue::new(7.4, "v"));
    raw.insert(
        "propulsion/battery_capacity".into(),
        RawValue::new(250.0, "mah"),
    );
    raw.insert("propulsion/prop_diameter".into(), RawValue::new(127.0, "mm"));
    raw.insert("propulsion/prop_pitch".into(), RawValue::new(3.0, "in"));
    // 단위 미기재 필드는 이미 기준 단위로 취급된다
    raw.insert("aero/cl_alpha".into(), RawValue::bare(5.2));
    raw.insert("aero/cd0".into(), RawValue::bare(0.028));
    raw
}

#[test]
fn derived_stage_fills_wing_area_thrust_table_and_derivatives() {
    let cfg = Config::default();
    let set = map(
        &full_raw_record(),
        schema::default_schema(),
        schema::default_derived(),
        &cfg,
    )
    .unwrap();

    // 날개 면적은 스팬 × 평균 시위로 파생
    let area = set.value("metrics/wing_area").unwrap();
    assert!((area - 0.905 * 0.114).abs() < 1e-9);

    // 추력 테이블은 설정의 표본 격자만큼 생성되고 엄격히 증가
    let table = set.table("propulsion/thrust_table").unwrap();
    assert_eq!(table.len(), cfg.airspeed_samples_mps.len());
    for pair in table.points().windows(2) {
        assert!(pair[0].0 < pair[1].0);
    }
    assert!(table.points()[0].1 > 0.0);

    // 안정 미계수가 기본값으로 채워진다
    assert!(set.value("aero/cm_alpha").unwrap() < 0.0);
    assert!(set.value("aero/cm_q").unwrap() < 0.0);
    assert!(set.value("aero/k").unwrap() > 0.0);

    // 기준 단위로 이미 들어온 값은 그대로 유지
    assert!((set.value("aero/cl_alpha").unwrap() - 5.2).abs() < 1e-12);
    assert!((set.value("propulsion/battery_capacity").unwrap() - 0.25).abs() < 1e-9);
    assert!(set.warnings.is_empty(), "{:?}", set.warnings);
}

#[test]
fn user_supplied_coefficient_not_overwritten_by_derived_default() {
    let mut raw = full_raw_record();
    raw.insert("aero/cm_alpha".into(), RawValue::bare(-0.5));
    let set = map(
        &raw,
        schema::default_schema(),
        schema::default_derived(),
        &Config::default(),
    )
    .unwrap();
    assert_eq!(set.value("aero/cm_alpha").unwrap(), -0.5);
}

#[test]
fn invalid_derived_input_reported_against_output_key() {
    let mut raw = full_raw_record();
    raw.insert("propulsion/motor_kv".into(), RawValue::new(-2300.0, "rpm/v"));
    let err = map(
        &raw,
        schema::default_schema(),
        schema::default_derived(),
        &Config::default(),
    )
    .unwrap_err();
    assert_eq!(err.errors.len(), 1);
    assert_eq!(err.errors[0].field, "propulsion/thrust_table");
    assert!(matches!(
        err.errors[0].kind,
        FieldErrorKind::InvalidPhysicalInput(_)
    ));
}

#[test]
fn unrealistic_control_throw_replaced_with_estimate() {
    let cfg = Config::default();
    let mut raw = full_raw_record();
    raw.insert("control/aileron_max".into(), RawValue::new(0.5, "deg")); // 5° 미만
    raw.insert("control/rudder_max".into(), RawValue::new(0.0, "rad"));
    let set = map(
        &raw,
        schema::default_schema(),
        schema::default_derived(),
        &cfg,
    )
    .unwrap();
    assert_eq!(
        set.value("control/aileron_max").unwrap(),
        cfg.control_estimates.aileron_max_rad
    );
    assert_eq!(
        set.value("control/rudder_max").unwrap(),
        cfg.control_estimates.rudder_max_rad
    );
    assert_eq!(set.warnings.len(), 2);
}

#[test]
fn converted_set_serializes_to_toml_ir() {
    let set = map(
        &full_raw_record(),
        schema::default_schema(),
        schema::default_derived(),
        &Config::default(),
    )
    .unwrap();
    let ir = toml::to_string_pretty(&set).unwrap();
    assert!(ir.contains("\"metrics/wing_span\""));
    assert!(ir.contains("\"propulsion/thrust_table\""));
}
