use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::aero::{self, StabilityInput};
use crate::config::Config;
use crate::convert::{self, ConvertError};
use crate::propulsion::{self, DerivedTable, ThrustModelInput};
use crate::schema::{DerivedKind, DerivedSpec, FieldDeclaration};

/// 외부 리더(스프레드시트 또는 .par 파서)가 만들어 오는 원시 항목 하나.
#[derive(Debug, Clone, PartialEq)]
pub struct RawValue {
    pub value: f64,
    /// 입력된 단위 문자열. None이면 이미 기준 단위로 본다.
    pub unit: Option<String>,
}

impl RawValue {
    pub fn new(value: f64, unit: &str) -> Self {
        Self {
            value,
            unit: Some(unit.to_string()),
        }
    }

    pub fn bare(value: f64) -> Self {
        Self { value, unit: None }
    }
}

/// 필드 이름 → (값, 단위) 매핑. 한 변환 작업당 한 번 소비된다.
pub type RawInputRecord = BTreeMap<String, RawValue>;

/// 필드 하나에 기록된 오류.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub kind: FieldErrorKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldErrorKind {
    /// 필수 필드가 입력에 없음
    MissingRequiredField,
    /// 단위 변환 실패 (미등록 단위 또는 차원 불일치)
    Convert(ConvertError),
    /// 파생 계산이 물리적으로 무효한 입력을 받음
    InvalidPhysicalInput(String),
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            FieldErrorKind::MissingRequiredField => {
                write!(f, "{}: 필수 항목 누락", self.field)
            }
            FieldErrorKind::Convert(e) => write!(f, "{}: {e}", self.field),
            FieldErrorKind::InvalidPhysicalInput(msg) => write!(f, "{}: {msg}", self.field),
        }
    }
}

/// 매핑 패스 전체의 실패. 필드별 오류 목록을 전부 담는다.
///
/// 사용자에게 문제를 한 번에 모두 보여 주기 위해 개별 오류로 패스를
/// 중단하지 않고 끝까지 모은다.
#[derive(Debug, Clone)]
pub struct AggregateError {
    pub errors: Vec<FieldError>,
}

impl std::fmt::Display for AggregateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}개 필드에서 오류 발생:", self.errors.len())?;
        for e in &self.errors {
            writeln!(f, "  - {e}")?;
        }
        Ok(())
    }
}

impl std::error::Error for AggregateError {}

/// 변환 완료된 파라미터 집합. 모든 값이 기준 단위 하나로 통일되어 있다.
///
/// 문서 조립(외부) 단계가 그대로 소비한다. TOML 직렬화 시 루트 값이
/// 테이블보다 먼저 나오도록 필드 순서를 유지한다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConvertedParameterSet {
    /// 차단하지 않는 타당성 경고
    pub warnings: Vec<String>,
    /// 필드 이름 → 기준 단위 값
    pub values: BTreeMap<String, f64>,
    /// 파생 테이블 (예: 대기속도 → 추력)
    pub tables: BTreeMap<String, DerivedTable>,
}

impl ConvertedParameterSet {
    pub fn value(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    pub fn table(&self, name: &str) -> Option<&DerivedTable> {
        self.tables.get(name)
    }
}

/// 원시 레코드를 스키마에 따라 기준 단위 파라미터 집합으로 변환한다.
///
/// 1단계: 스키마 선언 순서대로 스칼라 변환. 오류는 필드별로 기록만 하고
/// 계속 진행한다. 2단계: 변환이 끝난 값들로만 파생 계산을 수행한다.
/// 파생 계산이 혼합 단위 입력을 보는 일이 없도록 두 단계를 분리한다.
pub fn map(
    raw: &RawInputRecord,
    schema: &[FieldDeclaration],
    derived: &[DerivedSpec],
    cfg: &Config,
) -> Result<ConvertedParameterSet, AggregateError> {
    let mut out = ConvertedParameterSet::default();
    let mut errors: Vec<FieldError> = Vec::new();

    // 1단계: 스칼라 변환
    for decl in schema {
        match raw.get(decl.name) {
            None => {
                if decl.required {
                    errors.push(FieldError {
                        field: decl.name.to_string(),
                        kind: FieldErrorKind::MissingRequiredField,
                    });
                }
            }
            Some(rv) => match &rv.unit {
                // 단위 미기재: 이미 기준 단위로 보고 그대로 통과
                None => {
                    out.values.insert(decl.name.to_string(), rv.value);
                }
                Some(unit) => match convert::convert(rv.value, unit, decl.dimension) {
                    Ok(v) => {
                        out.values.insert(decl.name.to_string(), v);
                    }
                    Err(e) => errors.push(FieldError {
                        field: decl.name.to_string(),
                        kind: FieldErrorKind::Convert(e),
                    }),
                },
            },
        }
    }

    // 2단계: 파생 계산. 선언 순서대로, 입력이 모두 갖춰진 것만 수행한다.
    for spec in derived {
        match spec.kind {
            DerivedKind::WingArea => apply_wing_area(&mut out, spec.output_key),
            DerivedKind::ThrustTable => {
                apply_thrust_table(&mut out, &mut errors, spec.output_key, cfg);
            }
            DerivedKind::StabilityDerivatives => {
                apply_stability(&mut out, &mut errors, cfg);
            }
            DerivedKind::ControlFallbacks => apply_control_fallbacks(&mut out, cfg),
        }
    }

    if let Some(cd0) = out.value("aero/cd0") {
        if let Some(w) = aero::cd0_warning(cd0) {
            out.warnings.push(w);
        }
    }

    if errors.is_empty() {
        Ok(out)
    } else {
        Err(AggregateError { errors })
    }
}

/// 날개 면적이 없으면 스팬 × 평균 시위(직사각형 근사)로 채운다.
fn apply_wing_area(out: &mut ConvertedParameterSet, key: &str) {
    if out.values.contains_key(key) {
        return;
    }
    let span = out.value("metrics/wing_span");
    let chord = out.value("metrics/chord_avg");
    if let (Some(b), Some(c)) = (span, chord) {
        out.values.insert(key.to_string(), b * c);
    }
}

fn apply_thrust_table(
    out: &mut ConvertedParameterSet,
    errors: &mut Vec<FieldError>,
    key: &str,
    cfg: &Config,
) {
    let kv = out.value("propulsion/motor_kv");
    let resistance = out.value("propulsion/motor_resistance");
    let voltage = out.value("propulsion/battery_voltage");
    let diameter = out.value("propulsion/prop_diameter");
    let pitch = out.value("propulsion/prop_pitch");
    let (Some(kv), Some(resistance), Some(voltage), Some(diameter), Some(pitch)) =
        (kv, resistance, voltage, diameter, pitch)
    else {
        // 모터/프로펠러 항목이 갖춰지지 않은 입력은 추력 테이블 없이 통과
        return;
    };
    let input = ThrustModelInput {
        motor_kv_rpm_per_v: kv,
        internal_resistance_ohm: resistance,
        battery_voltage_v: voltage,
        prop_diameter_m: diameter,
        prop_pitch_m: pitch,
    };
    match propulsion::compute_thrust_table(&input, &cfg.airspeed_samples_mps, cfg.air_density_kg_m3)
    {
        Ok(table) => {
            out.tables.insert(key.to_string(), table);
        }
        Err(e) => errors.push(FieldError {
            field: key.to_string(),
            kind: FieldErrorKind::InvalidPhysicalInput(e.to_string()),
        }),
    }
}

/// 안정 미계수 출력 키. 사용자가 직접 입력한 값이 있으면 덮어쓰지 않는다.
fn insert_default(out: &mut ConvertedParameterSet, key: &str, value: f64) {
    out.values.entry(key.to_string()).or_insert(value);
}

fn apply_stability(out: &mut ConvertedParameterSet, errors: &mut Vec<FieldError>, cfg: &Config) {
    let span = out.value("metrics/wing_span");
    let chord = out.value("metrics/chord_avg");
    let area = out.value("metrics/wing_area");
    let h_tail = out.value("metrics/h_tail_area");
    let v_tail = out.value("metrics/v_tail_area");
    let arm = out.value("metrics/tail_arm");
    let cl_alpha = out.value("aero/cl_alpha");
    let (Some(span), Some(chord), Some(area), Some(h_tail), Some(v_tail), Some(arm), Some(cl_alpha)) =
        (span, chord, area, h_tail, v_tail, arm, cl_alpha)
    else {
        return;
    };
    let input = StabilityInput {
        wing_span_m: span,
        chord_avg_m: chord,
        wing_area_m2: area,
        h_tail_area_m2: h_tail,
        v_tail_area_m2: v_tail,
        tail_arm_m: arm,
        cl_alpha_per_rad: cl_alpha,
    };
    match aero::compute_stability_derivatives(&input, &cfg.assumptions) {
        Ok((d, warnings)) => {
            out.warnings.extend(warnings);
            insert_default(out, "aero/aspect_ratio", d.aspect_ratio);
            insert_default(out, "aero/tail_volume_h", d.tail_volume_h);
            insert_default(out, "aero/tail_volume_v", d.tail_volume_v);
            insert_default(out, "aero/cm_alpha", d.cm_alpha);
            insert_default(out, "aero/cm_q", d.cm_q);
            insert_default(out, "aero/cm_de", d.cm_de);
            insert_default(out, "aero/cy_beta", d.cy_beta);
            insert_default(out, "aero/cn_beta", d.cn_beta);
            insert_default(out, "aero/cl_beta", d.cl_beta);
            insert_default(out, "aero/cl_p", d.cl_p);
            insert_default(out, "aero/cn_r", d.cn_r);
            insert_default(out, "aero/k", d.induced_drag_k);
        }
        Err(e) => errors.push(FieldError {
            field: "aero".to_string(),
            kind: FieldErrorKind::InvalidPhysicalInput(e.to_string()),
        }),
    }
}

/// 비현실적인 조종면 변위의 대체.
///
/// 에일러론 5° 미만, 러더/엘리베이터 0은 원본 데이터 결함으로 보고
/// 설정의 통상값으로 바꾸되 경고를 남긴다.
fn apply_control_fallbacks(out: &mut ConvertedParameterSet, cfg: &Config) {
    const MIN_AILERON_RAD: f64 = 0.087; // 약 5°

    if let Some(v) = out.value("control/aileron_max") {
        if v < MIN_AILERON_RAD {
            out.warnings.push(format!(
                "control/aileron_max={v:.4} rad은 비현실적이어서 통상값 {:.4} rad로 대체함",
                cfg.control_estimates.aileron_max_rad
            ));
            out.values.insert(
                "control/aileron_max".to_string(),
                cfg.control_estimates.aileron_max_rad,
            );
        }
    }
    if let Some(v) = out.value("control/rudder_max") {
        if v == 0.0 {
            out.warnings.push(format!(
                "control/rudder_max가 0이어서 통상값 {:.4} rad로 대체함",
                cfg.control_estimates.rudder_max_rad
            ));
            out.values.insert(
                "control/rudder_max".to_string(),
                cfg.control_estimates.rudder_max_rad,
            );
        }
    }
    if let Some(v) = out.value("control/elevator_max") {
        if v == 0.0 {
            out.warnings.push(format!(
                "control/elevator_max가 0이어서 통상값 {:.4} rad로 대체함",
                cfg.control_estimates.elevator_max_rad
            ));
            out.values.insert(
                "control/elevator_max".to_string(),
                cfg.control_estimates.elevator_max_rad,
            );
        }
    }
}
