use crate::config::AeroAssumptions;

/// 안정 미계수 계산 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AeroError {
    /// 양수가 필요한 기하/공력 입력이 0 이하임
    InvalidPhysicalInput(&'static str),
}

impl std::fmt::Display for AeroError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AeroError::InvalidPhysicalInput(msg) => {
                write!(f, "물리적으로 유효하지 않은 입력: {msg}")
            }
        }
    }
}

impl std::error::Error for AeroError {}

/// 안정 미계수 계산 입력. 모든 값은 기준 단위(m, m², 1/rad)이다.
#[derive(Debug, Clone, Copy)]
pub struct StabilityInput {
    pub wing_span_m: f64,
    pub chord_avg_m: f64,
    pub wing_area_m2: f64,
    pub h_tail_area_m2: f64,
    pub v_tail_area_m2: f64,
    pub tail_arm_m: f64,
    /// 양력 곡선 기울기 CLα [1/rad]
    pub cl_alpha_per_rad: f64,
}

/// 계산된 기하량과 안정 미계수.
#[derive(Debug, Clone, Copy)]
pub struct StabilityDerivatives {
    pub aspect_ratio: f64,
    /// 수평 꼬리 용적비 V_H
    pub tail_volume_h: f64,
    /// 수직 꼬리 용적비 V_v
    pub tail_volume_v: f64,
    pub cm_alpha: f64,
    pub cm_q: f64,
    /// 엘리베이터 효과 Cm_δe
    pub cm_de: f64,
    pub cy_beta: f64,
    pub cn_beta: f64,
    pub cl_beta: f64,
    pub cl_p: f64,
    pub cn_r: f64,
    /// 유도 항력 계수 K = 1/(π·AR·e)
    pub induced_drag_k: f64,
}

/// 상반각이 작은 기체의 보수적 추정값.
const CL_BETA_SMALL_DIHEDRAL: f64 = -0.025;

/// 기하 형상과 CLα로부터 세로/가로 안정 미계수를 계산한다.
///
/// 반환 튜플의 두 번째 요소는 차단하지 않는 타당성 경고 목록이다.
/// 범위 권고(CLα 3~7, Cmα < 0)는 오류가 아니라 경고로만 보고한다.
pub fn compute_stability_derivatives(
    input: &StabilityInput,
    assumptions: &AeroAssumptions,
) -> Result<(StabilityDerivatives, Vec<String>), AeroError> {
    if input.wing_span_m <= 0.0 {
        return Err(AeroError::InvalidPhysicalInput("날개 스팬은 양수여야 함"));
    }
    if input.chord_avg_m <= 0.0 {
        return Err(AeroError::InvalidPhysicalInput("평균 시위는 양수여야 함"));
    }
    if input.wing_area_m2 <= 0.0 {
        return Err(AeroError::InvalidPhysicalInput("날개 면적은 양수여야 함"));
    }
    if input.cl_alpha_per_rad <= 0.0 {
        return Err(AeroError::InvalidPhysicalInput("CLα는 양수여야 함"));
    }
    if input.h_tail_area_m2 < 0.0 || input.v_tail_area_m2 < 0.0 || input.tail_arm_m < 0.0 {
        return Err(AeroError::InvalidPhysicalInput(
            "꼬리 면적과 모멘트 암은 음수일 수 없음",
        ));
    }

    let mut warnings = Vec::new();

    let s = input.wing_area_m2;
    let ar = input.wing_span_m * input.wing_span_m / s;
    let v_h = input.tail_arm_m * input.h_tail_area_m2 / (input.chord_avg_m * s);
    let v_v = input.tail_arm_m * input.v_tail_area_m2 / (input.wing_span_m * s);

    let cl_alpha = input.cl_alpha_per_rad;
    let eta = assumptions.horizontal_eta;
    let eta_v = assumptions.vertical_eta_v;

    let cm_alpha = -eta * v_h * cl_alpha * (1.0 - assumptions.deps_dalpha);
    let cm_q = -2.0 * v_h * cl_alpha * (input.tail_arm_m / input.chord_avg_m);
    let cm_de = -eta * v_h * assumptions.elevator_tau * cl_alpha;
    let cy_beta = -cl_alpha * (input.v_tail_area_m2 / s);
    let cn_beta = eta_v * v_v * cl_alpha;
    let cl_p = -cl_alpha / 12.0;
    let cn_r = -2.0 * eta_v * v_v * (input.tail_arm_m / input.wing_span_m);
    let induced_drag_k =
        1.0 / (std::f64::consts::PI * ar * assumptions.oswald_efficiency);

    if !(3.0..=7.0).contains(&cl_alpha) {
        warnings.push(format!("CLα={cl_alpha:.3}이(가) 권장 범위(3.0~7.0)를 벗어남"));
    }
    if cm_alpha >= 0.0 {
        warnings.push(format!("Cmα={cm_alpha:.4}이(가) 0 이상임 (세로 불안정)"));
    }

    Ok((
        StabilityDerivatives {
            aspect_ratio: ar,
            tail_volume_h: v_h,
            tail_volume_v: v_v,
            cm_alpha,
            cm_q,
            cm_de,
            cy_beta,
            cn_beta,
            cl_beta: CL_BETA_SMALL_DIHEDRAL,
            cl_p,
            cn_r,
            induced_drag_k,
        },
        warnings,
    ))
}

/// CD0 값의 권고 범위(0.02~0.10) 검사. 벗어나면 경고 문자열을 돌려준다.
pub fn cd0_warning(cd0: f64) -> Option<String> {
    if (0.02..=0.10).contains(&cd0) {
        None
    } else {
        Some(format!("CD0={cd0:.4}이(가) 권장 범위(0.02~0.10)를 벗어남"))
    }
}
