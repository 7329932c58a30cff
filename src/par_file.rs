use std::path::Path;

use crate::mapper::{RawInputRecord, RawValue};

/// .par 파일 읽기 시 발생 가능한 오류.
#[derive(Debug)]
pub enum ParError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 확장자가 .par이 아님
    InvalidExtension(String),
}

impl std::fmt::Display for ParError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ParError::InvalidExtension(name) => {
                write!(f, ".par 파일이 아님: {name}")
            }
        }
    }
}

impl std::error::Error for ParError {}

impl From<std::io::Error> for ParError {
    fn from(value: std::io::Error) -> Self {
        ParError::Io(value)
    }
}

/// 레거시 비행 모델의 파라미터 줄 번호를 표준 필드 이름으로 대응시킨다.
///
/// 줄 형식은 `값  줄번호:이름(단위)  설명`이며, 줄 번호가 파라미터의
/// 식별자다. 대응표는 원본 포맷 분석 결과를 그대로 따른다.
fn field_for_line(line_no: u32) -> Option<&'static str> {
    match line_no {
        2 => Some("propulsion/max_thrust"),
        3 => Some("control/rudder_max"),
        4 => Some("control/elevator_max"),
        5 => Some("control/aileron_max"),
        8 => Some("aero/cl_alpha"),
        10 => Some("aero/cf"),
        11 => Some("aero/cdb"),
        12 => Some("aero/cl_max"),
        14 => Some("aero/cm0"),
        16 => Some("metrics/wing_span"),
        17 => Some("metrics/chord_avg"),
        19 => Some("mass/empty_weight"),
        20 => Some("mass/I/ixx"),
        21 => Some("mass/I/iyy"),
        22 => Some("mass/I/izz"),
        23 => Some("metrics/h_tail_area"),
        24 => Some("metrics/v_tail_area"),
        25 => Some("metrics/tail_arm"),
        _ => None,
    }
}

/// `줄번호:이름(단위)` 토큰에서 줄 번호와 단위 문자열을 뽑는다.
fn parse_tag(token: &str) -> Option<(u32, &str)> {
    let (num, rest) = token.split_once(':')?;
    let line_no: u32 = num.parse().ok()?;
    let open = rest.find('(')?;
    let close = rest[open..].find(')')? + open;
    Some((line_no, &rest[open + 1..close]))
}

/// .par 본문을 원시 레코드로 파싱한다.
///
/// 형식에 맞지 않는 줄과 수치가 아닌 값은 건너뛴다. 필수 파라미터
/// 누락 검사는 매퍼의 몫이다.
pub fn parse_str(content: &str) -> RawInputRecord {
    let mut record = RawInputRecord::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut parts = line.split_whitespace();
        let (Some(value_str), Some(tag)) = (parts.next(), parts.next()) else {
            continue;
        };
        let Ok(value) = value_str.parse::<f64>() else {
            continue;
        };
        let Some((line_no, unit)) = parse_tag(tag) else {
            continue;
        };
        if let Some(field) = field_for_line(line_no) {
            record.insert(field.to_string(), RawValue::new(value, unit));
        }
    }
    record
}

/// .par 파일을 읽어 원시 레코드로 파싱한다.
///
/// 원본 포맷은 Shift-JIS 인코딩이지만 수치 문법은 ASCII라서 손실
/// 디코딩으로 충분하다. 깨질 수 있는 부분은 버려지는 설명 텍스트뿐이다.
pub fn parse_file(path: &Path) -> Result<RawInputRecord, ParError> {
    let is_par = path
        .extension()
        .map(|e| e.eq_ignore_ascii_case("par"))
        .unwrap_or(false);
    if !is_par {
        return Err(ParError::InvalidExtension(path.display().to_string()));
    }
    let bytes = std::fs::read(path)?;
    Ok(parse_str(&String::from_utf8_lossy(&bytes)))
}
