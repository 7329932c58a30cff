//! 단위 레지스트리. 차원별 계수 테이블과 철자 정규화를 모아둔다.

pub mod angle;
pub mod area;
pub mod electrical;
pub mod force;
pub mod inertia;
pub mod length;
pub mod mass;
pub mod rotation;

use crate::quantity::{Dimension, UnitSpec};

/// 단위 철자를 조회용 키로 정규화한다.
///
/// 소문자화, 공백/마침표 제거 후 지수·곱 표기의 변형을 하나로 합친다:
/// `mm²`→`mm2`, `mm^2`→`mm2`, `g·mm2`/`g×mm2`→`g*mm2`.
pub fn normalize(unit: &str) -> String {
    let mut out = String::with_capacity(unit.len());
    for ch in unit.trim().chars() {
        match ch {
            ' ' | '\t' | '.' => {}
            '^' => {}
            '²' => out.push('2'),
            '³' => out.push('3'),
            '·' | '×' => out.push('*'),
            _ => out.extend(ch.to_lowercase()),
        }
    }
    out
}

/// 정규화된 철자 하나를 레지스트리에서 찾는다. 등록된 철자가 없으면 None.
///
/// 차원마다 계수 1.0짜리 기준 단위 철자가 반드시 하나 있어, 이미 기준
/// 단위로 적힌 값은 그대로 통과한다.
fn lookup(spelling: &str) -> Option<UnitSpec> {
    // 무차원: 단위 없음 표기 또는 1/rad 꼴의 계수 표기
    if matches!(spelling, "" | "-" | "1" | "nd" | "1/rad" | "/rad") {
        return Some(UnitSpec::new(Dimension::Dimensionless, 1.0));
    }
    // 관성모멘트를 길이보다 먼저 본다. 철자가 겹치지는 않지만 복합 단위를
    // 단순 단위로 오인하지 않도록 구체적인 것부터 조회한다.
    if let Some(f) = inertia::factor(spelling) {
        return Some(UnitSpec::new(Dimension::MomentOfInertia, f));
    }
    if let Some(f) = area::factor(spelling) {
        return Some(UnitSpec::new(Dimension::Area, f));
    }
    if let Some(f) = length::factor(spelling) {
        return Some(UnitSpec::new(Dimension::Length, f));
    }
    if let Some(f) = mass::factor(spelling) {
        return Some(UnitSpec::new(Dimension::Mass, f));
    }
    if let Some(f) = angle::factor(spelling) {
        return Some(UnitSpec::new(Dimension::Angle, f));
    }
    if let Some(f) = electrical::voltage_factor(spelling) {
        return Some(UnitSpec::new(Dimension::Voltage, f));
    }
    if let Some(f) = electrical::resistance_factor(spelling) {
        return Some(UnitSpec::new(Dimension::Resistance, f));
    }
    if let Some(f) = electrical::capacity_factor(spelling) {
        return Some(UnitSpec::new(Dimension::Capacity, f));
    }
    if let Some(f) = rotation::factor(spelling) {
        return Some(UnitSpec::new(Dimension::RotationalSpeed, f));
    }
    if let Some(f) = force::factor(spelling) {
        return Some(UnitSpec::new(Dimension::Force, f));
    }
    None
}

/// 입력된 단위 문자열을 정규화한 뒤 레지스트리에서 찾는다.
pub fn resolve(unit: &str) -> Option<UnitSpec> {
    lookup(&normalize(unit))
}
