//! RC 기체 설계 파라미터를 비행역학 시뮬레이터용 기준 단위 파라미터
//! 집합으로 변환하는 라이브러리. 실제 XML 조립과 시뮬레이션은 외부
//! 단계의 몫이며 여기서는 단위 변환과 파라미터 매핑만 담당한다.

pub mod aero;
pub mod app;
pub mod config;
pub mod convert;
pub mod mapper;
pub mod par_file;
pub mod propulsion;
pub mod quantity;
pub mod schema;
pub mod units;
