use std::fs;
use std::path::PathBuf;

use clap::Parser;

use crate::config::{self, ConfigError};
use crate::mapper::{self, AggregateError, ConvertedParameterSet};
use crate::par_file::{self, ParError};
use crate::schema;

/// 레거시 .par 파일을 기준 단위 파라미터 집합(TOML IR)으로 변환한다.
/// 생성된 IR은 외부 문서 조립 단계가 시뮬레이터 XML로 만든다.
#[derive(Debug, Parser)]
#[command(name = "rc_fdm_converter", version, about)]
pub struct Args {
    /// 입력 .par 파일 경로
    pub input: PathBuf,
    /// 출력 TOML 경로 (기본: 입력 파일명의 확장자를 .toml로 교체)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// 설정 TOML 경로 (미지정 시 기본 설정 사용)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 로드 오류
    Config(ConfigError),
    /// .par 파일 읽기 오류
    Par(ParError),
    /// 매핑 패스 실패 (필드별 오류 목록 포함)
    Map(AggregateError),
    /// 출력 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Par(e) => write!(f, "입력 파일 오류: {e}"),
            AppError::Map(e) => write!(f, "변환 실패: {e}"),
            AppError::Serialize(e) => write!(f, "출력 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<ParError> for AppError {
    fn from(value: ParError) -> Self {
        AppError::Par(value)
    }
}

impl From<toml::ser::Error> for AppError {
    fn from(value: toml::ser::Error) -> Self {
        AppError::Serialize(value)
    }
}

/// 변환 파이프라인: 설정 로드 → .par 파싱 → 매핑 → TOML IR 기록.
pub fn run(args: &Args) -> Result<(), AppError> {
    let cfg = config::load_or_default(args.config.as_deref())?;
    let raw = par_file::parse_file(&args.input)?;

    let result = mapper::map(
        &raw,
        schema::default_schema(),
        schema::default_derived(),
        &cfg,
    );
    // 매핑 실패 시 AggregateError가 필드별 오류를 전부 담고 있어
    // 사용자는 한 번의 수정으로 모든 문제를 고칠 수 있다.
    let set = result.map_err(AppError::Map)?;

    for w in &set.warnings {
        println!("경고: {w}");
    }

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| args.input.with_extension("toml"));
    write_ir(&set, &output)?;

    println!(
        "변환 완료: 값 {}개, 테이블 {}개 → {}",
        set.values.len(),
        set.tables.len(),
        output.display()
    );
    Ok(())
}

fn write_ir(set: &ConvertedParameterSet, path: &PathBuf) -> Result<(), AppError> {
    let content = toml::to_string_pretty(set)?;
    fs::write(path, content)?;
    Ok(())
}
