use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 안정 미계수 계산에 쓰는 표준 가정값.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AeroAssumptions {
    /// 수평 꼬리 효율 η
    pub horizontal_eta: f64,
    /// 수직 꼬리 효율 η_v
    pub vertical_eta_v: f64,
    /// 내리흐름 기울기 dε/dα
    pub deps_dalpha: f64,
    /// 엘리베이터 효과 계수 τ
    pub elevator_tau: f64,
    /// 오스왈드 효율 e
    pub oswald_efficiency: f64,
}

impl Default for AeroAssumptions {
    fn default() -> Self {
        Self {
            horizontal_eta: 0.9,
            vertical_eta_v: 0.95,
            deps_dalpha: 0.35,
            elevator_tau: 0.5,
            oswald_efficiency: 0.8,
        }
    }
}

/// 조종면 최대 변위가 비어 있거나 비현실적일 때 쓰는 대체값 [rad].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ControlEstimates {
    pub aileron_max_rad: f64,
    pub elevator_max_rad: f64,
    pub rudder_max_rad: f64,
}

impl Default for ControlEstimates {
    fn default() -> Self {
        // 통상적인 20° 변위
        let typical = 20.0 * std::f64::consts::PI / 180.0;
        Self {
            aileron_max_rad: typical,
            elevator_max_rad: typical,
            rudder_max_rad: typical,
        }
    }
}

/// 변환기 설정. 추력 테이블 표본 격자와 공력 가정을 담는다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// 해면 고도 공기 밀도 [kg/m³]
    pub air_density_kg_m3: f64,
    /// 추력 테이블의 대기속도 표본 [m/s]
    pub airspeed_samples_mps: Vec<f64>,
    pub assumptions: AeroAssumptions,
    pub control_estimates: ControlEstimates,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            air_density_kg_m3: 1.225,
            airspeed_samples_mps: (0..=10).map(|i| f64::from(i) * 2.0).collect(),
            assumptions: AeroAssumptions::default(),
            control_estimates: ControlEstimates::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Parse(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Parse(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Parse(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// 지정 경로의 설정을 로드한다. 경로가 None이면 기본 설정을 반환한다.
pub fn load_or_default(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(p) => {
            let content = fs::read_to_string(p)?;
            let cfg: Config = toml::from_str(&content)?;
            Ok(cfg)
        }
        None => Ok(Config::default()),
    }
}

impl Config {
    /// 설정을 지정 경로에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
