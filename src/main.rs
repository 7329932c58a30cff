use clap::Parser;
use rc_fdm_converter::app::{self, Args};

/// 프로그램의 엔트리 포인트. 인자를 파싱한 뒤 변환 파이프라인을 실행한다.
fn main() {
    let args = Args::parse();
    if let Err(err) = app::run(&args) {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}
