//! langdetect - 빈도 단어 / 트라이그램 기반 언어 판별

use clap::Parser;
use langdetect::app::{run, Cli};
use langdetect::config::load_config;

fn main() {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // 인자 오류는 clap이 사용법을 출력하고 종료
    let cli = Cli::parse();

    // 설정 로드
    let config = load_config();
    log::debug!("설정: {:?}", config);

    match run(&cli.text_file, &config) {
        Ok(report) => println!("{}", report),
        Err(e) => {
            log::error!("언어 판별 실패: {}", e);
            std::process::exit(1);
        }
    }
}
