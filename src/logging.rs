//! tracing 구독자 설정. 바이너리 시작 시 한 번 호출한다.

use tracing_subscriber::EnvFilter;

/// `RUST_LOG`가 없으면 `default_directive`를 필터로 쓴다. 출력은 stderr로 보낸다.
///
/// 이미 구독자가 설치되어 있으면 아무것도 하지 않는다.
pub fn init(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
