//  ____  ____     __        __      ____
// |  _ \|  _ \ __ \ \      / /__   / ___|   ___   _ __
// | |_) | |_) / _` \ \/\ / / _ \  | |  _   / _ \ | '_ \
// |  _ <|  __/ (_| |\ V  V / (_)  | |_| | |  __/ | | | |
// |_| \_\_|   \__,_| \_/\_/ \___/  \____|  \___| |_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-14
// Version : 0.1.0
// License : Mulan PSL v2
//
// Logging setup

use tracing_subscriber::EnvFilter;

/// 初始化日志，级别由 RUST_LOG 控制，默认 warn，输出到 stderr
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
