use env_logger::{Builder, Target};
use log::{info, LevelFilter};

pub fn get_log_level(log_level: &str) -> LevelFilter {
    match log_level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        _ => LevelFilter::Info,
    }
}

/// 優先順位: CLI引数, 環境変数 VIDEO_PAIR_LOG, 設定ファイル, verbose, デフォルト
pub fn resolve_log_level(cli_level: Option<&str>, config_level: Option<&str>, verbose: bool) -> String {
    cli_level
        .map(str::to_string)
        .or_else(|| std::env::var("VIDEO_PAIR_LOG").ok())
        .or_else(|| config_level.map(str::to_string))
        .unwrap_or_else(|| if verbose { "debug" } else { "info" }.to_string())
}

/// `info` や `video_pair_common=debug,warn` の形式を受け付ける
pub fn init_logger(log_level: &str) {
    let mut log_builder = Builder::from_default_env();
    log_builder.target(Target::Stderr);

    if log_level.contains('=') {
        for pair in log_level.split(',') {
            if pair.contains('=') {
                let mut kv_iter = pair.split('=').map(str::trim);
                if let (Some(module), Some(level)) = (kv_iter.next(), kv_iter.next()) {
                    log_builder.filter_module(module, get_log_level(level));
                }
            } else {
                log_builder.filter_level(get_log_level(pair));
            }
        }
    } else {
        log_builder.filter_level(get_log_level(log_level));
    }

    // テストなどで二重初期化されても落とさない
    if log_builder.try_init().is_ok() {
        info!("Log Level {}", log_level);
    }
}
