//! ログ出力の初期化
//!
//! 診断ログは標準エラーへ、結果表示は標準出力へ分ける

use tracing_subscriber::EnvFilter;

/// `RUST_LOG` があればそれを使い、無ければ verbose に応じて info/debug
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
