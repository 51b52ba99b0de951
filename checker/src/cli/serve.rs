//! serve サブコマンド
//!
//! 稼働チェックサーバーを起動します。

use crate::config::load_server_config;
use availability_checker_common::config::ServerConfig;
use clap::Args;

/// serve サブコマンドの引数
///
/// 省略した値は`CHECKER_HOST`/`CHECKER_PORT`、次にデフォルト値から解決する。
#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Listen port [default: $CHECKER_PORT or 8000]
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Bind address [default: $CHECKER_HOST or 0.0.0.0]
    #[arg(short = 'H', long)]
    pub host: Option<String>,
}

impl ServeArgs {
    /// 環境変数の設定にフラグを重ねてサーバー設定を決める
    pub fn resolve(self) -> ServerConfig {
        let env = load_server_config();
        ServerConfig {
            host: self.host.unwrap_or(env.host),
            port: self.port.unwrap_or(env.port),
        }
    }
}
