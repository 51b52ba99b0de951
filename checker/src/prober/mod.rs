//! 稼働確認プローバー
//!
//! URLごとにHEADリクエストを送信し`available`/`unavailable`に分類する。
//! 同時実行数はプロセス全体で共有するチケットプールで制限する。

/// 同時実行数制限付きプローバー
pub mod bounded;
/// チケットプール
pub mod pool;
/// 単一URLのプローブ
pub mod probe;

pub use bounded::Prober;
pub use pool::{Ticket, TicketPool};
