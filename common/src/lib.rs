//! Availability Checker 共通ライブラリ
//!
//! ゲートウェイとプローバーで共有する型・エラー・設定

#![warn(missing_docs)]

/// 設定構造体
pub mod config;

/// エラー型定義
pub mod error;

/// リクエスト/レスポンスのワイヤ型
pub mod protocol;

/// ドメイン型
pub mod types;
