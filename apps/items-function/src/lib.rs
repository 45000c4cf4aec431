//! # Items Function ライブラリ
//!
//! ToDoList アイテムの CRUD エンドポイントを構成するモジュール群。
//!
//! ## モジュール構成
//!
//! - `app_builder`: State とルーターの組み立て
//! - `config`: 環境変数からの設定読み込み
//! - `error`: エラーと HTTP レスポンスへの変換
//! - `handler`: HTTP ハンドラ（メソッドディスパッチ、ヘルスチェック）
//! - `usecase`: ボディ検証とリポジトリ呼び出し

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;

pub use app_builder::build_app;
