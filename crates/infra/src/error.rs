//! # インフラ層エラー定義
//!
//! DynamoDB との通信や、アイテムとストア表現の変換で発生するエラーを表現する。
//!
//! ## 設計方針
//!
//! - **エラーの変換**: AWS SDK のエラーは文字列にマップする
//! - **ドメインエラーとの分離**: インフラ固有のエラーを明示
//! - **SpanTrace 自動捕捉**: convenience constructor で
//!   エラー生成時の呼び出し経路を自動記録する
//!
//! ## 構造
//!
//! `std::io::Error` と同じ struct + enum パターンを採用:
//! - [`InfraError`]: エラー種別（[`InfraErrorKind`]）と [`SpanTrace`] を保持するラッパー
//! - [`InfraErrorKind`]: エラーの具体的な種別（DynamoDb, Conflict 等）

use std::fmt;

use derive_more::Display;
use thiserror::Error;
use tracing_error::SpanTrace;

/// インフラ層で発生するエラー
///
/// エラー種別（[`InfraErrorKind`]）と [`SpanTrace`]（呼び出し経路）を保持する。
///
/// ## パターンマッチ
///
/// ```ignore
/// match error.kind() {
///     InfraErrorKind::Conflict { entity, id } => { /* 競合処理 */ }
///     _ => { /* その他 */ }
/// }
/// ```
#[derive(Display)]
#[display("{kind}")]
pub struct InfraError {
    kind:       InfraErrorKind,
    span_trace: SpanTrace,
}

/// インフラ層エラーの種別
///
/// API 層でこのエラー種別に応じて適切な HTTP レスポンスに変換する。
#[derive(Debug, Error)]
pub enum InfraErrorKind {
    /// DynamoDB エラー
    ///
    /// AWS SDK のエラー型はジェネリクスが深く `#[from]` が困難なため、
    /// 手動で String にマップする。
    #[error("DynamoDB エラー: {0}")]
    DynamoDb(String),

    /// 一意性の競合（同じパーティションキーのアイテムが既に存在する）
    #[error("競合が発生しました: {entity}(id={id})")]
    Conflict {
        /// エンティティ名（例: "Item"）
        entity: String,
        /// エンティティの ID
        id:     String,
    },

    /// ストアから読み出したデータが想定外の形式
    ///
    /// JSON に変換できない属性型や、数値として解釈できない `N` 属性など。
    #[error("不正なデータ: {0}")]
    InvalidData(String),
}

// ===== InfraError のメソッド =====

impl InfraError {
    /// エラー種別を取得する
    pub fn kind(&self) -> &InfraErrorKind {
        &self.kind
    }

    /// SpanTrace を取得する
    pub fn span_trace(&self) -> &SpanTrace {
        &self.span_trace
    }

    /// Conflict バリアントの場合、entity と id を返す
    pub fn as_conflict(&self) -> Option<(&str, &str)> {
        match &self.kind {
            InfraErrorKind::Conflict { entity, id } => Some((entity, id)),
            _ => None,
        }
    }

    // ===== Convenience constructors =====

    /// 一意性の競合エラーを生成する
    pub fn conflict(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::from_kind(InfraErrorKind::Conflict {
            entity: entity.into(),
            id:     id.into(),
        })
    }

    /// DynamoDB エラーを生成する
    pub fn dynamo_db(msg: impl Into<String>) -> Self {
        Self::from_kind(InfraErrorKind::DynamoDb(msg.into()))
    }

    /// 不正データエラーを生成する
    pub fn invalid_data(msg: impl Into<String>) -> Self {
        Self::from_kind(InfraErrorKind::InvalidData(msg.into()))
    }

    fn from_kind(kind: InfraErrorKind) -> Self {
        Self {
            kind,
            span_trace: SpanTrace::capture(),
        }
    }
}

// ===== トレイト実装 =====

impl fmt::Debug for InfraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfraError")
            .field("kind", &self.kind)
            .field("span_trace", &self.span_trace)
            .finish()
    }
}

impl std::error::Error for InfraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(&self.kind)
    }
}
