//! # ドメイン層エラー定義
//!
//! アイテムの不変条件違反を表現するエラー型。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | ボディの形状・`id` の検証失敗 |

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// API 層でこのエラーを受け取り、適切な HTTP レスポンスに変換する。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// # 例
    ///
    /// - ボディが JSON オブジェクトではない
    /// - `id` が未指定・空文字列・文字列以外
    /// - パスの id とボディの `id` が一致しない
    #[error("バリデーションエラー: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validationのメッセージにプレフィックスが付く() {
        let err = DomainError::Validation("id は必須です".to_string());
        assert_eq!(err.to_string(), "バリデーションエラー: id は必須です");
    }
}
