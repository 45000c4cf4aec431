//! # エラーレスポンス（RFC 9457 Problem Details）
//!
//! HTTP エンドポイントで共通のエラーレスポンス構造体を提供する。
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - axum の `IntoResponse` 変換はアプリ側の責務（shared に axum 依存を入れない）
//! - よく使うエラー種別は便利コンストラクタで提供し、URI のハードコードを排除

use serde::{Deserialize, Serialize};

/// error_type URI のベースパス
const ERROR_TYPE_BASE: &str = "https://todolist.example.com/errors";

/// エラーレスポンス（RFC 9457 Problem Details）
///
/// `type` フィールドは URI で問題の種類を識別する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
   #[serde(rename = "type")]
   pub error_type: String,
   pub title:      String,
   pub status:     u16,
   pub detail:     String,
}

impl ErrorResponse {
   /// `error_type_suffix` はベース URI に付加される（例: `"bad-request"`）。
   fn new(
      error_type_suffix: &str,
      title: impl Into<String>,
      status: u16,
      detail: impl Into<String>,
   ) -> Self {
      Self {
         error_type: format!("{ERROR_TYPE_BASE}/{error_type_suffix}"),
         title: title.into(),
         status,
         detail: detail.into(),
      }
   }

   /// 400 Bad Request
   pub fn bad_request(detail: impl Into<String>) -> Self {
      Self::new("bad-request", "Bad Request", 400, detail)
   }

   /// 409 Conflict
   pub fn conflict(detail: impl Into<String>) -> Self {
      Self::new("conflict", "Conflict", 409, detail)
   }

   /// 500 Internal Server Error
   ///
   /// detail は固定値（内部情報を漏らさないため）。
   pub fn internal_error() -> Self {
      Self::new(
         "internal-error",
         "Internal Server Error",
         500,
         "内部エラーが発生しました",
      )
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn test_new_で全フィールドが正しく設定される() {
      let error = ErrorResponse::new("custom-error", "Custom Error", 418, "カスタムエラー");

      assert_eq!(
         error.error_type,
         "https://todolist.example.com/errors/custom-error"
      );
      assert_eq!(error.title, "Custom Error");
      assert_eq!(error.status, 418);
      assert_eq!(error.detail, "カスタムエラー");
   }

   #[test]
   fn test_internal_error_が500と固定detailを返す() {
      let error = ErrorResponse::internal_error();

      assert_eq!(
         error.error_type,
         "https://todolist.example.com/errors/internal-error"
      );
      assert_eq!(error.status, 500);
      assert_eq!(error.detail, "内部エラーが発生しました");
   }

   #[test]
   fn test_jsonシリアライズでtypeフィールド名が正しい() {
      let error = ErrorResponse::conflict("id '1' は既に存在します");
      let json = serde_json::to_value(&error).unwrap();

      assert_eq!(json["type"], "https://todolist.example.com/errors/conflict");
      assert_eq!(json["title"], "Conflict");
      assert_eq!(json["status"], 409);
      assert_eq!(json["detail"], "id '1' は既に存在します");
      assert!(json.get("error_type").is_none());
   }

   #[test]
   fn test_全便利コンストラクタのstatusが正しい() {
      assert_eq!(ErrorResponse::bad_request("").status, 400);
      assert_eq!(ErrorResponse::conflict("").status, 409);
      assert_eq!(ErrorResponse::internal_error().status, 500);
   }

   #[test]
   fn test_jsonデシリアライズが正しく動作する() {
      let json = r#"{
            "type": "https://todolist.example.com/errors/bad-request",
            "title": "Bad Request",
            "status": 400,
            "detail": "リクエストボディが不正です"
        }"#;
      let error: ErrorResponse = serde_json::from_str(json).unwrap();

      assert_eq!(error, ErrorResponse::bad_request("リクエストボディが不正です"));
   }
}
