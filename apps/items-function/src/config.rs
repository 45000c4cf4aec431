//! # Items Function 設定
//!
//! 環境変数から Items Function サーバーとアイテムストアの設定を読み込む。

use std::env;

use thiserror::Error;
use todolist_infra::dynamodb::StoreConnection;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 7071;
const DEFAULT_REGION: &str = "ap-northeast-1";

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// 必須の環境変数が未設定
    #[error("{0} が設定されていません")]
    Missing(&'static str),

    /// 値の形式が不正
    #[error("{name} の値が不正です: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Items Function サーバーの設定
#[derive(Debug, Clone)]
pub struct FunctionConfig {
    /// バインドアドレス
    pub host:  String,
    /// ポート番号
    pub port:  u16,
    /// アイテムストア設定
    pub store: StoreConfig,
}

/// アイテムストアの接続設定
#[derive(Clone)]
pub struct StoreConfig {
    /// エンドポイント URI
    pub endpoint_uri:      String,
    /// アクセスキー ID（プライマリキーの `:` より前）
    pub access_key_id:     String,
    /// シークレット（プライマリキーの `:` より後）
    pub secret_access_key: String,
    /// 署名リージョン
    pub region:            String,
}

impl std::fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreConfig")
            .field("endpoint_uri", &self.endpoint_uri)
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"***")
            .field("region", &self.region)
            .finish()
    }
}

impl FunctionConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 任意の参照関数から設定を読み込む
    ///
    /// | 変数名 | 必須 | デフォルト |
    /// |--------|------|-----------|
    /// | `ITEMS_STORE_ENDPOINT_URI` | **Yes** | - |
    /// | `ITEMS_STORE_PRIMARY_KEY` | **Yes** | - |
    /// | `ITEMS_STORE_REGION` | No | `ap-northeast-1` |
    /// | `ITEMS_FUNCTION_HOST` | No | `0.0.0.0` |
    /// | `ITEMS_FUNCTION_PORT` | No | `7071` |
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("ITEMS_FUNCTION_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("ITEMS_FUNCTION_PORT") {
            Some(raw) => raw.parse().map_err(|e| ConfigError::Invalid {
                name:   "ITEMS_FUNCTION_PORT",
                reason: format!("{raw:?} はポート番号ではありません ({e})"),
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host,
            port,
            store: StoreConfig::from_lookup(&lookup)?,
        })
    }
}

impl StoreConfig {
    fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let endpoint_uri = required(lookup, "ITEMS_STORE_ENDPOINT_URI")?;
        let primary_key = required(lookup, "ITEMS_STORE_PRIMARY_KEY")?;
        let (access_key_id, secret_access_key) = split_primary_key(&primary_key)?;

        Ok(Self {
            endpoint_uri,
            access_key_id,
            secret_access_key,
            region: lookup("ITEMS_STORE_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
        })
    }

    /// インフラ層に渡す接続情報に変換する
    pub fn connection(&self) -> StoreConnection {
        StoreConnection {
            endpoint_uri:      self.endpoint_uri.clone(),
            access_key_id:     self.access_key_id.clone(),
            secret_access_key: self.secret_access_key.clone(),
            region:            self.region.clone(),
        }
    }
}

fn required(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<String, ConfigError> {
    lookup(name)
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::Missing(name))
}

/// `<access_key_id>:<secret_access_key>` を分割する
///
/// シークレット側に `:` が含まれていてもよい（最初の `:` で分割）。
fn split_primary_key(primary_key: &str) -> Result<(String, String), ConfigError> {
    match primary_key.split_once(':') {
        Some((id, secret)) if !id.is_empty() && !secret.is_empty() => {
            Ok((id.to_string(), secret.to_string()))
        }
        _ => Err(ConfigError::Invalid {
            name:   "ITEMS_STORE_PRIMARY_KEY",
            reason: "<access_key_id>:<secret_access_key> の形式である必要があります".to_string(),
        }),
    }
}
