//! # JSON ⇄ AttributeValue 変換
//!
//! スキーマレスなアイテム（JSON オブジェクト）と DynamoDB のアイテム表現
//! （`HashMap<String, AttributeValue>`）を相互に変換する。
//!
//! | JSON | AttributeValue |
//! |------|----------------|
//! | `null` | `NULL` |
//! | `true` / `false` | `BOOL` |
//! | 数値 | `N`（10 進文字列） |
//! | 文字列 | `S` |
//! | 配列 | `L` |
//! | オブジェクト | `M` |
//!
//! 読み出し方向のみ、他クライアントが書き込んだ `SS` / `NS` / `B` / `BS` も
//! 配列・base64 文字列として受け付ける。

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use serde_json::{Map, Number, Value};
use todolist_domain::item::Item;

use crate::InfraError;

/// アイテムを DynamoDB のアイテム表現に変換する
pub fn item_to_attributes(item: &Item) -> HashMap<String, AttributeValue> {
    item.fields()
        .iter()
        .map(|(key, value)| (key.clone(), json_to_attribute(value)))
        .collect()
}

/// DynamoDB のアイテム表現をアイテムに変換する
pub fn attributes_to_item(attributes: HashMap<String, AttributeValue>) -> Result<Item, InfraError> {
    let fields = attributes
        .into_iter()
        .map(|(key, value)| attribute_to_json(value).map(|v| (key, v)))
        .collect::<Result<Map<String, Value>, InfraError>>()?;
    Ok(Item::from_fields(fields))
}

/// JSON 値を AttributeValue に変換する
pub fn json_to_attribute(value: &Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(*b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s.clone()),
        Value::Array(values) => AttributeValue::L(values.iter().map(json_to_attribute).collect()),
        Value::Object(fields) => AttributeValue::M(
            fields
                .iter()
                .map(|(key, value)| (key.clone(), json_to_attribute(value)))
                .collect(),
        ),
    }
}

/// AttributeValue を JSON 値に変換する
pub fn attribute_to_json(attribute: AttributeValue) -> Result<Value, InfraError> {
    let value = match attribute {
        AttributeValue::Null(_) => Value::Null,
        AttributeValue::Bool(b) => Value::Bool(b),
        AttributeValue::N(n) => Value::Number(parse_number(&n)?),
        AttributeValue::S(s) => Value::String(s),
        AttributeValue::L(values) => Value::Array(
            values
                .into_iter()
                .map(attribute_to_json)
                .collect::<Result<_, _>>()?,
        ),
        AttributeValue::M(fields) => Value::Object(
            fields
                .into_iter()
                .map(|(key, value)| attribute_to_json(value).map(|v| (key, v)))
                .collect::<Result<_, _>>()?,
        ),
        AttributeValue::Ss(values) => Value::Array(values.into_iter().map(Value::String).collect()),
        AttributeValue::Ns(values) => Value::Array(
            values
                .iter()
                .map(|n| parse_number(n).map(Value::Number))
                .collect::<Result<_, _>>()?,
        ),
        AttributeValue::B(blob) => Value::String(BASE64.encode(blob.as_ref())),
        AttributeValue::Bs(blobs) => Value::Array(
            blobs
                .iter()
                .map(|blob| Value::String(BASE64.encode(blob.as_ref())))
                .collect(),
        ),
        other => {
            return Err(InfraError::invalid_data(format!(
                "未対応の属性型です: {other:?}"
            )));
        }
    };
    Ok(value)
}

fn parse_number(n: &str) -> Result<Number, InfraError> {
    n.parse::<Number>()
        .map_err(|e| InfraError::invalid_data(format!("数値属性 '{n}' のパースに失敗: {e}")))
}
