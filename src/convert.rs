// パス: src/convert.rs
// 役割: serde_json の値表現とホスト値表現を相互変換する
// 意図: ホスト側の動的データ（JSON）をそのままランタイム値として持ち込めるようにする
// 関連ファイル: src/value.rs
//! JSON 変換モジュール
//!
//! 写像規則:
//! - オブジェクト ↔ レコード、配列 ↔ リスト。
//! - `null` ↔ ユニット値（空タプル）。
//! - i64 に収まる数値は `Int`、それ以外は `Double`。
//! - `Char` は 1 文字の文字列として出力する。
//! - 有限でない `Double`（NaN/∞）は JSON 側では `null` になる。

use serde_json::Value as Json;

use crate::value::{Record, Value};

impl From<Json> for Value {
    fn from(json: Json) -> Self {
        match json {
            Json::Null => Value::unit(),
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Double(n.as_f64().unwrap_or(f64::NAN)),
            },
            Json::String(s) => Value::String(s),
            Json::Array(items) => Value::List(items.into_iter().map(Value::from).collect()),
            Json::Object(fields) => Value::Record(
                fields
                    .into_iter()
                    .map(|(name, v)| (name, Value::from(v)))
                    .collect::<Record>(),
            ),
        }
    }
}

impl From<Value> for Json {
    fn from(value: Value) -> Self {
        match value {
            Value::Int(i) => Json::from(i),
            Value::Double(d) => serde_json::Number::from_f64(d)
                .map(Json::Number)
                .unwrap_or(Json::Null),
            Value::Bool(b) => Json::Bool(b),
            Value::Char(c) => Json::String(c.to_string()),
            Value::String(s) => Json::String(s),
            Value::List(items) | Value::Tuple(items) => {
                Json::Array(items.into_iter().map(Json::from).collect())
            }
            Value::Record(record) => Json::Object(
                record
                    .into_iter()
                    .map(|(name, v)| (name, Json::from(v)))
                    .collect(),
            ),
        }
    }
}
