// パス: src/value.rs
// 役割: ホストランタイムが扱う動的値表現とフィールド参照操作を提供する
// 意図: アクセサ関数とホスト側が同じ値表現を共有できるようにする
// 関連ファイル: src/probe.rs, src/errors.rs, src/convert.rs
//! 値表現モジュール
//!
//! 目的:
//! - 正格・不変のデータ値のみを保持する（関数値は持たない）。
//! - フィールド参照は `FieldSource` 経由に統一し、プローブと実レコードを
//!   同じアクセサで扱えるようにする。
//!
//! 仕様要点:
//! - 空タプルをユニット値として扱う。
//! - `show` の Bool 表記は `True` / `False`。

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{HostError, HostResult};

/// ホストランタイム上の動的値。
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Int(i64),
    Double(f64),
    Bool(bool),
    Char(char),
    String(String),
    List(Vec<Value>),
    Tuple(Vec<Value>),
    Record(Record),
}

impl Value {
    /// 値の種別名を返す（診断メッセージ用）。
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "Int",
            Value::Double(_) => "Double",
            Value::Bool(_) => "Bool",
            Value::Char(_) => "Char",
            Value::String(_) => "String",
            Value::List(_) => "List",
            Value::Tuple(_) => "Tuple",
            Value::Record(_) => "Record",
        }
    }

    /// ユニット値（空タプル）を生成する。
    pub fn unit() -> Self {
        Value::Tuple(Vec::new())
    }

    /// フィールド参照。レコード以外に適用すると `FIELD020` で失敗する。
    pub fn field(&self, name: &str) -> HostResult<Value> {
        match self {
            Value::Record(record) => record.field(name),
            other => Err(HostError::new(
                "FIELD020",
                format!(
                    "フィールド参照はレコードにのみ適用できます: 対象 = {} ({})",
                    show(other),
                    other.kind_name()
                ),
            )),
        }
    }
}

/// フィールド参照を受け付ける、レコード形の値の共通インターフェース。
/// 実レコード（`Record`）と探査用プローブ（`ProbeRecord`）の両方が実装する。
pub trait FieldSource {
    fn field(&self, name: &str) -> HostResult<Value>;
}

/// 名前付きフィールドの集合。
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, Value>,
}

impl Record {
    /// 空のレコードを生成する。
    pub fn new() -> Self {
        Self::default()
    }

    /// フィールドを追加または更新する。既存値があれば返す。
    pub fn insert(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.fields.insert(name.into(), value)
    }

    /// フィールドを参照する（所有権を移さない版）。
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// フィールド名順（辞書順）で走査する。
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Record {
    type Item = (String, Value);
    type IntoIter = std::collections::btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl FieldSource for Record {
    /// 実フィールドの値を複製して返す。未定義フィールドは `FIELD010`。
    fn field(&self, name: &str) -> HostResult<Value> {
        self.fields
            .get(name)
            .cloned()
            .ok_or_else(|| HostError::new("FIELD010", format!("未定義フィールド: {name}")))
    }
}

/// show 相当の文字列表現を返す。
pub fn show(value: &Value) -> String {
    match value {
        Value::Int(i) => i.to_string(),
        Value::Double(d) => format!("{}", d),
        Value::Bool(b) => {
            if *b {
                "True".into()
            } else {
                "False".into()
            }
        }
        Value::Char(c) => c.to_string(),
        Value::String(s) => s.clone(),
        Value::List(items) => {
            let parts: Vec<String> = items.iter().map(show).collect();
            format!("[{}]", parts.join(", "))
        }
        Value::Tuple(items) => {
            let parts: Vec<String> = items.iter().map(show).collect();
            format!("({})", parts.join(", "))
        }
        Value::Record(record) => {
            let parts: Vec<String> = record
                .iter()
                .map(|(name, v)| format!("{} = {}", name, show(v)))
                .collect();
            format!("{{ {} }}", parts.join(", "))
        }
    }
}
