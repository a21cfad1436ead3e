// パス: src/probe.rs
// 役割: アクセサ探査用のプローブレコードを定義する
// 意図: どのフィールド名を読んでもその名前自身を返し、読み取りを観測可能にする
// 関連ファイル: src/value.rs, src/reflect.rs
//! プローブモジュール
//!
//! - プローブは実フィールドを一切持たない合成レコード。
//! - 任意の名前のフィールド参照が必ず成功し、名前そのものを文字列値で返す。
//!   事前宣言は不要で、あらゆる名前に一様に適用される。
//! - 生成は解決器に限定し（`pub(crate)`）、1 回の解決呼び出しごとに
//!   新規生成される。呼び出しをまたいで共有・再利用されることはない。

use crate::errors::HostResult;
use crate::value::{FieldSource, Value};

/// フィールド読み取りを観測するための合成レコード。
#[derive(Debug)]
pub struct ProbeRecord {
    _private: (),
}

impl ProbeRecord {
    pub(crate) fn new() -> Self {
        Self { _private: () }
    }
}

impl FieldSource for ProbeRecord {
    /// どの名前でも成功し、名前自身を返す。
    fn field(&self, name: &str) -> HostResult<Value> {
        Ok(Value::String(name.to_string()))
    }
}
