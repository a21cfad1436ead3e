// パス: src/reflect.rs
// 役割: アクセサ関数が参照するフィールド名を実行時に解決する
// 意図: 実データを与えずに、プローブ越しの 1 回の呼び出しで名前を捕捉する
// 関連ファイル: src/probe.rs, src/value.rs, src/errors.rs
//! アクセサ名解決モジュール
//!
//! 仕様要点:
//! - 解決ごとにプローブを新規生成し、アクセサをちょうど 1 回だけ呼び出す。
//! - 戻り値が文字列ならフィールド名として `Ok`、それ以外は
//!   `ReflectError::NotAnAccessor`。
//! - アクセサ自身の失敗は分類失敗と区別して `ReflectError::Host` で伝搬する。

use crate::errors::{HostError, ReflectError};
use crate::probe::ProbeRecord;
use crate::value::{FieldSource, Value};

/// アクセサ関数が読むフィールド名を解決する。
///
/// アクセサは `FieldSource` 越しにフィールドを参照する任意の呼び出し可能値。
/// プローブのフィールド参照は常に成功して名前自身を文字列で返すため、
/// 整形式のアクセサなら戻り値がそのままフィールド名になる。
///
/// ```
/// use record_reflect::{accessor_name, FieldSource};
///
/// let resolved = accessor_name(|r: &dyn FieldSource| r.field("name"));
/// assert_eq!(resolved.unwrap(), "name");
/// ```
///
/// 制約: 観測できるのは最上位の直接参照のみ。参照結果に対する連鎖参照
/// （`r.field("a")?.field("b")`）は文字列値への参照となり `FIELD020` で
/// 失敗する。フィールド読み取りと無関係な文字列定数を返すアクセサは、
/// その文字列を読み取ったものと区別できない（仕様上保存される制限）。
pub fn accessor_name<F>(accessor: F) -> Result<String, ReflectError>
where
    F: FnOnce(&dyn FieldSource) -> Result<Value, HostError>,
{
    let probe = ProbeRecord::new();
    match accessor(&probe)? {
        Value::String(name) => Ok(name),
        _ => Err(ReflectError::NotAnAccessor),
    }
}

/// 分類を行わず、プローブ適用の生の戻り値を返す変種。
///
/// 戻り値をフィールド名として解釈するかどうかは呼び出し側に委ねる。
pub fn probe_accessor<F>(accessor: F) -> Result<Value, HostError>
where
    F: FnOnce(&dyn FieldSource) -> Result<Value, HostError>,
{
    let probe = ProbeRecord::new();
    accessor(&probe)
}
