// パス: src/errors.rs
// 役割: ホスト値操作エラーと名前解決エラーの型を定義する
// 意図: 失敗を [CODE] メッセージ形式で統一し、呼び出し側の分類を容易にする
// 関連ファイル: src/value.rs, src/reflect.rs
//! エラー型の定義（共通フォーマット: \[CODE\] メッセージ）。

use std::error::Error as StdError;
use std::fmt::{self, Display, Formatter};

use thiserror::Error;

#[derive(Debug, Clone)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub msg: String,
}

impl ErrorInfo {
    pub fn new(code: &'static str, msg: impl Into<String>) -> Self {
        Self {
            code,
            msg: msg.into(),
        }
    }
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.msg)
    }
}

/// ホスト側の値操作（フィールド参照など）で発生するエラー。
///
/// 組み込みコード:
/// - `FIELD010`: レコードに存在しないフィールドを参照した。
/// - `FIELD020`: レコードでない値にフィールド参照を適用した。
///
/// アクセサ関数自身が失敗を報告する場合も本型を用いる（コードは任意）。
#[derive(Debug, Clone)]
pub struct HostError(pub ErrorInfo);

impl HostError {
    pub fn new(code: &'static str, msg: impl Into<String>) -> Self {
        Self(ErrorInfo::new(code, msg))
    }
}

impl Display for HostError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}
impl StdError for HostError {}

/// ホスト値操作の結果型。
pub type HostResult<T> = Result<T, HostError>;

/// アクセサ名解決の失敗。
///
/// 分類失敗（アクセサの形が不正）とアクセサ自身の失敗を区別する。
#[derive(Debug, Clone, Error)]
pub enum ReflectError {
    /// 供給された関数を単一フィールドのアクセサとして認識できなかった。
    /// 表示文字列は固定で、細分類は持たない。
    #[error("Not an accessor function!")]
    NotAnAccessor,
    /// アクセサ自身の呼び出しが失敗した。分類失敗とは別系統として伝搬する。
    #[error(transparent)]
    Host(#[from] HostError),
}
