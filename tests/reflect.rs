// パス: tests/reflect.rs
// 役割: アクセサ名解決の正常系と代表的な失敗ケースを最小構成で検証
// 意図: 分類規則（文字列なら Ok、それ以外は固定メッセージの Err）が回帰しないようにする
// 関連ファイル: src/reflect.rs, src/probe.rs, tests/properties.rs

use record_reflect::{
    accessor_name, probe_accessor, FieldSource, HostError, HostResult, Record, ReflectError, Value,
};

type Accessor = fn(&dyn FieldSource) -> HostResult<Value>;

fn reads_name(r: &dyn FieldSource) -> HostResult<Value> {
    r.field("name")
}

fn reads_nested_city(r: &dyn FieldSource) -> HostResult<Value> {
    // 連鎖参照: 1 段目は文字列 "address" を返すため、2 段目で失敗する
    r.field("address")?.field("city")
}

fn composite_of_two_reads(r: &dyn FieldSource) -> HostResult<Value> {
    let first = r.field("first")?;
    let last = r.field("last")?;
    Ok(Value::Tuple(vec![first, last]))
}

fn constant_int(_: &dyn FieldSource) -> HostResult<Value> {
    Ok(Value::Int(5))
}

fn constant_bool(_: &dyn FieldSource) -> HostResult<Value> {
    Ok(Value::Bool(true))
}

fn constant_unit(_: &dyn FieldSource) -> HostResult<Value> {
    Ok(Value::unit())
}

fn constant_record(_: &dyn FieldSource) -> HostResult<Value> {
    Ok(Value::Record(Record::new()))
}

fn hardcoded_string(_: &dyn FieldSource) -> HostResult<Value> {
    Ok(Value::String("city".into()))
}

fn failing_accessor(_: &dyn FieldSource) -> HostResult<Value> {
    Err(HostError::new("ACC900", "側方効果のあるアクセサ"))
}

#[derive(Clone, Copy)]
struct ResolveCase {
    accessor: Accessor,
    expect: Expect,
    note: &'static str,
}

#[derive(Clone, Copy, Debug)]
enum Expect {
    Name(&'static str),
    NotAnAccessor,
    HostCode(&'static str),
}

fn verify_case(case: &ResolveCase) {
    match (case.expect, accessor_name(case.accessor)) {
        (Expect::Name(expected), Ok(actual)) => assert_eq!(actual, expected, "{}", case.note),
        (Expect::NotAnAccessor, Err(ReflectError::NotAnAccessor)) => {}
        (Expect::HostCode(expected), Err(ReflectError::Host(err))) => {
            assert_eq!(err.0.code, expected, "{}", case.note)
        }
        (expected, outcome) => panic!(
            "{}: expected {:?}, got {:?}",
            case.note, expected, outcome
        ),
    }
}

#[test]
/// 解決器の代表ケースをテーブルドリブンで検証する。
fn resolver_smoke_suite() {
    let cases = [
        ResolveCase {
            accessor: reads_name,
            expect: Expect::Name("name"),
            note: "単一フィールド参照は名前に解決される",
        },
        ResolveCase {
            accessor: hardcoded_string,
            expect: Expect::Name("city"),
            note: "文字列定数は参照と区別できず Ok になる（保存される制限）",
        },
        ResolveCase {
            accessor: constant_int,
            expect: Expect::NotAnAccessor,
            note: "Int 定数は拒否",
        },
        ResolveCase {
            accessor: constant_bool,
            expect: Expect::NotAnAccessor,
            note: "Bool 定数は拒否",
        },
        ResolveCase {
            accessor: constant_unit,
            expect: Expect::NotAnAccessor,
            note: "ユニット値は拒否",
        },
        ResolveCase {
            accessor: constant_record,
            expect: Expect::NotAnAccessor,
            note: "レコードを返すアクセサは拒否",
        },
        ResolveCase {
            accessor: composite_of_two_reads,
            expect: Expect::NotAnAccessor,
            note: "複数参照の合成はタプルになり拒否",
        },
        ResolveCase {
            accessor: reads_nested_city,
            expect: Expect::HostCode("FIELD020"),
            note: "連鎖参照は最上位のみ対応のため FIELD020",
        },
        ResolveCase {
            accessor: failing_accessor,
            expect: Expect::HostCode("ACC900"),
            note: "アクセサ自身の失敗はコードを保って伝搬",
        },
    ];
    for case in &cases {
        verify_case(case);
    }
}

#[test]
fn rejection_displays_fixed_message() {
    let err = accessor_name(constant_int).unwrap_err();
    assert_eq!(err.to_string(), "Not an accessor function!");
    // レコードを返す場合も同一メッセージ（細分類なし）
    let err = accessor_name(constant_record).unwrap_err();
    assert_eq!(err.to_string(), "Not an accessor function!");
}

#[test]
fn resolution_is_idempotent_across_calls() {
    let first = accessor_name(reads_name).unwrap();
    let second = accessor_name(reads_name).unwrap();
    assert_eq!(first, second);

    let e1 = accessor_name(failing_accessor).unwrap_err();
    let e2 = accessor_name(failing_accessor).unwrap_err();
    match (e1, e2) {
        (ReflectError::Host(a), ReflectError::Host(b)) => assert_eq!(a.0.code, b.0.code),
        other => panic!("expected Host errors both times, got {:?}", other),
    }
}

#[test]
fn resolved_name_projects_out_of_real_records() {
    let mut record = Record::new();
    record.insert("name", Value::String("alice".into()));
    record.insert("age", Value::Int(30));

    // 名前を解決してから実レコードへ適用する
    let name = accessor_name(reads_name).unwrap();
    assert!(matches!(record.field(&name), Ok(Value::String(s)) if s == "alice"));

    // 同じアクセサは FieldSource 経由で実レコードにもそのまま適用できる
    assert!(matches!(reads_name(&record), Ok(Value::String(s)) if s == "alice"));
}

#[test]
fn probe_raw_variant_exposes_unclassified_result() {
    let raw = probe_accessor(composite_of_two_reads).unwrap();
    match raw {
        Value::Tuple(items) => {
            assert!(matches!(&items[0], Value::String(s) if s == "first"));
            assert!(matches!(&items[1], Value::String(s) if s == "last"));
        }
        other => panic!("expected Tuple of read names, got {:?}", other),
    }
}
