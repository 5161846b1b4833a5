// crates/shared-kernel/tests/serde_roundtrip.rs
use c2ps_shared_kernel::{ColumnCount, LineCount, PageCount};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Wrapper {
    lines: LineCount,
    pages: PageCount,
    max_col: ColumnCount,
}

#[test]
fn json_roundtrip() {
    let original = Wrapper {
        lines: LineCount::from(42),
        pages: PageCount::from(2),
        max_col: ColumnCount::from(80),
    };
    let json = serde_json::to_string(&original).expect("serializes");
    assert_eq!(json, r#"{"lines":42,"pages":2,"max_col":80}"#);
    let decoded: Wrapper = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(decoded, original);
}
