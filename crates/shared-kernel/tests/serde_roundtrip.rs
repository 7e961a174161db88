// crates/shared-kernel/tests/serde_roundtrip.rs
use quality_range_shared_kernel::{ProfileId, SizeValue, SliderRange};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Wrapper {
    id: ProfileId,
    range: SliderRange,
    size: SizeValue,
}

#[test]
fn json_roundtrip() {
    let original = Wrapper {
        id: ProfileId::from("hdtv"),
        range: SliderRange::new(10, 200),
        size: SizeValue::from(2048),
    };
    let json = serde_json::to_string(&original).expect("serializes");
    let decoded: Wrapper = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(decoded, original);
}

#[test]
fn newtypes_serialize_transparently() {
    let json = serde_json::to_string(&SizeValue::from(2048)).expect("serializes");
    assert_eq!(json, "2048");
    let json = serde_json::to_string(&ProfileId::from("3")).expect("serializes");
    assert_eq!(json, "\"3\"");
}
