use std::convert::TryFrom;

use crate::{CompoundMap, NamedTag, Tag, Value};

#[test]
fn tag_ids_round_trip() {
    for id in 0u8..=12 {
        let tag = Tag::try_from(id).unwrap();
        assert_eq!(u8::from(tag), id);
    }

    assert!(Tag::try_from(13).is_err());
    assert!(Tag::try_from(255).is_err());
}

#[test]
fn tag_names() {
    assert_eq!(Tag::End.name(), "TAG_END");
    assert_eq!(Tag::ByteArray.name(), "TAG_BYTE_ARRAY");
    assert_eq!(Tag::Compound.to_string(), "TAG_COMPOUND");
}

#[test]
fn values_know_their_tag() {
    assert_eq!(Value::Byte(1).tag(), Tag::Byte);
    assert_eq!(Value::Short(1).tag(), Tag::Short);
    assert_eq!(Value::Int(1).tag(), Tag::Int);
    assert_eq!(Value::Long(1).tag(), Tag::Long);
    assert_eq!(Value::Float(1.0).tag(), Tag::Float);
    assert_eq!(Value::Double(1.0).tag(), Tag::Double);
    assert_eq!(Value::String("".into()).tag(), Tag::String);
    assert_eq!(Value::ByteArray(vec![]).tag(), Tag::ByteArray);
    assert_eq!(Value::IntArray(vec![]).tag(), Tag::IntArray);
    assert_eq!(Value::LongArray(vec![]).tag(), Tag::LongArray);
    assert_eq!(Value::List(Tag::Byte, vec![]).tag(), Tag::List);
    assert_eq!(Value::Compound(CompoundMap::new()).tag(), Tag::Compound);
}

#[test]
fn integral_coercion() {
    assert_eq!(Value::Byte(3).as_i64(), Some(3));
    assert_eq!(Value::Long(i64::MIN).as_i64(), Some(i64::MIN));
    assert_eq!(Value::Double(1.9).as_i64(), Some(1));
    assert_eq!(Value::String("3".into()).as_i64(), None);

    assert_eq!(Value::Short(3).as_f64(), Some(3.0));
    assert_eq!(Value::Double(1.5).as_f64(), Some(1.5));
    assert_eq!(Value::ByteArray(vec![]).as_f64(), None);
}

#[test]
fn container_accessors() {
    assert_eq!(Value::String("abc".into()).as_str(), Some("abc"));
    assert_eq!(Value::Byte(1).as_str(), None);

    let mut entries = CompoundMap::new();
    entries.insert(
        "x".to_owned(),
        NamedTag {
            name: Some("x".to_owned()),
            value: Value::Byte(7),
        },
    );
    let compound = Value::Compound(entries);
    assert_eq!(compound.as_compound().unwrap()["x"].value, Value::Byte(7));
    assert_eq!(compound.as_list(), None);

    let list = Value::List(
        Tag::Int,
        vec![NamedTag {
            name: None,
            value: Value::Int(1),
        }],
    );
    assert_eq!(list.as_list().unwrap().len(), 1);
    assert_eq!(list.as_compound(), None);
}
