// Type Tree Construction Tests
//
// Valid signatures must produce exactly the expected type tree.

use crate::ast::{BasicType, TypeNode, render};
use crate::{parse, parse_single};
use pretty_assertions::assert_eq;

fn basic(basic: BasicType) -> TypeNode {
    TypeNode::Basic(basic)
}

fn array(element: TypeNode) -> TypeNode {
    TypeNode::Array(Box::new(element))
}

// ==================== SEQUENCES ====================

#[test]
fn test_empty_signature_is_empty_sequence() {
    assert_eq!(parse("").unwrap(), vec![]);
}

#[test]
fn test_every_basic_code() {
    for expected in BasicType::ALL {
        let sig = expected.code().to_string();
        assert_eq!(parse(&sig).unwrap(), vec![basic(expected)], "signature {:?}", sig);
    }
}

#[test]
fn test_top_level_sequence_of_basics() {
    assert_eq!(
        parse("yus").unwrap(),
        vec![basic(BasicType::Byte), basic(BasicType::UInt32), basic(BasicType::String)]
    );
}

#[test]
fn test_variant_is_leaf() {
    assert_eq!(parse("vv").unwrap(), vec![TypeNode::Variant, TypeNode::Variant]);
}

// ==================== ARRAYS ====================

#[test]
fn test_array_of_basic() {
    assert_eq!(parse("ay").unwrap(), vec![array(basic(BasicType::Byte))]);
}

#[test]
fn test_array_consumes_one_type() {
    // "ans" is an array of int16 followed by a string
    assert_eq!(
        parse("ans").unwrap(),
        vec![array(basic(BasicType::Int16)), basic(BasicType::String)]
    );
}

#[test]
fn test_nested_arrays() {
    assert_eq!(parse("aai").unwrap(), vec![array(array(basic(BasicType::Int32)))]);
}

#[test]
fn test_dict_array() {
    assert_eq!(
        parse("a{sv}").unwrap(),
        vec![array(TypeNode::DictEntry {
            key: BasicType::String,
            value: Box::new(TypeNode::Variant),
        })]
    );
}

#[test]
fn test_dict_value_may_be_container() {
    assert_eq!(
        parse("a{ta(si)}").unwrap(),
        vec![array(TypeNode::DictEntry {
            key: BasicType::UInt64,
            value: Box::new(array(TypeNode::Struct(vec![
                basic(BasicType::String),
                basic(BasicType::Int32),
            ]))),
        })]
    );
}

// ==================== STRUCTS ====================

#[test]
fn test_single_member_struct() {
    assert_eq!(
        parse("(u)").unwrap(),
        vec![TypeNode::Struct(vec![basic(BasicType::UInt32)])]
    );
}

#[test]
fn test_nested_structs() {
    let parsed = parse("((u)yyy(b(iiii)))").unwrap();
    assert_eq!(parsed.len(), 1);
    match &parsed[0] {
        TypeNode::Struct(members) => {
            assert_eq!(members.len(), 5);
            assert_eq!(members[0], TypeNode::Struct(vec![basic(BasicType::UInt32)]));
            assert!(matches!(&members[4], TypeNode::Struct(inner) if inner.len() == 2));
        }
        other => panic!("Expected struct, got {:?}", other),
    }
}

#[test]
fn test_array_of_struct() {
    assert_eq!(
        parse("a(usv)").unwrap(),
        vec![array(TypeNode::Struct(vec![
            basic(BasicType::UInt32),
            basic(BasicType::String),
            TypeNode::Variant,
        ]))]
    );
}

// ==================== SINGLE TYPES ====================

#[test]
fn test_parse_single_accepts_one_type() {
    assert_eq!(
        parse_single("a{ss}").unwrap().signature(),
        "a{ss}"
    );
}

#[test]
fn test_parse_single_rejects_sequences() {
    assert!(parse_single("uu").is_err());
    assert!(parse_single("").is_err());
}

// ==================== RENDERING ====================

#[test]
fn test_render_is_identity_on_valid_signatures() {
    for sig in ["", "y", "a{sv}", "(yyyyuta{tv})", "a(usv)", "((b)(b)(t))", "aaah", "ga{oa{sa{sv}}}"] {
        assert_eq!(render(&parse(sig).unwrap()), sig);
    }
}

#[test]
fn test_basic_from_code() {
    assert_eq!(BasicType::from_code('h'), Some(BasicType::UnixFd));
    assert_eq!(BasicType::from_code('v'), None);
    assert_eq!(BasicType::from_code('('), None);
}

#[test]
fn test_is_basic() {
    assert!(parse_single("g").unwrap().is_basic());
    assert!(!parse_single("v").unwrap().is_basic());
    assert!(!parse_single("ay").unwrap().is_basic());
}
