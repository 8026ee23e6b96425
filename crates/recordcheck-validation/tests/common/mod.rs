//! Record types shared by the integration tests
//!
//! These mirror the shapes of the structs used by the framework's own
//! cross-language test suites.

#![allow(dead_code)]

use std::sync::OnceLock;

use recordcheck_core::{
    record_type, ElementType, EnumDef, FieldDescriptor, Schema, SchemaRef, TypeArgs, TypeTag, Value,
};

pub static SOME_ENUM: EnumDef = EnumDef::new("SomeEnum", &[(1, "ONE"), (2, "TWO")]);

pub const SOME_ENUM_ONE: i32 = 1;
pub const SOME_ENUM_TWO: i32 = 2;

macro_rules! schema_fn {
    ($fn_name:ident, $name:literal, [$($field:expr),* $(,)?]) => {
        pub fn $fn_name() -> &'static Schema {
            static SCHEMA: OnceLock<Schema> = OnceLock::new();
            SCHEMA.get_or_init(|| {
                Schema::builder($name)
                    $(.field($field))*
                    .build()
                    .expect(concat!("valid schema for ", $name))
            })
        }
    };
}

fn list_of(tag: TypeTag) -> TypeArgs {
    TypeArgs::elements(tag)
}

schema_fn!(one_of_each_schema, "OneOfEach", [
    FieldDescriptor::optional(1, TypeTag::Bool, "im_true"),
    FieldDescriptor::optional(2, TypeTag::Bool, "im_false"),
    FieldDescriptor::optional(3, TypeTag::Byte, "a_bite").with_default(100),
    FieldDescriptor::optional(4, TypeTag::I16, "integer16").with_default(i16::MAX),
    FieldDescriptor::optional(5, TypeTag::I32, "integer32"),
    FieldDescriptor::optional(6, TypeTag::I64, "integer64").with_default(10_000_000_000i64),
    FieldDescriptor::optional(7, TypeTag::Double, "double_precision"),
    FieldDescriptor::optional(8, TypeTag::String, "some_characters"),
    FieldDescriptor::optional(9, TypeTag::String, "zomg_unicode"),
    FieldDescriptor::optional(10, TypeTag::Bool, "what_who"),
    FieldDescriptor::optional(11, TypeTag::Binary, "base64"),
    FieldDescriptor::optional(12, TypeTag::List, "byte_list")
        .with_args(list_of(TypeTag::Byte))
        .with_default(Value::list([1, 2, 3])),
    FieldDescriptor::optional(13, TypeTag::List, "i16_list")
        .with_args(list_of(TypeTag::I16))
        .with_default(Value::list([1, 2, 3])),
    FieldDescriptor::optional(14, TypeTag::List, "i64_list")
        .with_args(list_of(TypeTag::I64))
        .with_default(Value::list([1, 2, 3])),
]);

record_type! {
    pub struct OneOfEach {
        1 => im_true,
        2 => im_false,
        3 => a_bite,
        4 => integer16,
        5 => integer32,
        6 => integer64,
        7 => double_precision,
        8 => some_characters,
        9 => zomg_unicode,
        10 => what_who,
        11 => base64,
        12 => byte_list,
        13 => i16_list,
        14 => i64_list,
    }
    schema = one_of_each_schema;
}

schema_fn!(struct_with_some_enum_schema, "StructWithSomeEnum", [
    FieldDescriptor::optional(1, TypeTag::I32, "blah").with_args(TypeArgs::Enum(&SOME_ENUM)),
]);

record_type! {
    pub struct StructWithSomeEnum {
        1 => blah,
    }
    schema = struct_with_some_enum_schema;
}

schema_fn!(struct_a_schema, "StructA", [
    FieldDescriptor::required(1, TypeTag::String, "s"),
]);

record_type! {
    pub struct StructA {
        1 => s,
    }
    schema = struct_a_schema;
}

schema_fn!(struct_b_schema, "StructB", [
    FieldDescriptor::optional(1, TypeTag::Struct, "aa")
        .with_args(TypeArgs::Struct(SchemaRef::new(struct_a_schema))),
    FieldDescriptor::required(2, TypeTag::Struct, "ab")
        .with_args(TypeArgs::Struct(SchemaRef::new(struct_a_schema))),
]);

record_type! {
    pub struct StructB {
        1 => aa,
        2 => ab,
    }
    schema = struct_b_schema;
}

schema_fn!(bonk_schema, "Bonk", [
    FieldDescriptor::optional(1, TypeTag::String, "message"),
    FieldDescriptor::optional(2, TypeTag::I32, "type"),
]);

record_type! {
    pub struct Bonk {
        1 => message,
        2 => r#type,
    }
    schema = bonk_schema;
}

schema_fn!(bonk_lookalike_schema, "Bonk", [
    FieldDescriptor::optional(1, TypeTag::Double, "weight"),
]);

record_type! {
    /// Distinct record type whose schema reuses the name `Bonk`
    pub struct BonkLookalike {
        1 => weight,
    }
    schema = bonk_lookalike_schema;
}

schema_fn!(nesting_schema, "Nesting", [
    FieldDescriptor::optional(1, TypeTag::Struct, "my_bonk")
        .with_args(TypeArgs::Struct(SchemaRef::new(bonk_schema))),
    FieldDescriptor::optional(2, TypeTag::Struct, "my_ooe")
        .with_args(TypeArgs::Struct(SchemaRef::new(one_of_each_schema))),
]);

record_type! {
    pub struct Nesting {
        1 => my_bonk,
        2 => my_ooe,
    }
    schema = nesting_schema;
}

schema_fn!(large_deltas_schema, "LargeDeltas", [
    FieldDescriptor::optional(500, TypeTag::Bool, "check_true"),
    FieldDescriptor::optional(1500, TypeTag::Bool, "check_false"),
    FieldDescriptor::optional(2500, TypeTag::Set, "a_set2500").with_args(list_of(TypeTag::String)),
    FieldDescriptor::optional(4000, TypeTag::List, "big_numbers").with_args(list_of(TypeTag::I32)),
]);

record_type! {
    pub struct LargeDeltas {
        500 => check_true,
        1500 => check_false,
        2500 => a_set2500,
        4000 => big_numbers,
    }
    schema = large_deltas_schema;
}

schema_fn!(guess_protocol_struct_schema, "GuessProtocolStruct", [
    FieldDescriptor::optional(7, TypeTag::Map, "map_field").with_args(TypeArgs::map(
        ElementType::new(TypeTag::String),
        ElementType::new(TypeTag::String),
    )),
]);

record_type! {
    pub struct GuessProtocolStruct {
        7 => map_field,
    }
    schema = guess_protocol_struct_schema;
}

schema_fn!(struct_with_a_somemap_schema, "StructWithASomemap", [
    FieldDescriptor::required(1, TypeTag::Map, "somemap_field").with_args(TypeArgs::map(
        ElementType::new(TypeTag::I32),
        ElementType::new(TypeTag::I32),
    )),
]);

record_type! {
    pub struct StructWithASomemap {
        1 => somemap_field,
    }
    schema = struct_with_a_somemap_schema;
}

fn set_of(tag: TypeTag) -> ElementType {
    ElementType::with_args(TypeTag::Set, TypeArgs::elements(tag))
}

fn int_to_string_set() -> ElementType {
    ElementType::with_args(
        TypeTag::Map,
        TypeArgs::map(ElementType::new(TypeTag::I32), set_of(TypeTag::String)),
    )
}

schema_fn!(nested_mixedx2_schema, "NestedMixedx2", [
    FieldDescriptor::optional(1, TypeTag::List, "int_set_list")
        .with_args(TypeArgs::nested_elements(set_of(TypeTag::I32))),
    FieldDescriptor::optional(2, TypeTag::Map, "map_int_strset")
        .with_args(TypeArgs::map(ElementType::new(TypeTag::I32), set_of(TypeTag::String))),
    FieldDescriptor::optional(3, TypeTag::List, "map_int_strset_list")
        .with_args(TypeArgs::nested_elements(int_to_string_set())),
]);

record_type! {
    pub struct NestedMixedx2 {
        1 => int_set_list,
        2 => map_int_strset,
        3 => map_int_strset_list,
    }
    schema = nested_mixedx2_schema;
}

schema_fn!(tree_node_schema, "TreeNode", [
    FieldDescriptor::required(1, TypeTag::I32, "value"),
    FieldDescriptor::optional(2, TypeTag::List, "children").with_args(TypeArgs::nested_elements(
        ElementType::with_args(TypeTag::Struct, TypeArgs::Struct(SchemaRef::new(tree_node_schema))),
    )),
]);

record_type! {
    pub struct TreeNode {
        1 => value,
        2 => children,
    }
    schema = tree_node_schema;
}

schema_fn!(xception_schema, "Xception", [
    FieldDescriptor::optional(1, TypeTag::I32, "error_code"),
    FieldDescriptor::optional(2, TypeTag::String, "message"),
]);

record_type! {
    /// Error-carrying record, raised across an RPC boundary
    pub struct Xception {
        1 => error_code,
        2 => message,
    }
    schema = xception_schema;
}

impl std::error::Error for Xception {}

/// Leaf of a [`TreeNode`] chain `depth` levels deep
pub fn tree(depth: usize) -> TreeNode {
    let mut node = TreeNode {
        value: Some(Value::from(0)),
        children: None,
    };
    for level in 1..=depth {
        node = TreeNode {
            value: Some(Value::from(level as i32)),
            children: Some(Value::list([Value::record(node)])),
        };
    }
    node
}

