//! # Category Table Tests
//!
//! Verifies the per-opcode category bitsets and their agreement with the
//! predicates they are built from.

use pretty_assertions::assert_eq;
use spvword_core::Opcode;
use spvword_core::isa::category::{Categories, Category, categories, category_table};

#[test]
fn table_covers_every_opcode_in_order() {
    let table = category_table();
    assert_eq!(table.len(), Opcode::ALL.len());
    assert!(table.iter().map(|&(op, _)| op).eq(Opcode::ALL.iter().copied()));
}

#[test]
fn table_agrees_with_predicates() {
    for &(op, set) in category_table() {
        for &category in Category::ALL {
            assert_eq!(set.contains(category), category.contains(op), "{op} {category}");
        }
    }
}

#[test]
fn type_int_categories() {
    let set = categories(Opcode::TypeInt);
    let names: Vec<&str> = set.iter().map(Category::name).collect();
    assert_eq!(names, vec!["scalar-type", "generates-type"]);
    assert_eq!(set.to_string(), "scalar-type, generates-type");
}

#[test]
fn branch_categories() {
    let set = Opcode::Branch.categories();
    assert!(set.contains(Category::Branch));
    assert!(set.contains(Category::BlockTerminator));
    assert_eq!(set.len(), 2);
}

#[test]
fn nop_has_no_categories() {
    assert!(Opcode::Nop.categories().is_empty());
    assert_eq!(Opcode::Nop.categories(), Categories::EMPTY);
    assert_eq!(Categories::EMPTY.to_string(), "");
}

#[test]
fn collect_builds_set() {
    let set: Categories = [Category::Load, Category::Debug, Category::Load]
        .into_iter()
        .collect();
    assert_eq!(set.len(), 2);
    assert_eq!(set, Categories::EMPTY.with(Category::Debug).with(Category::Load));
}

#[test]
fn names_round_trip() {
    for &category in Category::ALL {
        assert_eq!(Category::from_name(category.name()), Some(category));
    }
    assert_eq!(Category::from_name("scalar_type"), None);
}

#[test]
fn serializes_as_name_list() {
    let json = serde_json::to_string(&Opcode::Branch.categories()).unwrap();
    assert_eq!(json, r#"["branch","block-terminator"]"#);
}
