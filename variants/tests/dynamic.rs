use std::any::TypeId;

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use variants::{Variant, VariantMatcher};

#[test]
fn extraction_is_type_checked() {
    let value = Variant::make(42_i32);
    assert!(value.is_a::<i32>());
    assert!(!value.is_a::<i64>());
    assert_eq!(value.get::<i32>(), Some(&42));
    assert_eq!(value.get::<i64>(), None);
    assert_eq!(value.get::<String>(), None);
    assert_eq!(value.type_id(), TypeId::of::<i32>());
    assert_eq!(value.type_name(), "i32");
}

#[test]
fn get_mut_edits_in_place() {
    let mut value = Variant::make(vec![1u8]);
    assert!(value.get_mut::<Vec<u16>>().is_none());
    if let Some(bytes) = value.get_mut::<Vec<u8>>() {
        bytes.push(2);
    }
    assert_eq!(value.get::<Vec<u8>>(), Some(&vec![1, 2]));
}

#[test]
fn into_inner_hands_back_the_container_on_mismatch() {
    let value = Variant::make(7u8);
    let value = value.into_inner::<u16>().unwrap_err();
    assert!(value.is_a::<u8>());
    assert_eq!(value.into_inner::<u8>().ok(), Some(7));
}

#[test]
fn matcher_dispatches_on_runtime_type() {
    let value = Variant::make(String::from("abc"));
    let len = value
        .if_is::<i32, _>(|n| *n as usize)
        .if_is::<String>(|s| s.len())
        .invoke();
    assert_eq!(len, Some(3));
}

#[test]
fn unregistered_type_yields_nothing() {
    let value = Variant::make(1.5_f64);
    let result = value.if_is::<i32, _>(|_| "int").if_is::<String>(|_| "text").invoke();
    assert_eq!(result, None);
}

#[test]
fn empty_matcher_yields_nothing() {
    let value = Variant::make('x');
    assert_eq!(VariantMatcher::<()>::new(&value).invoke(), None);
}

#[test]
fn later_registration_for_a_type_wins() {
    let value = Variant::make(10u32);
    let result = value.if_is::<u32, _>(|n| n + 1).if_is::<u32>(|n| n * 3).invoke();
    assert_eq!(result, Some(30));
}

#[test]
fn debug_names_the_stored_type() {
    let value = Variant::make(true);
    assert_eq!(format!("{value:?}"), r#"Variant { type_name: "bool", .. }"#);
}

proptest! {
    #[test]
    fn stored_value_round_trips_only_as_its_own_type(n in any::<i64>(), s in ".{0,8}") {
        let number = Variant::make(n);
        prop_assert_eq!(number.get::<i64>(), Some(&n));
        prop_assert!(number.get::<u64>().is_none());

        let text = Variant::make(s.clone());
        prop_assert_eq!(text.get::<String>(), Some(&s));
        prop_assert!(text.get::<&str>().is_none());
        prop_assert!(text.get::<i64>().is_none());
    }
}
