use pretty_assertions::assert_eq;
use proptest::prelude::*;

use variants::{Duplicable, Relinquishable, Variant2, Variant3, Variant4};

/// A payload that is not `Clone` and records how often it was duplicated.
#[derive(Debug, PartialEq)]
struct Ticket {
    serial: u32,
    generation: u32,
}

impl Duplicable<Ticket> for Ticket {
    fn duplicate(&self) -> Ticket {
        Ticket {
            serial: self.serial,
            generation: self.generation + 1,
        }
    }
}

impl Relinquishable<Ticket> for Ticket {
    fn relinquish(&mut self) -> Ticket {
        let taken = Ticket {
            serial: self.serial,
            generation: self.generation,
        };
        self.serial = 0;
        taken
    }
}

#[test]
fn duplicate_applies_the_payload_capability() {
    let value: Variant2<String, Ticket> = Variant2::V2(Ticket { serial: 7, generation: 0 });
    let copy = value.duplicate();
    assert_eq!(copy.index(), 2);
    assert_eq!(copy, Variant2::V2(Ticket { serial: 7, generation: 1 }));
    // the source is untouched
    assert_eq!(value, Variant2::V2(Ticket { serial: 7, generation: 0 }));
}

#[test]
fn relinquish_moves_the_payload_out() {
    let mut value: Variant3<String, Vec<u8>, Option<u8>> = Variant3::V2(vec![1, 2, 3]);
    let moved = value.relinquish();
    assert_eq!(moved, Variant3::V2(vec![1, 2, 3]));
    assert_eq!(value, Variant3::V2(Vec::new()));
}

#[test]
fn relinquish_uses_the_custom_capability() {
    let mut value: Variant2<Ticket, String> = Variant2::V1(Ticket { serial: 4, generation: 2 });
    let moved = value.relinquish();
    assert_eq!(moved.as_v1(), Some(&Ticket { serial: 4, generation: 2 }));
    assert_eq!(value.as_v1().map(|ticket| ticket.serial), Some(0));
}

#[test]
fn nested_sums_propagate_capabilities() {
    let inner: Variant2<String, Vec<u8>> = Variant2::V1("deep".to_owned());
    let mut outer: Variant2<Variant2<String, Vec<u8>>, Option<u8>> = Variant2::V1(inner);
    assert_eq!(outer.duplicate(), outer.clone());

    let moved = outer.relinquish();
    assert_eq!(moved, Variant2::V1(Variant2::V1("deep".to_owned())));
    assert_eq!(outer, Variant2::V1(Variant2::V1(String::new())));
}

fn make4(k: usize, payload: String) -> Variant4<String, String, String, String> {
    match k {
        1 => Variant4::V1(payload),
        2 => Variant4::V2(payload),
        3 => Variant4::V3(payload),
        _ => Variant4::V4(payload),
    }
}

proptest! {
    #[test]
    fn duplicate_preserves_shape(k in 1usize..=4, payload in ".{0,12}") {
        let value = make4(k, payload);
        let copy = value.duplicate();
        prop_assert_eq!(copy.index(), k);
        prop_assert_eq!(copy, value);
    }

    #[test]
    fn relinquish_preserves_shape(k in 1usize..=4, payload in ".{0,12}") {
        let mut value = make4(k, payload.clone());
        let moved = value.relinquish();
        prop_assert_eq!(moved.index(), k);
        prop_assert_eq!(value.index(), k);
        prop_assert_eq!(moved, make4(k, payload));
        prop_assert_eq!(value, make4(k, String::new()));
    }
}
