use crate::error::Result;
use crate::ir::{Arity, Capability, Section};

/// Smallest arity that gets a family of its own.
pub const MIN_FAMILY_ARITY: usize = 2;

/// Lay out the artifact for families `2..=max_arity`.
///
/// Order is part of the artifact's contract:
/// families (with their matchers) ascending, the dynamic variant once, the
/// free `matchN` functions ascending, then every `Duplicable` impl ascending
/// and every `Relinquishable` impl ascending.
pub fn plan(max_arity: usize) -> Result<Vec<Section>> {
    Arity::new(max_arity)?;
    let arities = (MIN_FAMILY_ARITY..=max_arity)
        .map(Arity::new)
        .collect::<Result<Vec<_>>>()?;

    let mut sections = Vec::with_capacity(arities.len() * 4 + 1);
    sections.extend(arities.iter().map(|&arity| Section::Family { arity }));
    sections.push(Section::Dynamic);
    sections.extend(arities.iter().map(|&arity| Section::Match { arity }));
    for capability in Capability::ALL {
        sections.extend(
            arities
                .iter()
                .map(|&arity| Section::Transform { arity, capability }),
        );
    }
    Ok(sections)
}
