// Strongly-typed description of what gets emitted. No token streams here.

use std::fmt;

use serde::Serialize;

use crate::error::{GenError, Result};

/// Number of alternatives in one member of the generated family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Arity(usize);

impl Arity {
    pub fn new(arity: usize) -> Result<Self> {
        if arity < 1 {
            return Err(GenError::InvalidArity { arity });
        }
        Ok(Arity(arity))
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// 1-based alternative indices, in declaration order.
    pub fn indices(self) -> std::ops::RangeInclusive<usize> {
        1..=self.0
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named contract every type parameter of a transform must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// `fn duplicate(&self) -> T`
    Duplicable,
    /// `fn relinquish(&mut self) -> T`
    Relinquishable,
}

impl Capability {
    pub const ALL: [Capability; 2] = [Capability::Duplicable, Capability::Relinquishable];

    /// Trait name as it appears in bounds.
    pub fn bound(self) -> &'static str {
        match self {
            Capability::Duplicable => "Duplicable",
            Capability::Relinquishable => "Relinquishable",
        }
    }

    /// The single method the trait exposes.
    pub fn method(self) -> &'static str {
        match self {
            Capability::Duplicable => "duplicate",
            Capability::Relinquishable => "relinquish",
        }
    }

    /// Whether the transform needs exclusive access to the source payload.
    pub fn takes_mut(self) -> bool {
        matches!(self, Capability::Relinquishable)
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.bound())
    }
}

/// One block of the artifact. The order of a `Vec<Section>` is the
/// declaration order of the emitted file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "section", rename_all = "snake_case")]
pub enum Section {
    /// Sum type, its accessors and its matcher builder.
    Family { arity: Arity },
    /// The runtime-typed container and its matcher.
    Dynamic,
    /// Free exhaustive `matchN` function.
    Match { arity: Arity },
    /// Capability-propagating transform impl.
    Transform { arity: Arity, capability: Capability },
}
