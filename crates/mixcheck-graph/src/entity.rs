//! Entities of the knowledge graph and the handles that link them

use mixcheck_domain::{Severity, Substance};
use std::fmt;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub(crate) usize);

        impl $name {
            /// Position of the entity in its arena
            pub fn index(&self) -> usize {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}#{}", stringify!($name), self.0)
            }
        }
    };
}

entity_id!(
    /// Handle of a substance node
    SubstanceId
);
entity_id!(
    /// Handle of a psychoactive class
    PsychoactiveClassId
);
entity_id!(
    /// Handle of a chemical class
    ChemicalClassId
);
entity_id!(
    /// Handle of a shared effect
    EffectId
);
entity_id!(
    /// Handle of an unresolved interaction placeholder
    UnresolvedId
);

/// Psychoactive class (stimulant, opioid, ...) and its members
#[derive(Debug, Clone, PartialEq)]
pub struct PsychoactiveClass {
    /// Name as first seen in the feed
    pub name: String,
    /// Member substances
    pub members: Vec<SubstanceId>,
}

/// Chemical class (benzodiazepines, phenethylamines, ...) and its members
#[derive(Debug, Clone, PartialEq)]
pub struct ChemicalClass {
    /// Name as first seen in the feed
    pub name: String,
    /// Member substances
    pub members: Vec<SubstanceId>,
}

/// Effect shared by every substance declaring it
#[derive(Debug, Clone, PartialEq)]
pub struct Effect {
    /// Capitalized display name
    pub name: String,
    /// Reference page of the first declaration
    pub url: Option<String>,
    /// Substances declaring the effect
    pub substances: Vec<SubstanceId>,
}

/// Interaction partner that matched no substance or class
#[derive(Debug, Clone, PartialEq)]
pub struct UnresolvedInteraction {
    /// Name as first seen in the feed
    pub name: String,
    /// Substances listing this partner under any severity
    pub referenced_by: Vec<SubstanceId>,
}

/// Kind of entity an interaction or tolerance name resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetRef {
    /// A substance of the graph
    Substance(SubstanceId),
    /// A psychoactive class
    Psychoactive(PsychoactiveClassId),
    /// A chemical class
    Chemical(ChemicalClassId),
    /// A placeholder for an unknown name
    Unresolved(UnresolvedId),
}

/// Targets of one severity, partitioned by kind
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionBucket {
    /// Direct substance partners
    pub substances: Vec<SubstanceId>,
    /// Psychoactive class partners
    pub psychoactives: Vec<PsychoactiveClassId>,
    /// Chemical class partners
    pub chemicals: Vec<ChemicalClassId>,
    /// Partners that could not be resolved
    pub unresolved: Vec<UnresolvedId>,
}

impl InteractionBucket {
    /// Add a target, ignoring repeats
    pub(crate) fn add(&mut self, target: TargetRef) {
        match target {
            TargetRef::Substance(id) => push_unique(&mut self.substances, id),
            TargetRef::Psychoactive(id) => push_unique(&mut self.psychoactives, id),
            TargetRef::Chemical(id) => push_unique(&mut self.chemicals, id),
            TargetRef::Unresolved(id) => push_unique(&mut self.unresolved, id),
        }
    }

    /// Number of targets of every kind
    pub fn len(&self) -> usize {
        self.substances.len() + self.psychoactives.len() + self.chemicals.len() + self.unresolved.len()
    }

    /// Whether the bucket holds nothing
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All targets in kind order: substances, psychoactive classes, chemical
    /// classes, unresolved
    pub fn targets(&self) -> impl Iterator<Item = TargetRef> + '_ {
        self.substances
            .iter()
            .map(|id| TargetRef::Substance(*id))
            .chain(self.psychoactives.iter().map(|id| TargetRef::Psychoactive(*id)))
            .chain(self.chemicals.iter().map(|id| TargetRef::Chemical(*id)))
            .chain(self.unresolved.iter().map(|id| TargetRef::Unresolved(*id)))
    }
}

/// Entities sharing tolerance with a substance
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrossTolerance {
    /// Substances
    pub substances: Vec<SubstanceId>,
    /// Psychoactive classes
    pub psychoactives: Vec<PsychoactiveClassId>,
    /// Chemical classes
    pub chemicals: Vec<ChemicalClassId>,
}

impl CrossTolerance {
    /// Add a target; unresolved names carry no tolerance information
    pub(crate) fn add(&mut self, target: TargetRef) {
        match target {
            TargetRef::Substance(id) => push_unique(&mut self.substances, id),
            TargetRef::Psychoactive(id) => push_unique(&mut self.psychoactives, id),
            TargetRef::Chemical(id) => push_unique(&mut self.chemicals, id),
            TargetRef::Unresolved(_) => {}
        }
    }

    /// Whether nothing shares tolerance
    pub fn is_empty(&self) -> bool {
        self.substances.is_empty() && self.psychoactives.is_empty() && self.chemicals.is_empty()
    }
}

/// A substance together with its links into the graph
#[derive(Debug, Clone)]
pub struct SubstanceNode {
    /// Handle of this node
    pub id: SubstanceId,
    /// The decoded record the node was built from
    pub record: Substance,
    /// Psychoactive classes the substance belongs to
    pub psychoactive_classes: Vec<PsychoactiveClassId>,
    /// Chemical classes the substance belongs to
    pub chemical_classes: Vec<ChemicalClassId>,
    /// Shared effects
    pub effects: Vec<EffectId>,
    /// Tolerance links
    pub cross_tolerance: CrossTolerance,
    dangerous: InteractionBucket,
    unsafe_bucket: InteractionBucket,
    uncertain: InteractionBucket,
}

impl SubstanceNode {
    pub(crate) fn new(id: SubstanceId, record: Substance) -> Self {
        Self {
            id,
            record,
            psychoactive_classes: Vec::new(),
            chemical_classes: Vec::new(),
            effects: Vec::new(),
            cross_tolerance: CrossTolerance::default(),
            dangerous: InteractionBucket::default(),
            unsafe_bucket: InteractionBucket::default(),
            uncertain: InteractionBucket::default(),
        }
    }

    /// Name of the substance
    pub fn name(&self) -> &str {
        &self.record.name
    }

    /// Linked interaction targets for one severity
    pub fn bucket(&self, severity: Severity) -> &InteractionBucket {
        match severity {
            Severity::Dangerous => &self.dangerous,
            Severity::Unsafe => &self.unsafe_bucket,
            Severity::Uncertain => &self.uncertain,
        }
    }

    pub(crate) fn bucket_mut(&mut self, severity: Severity) -> &mut InteractionBucket {
        match severity {
            Severity::Dangerous => &mut self.dangerous,
            Severity::Unsafe => &mut self.unsafe_bucket,
            Severity::Uncertain => &mut self.uncertain,
        }
    }
}

pub(crate) fn push_unique<T: PartialEq>(items: &mut Vec<T>, item: T) {
    if !items.contains(&item) {
        items.push(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_ignores_repeats() {
        let mut bucket = InteractionBucket::default();
        bucket.add(TargetRef::Substance(SubstanceId(3)));
        bucket.add(TargetRef::Substance(SubstanceId(3)));
        bucket.add(TargetRef::Unresolved(UnresolvedId(0)));
        assert_eq!(bucket.len(), 2);
        assert_eq!(
            bucket.targets().collect::<Vec<_>>(),
            vec![TargetRef::Substance(SubstanceId(3)), TargetRef::Unresolved(UnresolvedId(0))]
        );
    }

    #[test]
    fn test_cross_tolerance_drops_unresolved() {
        let mut tolerance = CrossTolerance::default();
        tolerance.add(TargetRef::Unresolved(UnresolvedId(1)));
        assert!(tolerance.is_empty());
        tolerance.add(TargetRef::Chemical(ChemicalClassId(0)));
        assert!(!tolerance.is_empty());
    }

    #[test]
    fn test_id_display() {
        assert_eq!(SubstanceId(7).to_string(), "SubstanceId#7");
    }
}
