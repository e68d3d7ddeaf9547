//! The immutable knowledge graph

use crate::arena::NamedArena;
use crate::entity::{
    ChemicalClass, Effect, PsychoactiveClass, SubstanceId, SubstanceNode, TargetRef,
    UnresolvedInteraction,
};
use crate::{BuildStats, InteractionResolver};
use mixcheck_domain::Severity;

/// Substances, classes, effects and interaction links of one data load
///
/// A graph is produced by [`GraphBuilder`](crate::GraphBuilder) and never
/// changes afterwards. Lookups by name use meaning-equality, so
/// `graph.substance("mdma")` finds the node named `MDMA`.
#[derive(Debug, Clone)]
pub struct KnowledgeGraph {
    substances: NamedArena<SubstanceNode>,
    psychoactive_classes: NamedArena<PsychoactiveClass>,
    chemical_classes: NamedArena<ChemicalClass>,
    effects: NamedArena<Effect>,
    unresolved: NamedArena<UnresolvedInteraction>,
    stats: BuildStats,
}

impl KnowledgeGraph {
    pub(crate) fn from_parts(
        substances: NamedArena<SubstanceNode>,
        psychoactive_classes: NamedArena<PsychoactiveClass>,
        chemical_classes: NamedArena<ChemicalClass>,
        effects: NamedArena<Effect>,
        unresolved: NamedArena<UnresolvedInteraction>,
        stats: BuildStats,
    ) -> Self {
        Self {
            substances,
            psychoactive_classes,
            chemical_classes,
            effects,
            unresolved,
            stats,
        }
    }

    /// Substance with a meaning-equal name
    pub fn substance(&self, name: &str) -> Option<&SubstanceNode> {
        self.substances.by_name(name)
    }

    /// Substance by handle
    pub fn substance_by_id(&self, id: SubstanceId) -> Option<&SubstanceNode> {
        self.substances.get(id.index())
    }

    /// All substances, in feed order
    pub fn substances(&self) -> &[SubstanceNode] {
        self.substances.items()
    }

    /// Psychoactive class with a meaning-equal name
    pub fn psychoactive_class(&self, name: &str) -> Option<&PsychoactiveClass> {
        self.psychoactive_classes.by_name(name)
    }

    /// All psychoactive classes
    pub fn psychoactive_classes(&self) -> &[PsychoactiveClass] {
        self.psychoactive_classes.items()
    }

    /// Chemical class with a meaning-equal name
    pub fn chemical_class(&self, name: &str) -> Option<&ChemicalClass> {
        self.chemical_classes.by_name(name)
    }

    /// All chemical classes
    pub fn chemical_classes(&self) -> &[ChemicalClass] {
        self.chemical_classes.items()
    }

    /// Effect with a meaning-equal name
    pub fn effect(&self, name: &str) -> Option<&Effect> {
        self.effects.by_name(name)
    }

    /// All effects
    pub fn effects(&self) -> &[Effect] {
        self.effects.items()
    }

    /// Unresolved placeholder with a meaning-equal name
    pub fn unresolved(&self, name: &str) -> Option<&UnresolvedInteraction> {
        self.unresolved.by_name(name)
    }

    /// All unresolved placeholders
    pub fn unresolved_interactions(&self) -> &[UnresolvedInteraction] {
        self.unresolved.items()
    }

    /// Display name of a linked entity
    pub fn target_name(&self, target: TargetRef) -> Option<&str> {
        match target {
            TargetRef::Substance(id) => self.substances.get(id.index()).map(|n| n.name()),
            TargetRef::Psychoactive(id) => self
                .psychoactive_classes
                .get(id.index())
                .map(|c| c.name.as_str()),
            TargetRef::Chemical(id) => self
                .chemical_classes
                .get(id.index())
                .map(|c| c.name.as_str()),
            TargetRef::Unresolved(id) => self.unresolved.get(id.index()).map(|u| u.name.as_str()),
        }
    }

    /// Names of everything linked from `substance` under `severity`
    pub fn interaction_partners(&self, substance: &SubstanceNode, severity: Severity) -> Vec<&str> {
        substance
            .bucket(severity)
            .targets()
            .filter_map(|target| self.target_name(target))
            .collect()
    }

    /// Number of substances
    pub fn len(&self) -> usize {
        self.substances.len()
    }

    /// Whether the graph holds no substances
    pub fn is_empty(&self) -> bool {
        self.substances.len() == 0
    }

    /// Counts recorded while building
    pub fn stats(&self) -> &BuildStats {
        &self.stats
    }

    /// Resolver answering interaction queries against this graph
    pub fn resolver(&self) -> InteractionResolver<'_> {
        InteractionResolver::new(self)
    }

    /// Worst known severity of combining `a` and `b`
    pub fn resolve(&self, a: &str, b: &str) -> Option<Severity> {
        self.resolver().resolve(a, b)
    }
}
