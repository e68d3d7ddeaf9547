//! Knowledge graph construction
//!
//! The builder consumes a decoded substance list once and produces an
//! immutable [`KnowledgeGraph`]. Steps run in a fixed order because the
//! linking steps resolve names against the classes and substances created by
//! the earlier ones:
//!
//! 1. Class unification
//! 2. Effect unification
//! 3. Cross-tolerance linking
//! 4. Interaction linking

use crate::arena::NamedArena;
use crate::entity::{
    push_unique, ChemicalClass, ChemicalClassId, Effect, EffectId, PsychoactiveClass,
    PsychoactiveClassId, SubstanceId, SubstanceNode, TargetRef, UnresolvedId,
    UnresolvedInteraction,
};
use crate::{BuildStats, GraphConfig, GraphError, KnowledgeGraph};
use mixcheck_domain::names::capitalize_words;
use mixcheck_domain::{Severity, Substance};
use std::time::Instant;

/// Builds knowledge graphs from decoded substance lists
///
/// # Examples
///
/// ```
/// use mixcheck_domain::{Severity, Substance};
/// use mixcheck_graph::{GraphBuilder, GraphError};
///
/// let builder = GraphBuilder::default_config();
///
/// // A feed this small is rejected as incomplete
/// let result = builder.build(vec![Substance::new("MDMA")]);
/// assert!(matches!(result, Err(GraphError::TooFewSubstances { found: 1, .. })));
///
/// let mut feed: Vec<Substance> = (0..60).map(|i| Substance::new(format!("Substance {}", i))).collect();
/// feed.push(Substance::new("MDMA").with_interactions(Severity::Dangerous, ["Tramadol"]));
/// feed.push(Substance::new("Tramadol"));
///
/// let graph = builder.build(feed).unwrap();
/// assert_eq!(graph.resolve("MDMA", "Tramadol"), Some(Severity::Dangerous));
/// ```
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    config: GraphConfig,
}

impl GraphBuilder {
    /// Create a new builder with the given configuration
    pub fn new(config: GraphConfig) -> Self {
        Self { config }
    }

    /// Create a builder with default configuration
    pub fn default_config() -> Self {
        Self::new(GraphConfig::default())
    }

    /// Configuration in use
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Build a graph from a decoded substance list
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::TooFewSubstances`] when the list holds fewer
    /// named substances than the configured minimum; records with a blank
    /// name are skipped and do not count. Nothing else can fail: names
    /// that match nothing become placeholders or are dropped.
    pub fn build(&self, substances: Vec<Substance>) -> Result<KnowledgeGraph, GraphError> {
        let start = Instant::now();

        let total = substances.len();
        let substances: Vec<Substance> = substances
            .into_iter()
            .filter(|record| !is_blank(&record.name))
            .collect();
        let blank_substances = total - substances.len();
        if blank_substances > 0 {
            tracing::warn!("Skipping {} substances without a name", blank_substances);
        }

        if substances.len() < self.config.min_substances {
            tracing::warn!(
                "Rejecting feed with {} substances (minimum {})",
                substances.len(),
                self.config.min_substances
            );
            return Err(GraphError::TooFewSubstances {
                found: substances.len(),
                required: self.config.min_substances,
            });
        }

        let mut state = BuildState::new(substances);
        state.stats.blank_substances = blank_substances;

        state.unify_classes();
        tracing::debug!(
            "Unified {} psychoactive and {} chemical classes",
            state.psychoactives.len(),
            state.chemicals.len()
        );

        state.unify_effects();
        tracing::debug!("Unified {} effects", state.effects.len());

        state.link_cross_tolerances();
        tracing::debug!(
            "Linked cross-tolerances ({} dropped)",
            state.stats.dropped_cross_tolerances
        );

        state.link_interactions();
        tracing::debug!(
            "Linked {} interactions ({} unresolved partners)",
            state.stats.total_links(),
            state.unresolved.len()
        );

        let build_time_ms = start.elapsed().as_millis() as u64;
        let graph = state.finish(build_time_ms);

        tracing::info!(
            "Built knowledge graph: {} substances, {} interaction links in {}ms",
            graph.stats().substances,
            graph.stats().total_links(),
            build_time_ms
        );

        Ok(graph)
    }
}

/// Entities under construction, discarded once the graph is produced
struct BuildState {
    substances: NamedArena<SubstanceNode>,
    psychoactives: NamedArena<PsychoactiveClass>,
    chemicals: NamedArena<ChemicalClass>,
    effects: NamedArena<Effect>,
    unresolved: NamedArena<UnresolvedInteraction>,
    stats: BuildStats,
}

impl BuildState {
    fn new(records: Vec<Substance>) -> Self {
        let mut substances = NamedArena::new();
        let mut stats = BuildStats::default();

        for record in records {
            let id = SubstanceId(substances.len());
            let name = record.name.clone();
            if substances.insert(&name, SubstanceNode::new(id, record)).is_none() {
                tracing::warn!("Skipping duplicate substance '{}'", name);
                stats.duplicate_substances += 1;
            }
        }

        Self {
            substances,
            psychoactives: NamedArena::new(),
            chemicals: NamedArena::new(),
            effects: NamedArena::new(),
            unresolved: NamedArena::new(),
            stats,
        }
    }

    /// Create one class entity per distinct class name and record membership
    fn unify_classes(&mut self) {
        let Self {
            substances,
            psychoactives,
            chemicals,
            ..
        } = self;

        for node in substances.items_mut() {
            for name in &node.record.psychoactive_classes {
                if is_blank(name) {
                    continue;
                }
                let position = psychoactives.find_or_insert_with(name, || PsychoactiveClass {
                    name: name.trim().to_string(),
                    members: Vec::new(),
                });
                if let Some(class) = psychoactives.get_mut(position) {
                    push_unique(&mut class.members, node.id);
                }
                push_unique(&mut node.psychoactive_classes, PsychoactiveClassId(position));
            }

            for name in &node.record.chemical_classes {
                if is_blank(name) {
                    continue;
                }
                let position = chemicals.find_or_insert_with(name, || ChemicalClass {
                    name: name.trim().to_string(),
                    members: Vec::new(),
                });
                if let Some(class) = chemicals.get_mut(position) {
                    push_unique(&mut class.members, node.id);
                }
                push_unique(&mut node.chemical_classes, ChemicalClassId(position));
            }
        }
    }

    /// Share one effect entity between all substances declaring it
    fn unify_effects(&mut self) {
        let Self {
            substances,
            effects,
            ..
        } = self;

        for node in substances.items_mut() {
            for declared in &node.record.effects {
                if is_blank(&declared.name) {
                    continue;
                }
                let position = effects.find_or_insert_with(&declared.name, || Effect {
                    name: capitalize_words(declared.name.trim()),
                    url: declared.url.clone(),
                    substances: Vec::new(),
                });
                if let Some(effect) = effects.get_mut(position) {
                    push_unique(&mut effect.substances, node.id);
                }
                push_unique(&mut node.effects, EffectId(position));
            }
        }
    }

    /// Link tolerance names to classes or substances; unknown names are dropped
    fn link_cross_tolerances(&mut self) {
        let mut links = Vec::new();

        for node in self.substances.items() {
            for name in &node.record.cross_tolerances {
                if is_blank(name) {
                    continue;
                }
                match self.resolve_known(name) {
                    Some(target) => links.push((node.id, target)),
                    None => {
                        tracing::debug!(
                            "Dropping cross-tolerance '{}' of '{}': no match",
                            name,
                            node.record.name
                        );
                        self.stats.dropped_cross_tolerances += 1;
                    }
                }
            }
        }

        for (id, target) in links {
            if let Some(node) = self.substances.get_mut(id.index()) {
                node.cross_tolerance.add(target);
            }
        }
    }

    /// Link every declared interaction name of every severity
    ///
    /// Placeholders are shared across substances and severities, so an unknown
    /// name listed by many substances yields a single placeholder.
    fn link_interactions(&mut self) {
        for position in 0..self.substances.len() {
            let declared: Vec<(SubstanceId, Severity, String)> = match self.substances.get(position) {
                Some(node) => Severity::ALL
                    .iter()
                    .flat_map(move |severity| {
                        node.record
                            .interactions
                            .get(*severity)
                            .iter()
                            .map(move |name| (node.id, *severity, name.clone()))
                    })
                    .collect(),
                None => continue,
            };

            for (id, severity, name) in declared {
                if is_blank(&name) {
                    continue;
                }
                let target = self.resolve_interaction_target(&name);
                self.attach(id, severity, target);
            }
        }
    }

    /// Psychoactive class, then chemical class, then substance
    fn resolve_known(&self, name: &str) -> Option<TargetRef> {
        if let Some(position) = self.psychoactives.find(name) {
            return Some(TargetRef::Psychoactive(PsychoactiveClassId(position)));
        }
        if let Some(position) = self.chemicals.find(name) {
            return Some(TargetRef::Chemical(ChemicalClassId(position)));
        }
        self.substances
            .find(name)
            .map(|position| TargetRef::Substance(SubstanceId(position)))
    }

    /// Known entity if any, else the (possibly new) placeholder for `name`
    ///
    /// A new placeholder takes the capitalized form of the first spelling seen.
    fn resolve_interaction_target(&mut self, name: &str) -> TargetRef {
        if let Some(target) = self.resolve_known(name) {
            return target;
        }
        let position = self.unresolved.find_or_insert_with(name, || UnresolvedInteraction {
            name: capitalize_words(name.trim()),
            referenced_by: Vec::new(),
        });
        TargetRef::Unresolved(UnresolvedId(position))
    }

    /// Place `target` in the `severity` bucket of `from`
    fn attach(&mut self, from: SubstanceId, severity: Severity, target: TargetRef) {
        if let TargetRef::Unresolved(placeholder) = target {
            if let Some(unresolved) = self.unresolved.get_mut(placeholder.index()) {
                push_unique(&mut unresolved.referenced_by, from);
            }
        }

        if let Some(node) = self.substances.get_mut(from.index()) {
            let bucket = node.bucket_mut(severity);
            let before = bucket.len();
            bucket.add(target);
            if bucket.len() > before {
                self.stats.record_link(severity);
            }
        }
    }

    fn finish(mut self, build_time_ms: u64) -> KnowledgeGraph {
        self.stats.substances = self.substances.len();
        self.stats.psychoactive_classes = self.psychoactives.len();
        self.stats.chemical_classes = self.chemicals.len();
        self.stats.effects = self.effects.len();
        self.stats.unresolved = self.unresolved.len();
        self.stats.build_time_ms = build_time_ms;

        KnowledgeGraph::from_parts(
            self.substances,
            self.psychoactives,
            self.chemicals,
            self.effects,
            self.unresolved,
            self.stats,
        )
    }
}

fn is_blank(name: &str) -> bool {
    name.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mixcheck_domain::EffectRef;

    fn filler(count: usize) -> Vec<Substance> {
        (0..count).map(|i| Substance::new(format!("Filler {}", i))).collect()
    }

    fn build(extra: Vec<Substance>) -> KnowledgeGraph {
        let mut feed = filler(50);
        feed.extend(extra);
        GraphBuilder::default_config().build(feed).unwrap()
    }

    #[test]
    fn test_rejects_small_feed() {
        let result = GraphBuilder::default_config().build(filler(49));
        assert_eq!(
            result.err(),
            Some(GraphError::TooFewSubstances { found: 49, required: 50 })
        );
    }

    #[test]
    fn test_accepts_exactly_minimum() {
        assert!(GraphBuilder::default_config().build(filler(50)).is_ok());
    }

    #[test]
    fn test_classes_unified_across_case() {
        let graph = build(vec![
            Substance::new("Diazepam").with_chemical_classes(["Benzodiazepines"]),
            Substance::new("Alprazolam").with_chemical_classes(["benzodiazepines"]),
        ]);

        assert_eq!(graph.chemical_classes().len(), 1);
        let class = graph.chemical_class("BENZODIAZEPINES").unwrap();
        assert_eq!(class.name, "Benzodiazepines");
        assert_eq!(class.members.len(), 2);
    }

    #[test]
    fn test_effects_capitalized_and_shared() {
        let graph = build(vec![
            Substance::new("MDMA").with_effect(EffectRef::new("euphoria", Some("https://e.org/euphoria".into()))),
            Substance::new("Amphetamine").with_effect(EffectRef::new("EUPHORIA", None)),
        ]);

        assert_eq!(graph.effects().len(), 1);
        let effect = graph.effect("Euphoria").unwrap();
        assert_eq!(effect.name, "Euphoria");
        assert_eq!(effect.url.as_deref(), Some("https://e.org/euphoria"));
        assert_eq!(effect.substances.len(), 2);
    }

    #[test]
    fn test_cross_tolerance_order_and_drop() {
        let graph = build(vec![
            Substance::new("LSD")
                .with_psychoactive_classes(["Psychedelics"])
                .with_cross_tolerances(["psychedelics", "Psilocybin mushrooms", "Unknown thing"]),
            Substance::new("Psilocybin mushrooms"),
        ]);

        let lsd = graph.substance("LSD").unwrap();
        assert_eq!(lsd.cross_tolerance.psychoactives.len(), 1);
        assert_eq!(lsd.cross_tolerance.substances.len(), 1);
        assert_eq!(graph.stats().dropped_cross_tolerances, 1);
        assert!(graph.unresolved_interactions().is_empty());
    }

    #[test]
    fn test_class_takes_priority_over_substance() {
        let graph = build(vec![
            Substance::new("Opioids"),
            Substance::new("Tramadol").with_psychoactive_classes(["Opioids"]),
            Substance::new("MDMA").with_interactions(Severity::Dangerous, ["opioids"]),
        ]);

        let bucket = graph.substance("MDMA").unwrap().bucket(Severity::Dangerous);
        assert_eq!(bucket.psychoactives.len(), 1);
        assert!(bucket.substances.is_empty());
    }

    #[test]
    fn test_psychoactive_class_takes_priority_over_chemical() {
        let graph = build(vec![
            Substance::new("Ketamine").with_psychoactive_classes(["Arylcyclohexylamines"]),
            Substance::new("PCP").with_chemical_classes(["arylcyclohexylamines"]),
            Substance::new("MXE")
                .with_cross_tolerances(["Arylcyclohexylamines"])
                .with_interactions(Severity::Unsafe, ["ARYLCYCLOHEXYLAMINES"]),
        ]);

        assert_eq!(graph.psychoactive_classes().len(), 1);
        assert_eq!(graph.chemical_classes().len(), 1);

        let mxe = graph.substance("MXE").unwrap();
        assert_eq!(mxe.cross_tolerance.psychoactives.len(), 1);
        assert!(mxe.cross_tolerance.chemicals.is_empty());

        let bucket = mxe.bucket(Severity::Unsafe);
        assert_eq!(bucket.psychoactives.len(), 1);
        assert!(bucket.chemicals.is_empty());
        assert!(bucket.unresolved.is_empty());
    }

    #[test]
    fn test_chemical_class_takes_priority_over_substance() {
        let graph = build(vec![
            Substance::new("Tryptamines"),
            Substance::new("DMT").with_chemical_classes(["Tryptamines"]),
            Substance::new("Moclobemide")
                .with_cross_tolerances(["tryptamines"])
                .with_interactions(Severity::Dangerous, ["tryptamines"]),
        ]);

        let moclobemide = graph.substance("Moclobemide").unwrap();
        assert_eq!(moclobemide.cross_tolerance.chemicals.len(), 1);
        assert!(moclobemide.cross_tolerance.substances.is_empty());

        let bucket = moclobemide.bucket(Severity::Dangerous);
        assert_eq!(bucket.chemicals.len(), 1);
        assert!(bucket.substances.is_empty());
    }

    #[test]
    fn test_unresolved_shared_across_severities() {
        let graph = build(vec![
            Substance::new("MDMA").with_interactions(Severity::Dangerous, ["Ayahuasca"]),
            Substance::new("LSD").with_interactions(Severity::Uncertain, ["ayahuasca "]),
        ]);

        assert_eq!(graph.unresolved_interactions().len(), 1);
        let placeholder = graph.unresolved("AYAHUASCA").unwrap();
        assert_eq!(placeholder.name, "Ayahuasca");
        assert_eq!(placeholder.referenced_by.len(), 2);
    }

    #[test]
    fn test_placeholder_name_capitalized() {
        let graph = build(vec![
            Substance::new("MDMA").with_interactions(Severity::Dangerous, ["  grapefruit juice"]),
            Substance::new("LSD").with_interactions(Severity::Unsafe, ["Grapefruit Juice"]),
        ]);

        assert_eq!(graph.unresolved_interactions().len(), 1);
        assert_eq!(graph.unresolved_interactions()[0].name, "Grapefruit Juice");
        let mdma = graph.substance("MDMA").unwrap();
        assert_eq!(
            graph.interaction_partners(mdma, Severity::Dangerous),
            vec!["Grapefruit Juice"]
        );
    }

    #[test]
    fn test_duplicate_substance_skipped() {
        let graph = build(vec![
            Substance::new("Caffeine").with_categories(["stimulant"]),
            Substance::new("caffeine"),
        ]);

        assert_eq!(graph.stats().duplicate_substances, 1);
        assert_eq!(graph.stats().substances, 51);
        assert!(graph.substance("CAFFEINE").unwrap().record.has_category("stimulant"));
    }

    #[test]
    fn test_blank_names_ignored() {
        let graph = build(vec![Substance::new("MDMA")
            .with_psychoactive_classes(["  "])
            .with_interactions(Severity::Unsafe, [""])]);

        assert!(graph.psychoactive_classes().is_empty());
        assert!(graph.unresolved_interactions().is_empty());
        assert!(graph.substance("MDMA").unwrap().bucket(Severity::Unsafe).is_empty());
    }

    #[test]
    fn test_blank_substance_names_skipped() {
        let mut feed = filler(49);
        feed.push(Substance::new("   ").with_interactions(Severity::Dangerous, ["Filler 1"]));
        feed.push(Substance::new("MDMA"));

        let graph = GraphBuilder::default_config().build(feed).unwrap();
        assert_eq!(graph.len(), 50);
        assert_eq!(graph.stats().blank_substances, 1);
        assert!(graph.substance("").is_none());
        assert_eq!(graph.resolve("", "Filler 1"), None);
        assert_eq!(graph.stats().total_links(), 0);
    }

    #[test]
    fn test_blank_substances_do_not_count_toward_minimum() {
        let mut feed = filler(49);
        feed.push(Substance::new(""));

        let result = GraphBuilder::default_config().build(feed);
        assert_eq!(
            result.err(),
            Some(GraphError::TooFewSubstances { found: 49, required: 50 })
        );
    }
}
