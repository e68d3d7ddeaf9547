//! Interaction resolution between two substance names
//!
//! A verdict is computed in both directions. For a direction X→Y the lists
//! declared by X are consulted in three steps: direct name match, wildcard
//! match, class match. Each step scans dangerous, unsafe, uncertain and the
//! first hit wins. Names missing from the graph only match literally.

use crate::entity::SubstanceNode;
use crate::KnowledgeGraph;
use mixcheck_domain::alias;
use mixcheck_domain::names::{contains_ignore_case, meaning_equal, wildcard_matches};
use mixcheck_domain::{Interaction, Severity};
use std::collections::HashSet;

/// Substances commonly taken alongside anything else
pub const COMMON_COMBINATIONS: &[&str] = &[
    "Alcohol",
    "Caffeine",
    "Cannabis",
    "Grapefruit",
    "Hormonal birth control",
    "Nicotine",
];

/// Answers interaction queries against one graph snapshot
///
/// Resolution never fails: anything that cannot be decided yields `None`.
///
/// # Examples
///
/// ```
/// use mixcheck_domain::{Severity, Substance};
/// use mixcheck_graph::GraphBuilder;
///
/// let mut feed: Vec<Substance> = (0..50).map(|i| Substance::new(format!("Filler {}", i))).collect();
/// feed.push(Substance::new("Tramadol").with_psychoactive_classes(["Opioids"]));
/// feed.push(Substance::new("MDMA").with_interactions(Severity::Dangerous, ["Tramadol"]));
///
/// let graph = GraphBuilder::default_config().build(feed).unwrap();
/// let resolver = graph.resolver();
/// assert_eq!(resolver.resolve("Tramadol", "MDMA"), Some(Severity::Dangerous));
/// assert_eq!(resolver.resolve("Tramadol", "Filler 3"), None);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct InteractionResolver<'g> {
    graph: &'g KnowledgeGraph,
}

impl<'g> InteractionResolver<'g> {
    /// Create a resolver over `graph`
    pub fn new(graph: &'g KnowledgeGraph) -> Self {
        Self { graph }
    }

    /// Worst applicable severity of combining `a` and `b`
    ///
    /// When both directions yield a verdict the more severe one wins and a
    /// tie keeps the A→B verdict.
    pub fn resolve(&self, a: &str, b: &str) -> Option<Severity> {
        let a_to_b = self.interaction_from(a, b);
        let b_to_a = self.interaction_from(b, a);

        let verdict = match (a_to_b, b_to_a) {
            (Some(ab), Some(ba)) => {
                if ab.danger_count() >= ba.danger_count() {
                    Some(ab)
                } else {
                    Some(ba)
                }
            }
            (Some(ab), None) => Some(ab),
            (None, Some(ba)) => Some(ba),
            (None, None) => None,
        };

        tracing::debug!(a, b, ?a_to_b, ?b_to_a, ?verdict, "Resolved interaction");
        verdict
    }

    /// Verdict for `a` and `b` together with the queried names
    pub fn interaction_between(&self, a: &str, b: &str) -> Option<Interaction> {
        self.resolve(a, b)
            .map(|severity| Interaction::new(a, b, severity))
    }

    /// Interactions of every unordered pair of `names`, most severe first
    ///
    /// Meaning-equal names are considered once; pairs are reported in the
    /// order the names were given within each severity.
    pub fn interactions_among<S: AsRef<str>>(&self, names: &[S]) -> Vec<Interaction> {
        let mut distinct: Vec<&str> = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref().trim();
            if !name.is_empty() && !distinct.iter().any(|seen| meaning_equal(seen, name)) {
                distinct.push(name);
            }
        }

        let mut seen = HashSet::new();
        let mut found = Vec::new();
        for (i, a) in distinct.iter().enumerate() {
            for b in &distinct[i + 1..] {
                if let Some(interaction) = self.interaction_between(a, b) {
                    if seen.insert(interaction.clone()) {
                        found.push(interaction);
                    }
                }
            }
        }

        found.sort_by(|x, y| y.severity.cmp(&x.severity));
        found
    }

    /// Interactions of `name` with substances commonly taken alongside it
    pub fn check_common(&self, name: &str) -> Vec<Interaction> {
        let mut found: Vec<Interaction> = COMMON_COMBINATIONS
            .iter()
            .filter(|other| !meaning_equal(other, name))
            .filter_map(|other| self.interaction_between(name, other))
            .collect();
        found.sort_by(|x, y| y.severity.cmp(&x.severity));
        found
    }

    /// Severity declared by `from` about `to`, looking only at `from`'s lists
    pub fn interaction_from(&self, from: &str, to: &str) -> Option<Severity> {
        let source = self.graph.substance(from)?;
        let lists = &source.record.interactions;

        match self.graph.substance(to) {
            Some(target) => {
                let expanded: Vec<(Severity, Vec<String>)> = Severity::ALL
                    .iter()
                    .map(|severity| (*severity, alias::expand(lists.get(*severity))))
                    .collect();

                direct_match(&expanded, to)
                    .or_else(|| wildcard_match(&expanded, to))
                    .or_else(|| class_match(&expanded, target))
            }
            None => Severity::ALL.into_iter().find(|severity| {
                lists
                    .get(*severity)
                    .iter()
                    .any(|entry| meaning_equal(entry, to))
            }),
        }
    }
}

fn direct_match(expanded: &[(Severity, Vec<String>)], name: &str) -> Option<Severity> {
    expanded
        .iter()
        .find(|(_, entries)| entries.iter().any(|entry| meaning_equal(entry, name)))
        .map(|(severity, _)| *severity)
}

fn wildcard_match(expanded: &[(Severity, Vec<String>)], name: &str) -> Option<Severity> {
    expanded
        .iter()
        .find(|(_, entries)| entries.iter().any(|entry| wildcard_matches(entry, name)))
        .map(|(severity, _)| *severity)
}

fn class_match(expanded: &[(Severity, Vec<String>)], target: &SubstanceNode) -> Option<Severity> {
    expanded
        .iter()
        .find(|(_, entries)| {
            target.record.class_names().any(|class| {
                entries
                    .iter()
                    .any(|entry| contains_ignore_case(entry, class))
            })
        })
        .map(|(severity, _)| *severity)
}
