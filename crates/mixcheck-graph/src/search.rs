//! Substance search by name prefix, substring and category

use crate::entity::SubstanceNode;
use crate::KnowledgeGraph;
use mixcheck_domain::names::{contains_ignore_case, meaning_equal, starts_with_ignore_case};

/// Queries shorter than this only match by prefix
const CONTAINS_MIN_QUERY: usize = 3;

/// Prefix hits below which substring hits are appended
const FEW_PREFIX_HITS: usize = 3;

impl KnowledgeGraph {
    /// Substances matching `query` and carrying every one of `categories`
    ///
    /// Main names are matched by prefix first; common names are consulted only
    /// when no main name matches. Queries of three or more characters that
    /// produce fewer than three prefix hits are extended with substring hits
    /// under the same rules. Results keep feed order and never repeat.
    ///
    /// # Examples
    ///
    /// ```
    /// use mixcheck_domain::Substance;
    /// use mixcheck_graph::GraphBuilder;
    ///
    /// let mut feed: Vec<Substance> = (0..50).map(|i| Substance::new(format!("Filler {}", i))).collect();
    /// feed.push(Substance::new("Methamphetamine").with_common_names(["Meth", "Crystal"]));
    /// let graph = GraphBuilder::default_config().build(feed).unwrap();
    ///
    /// let hits = graph.search("crys", &[] as &[&str]);
    /// assert_eq!(hits[0].name(), "Methamphetamine");
    /// ```
    pub fn search<S: AsRef<str>>(&self, query: &str, categories: &[S]) -> Vec<&SubstanceNode> {
        let query = query.trim();
        let candidates: Vec<&SubstanceNode> = self
            .substances()
            .iter()
            .filter(|node| {
                categories
                    .iter()
                    .all(|category| node.record.has_category(category.as_ref()))
            })
            .collect();

        let mut hits = matching(&candidates, |name| starts_with_ignore_case(name, query));
        if query.chars().count() < CONTAINS_MIN_QUERY || hits.len() >= FEW_PREFIX_HITS {
            return hits;
        }

        for node in matching(&candidates, |name| contains_ignore_case(name, query)) {
            if !hits.iter().any(|hit| meaning_equal(hit.name(), node.name())) {
                hits.push(node);
            }
        }
        hits
    }
}

/// Nodes whose main name passes `test`, else nodes where any name passes
fn matching<'g>(
    candidates: &[&'g SubstanceNode],
    test: impl Fn(&str) -> bool,
) -> Vec<&'g SubstanceNode> {
    let by_main: Vec<&SubstanceNode> = candidates
        .iter()
        .copied()
        .filter(|node| test(node.name()))
        .collect();
    if !by_main.is_empty() {
        return by_main;
    }

    candidates
        .iter()
        .copied()
        .filter(|node| node.record.all_names().any(&test))
        .collect()
}
