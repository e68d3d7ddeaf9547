//! Properties every built graph and every resolution must satisfy

use mixcheck_domain::names::meaning_equal;
use mixcheck_domain::{EffectRef, Severity, Substance};
use mixcheck_graph::{GraphBuilder, GraphConfig, GraphError, GraphHandle, KnowledgeGraph};

fn filler(count: usize) -> Vec<Substance> {
    (0..count)
        .map(|i| Substance::new(format!("Filler {}", i)))
        .collect()
}

fn feed_with(extra: Vec<Substance>) -> Vec<Substance> {
    let mut feed = filler(50);
    feed.extend(extra);
    feed
}

fn build(extra: Vec<Substance>) -> KnowledgeGraph {
    GraphBuilder::default_config()
        .build(feed_with(extra))
        .expect("feed is large enough")
}

fn realistic_feed() -> Vec<Substance> {
    feed_with(vec![
        Substance::new("MDMA")
            .with_psychoactive_classes(["Entactogens"])
            .with_chemical_classes(["Substituted amphetamines"])
            .with_effect(EffectRef::new("Euphoria", None))
            .with_interactions(Severity::Dangerous, ["Tramadol", "MAOIs", "Ayahuasca"])
            .with_interactions(Severity::Unsafe, ["Alcohol"]),
        Substance::new("Tramadol")
            .with_psychoactive_classes(["Opioids", "Depressants"])
            .with_chemical_classes(["Phenylpropylamines"])
            .with_interactions(Severity::Dangerous, ["Serotonin releasers", "ayahuasca"]),
        Substance::new("Phenelzine")
            .with_psychoactive_classes(["Antidepressants", "MAOIs"])
            .with_interactions(Severity::Dangerous, ["Serotonin releasers"])
            .with_interactions(Severity::Uncertain, ["Cannabis"]),
        Substance::new("Alcohol")
            .with_psychoactive_classes(["depressants"])
            .with_effect(EffectRef::new("EUPHORIA", None))
            .with_interactions(Severity::Dangerous, ["Opioids", "GHB"]),
        Substance::new("4-HMA").with_chemical_classes(["Substituted amphetamines"]),
        Substance::new("4-FA").with_chemical_classes(["Substituted amphetamines"]),
        Substance::new("Harmaline").with_interactions(Severity::Unsafe, ["4-HxA"]),
    ])
}

fn sorted_names<'a>(names: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut names: Vec<String> = names.map(|n| n.trim().to_lowercase()).collect();
    names.sort();
    names
}

#[test]
fn test_building_twice_yields_same_entities() {
    let first = GraphBuilder::default_config().build(realistic_feed()).unwrap();
    let second = GraphBuilder::default_config().build(realistic_feed()).unwrap();

    assert_eq!(
        sorted_names(first.psychoactive_classes().iter().map(|c| c.name.as_str())),
        sorted_names(second.psychoactive_classes().iter().map(|c| c.name.as_str()))
    );
    assert_eq!(
        sorted_names(first.chemical_classes().iter().map(|c| c.name.as_str())),
        sorted_names(second.chemical_classes().iter().map(|c| c.name.as_str()))
    );
    assert_eq!(
        sorted_names(first.effects().iter().map(|e| e.name.as_str())),
        sorted_names(second.effects().iter().map(|e| e.name.as_str()))
    );
    assert_eq!(
        sorted_names(first.unresolved_interactions().iter().map(|u| u.name.as_str())),
        sorted_names(second.unresolved_interactions().iter().map(|u| u.name.as_str()))
    );
    assert_eq!(first.stats().total_links(), second.stats().total_links());
}

#[test]
fn test_entity_names_are_unique_up_to_meaning() {
    let graph = GraphBuilder::default_config().build(realistic_feed()).unwrap();

    // "Depressants" and "depressants" collapse, as do both spellings of euphoria
    assert_eq!(graph.psychoactive_class("Depressants").unwrap().members.len(), 2);
    assert_eq!(graph.effects().len(), 1);
    assert_eq!(graph.unresolved("Ayahuasca").unwrap().referenced_by.len(), 2);

    let unresolved = graph.unresolved_interactions();
    for (i, a) in unresolved.iter().enumerate() {
        for b in &unresolved[i + 1..] {
            assert!(!meaning_equal(&a.name, &b.name));
        }
    }
}

#[test]
fn test_no_placeholder_for_known_names() {
    let graph = GraphBuilder::default_config().build(realistic_feed()).unwrap();

    for placeholder in graph.unresolved_interactions() {
        assert!(graph.substance(&placeholder.name).is_none());
        assert!(graph.psychoactive_class(&placeholder.name).is_none());
        assert!(graph.chemical_class(&placeholder.name).is_none());
    }
    // "MAOIs" is a psychoactive class, "Opioids" too
    assert!(graph.unresolved("MAOIs").is_none());
    assert!(graph.unresolved("Opioids").is_none());
}

#[test]
fn test_unknown_pairs_have_no_verdict() {
    let graph = GraphBuilder::default_config().build(realistic_feed()).unwrap();

    assert_eq!(graph.resolve("Ayahuasca", "GHB"), None);
    assert_eq!(graph.resolve("Made up", "Also made up"), None);
    assert_eq!(graph.resolve("", ""), None);
}

#[test]
fn test_more_severe_direction_wins_both_ways() {
    let graph = build(vec![
        Substance::new("Lithium").with_interactions(Severity::Dangerous, ["LSD"]),
        Substance::new("LSD").with_interactions(Severity::Uncertain, ["Lithium"]),
    ]);

    assert_eq!(graph.resolve("Lithium", "LSD"), Some(Severity::Dangerous));
    assert_eq!(graph.resolve("LSD", "Lithium"), Some(Severity::Dangerous));
}

#[test]
fn test_equal_severity_keeps_a_side() {
    // A→B matches directly, B→A only through B's class tag on A
    let graph = build(vec![
        Substance::new("Cocaine")
            .with_psychoactive_classes(["Stimulants"])
            .with_interactions(Severity::Unsafe, ["Caffeine"]),
        Substance::new("Caffeine")
            .with_psychoactive_classes(["Xanthines"])
            .with_interactions(Severity::Unsafe, ["Stimulants"]),
    ]);
    let resolver = graph.resolver();

    assert_eq!(resolver.interaction_from("Cocaine", "Caffeine"), Some(Severity::Unsafe));
    assert_eq!(resolver.interaction_from("Caffeine", "Cocaine"), Some(Severity::Unsafe));

    let interaction = resolver.interaction_between("Cocaine", "Caffeine").unwrap();
    assert_eq!(interaction.a_name, "Cocaine");
    assert_eq!(interaction.b_name, "Caffeine");
    assert_eq!(interaction.severity, Severity::Unsafe);
}

#[test]
fn test_wildcard_entries_match_analogues() {
    let graph = GraphBuilder::default_config().build(realistic_feed()).unwrap();

    assert_eq!(graph.resolve("Harmaline", "4-HMA"), Some(Severity::Unsafe));
    assert_eq!(graph.resolve("Harmaline", "4-FA"), None);
}

#[test]
fn test_known_interaction_target_is_direct_substance_reference() {
    let graph = GraphBuilder::default_config().build(realistic_feed()).unwrap();

    let mdma = graph.substance("MDMA").unwrap();
    let tramadol = graph.substance("Tramadol").unwrap();
    let dangerous = mdma.bucket(Severity::Dangerous);

    assert!(dangerous.substances.contains(&tramadol.id));
    assert!(graph.unresolved("Tramadol").is_none());
    assert_eq!(graph.resolve("MDMA", "Tramadol"), Some(Severity::Dangerous));
}

#[test]
fn test_alias_group_expands_to_members() {
    let graph = GraphBuilder::default_config().build(realistic_feed()).unwrap();

    assert_eq!(graph.resolve("Phenelzine", "MDMA"), Some(Severity::Dangerous));
    assert_eq!(graph.resolve("MDMA", "Phenelzine"), Some(Severity::Dangerous));
    // the placeholder for the group label still records both declarations
    assert_eq!(
        graph.unresolved("Serotonin releasers").unwrap().referenced_by.len(),
        2
    );
}

#[test]
fn test_class_tag_contained_in_entry() {
    let graph = GraphBuilder::default_config().build(realistic_feed()).unwrap();

    // Alcohol lists "Opioids"; Tramadol carries that class tag
    assert_eq!(graph.resolve("Tramadol", "Alcohol"), Some(Severity::Dangerous));
    // free-text partner only matches literally
    assert_eq!(graph.resolve("Alcohol", "GHB"), Some(Severity::Dangerous));
    assert_eq!(graph.resolve("Phenelzine", "cannabis"), Some(Severity::Uncertain));
}

#[test]
fn test_too_few_substances_keeps_previous_graph() {
    let handle = GraphHandle::new(GraphConfig::default());
    handle.refresh(realistic_feed()).unwrap();
    let before = handle.current().unwrap();

    let result = handle.refresh(filler(49));
    assert_eq!(
        result,
        Err(GraphError::TooFewSubstances {
            found: 49,
            required: 50
        })
    );

    let after = handle.current().unwrap();
    assert!(std::sync::Arc::ptr_eq(&before, &after));
    assert_eq!(handle.resolve("MDMA", "Tramadol"), Some(Severity::Dangerous));
}

#[test]
fn test_first_refresh_failure_leaves_nothing_loaded() {
    let handle = GraphHandle::new(GraphConfig::default());
    assert!(handle.refresh(filler(10)).is_err());
    assert!(handle.current().is_none());
}
