//! Substance module - decoded records as delivered by the feed

use crate::names::meaning_equal;
use crate::route::Roa;
use crate::Severity;

/// Effect declared by a substance
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EffectRef {
    /// Effect name as written in the feed
    pub name: String,

    /// Reference page for the effect
    pub url: Option<String>,
}

impl EffectRef {
    /// Create an effect reference
    pub fn new(name: impl Into<String>, url: Option<String>) -> Self {
        Self {
            name: name.into(),
            url,
        }
    }
}

/// Free-text interaction target names, one list per severity
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionLists {
    dangerous: Vec<String>,
    unsafe_names: Vec<String>,
    uncertain: Vec<String>,
}

impl InteractionLists {
    /// Create interaction lists from their three parts
    pub fn new(dangerous: Vec<String>, unsafe_names: Vec<String>, uncertain: Vec<String>) -> Self {
        Self {
            dangerous,
            unsafe_names,
            uncertain,
        }
    }

    /// Names declared for one severity
    pub fn get(&self, severity: Severity) -> &[String] {
        match severity {
            Severity::Dangerous => &self.dangerous,
            Severity::Unsafe => &self.unsafe_names,
            Severity::Uncertain => &self.uncertain,
        }
    }

    /// Mutable access to the names declared for one severity
    pub fn get_mut(&mut self, severity: Severity) -> &mut Vec<String> {
        match severity {
            Severity::Dangerous => &mut self.dangerous,
            Severity::Unsafe => &mut self.unsafe_names,
            Severity::Uncertain => &mut self.uncertain,
        }
    }

    /// Total number of declared names over all severities
    pub fn len(&self) -> usize {
        self.dangerous.len() + self.unsafe_names.len() + self.uncertain.len()
    }

    /// Whether no interaction is declared at all
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A substance as decoded from the feed
///
/// Names are the identity of a substance. Everything else is data the graph
/// builder turns into links: class tags become class entities, effects become
/// shared effect entities, cross-tolerance and interaction names become
/// references to other entities.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Substance {
    /// Unique name
    pub name: String,

    /// Alternative and street names
    pub common_names: Vec<String>,

    /// Reference page
    pub url: Option<String>,

    /// Short description
    pub summary: Option<String>,

    /// Search categories ("stimulant", "common", ...)
    pub categories: Vec<String>,

    /// Psychoactive class tags
    pub psychoactive_classes: Vec<String>,

    /// Chemical class tags
    pub chemical_classes: Vec<String>,

    /// Declared effects
    pub effects: Vec<EffectRef>,

    /// Dose and duration data per route
    pub roas: Vec<Roa>,

    /// Names of substances or classes sharing tolerance
    pub cross_tolerances: Vec<String>,

    /// Interaction target names per severity
    pub interactions: InteractionLists,
}

impl Substance {
    /// Create a substance with only a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set psychoactive class tags
    pub fn with_psychoactive_classes<S: Into<String>>(mut self, classes: impl IntoIterator<Item = S>) -> Self {
        self.psychoactive_classes = classes.into_iter().map(Into::into).collect();
        self
    }

    /// Set chemical class tags
    pub fn with_chemical_classes<S: Into<String>>(mut self, classes: impl IntoIterator<Item = S>) -> Self {
        self.chemical_classes = classes.into_iter().map(Into::into).collect();
        self
    }

    /// Set common names
    pub fn with_common_names<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.common_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set search categories
    pub fn with_categories<S: Into<String>>(mut self, categories: impl IntoIterator<Item = S>) -> Self {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Add a declared effect
    pub fn with_effect(mut self, effect: EffectRef) -> Self {
        self.effects.push(effect);
        self
    }

    /// Set cross-tolerance target names
    pub fn with_cross_tolerances<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.cross_tolerances = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the interaction names for one severity
    pub fn with_interactions<S: Into<String>>(
        mut self,
        severity: Severity,
        names: impl IntoIterator<Item = S>,
    ) -> Self {
        *self.interactions.get_mut(severity) = names.into_iter().map(Into::into).collect();
        self
    }

    /// Psychoactive then chemical class tags
    pub fn class_names(&self) -> impl Iterator<Item = &str> {
        self.psychoactive_classes
            .iter()
            .chain(self.chemical_classes.iter())
            .map(String::as_str)
    }

    /// Main name followed by common names
    pub fn all_names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.common_names.iter().map(String::as_str))
    }

    /// Whether this substance carries the given search category
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| meaning_equal(c, category))
    }
}

/// Search category as listed by the feed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Category {
    /// Category name
    pub name: String,

    /// Description of the category
    pub description: Option<String>,

    /// Reference page
    pub url: Option<String>,
}
