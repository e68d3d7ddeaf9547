//! Alias groups
//!
//! Some interaction entries name a pharmacological family rather than a
//! substance. Before matching, these labels are replaced by the member names
//! of the family.

use crate::names::meaning_equal;
use std::collections::HashSet;

/// Group label for the substituted amphetamine family
pub const SUBSTITUTED_AMPHETAMINES: &str = "Substituted amphetamines";

/// Group label for serotonin releasing agents
pub const SEROTONIN_RELEASERS: &str = "Serotonin releasers";

/// Members of [`SEROTONIN_RELEASERS`]
pub const SEROTONIN_RELEASER_MEMBERS: &[&str] = &["MDMA", "MDA", "Mephedrone"];

/// Members of [`SUBSTITUTED_AMPHETAMINES`]
pub const SUBSTITUTED_AMPHETAMINE_MEMBERS: &[&str] = &[
    "Amphetamine",
    "Methamphetamine",
    "Ethylamphetamine",
    "Propylamphetamine",
    "Isopropylamphetamine",
    "Bromo-DragonFLY",
    "Lisdexamfetamine",
    "Clobenzorex",
    "Dimethylamphetamine",
    "Selegiline",
    "Benzphetamine",
    "Ortetamine",
    "3-Methylamphetamine",
    "4-Methylamphetamine",
    "4-MMA",
    "Xylopropamine",
    "ß-methylamphetamine",
    "3-phenylmethamphetamine",
    "2-FA",
    "2-FMA",
    "2-FEA",
    "3-FA",
    "3-FMA",
    "3-FEA",
    "Fenfluramine",
    "Norfenfluramine",
    "4-FA",
    "4-FMA",
    "4-CA",
    "4-BA",
    "4-IA",
    "DCA",
    "4-HA",
    "4-HMA",
    "3,4-DHA",
    "OMA",
    "3-MA",
    "MMMA",
    "MMA",
    "PMA",
    "PMMA",
    "PMEA",
    "4-ETA",
    "TMA-2",
    "TMA-6",
    "4-MTA",
    "5-API",
    "Cathine",
    "Phenmetrazine",
    "3-FPM",
    "Prolintane",
];

/// Members of the group named by `label`, if it is a group label
pub fn group_members(label: &str) -> Option<&'static [&'static str]> {
    if meaning_equal(label, SUBSTITUTED_AMPHETAMINES) {
        Some(SUBSTITUTED_AMPHETAMINE_MEMBERS)
    } else if meaning_equal(label, SEROTONIN_RELEASERS) {
        Some(SEROTONIN_RELEASER_MEMBERS)
    } else {
        None
    }
}

/// Replace group labels with their members
///
/// Names that are not group labels pass through unchanged. Duplicates are
/// removed, keeping the first occurrence.
///
/// # Examples
///
/// ```
/// use mixcheck_domain::alias::expand;
///
/// let expanded = expand(&["Tramadol", "Serotonin releasers", "MDA"]);
/// assert_eq!(expanded, vec!["Tramadol", "MDMA", "MDA", "Mephedrone"]);
/// ```
pub fn expand<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut expanded = Vec::with_capacity(names.len());

    for name in names {
        let name = name.as_ref();
        match group_members(name) {
            Some(members) => {
                for member in members {
                    if seen.insert(*member) {
                        expanded.push(member.to_string());
                    }
                }
            }
            None => {
                if seen.insert(name) {
                    expanded.push(name.to_string());
                }
            }
        }
    }

    expanded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_names_pass_through() {
        let expanded = expand(&["Alcohol", "Tramadol"]);
        assert_eq!(expanded, vec!["Alcohol", "Tramadol"]);
    }

    #[test]
    fn test_serotonin_releasers_expand() {
        let expanded = expand(&[SEROTONIN_RELEASERS]);
        assert_eq!(expanded, vec!["MDMA", "MDA", "Mephedrone"]);
    }

    #[test]
    fn test_substituted_amphetamines_expand() {
        let expanded = expand(&[SUBSTITUTED_AMPHETAMINES]);
        assert_eq!(expanded.len(), SUBSTITUTED_AMPHETAMINE_MEMBERS.len());
        assert!(expanded.iter().any(|n| n == "4-FA"));
        assert!(!expanded.iter().any(|n| n == SUBSTITUTED_AMPHETAMINES));
    }

    #[test]
    fn test_group_label_ignores_case() {
        let expanded = expand(&["serotonin RELEASERS"]);
        assert_eq!(expanded, vec!["MDMA", "MDA", "Mephedrone"]);
    }

    #[test]
    fn test_duplicates_keep_first_position() {
        let expanded = expand(&["MDA", "Serotonin releasers", "MDA", "Alcohol"]);
        assert_eq!(expanded, vec!["MDA", "MDMA", "Mephedrone", "Alcohol"]);
    }

    #[test]
    fn test_empty_input() {
        let empty: [&str; 0] = [];
        assert!(expand(&empty).is_empty());
    }
}
