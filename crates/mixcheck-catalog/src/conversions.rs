//! Type conversions between wire and domain types

use crate::wire::{
    WireCategory, WireDose, WireDuration, WireDurationRange, WireRange, WireRoa, WireSubstance,
};
use mixcheck_domain::route::{DoseRange, DurationRange, DurationUnits, RoaDose, RoaDuration};
use mixcheck_domain::{AdministrationRoute, Category, EffectRef, InteractionLists, Roa, Substance};

/// Error type for conversion failures
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    /// Required field is empty
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Route name is not one of the known routes
    #[error("Unknown route of administration: {0}")]
    UnknownRoute(String),

    /// Duration unit is not one of the known units
    #[error("Unknown duration units: {0}")]
    UnknownUnits(String),

    /// Range whose bounds are reversed or not finite
    #[error("Invalid range: {min}..{max}")]
    InvalidRange {
        /// Lower bound as given
        min: f64,
        /// Upper bound as given
        max: f64,
    },
}

/// Convert a wire substance to a domain substance
///
/// Routes are passed in already converted; `wire.roas` is ignored.
pub fn substance_from_wire(wire: WireSubstance, roas: Vec<Roa>) -> Result<Substance, ConversionError> {
    let name = wire.name.trim();
    if name.is_empty() {
        return Err(ConversionError::MissingField("name"));
    }

    let classes = wire.classes.unwrap_or_default();
    let interactions = InteractionLists::new(
        wire.dangerous_interactions.into_iter().map(|i| i.into_name()).collect(),
        wire.unsafe_interactions.into_iter().map(|i| i.into_name()).collect(),
        wire.uncertain_interactions.into_iter().map(|i| i.into_name()).collect(),
    );

    Ok(Substance {
        name: name.to_string(),
        common_names: wire.common_names,
        url: wire.url,
        summary: wire.summary,
        categories: wire.categories,
        psychoactive_classes: classes.psychoactive,
        chemical_classes: classes.chemical,
        effects: wire
            .effects
            .into_iter()
            .map(|effect| EffectRef::new(effect.name, effect.url))
            .collect(),
        roas,
        cross_tolerances: wire.cross_tolerances,
        interactions,
    })
}

/// Convert a wire route entry to domain route data
pub fn roa_from_wire(wire: WireRoa) -> Result<Roa, ConversionError> {
    let route = AdministrationRoute::parse(&wire.name)
        .ok_or_else(|| ConversionError::UnknownRoute(wire.name.clone()))?;

    Ok(Roa {
        route,
        dose: wire.dose.map(dose_from_wire).transpose()?,
        duration: wire.duration.map(duration_from_wire).transpose()?,
    })
}

fn dose_from_wire(wire: WireDose) -> Result<RoaDose, ConversionError> {
    Ok(RoaDose {
        units: wire.units.unwrap_or_default(),
        threshold: wire.threshold,
        light: wire.light.map(range_from_wire).transpose()?,
        common: wire.common.map(range_from_wire).transpose()?,
        strong: wire.strong.map(range_from_wire).transpose()?,
        heavy: wire.heavy,
    })
}

fn range_from_wire(wire: WireRange) -> Result<DoseRange, ConversionError> {
    check_bounds(wire.min, wire.max)?;
    Ok(DoseRange {
        min: wire.min,
        max: wire.max,
    })
}

fn duration_from_wire(wire: WireDuration) -> Result<RoaDuration, ConversionError> {
    let convert = |range: Option<WireDurationRange>| range.map(duration_range_from_wire).transpose();
    Ok(RoaDuration {
        onset: convert(wire.onset)?,
        comeup: convert(wire.comeup)?,
        peak: convert(wire.peak)?,
        offset: convert(wire.offset)?,
        total: convert(wire.total)?,
        afterglow: convert(wire.afterglow)?,
    })
}

fn duration_range_from_wire(wire: WireDurationRange) -> Result<DurationRange, ConversionError> {
    let units = DurationUnits::parse(&wire.units).ok_or(ConversionError::UnknownUnits(wire.units))?;
    check_bounds(wire.min, wire.max)?;
    Ok(DurationRange {
        min: wire.min,
        max: wire.max,
        units,
    })
}

fn check_bounds(min: f64, max: f64) -> Result<(), ConversionError> {
    if !min.is_finite() || !max.is_finite() || min > max {
        return Err(ConversionError::InvalidRange { min, max });
    }
    Ok(())
}

/// Convert a wire category to a domain category
pub fn category_from_wire(wire: WireCategory) -> Result<Category, ConversionError> {
    let name = wire.name.trim();
    if name.is_empty() {
        return Err(ConversionError::MissingField("name"));
    }
    Ok(Category {
        name: name.to_string(),
        description: wire.description,
        url: wire.url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::{WireClasses, WireInteraction};

    fn wire(name: &str) -> WireSubstance {
        WireSubstance {
            name: name.to_string(),
            common_names: Vec::new(),
            url: None,
            summary: None,
            categories: Vec::new(),
            classes: None,
            effects: Vec::new(),
            roas: Vec::new(),
            cross_tolerances: Vec::new(),
            dangerous_interactions: Vec::new(),
            unsafe_interactions: Vec::new(),
            uncertain_interactions: Vec::new(),
        }
    }

    #[test]
    fn test_substance_conversion() {
        let mut entry = wire("  MDMA ");
        entry.classes = Some(WireClasses {
            psychoactive: vec!["Entactogens".into()],
            chemical: vec!["Substituted amphetamines".into()],
        });
        entry.dangerous_interactions = vec![
            WireInteraction::Name("Tramadol".into()),
            WireInteraction::Named { name: "MAOIs".into() },
        ];

        let substance = substance_from_wire(entry, Vec::new()).unwrap();
        assert_eq!(substance.name, "MDMA");
        assert_eq!(substance.psychoactive_classes, vec!["Entactogens"]);
        assert_eq!(
            substance.interactions.get(mixcheck_domain::Severity::Dangerous),
            ["Tramadol", "MAOIs"]
        );
    }

    #[test]
    fn test_blank_name_rejected() {
        assert!(matches!(
            substance_from_wire(wire("   "), Vec::new()),
            Err(ConversionError::MissingField("name"))
        ));
    }

    #[test]
    fn test_unknown_route_rejected() {
        let roa = WireRoa {
            name: "osmotic".into(),
            dose: None,
            duration: None,
        };
        assert!(matches!(roa_from_wire(roa), Err(ConversionError::UnknownRoute(_))));
    }

    #[test]
    fn test_duration_units_checked() {
        let roa = WireRoa {
            name: "oral".into(),
            dose: None,
            duration: Some(WireDuration {
                onset: Some(WireDurationRange {
                    min: 20.0,
                    max: 40.0,
                    units: "fortnights".into(),
                }),
                comeup: None,
                peak: None,
                offset: None,
                total: None,
                afterglow: None,
            }),
        };
        assert!(matches!(roa_from_wire(roa), Err(ConversionError::UnknownUnits(_))));
    }

    #[test]
    fn test_reversed_dose_range_rejected() {
        let dose = WireDose {
            units: Some("mg".into()),
            threshold: None,
            light: Some(WireRange { min: 40.0, max: 10.0 }),
            common: None,
            strong: None,
            heavy: None,
        };
        assert!(matches!(
            dose_from_wire(dose),
            Err(ConversionError::InvalidRange { .. })
        ));
    }
}
