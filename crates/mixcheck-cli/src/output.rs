//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use mixcheck_domain::route::{DoseRange, DurationRange, DurationUnits};
use mixcheck_domain::{Interaction, Roa, Severity};
use mixcheck_graph::{BuildStats, KnowledgeGraph, SubstanceNode};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the verdict for one pair.
    pub fn format_verdict(&self, a: &str, b: &str, verdict: Option<Severity>) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "a": a,
                "b": b,
                "severity": verdict.map(|s| s.as_str()),
            }))?),
            OutputFormat::Quiet => Ok(verdict.map_or("none", |s| s.as_str()).to_string()),
            OutputFormat::Table => Ok(match verdict {
                Some(severity) => format!("{} + {}: {}", a, b, self.severity_label(severity)),
                None => self.info(&format!("No interaction known between {} and {}", a, b)),
            }),
        }
    }

    /// Format a list of pairwise interactions.
    pub fn format_interactions(&self, interactions: &[Interaction]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json: Vec<serde_json::Value> = interactions
                    .iter()
                    .map(|i| {
                        serde_json::json!({
                            "a": i.a_name,
                            "b": i.b_name,
                            "severity": i.severity.as_str(),
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Quiet => Ok(interactions
                .iter()
                .map(|i| format!("{}\t{}\t{}", i.severity, i.a_name, i.b_name))
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if interactions.is_empty() {
                    return Ok(self.colorize("No interactions known.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Substance", "Substance", "Severity"]);
                for interaction in interactions {
                    builder.push_record([
                        interaction.a_name.clone(),
                        interaction.b_name.clone(),
                        self.severity_label(interaction.severity),
                    ]);
                }
                Ok(self.render(builder))
            }
        }
    }

    /// Format everything known about a substance.
    pub fn format_substance(&self, node: &SubstanceNode, graph: &KnowledgeGraph) -> Result<String> {
        let record = &node.record;
        let partners = |severity| graph.interaction_partners(node, severity);

        match self.format {
            OutputFormat::Json => {
                let roas: Vec<serde_json::Value> = record
                    .roas
                    .iter()
                    .map(|roa| {
                        serde_json::json!({
                            "route": roa.route.as_str(),
                            "common_dose": roa.dose.as_ref().and_then(|d| d.common.map(|r| format_dose(r, &d.units))),
                            "total_duration": roa.duration.as_ref().and_then(|d| d.total.map(format_duration)),
                        })
                    })
                    .collect();
                let json = serde_json::json!({
                    "name": node.name(),
                    "common_names": record.common_names,
                    "url": record.url,
                    "summary": record.summary,
                    "categories": record.categories,
                    "psychoactive_classes": record.psychoactive_classes,
                    "chemical_classes": record.chemical_classes,
                    "effects": record.effects.iter().map(|e| e.name.as_str()).collect::<Vec<_>>(),
                    "roas": roas,
                    "interactions": {
                        "dangerous": partners(Severity::Dangerous),
                        "unsafe": partners(Severity::Unsafe),
                        "uncertain": partners(Severity::Uncertain),
                    },
                });
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Quiet => Ok(node.name().to_string()),
            OutputFormat::Table => {
                let mut lines = vec![self.colorize(node.name(), "cyan")];
                if let Some(summary) = &record.summary {
                    lines.push(summary.clone());
                }
                lines.push(String::new());

                let mut builder = Builder::default();
                builder.push_record(["Field", "Value"]);
                builder.push_record(["Common names".to_string(), record.common_names.join(", ")]);
                builder.push_record(["Categories".to_string(), record.categories.join(", ")]);
                builder.push_record([
                    "Psychoactive classes".to_string(),
                    record.psychoactive_classes.join(", "),
                ]);
                builder.push_record(["Chemical classes".to_string(), record.chemical_classes.join(", ")]);
                let effects: Vec<&str> = node
                    .effects
                    .iter()
                    .filter_map(|id| graph.effects().get(id.index()))
                    .map(|e| e.name.as_str())
                    .collect();
                builder.push_record(["Effects".to_string(), effects.join(", ")]);
                for roa in &record.roas {
                    builder.push_record([roa.route.display_string().to_string(), format_roa(roa)]);
                }
                for severity in Severity::ALL {
                    let names = partners(severity);
                    if !names.is_empty() {
                        builder.push_record([self.severity_label(severity), names.join(", ")]);
                    }
                }
                lines.push(self.render(builder));

                if let Some(url) = &record.url {
                    lines.push(url.clone());
                }
                Ok(lines.join("\n"))
            }
        }
    }

    /// Format search results.
    pub fn format_search(&self, hits: &[&SubstanceNode]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json: Vec<serde_json::Value> = hits
                    .iter()
                    .map(|node| {
                        serde_json::json!({
                            "name": node.name(),
                            "common_names": node.record.common_names,
                            "categories": node.record.categories,
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Quiet => Ok(hits
                .iter()
                .map(|node| node.name())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if hits.is_empty() {
                    return Ok(self.colorize("No substances found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Name", "Common names", "Categories"]);
                for node in hits {
                    builder.push_record([
                        node.name().to_string(),
                        node.record.common_names.join(", "),
                        node.record.categories.join(", "),
                    ]);
                }
                Ok(self.render(builder))
            }
        }
    }

    /// Format graph statistics.
    pub fn format_stats(&self, stats: &BuildStats) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "substances": stats.substances,
                "duplicate_substances": stats.duplicate_substances,
                "blank_substances": stats.blank_substances,
                "psychoactive_classes": stats.psychoactive_classes,
                "chemical_classes": stats.chemical_classes,
                "effects": stats.effects,
                "unresolved": stats.unresolved,
                "links": {
                    "dangerous": stats.links_for(Severity::Dangerous),
                    "unsafe": stats.links_for(Severity::Unsafe),
                    "uncertain": stats.links_for(Severity::Uncertain),
                },
                "dropped_cross_tolerances": stats.dropped_cross_tolerances,
                "build_time_ms": stats.build_time_ms,
            }))?),
            OutputFormat::Quiet => Ok(stats.substances.to_string()),
            OutputFormat::Table => Ok(stats.summary()),
        }
    }

    /// Severity name, colored by how bad it is.
    pub fn severity_label(&self, severity: Severity) -> String {
        let color = match severity {
            Severity::Dangerous => "red",
            Severity::Unsafe => "yellow",
            Severity::Uncertain => "cyan",
        };
        self.colorize(severity.as_str(), color)
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn render(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn format_roa(roa: &Roa) -> String {
    let dose = roa
        .dose
        .as_ref()
        .and_then(|d| d.common.map(|r| format!("common {}", format_dose(r, &d.units))));
    let duration = roa
        .duration
        .as_ref()
        .and_then(|d| d.total.map(|r| format!("total {}", format_duration(r))));

    match (dose, duration) {
        (Some(dose), Some(duration)) => format!("{}, {}", dose, duration),
        (Some(only), None) | (None, Some(only)) => only,
        (None, None) => "-".to_string(),
    }
}

fn format_dose(range: DoseRange, units: &str) -> String {
    format!("{}-{} {}", range.min, range.max, units).trim_end().to_string()
}

fn format_duration(range: DurationRange) -> String {
    let units = match range.units {
        DurationUnits::Seconds => "seconds",
        DurationUnits::Minutes => "minutes",
        DurationUnits::Hours => "hours",
        DurationUnits::Days => "days",
    };
    format!("{}-{} {}", range.min, range.max, units)
}
