//! Hindrance severity
//!
//! Game system versions store severity under different keys. The rules in
//! [`SEVERITY_RULES`] are evaluated in order and the first match wins.

use super::ItemProperties;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Severity {
    Major,
    Minor,
    /// Free-form value from a `severity` or `level` property
    Custom(String),
}

impl Severity {
    /// Resolve the severity of a hindrance from its properties
    pub fn resolve(properties: &ItemProperties) -> Option<Self> {
        SEVERITY_RULES.iter().find_map(|rule| rule(properties))
    }

    pub fn label(&self) -> &str {
        match self {
            Severity::Major => "Major",
            Severity::Minor => "Minor",
            Severity::Custom(value) => value.as_str(),
        }
    }

    /// Suffix appended to a hindrance name, e.g. `" (Major)"`
    pub fn suffix(&self) -> String {
        format!(" ({})", self.label())
    }
}

pub type SeverityRule = fn(&ItemProperties) -> Option<Severity>;

/// Severity lookups in precedence order
pub const SEVERITY_RULES: &[SeverityRule] = &[from_major_flag, from_severity, from_level];

fn from_major_flag(properties: &ItemProperties) -> Option<Severity> {
    properties
        .get_bool("major")
        .map(|major| if major { Severity::Major } else { Severity::Minor })
}

fn from_severity(properties: &ItemProperties) -> Option<Severity> {
    properties
        .get_str("severity")
        .map(|s| Severity::Custom(s.to_string()))
}

fn from_level(properties: &ItemProperties) -> Option<Severity> {
    properties
        .get_str("level")
        .map(|s| Severity::Custom(s.to_string()))
}
