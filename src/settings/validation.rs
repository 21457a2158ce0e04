use crate::units::QuantityKind;
use std::fmt;

#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

#[derive(Debug, Clone)]
pub struct ValidationIssue {
    pub severity: IssueSeverity,
    pub message: String,
    /// Dotted path of the offending setting, e.g. "defaults.area.from"
    pub location: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    Error,
    Warning,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn add_error(&mut self, message: String, location: Option<String>) {
        self.errors.push(ValidationIssue {
            severity: IssueSeverity::Error,
            message,
            location,
        });
    }

    pub fn add_warning(&mut self, message: String, location: Option<String>) {
        self.warnings.push(ValidationIssue {
            severity: IssueSeverity::Warning,
            message,
            location,
        });
    }

    pub fn unknown_kind(&mut self, key: &str) {
        self.add_error(
            format!("Unknown quantity kind: '{}'", key),
            Some(format!("defaults.{}", key)),
        );
    }

    pub fn unknown_unit(&mut self, kind: QuantityKind, key: &str, side: &str, unit: &str) {
        self.add_error(
            format!("Unknown {} unit: '{}'", kind, unit),
            Some(format!("defaults.{}.{}", key, side)),
        );
    }

    /// Two keys (e.g. "mass" and "weight") name the same kind.
    pub fn duplicate_kind(&mut self, kind: QuantityKind, key: &str, other: &str) {
        self.add_error(
            format!(
                "Defaults for {} given twice (also under 'defaults.{}')",
                kind, other
            ),
            Some(format!("defaults.{}", key)),
        );
    }

    pub fn identical_units(&mut self, kind: QuantityKind, key: &str, unit: &str) {
        self.add_warning(
            format!("Default {} units are identical ('{}')", kind, unit),
            Some(format!("defaults.{}", key)),
        );
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_issues(&self) -> bool {
        !self.errors.is_empty() || !self.warnings.is_empty()
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (title, issues) in [("Errors:", &self.errors), ("Warnings:", &self.warnings)] {
            if issues.is_empty() {
                continue;
            }
            writeln!(f, "{}", title)?;
            for issue in issues {
                match &issue.location {
                    Some(loc) => writeln!(f, "  [{}] {}", loc, issue.message)?,
                    None => writeln!(f, "  {}", issue.message)?,
                }
            }
        }
        Ok(())
    }
}
