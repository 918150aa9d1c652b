//! Declarative field validation.
//!
//! A [`Schema`] is an ordered list of field rules. Each rule pairs a field
//! path with the value found there and the constraints it must satisfy.
//! Records describe themselves as a schema; the schema is evaluated the same
//! way for every record and every write.

use chrono::NaiveDate;

use crate::error::ValidationError;

/// A field value as seen by the constraint predicates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Absent,
    Text(&'a str),
    Number(f64),
    Date(NaiveDate),
}

impl<'a> FieldValue<'a> {
    pub fn text(value: Option<&'a str>) -> Self {
        value.map_or(FieldValue::Absent, FieldValue::Text)
    }

    pub fn number(value: Option<f64>) -> Self {
        value.map_or(FieldValue::Absent, FieldValue::Number)
    }

    pub fn date(value: Option<NaiveDate>) -> Self {
        value.map_or(FieldValue::Absent, FieldValue::Date)
    }

    /// Blank text counts as absent.
    pub fn is_present(&self) -> bool {
        match self {
            FieldValue::Absent => false,
            FieldValue::Text(s) => !s.trim().is_empty(),
            FieldValue::Number(_) | FieldValue::Date(_) => true,
        }
    }

    fn render(&self) -> String {
        match self {
            FieldValue::Absent => String::new(),
            FieldValue::Text(s) => (*s).to_string(),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Date(d) => d.to_string(),
        }
    }
}

/// A composable predicate over a single field value.
///
/// Apart from `Required`, constraints ignore absent values and values of a
/// kind they do not apply to.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    Required,
    MaxLength(usize),
    Min(f64),
    Max(f64),
    NotBefore(NaiveDate),
}

impl Constraint {
    pub fn check(&self, value: &FieldValue<'_>) -> bool {
        match (self, value) {
            (Constraint::Required, value) => value.is_present(),
            (_, FieldValue::Absent) => true,
            (Constraint::MaxLength(max), FieldValue::Text(s)) => s.chars().count() <= *max,
            // NaN fails both bounds
            (Constraint::Min(min), FieldValue::Number(n)) => n >= min,
            (Constraint::Max(max), FieldValue::Number(n)) => n <= max,
            (Constraint::NotBefore(earliest), FieldValue::Date(d)) => d >= earliest,
            _ => true,
        }
    }

    /// Stable label reported in validation errors
    pub fn label(&self) -> String {
        match self {
            Constraint::Required => "required".to_string(),
            Constraint::MaxLength(max) => format!("max_length({max})"),
            Constraint::Min(min) => format!("min({min})"),
            Constraint::Max(max) => format!("max({max})"),
            Constraint::NotBefore(date) => format!("not_before({date})"),
        }
    }
}

/// One field and the constraints it must satisfy
#[derive(Debug, Clone)]
pub struct FieldRule<'a> {
    pub path: String,
    pub value: FieldValue<'a>,
    pub constraints: Vec<Constraint>,
}

impl FieldRule<'_> {
    fn first_failure(&self) -> Option<ValidationError> {
        self.constraints
            .iter()
            .find(|constraint| !constraint.check(&self.value))
            .map(|constraint| {
                ValidationError::new(self.path.clone(), constraint.label(), self.value.render())
            })
    }
}

/// Ordered collection of field rules
#[derive(Debug, Clone, Default)]
pub struct Schema<'a> {
    rules: Vec<FieldRule<'a>>,
}

impl<'a> Schema<'a> {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule for `path`.
    pub fn rule(
        &mut self,
        path: impl Into<String>,
        value: FieldValue<'a>,
        constraints: impl IntoIterator<Item = Constraint>,
    ) -> &mut Self {
        self.rules.push(FieldRule {
            path: path.into(),
            value,
            constraints: constraints.into_iter().collect(),
        });
        self
    }

    pub fn rules(&self) -> &[FieldRule<'a>] {
        &self.rules
    }

    /// First violation in rule order, reporting at most one per field.
    pub fn first_violation(&self) -> Option<ValidationError> {
        self.rules.iter().find_map(FieldRule::first_failure)
    }

    /// All violations in rule order, at most one per field.
    pub fn violations(&self) -> Vec<ValidationError> {
        self.rules.iter().filter_map(FieldRule::first_failure).collect()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.first_violation() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
