//! Billing form model: fields, constraint validation, and wire encoding

use super::payment::PaymentToken;
use crate::utils::error::{BillingError, Result};
use serde::Serialize;

/// Fields sent as raw numeric strings; everything else is JSON-encoded
pub const NUMERIC_FIELDS: &[&str] = &["licenses"];

/// Name of the extra field carrying the payment token id
pub const TOKEN_FIELD: &str = "stripe_token";

/// Native input constraints
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldConstraints {
    pub required: bool,
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl FieldConstraints {
    pub fn required() -> Self {
        Self {
            required: true,
            ..Default::default()
        }
    }

    pub fn with_min(mut self, min: i64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn with_max(mut self, max: i64) -> Self {
        self.max = Some(max);
        self
    }
}

/// One form input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    /// Element id, used for per-input validity checks
    pub id: String,
    pub name: String,
    pub value: String,
    pub constraints: FieldConstraints,
    /// Disabled inputs are neither validated nor submitted
    pub disabled: bool,
}

/// A billing form as the page serializes it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillingForm {
    name: String,
    fields: Vec<FormField>,
}

impl BillingForm {
    /// `name` is the form prefix, e.g. `autopay` for `#autopay-form`
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Add an unconstrained field whose id equals its name
    pub fn field<N: Into<String>, V: Into<String>>(self, name: N, value: V) -> Self {
        let name = name.into();
        self.input(name.clone(), name, value, FieldConstraints::default())
    }

    pub fn input<I, N, V>(mut self, id: I, name: N, value: V, constraints: FieldConstraints) -> Self
    where
        I: Into<String>,
        N: Into<String>,
        V: Into<String>,
    {
        self.fields.push(FormField {
            id: id.into(),
            name: name.into(),
            value: value.into(),
            constraints,
            disabled: false,
        });
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field_by_id(&self, id: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.id == id)
    }

    pub fn set_value(&mut self, id: &str, value: &str) -> bool {
        match self.fields.iter_mut().find(|f| f.id == id) {
            Some(field) => {
                field.value = value.to_string();
                true
            }
            None => false,
        }
    }

    pub fn set_disabled(&mut self, id: &str, disabled: bool) -> bool {
        match self.fields.iter_mut().find(|f| f.id == id) {
            Some(field) => {
                field.disabled = disabled;
                true
            }
            None => false,
        }
    }

    /// Validate a single input. Unknown and disabled inputs pass.
    pub fn check_field_validity(&self, id: &str) -> Result<()> {
        match self.field_by_id(id) {
            Some(field) if !field.disabled => check_field(field),
            _ => Ok(()),
        }
    }

    /// Validate every enabled input
    pub fn check_validity(&self) -> Result<()> {
        self.fields
            .iter()
            .filter(|f| !f.disabled)
            .try_for_each(check_field)
    }

    /// Request body pairs. Numeric fields go out raw, every other value
    /// is JSON-encoded, and the token id (when present) is JSON-encoded
    /// under [`TOKEN_FIELD`]. A later field with the same name replaces
    /// an earlier one.
    pub fn encode(&self, token: Option<&PaymentToken>) -> Result<Vec<(String, String)>> {
        let mut data: Vec<(String, String)> = Vec::with_capacity(self.fields.len() + 1);

        if let Some(token) = token {
            data.push((TOKEN_FIELD.to_string(), serde_json::to_string(&token.id)?));
        }

        for field in self.fields.iter().filter(|f| !f.disabled) {
            let value = if NUMERIC_FIELDS.contains(&field.name.as_str()) {
                field.value.clone()
            } else {
                serde_json::to_string(&field.value)?
            };

            match data.iter_mut().find(|(name, _)| *name == field.name) {
                Some(existing) => existing.1 = value,
                None => data.push((field.name.clone(), value)),
            }
        }

        Ok(data)
    }

    pub fn elements(&self) -> FormElements {
        FormElements::for_form(&self.name)
    }
}

fn check_field(field: &FormField) -> Result<()> {
    let value = field.value.trim();

    if value.is_empty() {
        if field.constraints.required {
            return Err(BillingError::validation(format!(
                "{} is required",
                field.name
            )));
        }
        return Ok(());
    }

    let bounded = field.constraints.min.is_some() || field.constraints.max.is_some();
    if bounded || NUMERIC_FIELDS.contains(&field.name.as_str()) {
        let number: i64 = value.parse().map_err(|_| {
            BillingError::validation(format!("{} must be a whole number", field.name))
        })?;

        if let Some(min) = field.constraints.min {
            if number < min {
                return Err(BillingError::validation(format!(
                    "{} must be at least {}",
                    field.name, min
                )));
            }
        }
        if let Some(max) = field.constraints.max {
            if number > max {
                return Err(BillingError::validation(format!(
                    "{} must be at most {}",
                    field.name, max
                )));
            }
        }
    }

    Ok(())
}

/// Element ids that belong to one form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormElements {
    pub form: String,
    pub loading_indicator: String,
    pub input_section: String,
    pub success: String,
    pub error: String,
    pub loading: String,
}

impl FormElements {
    pub fn for_form(name: &str) -> Self {
        Self {
            form: format!("{}-form", name),
            loading_indicator: format!("{}_loading_indicator", name),
            input_section: format!("{}-input-section", name),
            success: format!("{}-success", name),
            error: format!("{}-error", name),
            loading: format!("{}-loading", name),
        }
    }
}
