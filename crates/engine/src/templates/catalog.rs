//! Template definitions and the validated registry the application uses.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::TemplateError;

/// A reusable post template.
///
/// `variable_names` is the authoritative list of substitutable tokens: it
/// drives the caller's input form and the substitution pass. A `{...}`
/// token in `body` that is not declared here is never substituted; a
/// declared name absent from `body` has no visible effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub title: String,
    pub category: String,
    pub icon: String,
    pub description: String,
    pub body: String,
    pub variable_names: Vec<String>,
}

/// Static registry of templates, validated once at registration.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    templates: Vec<Template>,
}

impl TemplateCatalog {
    /// Validates and registers a set of templates.
    ///
    /// A variable name that is not a valid placeholder identifier, or a
    /// duplicated template id, is a defect in static template data — it is
    /// rejected here so it can never surface during rendering.
    pub fn new(templates: Vec<Template>) -> Result<Self, TemplateError> {
        let mut seen_ids = HashSet::new();
        for template in &templates {
            if !seen_ids.insert(template.id.clone()) {
                return Err(TemplateError::DuplicateId {
                    id: template.id.clone(),
                });
            }
            for name in &template.variable_names {
                if !is_valid_variable_name(name) {
                    return Err(TemplateError::InvalidVariableName {
                        template_id: template.id.clone(),
                        name: name.clone(),
                    });
                }
            }
        }
        Ok(Self { templates })
    }

    /// The built-in catalog shipped with the application.
    pub fn builtin() -> Result<Self, TemplateError> {
        Self::new(super::builtin::builtin_templates())
    }

    pub fn get(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.templates
            .iter()
            .map(|t| t.category.as_str())
            .filter(|category| seen.insert(*category))
            .collect()
    }

    pub fn by_category(&self, category: &str) -> Vec<&Template> {
        self.templates
            .iter()
            .filter(|t| t.category == category)
            .collect()
    }
}

/// An ASCII letter followed by ASCII alphanumerics or underscores.
fn is_valid_variable_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
