use thiserror::Error;

/// Error raised while registering static template data.
///
/// Extraction and rendering have no error channel — malformed model output
/// degrades to partial or empty structured output. The one failure an
/// embedder must handle is a malformed template definition, which is a
/// defect in static data and is reported at registration time, never during
/// rendering.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("template '{template_id}': invalid variable name '{name}'")]
    InvalidVariableName { template_id: String, name: String },

    #[error("duplicate template id '{id}'")]
    DuplicateId { id: String },
}
