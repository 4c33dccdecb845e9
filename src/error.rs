use thiserror::Error;

/// Everything that can abort a generation run. The `Display` text is the
/// whole failure contract: callers hand it back as the sole output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("No content")]
    NoContent,
    #[error("No {label} given, try to add \"{field}\": {example}")]
    MissingField {
        field: &'static str,
        label: &'static str,
        example: &'static str,
    },
    #[error("Unable to flatten analysis_content entry: expected a JSON object, got {found}")]
    UnsupportedShape { found: &'static str },
}
