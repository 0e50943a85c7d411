use thiserror::Error;

/// Errors related to dialogue script content.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("greeting is blank")]
    BlankGreeting,

    #[error("response set is empty")]
    EmptyResponseSet,

    #[error("response at index {0} is blank")]
    BlankResponse(usize),

    #[error("failed to read script file: {0}")]
    Io(String),

    #[error("failed to parse script file: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_error_display() {
        assert_eq!(
            ScriptError::EmptyResponseSet.to_string(),
            "response set is empty"
        );
        assert_eq!(
            ScriptError::BlankResponse(3).to_string(),
            "response at index 3 is blank"
        );
    }
}
