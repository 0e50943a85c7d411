//! Dialogue script loading.
//!
//! The script is plain TOML; a missing path means the stock script. Loading
//! always validates, so a server never starts with unusable content.

use std::path::Path;

use parley_types::error::ScriptError;
use parley_types::script::DialogueScript;

/// Load and validate a dialogue script.
///
/// With no path, returns the stock banking-assistant script.
pub fn load(path: Option<&Path>) -> Result<DialogueScript, ScriptError> {
    let script = match path {
        Some(path) => {
            let raw =
                std::fs::read_to_string(path).map_err(|e| ScriptError::Io(e.to_string()))?;
            toml::from_str(&raw).map_err(|e| ScriptError::Parse(e.to_string()))?
        }
        None => DialogueScript::default(),
    };
    script.validate()?;
    Ok(script)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_load_without_path_yields_stock_script() {
        let script = load(None).unwrap();
        assert_eq!(script.responses.len(), 6);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let path = std::env::temp_dir().join(format!("parley-{}.toml", Uuid::now_v7()));
        assert!(matches!(load(Some(&path)), Err(ScriptError::Io(_))));
    }

    #[test]
    fn test_load_rejects_invalid_toml() {
        let path = std::env::temp_dir().join(format!("parley-{}.toml", Uuid::now_v7()));
        std::fs::write(&path, "greeting = [not toml").unwrap();
        assert!(matches!(load(Some(&path)), Err(ScriptError::Parse(_))));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_rejects_empty_response_set() {
        let path = std::env::temp_dir().join(format!("parley-{}.toml", Uuid::now_v7()));
        std::fs::write(&path, "responses = []").unwrap();
        assert!(matches!(
            load(Some(&path)),
            Err(ScriptError::EmptyResponseSet)
        ));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_applies_overrides() {
        let path = std::env::temp_dir().join(format!("parley-{}.toml", Uuid::now_v7()));
        std::fs::write(&path, "reply_delay_ms = 100\n").unwrap();
        let script = load(Some(&path)).unwrap();
        assert_eq!(script.reply_delay_ms, 100);
        let _ = std::fs::remove_file(&path);
    }
}
