//! API key storage using the OS keychain, with a file fallback for
//! development builds.

#[cfg(debug_assertions)]
use base64::Engine;
use keyring::Entry;
#[cfg(debug_assertions)]
use std::fs;
#[cfg(debug_assertions)]
use std::path::PathBuf;

const SERVICE_NAME: &str = "com.netra.eyescan";

pub struct CredentialManager;

impl CredentialManager {
    /// Fallback file path for storing credentials (dev mode only)
    #[cfg(debug_assertions)]
    fn get_fallback_path(provider: &str) -> Option<PathBuf> {
        dirs::config_dir().map(|dir| {
            let app_dir = dir.join("netra");
            app_dir.join(format!("{}_key", provider))
        })
    }

    /// Store an API key in the keychain (file fallback in dev mode)
    pub fn store_api_key(provider: &str, api_key: &str) -> Result<(), String> {
        match Entry::new(SERVICE_NAME, provider) {
            Ok(entry) => {
                if entry.set_password(api_key).is_ok() {
                    tracing::debug!("[Credentials] Stored API key in keychain for: {}", provider);
                    return Ok(());
                }
            }
            Err(e) => {
                tracing::debug!("[Credentials] Keychain unavailable: {}", e);
            }
        }

        #[cfg(debug_assertions)]
        {
            if let Some(path) = Self::get_fallback_path(provider) {
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent)
                        .map_err(|e| format!("Failed to create config directory: {}", e))?;
                }

                // Minimal obfuscation only; dev mode never ships.
                let encoded =
                    base64::engine::general_purpose::STANDARD.encode(api_key.as_bytes());
                fs::write(&path, encoded)
                    .map_err(|e| format!("Failed to write API key: {}", e))?;

                tracing::debug!("[Credentials] DEV MODE: Stored API key in file: {:?}", path);
                return Ok(());
            }

            Err("Could not determine config directory".to_string())
        }

        #[cfg(not(debug_assertions))]
        Err("Secure credential storage (Keychain) unavailable".to_string())
    }

    /// Get an API key from the keychain (file fallback in dev mode)
    pub fn get_api_key(provider: &str) -> Result<String, String> {
        if let Ok(entry) = Entry::new(SERVICE_NAME, provider) {
            if let Ok(password) = entry.get_password() {
                return Ok(password);
            }
        }

        #[cfg(debug_assertions)]
        {
            if let Some(path) = Self::get_fallback_path(provider) {
                if path.exists() {
                    let encoded = fs::read_to_string(&path)
                        .map_err(|e| format!("Failed to read API key: {}", e))?;
                    let bytes = base64::engine::general_purpose::STANDARD
                        .decode(encoded.trim())
                        .map_err(|e| format!("Corrupt API key file: {}", e))?;
                    return String::from_utf8(bytes)
                        .map_err(|e| format!("Invalid UTF-8 in API key file: {}", e));
                }
            }
        }

        Err("API key not found".to_string())
    }

    /// Delete an API key from the keychain and file storage
    pub fn delete_api_key(provider: &str) -> Result<(), String> {
        if let Ok(entry) = Entry::new(SERVICE_NAME, provider) {
            let _ = entry.delete_credential();
        }

        #[cfg(debug_assertions)]
        {
            if let Some(path) = Self::get_fallback_path(provider) {
                if path.exists() {
                    fs::remove_file(&path)
                        .map_err(|e| format!("Failed to delete API key file: {}", e))?;
                }
            }
        }

        Ok(())
    }

    pub fn has_api_key(provider: &str) -> bool {
        Self::get_api_key(provider).is_ok()
    }
}

/// Reject placeholder or obviously malformed API keys before use.
pub fn validate_api_key(key: &str) -> Result<(), String> {
    let key_lower = key.to_lowercase();

    let placeholder_patterns = [
        "your-api-key",
        "your_api_key",
        "api-key-here",
        "api_key_here",
        "enter-your",
        "replace-with",
        "xxx",
        "placeholder",
        "example",
        "demo",
    ];

    for pattern in placeholder_patterns {
        if key_lower.contains(pattern) {
            return Err(format!(
                "API key appears to be a placeholder (contains '{}'). Enter a valid Gemini API key from Google AI Studio",
                pattern
            ));
        }
    }

    if key.len() < 20 {
        return Err(
            "API key is too short. Valid Gemini API keys are longer; get yours from Google AI Studio"
                .to_string(),
        );
    }

    if key.trim() != key {
        return Err("API key contains leading/trailing whitespace".to_string());
    }

    if key.contains('\n') || key.contains('\r') {
        return Err("API key contains newline characters".to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_placeholders() {
        assert!(validate_api_key("your-api-key-here-please").is_err());
        assert!(validate_api_key("xxx").is_err());
    }

    #[test]
    fn test_validate_rejects_short_and_whitespace() {
        assert!(validate_api_key("short").is_err());
        assert!(validate_api_key(" AIzaSyBogusButLongEnoughKey123 ").is_err());
        assert!(validate_api_key("AIzaSyBogusBut\nLongEnoughKey123").is_err());
    }

    #[test]
    fn test_validate_accepts_plausible_key() {
        assert!(validate_api_key("AIzaSyBogusButLongEnoughKey123").is_ok());
    }
}
