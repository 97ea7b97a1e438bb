//! Widget configuration
//!
//! Deployment-tunable settings for the attachment intake core. The capacity
//! limit is deliberately a configuration value rather than a constant baked
//! into the drop zone or composer.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Default number of attachments permitted on a single outgoing message.
pub const DEFAULT_MAX_ATTACHMENTS: usize = 5;

/// Default per-file size ceiling (10 MB), chat-widget scale.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Configuration for the chat widget's attachment subsystem
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WidgetConfig {
    /// Maximum attachments per message
    pub max_attachments: usize,
    /// Maximum size of a single file in bytes
    pub max_file_size: u64,
    /// Media-type allow/block policy applied at intake
    pub file_types: FileTypePolicy,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            max_attachments: DEFAULT_MAX_ATTACHMENTS,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            file_types: FileTypePolicy::default(),
        }
    }
}

impl WidgetConfig {
    /// Load configuration from environment variables. Unset variables fall
    /// back to defaults; set-but-unparseable values are an error.
    pub fn from_env() -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Ok(max) = std::env::var("SUPPORTCHAT_MAX_ATTACHMENTS") {
            config.max_attachments = max.parse().map_err(|_| ConfigError::InvalidValue {
                key: "SUPPORTCHAT_MAX_ATTACHMENTS".to_string(),
                message: format!("expected a non-negative integer, got {:?}", max),
            })?;
        }
        if let Ok(size) = std::env::var("SUPPORTCHAT_MAX_FILE_SIZE") {
            config.max_file_size = size.parse().map_err(|_| ConfigError::InvalidValue {
                key: "SUPPORTCHAT_MAX_FILE_SIZE".to_string(),
                message: format!("expected a byte count, got {:?}", size),
            })?;
        }
        if let Ok(blocked) = std::env::var("SUPPORTCHAT_BLOCKED_MEDIA_TYPES") {
            config.file_types.blocked_media_types = blocked
                .split(',')
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect();
        }
        if let Ok(allowed) = std::env::var("SUPPORTCHAT_ALLOWED_MEDIA_TYPES") {
            config.file_types.allowed_media_types = allowed
                .split(',')
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect();
        }

        Ok(config)
    }
}

/// Media-type policy for incoming files
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FileTypePolicy {
    /// Allowed media types (empty = allow all)
    pub allowed_media_types: Vec<String>,
    /// Blocked media types
    pub blocked_media_types: Vec<String>,
}

impl Default for FileTypePolicy {
    fn default() -> Self {
        Self {
            allowed_media_types: Vec::new(),
            blocked_media_types: vec![
                "application/x-msdownload".to_string(),
                "application/x-executable".to_string(),
            ],
        }
    }
}

impl FileTypePolicy {
    /// Check if a media type is allowed
    pub fn is_allowed(&self, media_type: &str) -> bool {
        // Blocked list wins over everything
        if self.blocked_media_types.iter().any(|t| t == media_type) {
            return false;
        }

        // Empty allow list means allow all (except blocked)
        if self.allowed_media_types.is_empty() {
            return true;
        }

        self.allowed_media_types.iter().any(|t| t == media_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WidgetConfig::default();
        assert_eq!(config.max_attachments, 5);
        assert_eq!(config.max_file_size, 10 * 1024 * 1024);
    }

    #[test]
    fn test_from_env_overrides_and_rejects_garbage() {
        std::env::set_var("SUPPORTCHAT_MAX_ATTACHMENTS", "8");
        let config = WidgetConfig::from_env().unwrap();
        assert_eq!(config.max_attachments, 8);

        std::env::set_var("SUPPORTCHAT_MAX_ATTACHMENTS", "lots");
        assert!(WidgetConfig::from_env().is_err());

        std::env::remove_var("SUPPORTCHAT_MAX_ATTACHMENTS");
    }

    #[test]
    fn test_file_type_policy_defaults() {
        let policy = FileTypePolicy::default();

        assert!(policy.is_allowed("image/png"));
        assert!(policy.is_allowed("application/pdf"));
        assert!(!policy.is_allowed("application/x-msdownload"));
    }

    #[test]
    fn test_allow_list_restricts() {
        let policy = FileTypePolicy {
            allowed_media_types: vec!["image/png".to_string()],
            blocked_media_types: vec![],
        };

        assert!(policy.is_allowed("image/png"));
        assert!(!policy.is_allowed("image/jpeg"));
    }

    #[test]
    fn test_blocked_wins_over_allowed() {
        let policy = FileTypePolicy {
            allowed_media_types: vec!["application/pdf".to_string()],
            blocked_media_types: vec!["application/pdf".to_string()],
        };

        assert!(!policy.is_allowed("application/pdf"));
    }
}
