//! Externally supplied run settings
//!
//! The configuration collaborator hands the engine a flat map of setting
//! strings. The engine reads exactly one of them — the profile selector —
//! and passes everything else through untouched.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::scoring::Profile;

/// Settings key selecting the full profile when its value is `"1"`
pub const OPENCL_FULL_PROFILE: &str = "OpenCLFullProfile";

/// Flat string-keyed settings map for one benchmark run.
///
/// Unknown keys are preserved so a settings blob can round-trip through
/// the engine without loss.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunSettings {
    #[serde(flatten)]
    values: BTreeMap<String, String>,
}

impl RunSettings {
    /// Empty settings (embedded profile)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store one setting string
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Look up one setting string
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Whether the full profile was requested (`OpenCLFullProfile` = `"1"`)
    #[must_use]
    pub fn full_profile(&self) -> bool {
        self.get(OPENCL_FULL_PROFILE) == Some("1")
    }

    /// The active profile for suite validation
    #[must_use]
    pub fn profile(&self) -> Profile {
        Profile::from_setting(self.get(OPENCL_FULL_PROFILE).unwrap_or(""))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_embedded_profile() {
        let settings = RunSettings::new();
        assert!(!settings.full_profile());
        assert_eq!(settings.profile(), Profile::Embedded);
    }

    #[test]
    fn test_full_profile_only_on_exact_one() {
        let mut settings = RunSettings::new();

        settings.set(OPENCL_FULL_PROFILE, "1");
        assert!(settings.full_profile());
        assert_eq!(settings.profile(), Profile::Full);

        settings.set(OPENCL_FULL_PROFILE, "true");
        assert!(!settings.full_profile());

        settings.set(OPENCL_FULL_PROFILE, "0");
        assert!(!settings.full_profile());
        assert_eq!(settings.profile(), Profile::Embedded);
    }

    #[test]
    fn test_unknown_settings_pass_through() {
        let json = r#"{"OpenCLFullProfile": "1", "DeviceIndex": "2"}"#;
        let settings: RunSettings = serde_json::from_str(json).unwrap();

        assert!(settings.full_profile());
        assert_eq!(settings.get("DeviceIndex"), Some("2"));

        let back = serde_json::to_string(&settings).unwrap();
        assert!(back.contains("DeviceIndex"));
    }

    #[test]
    fn test_set_get_roundtrip() {
        let mut settings = RunSettings::new();
        settings.set("SomeKey", "SomeValue");
        assert_eq!(settings.get("SomeKey"), Some("SomeValue"));
        assert_eq!(settings.get("Missing"), None);
    }
}
