use serde::Deserialize;
use serde::Serialize;

use super::TlsProfileSpec;

/// Named preset identifiers plus the custom marker.
///
/// The catch-all variant preserves identifiers outside the known
/// enumeration instead of failing at decode time, so resolution can report
/// them as an [`crate::ResolutionError::UnknownProfile`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProfileType {
    Old,
    Intermediate,
    Modern,
    Custom,
    #[serde(untagged)]
    Unknown(String),
}

/// The externally configured profile selector.
///
/// Absence of a selector on the watched resource is modeled as
/// `Option<TlsSecurityProfile>::None`, not as a variant here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TlsSecurityProfile {
    #[serde(rename = "type")]
    pub profile_type: ProfileType,

    /// Inline specification; only meaningful for [`ProfileType::Custom`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<TlsProfileSpec>,
}

impl TlsSecurityProfile {
    /// Selector for a named preset.
    pub fn preset(profile_type: ProfileType) -> Self {
        Self {
            profile_type,
            custom: None,
        }
    }

    /// Selector carrying an inline custom specification.
    pub fn custom(spec: TlsProfileSpec) -> Self {
        Self {
            profile_type: ProfileType::Custom,
            custom: Some(spec),
        }
    }
}
