use serde::Deserialize;
use serde::Serialize;

use crate::TlsSecurityProfile;

/// The watched singleton object: a named cluster policy exposing an
/// optional TLS profile selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TlsPolicyResource {
    pub name: String,

    /// The profile selector; `None` means no selector is configured and the
    /// default preset applies
    #[serde(default, rename = "tlsSecurityProfile", skip_serializing_if = "Option::is_none")]
    pub security_profile: Option<TlsSecurityProfile>,
}

impl TlsPolicyResource {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            security_profile: None,
        }
    }

    pub fn with_profile(
        mut self,
        profile: TlsSecurityProfile,
    ) -> Self {
        self.security_profile = Some(profile);
        self
    }
}
