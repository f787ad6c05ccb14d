use serde::Deserialize;
use serde::Serialize;

/// Minimum TLS protocol version peers are allowed to negotiate.
///
/// Serialized under the wire identifiers `VersionTLS10`..`VersionTLS13`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TlsVersion {
    #[serde(rename = "VersionTLS10")]
    Tls10,
    #[serde(rename = "VersionTLS11")]
    Tls11,
    #[serde(rename = "VersionTLS12")]
    Tls12,
    #[serde(rename = "VersionTLS13")]
    Tls13,
}

impl std::fmt::Display for TlsVersion {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        let s = match self {
            TlsVersion::Tls10 => "VersionTLS10",
            TlsVersion::Tls11 => "VersionTLS11",
            TlsVersion::Tls12 => "VersionTLS12",
            TlsVersion::Tls13 => "VersionTLS13",
        };
        write!(f, "{}", s)
    }
}

/// The canonical, fully resolved TLS settings.
///
/// Every selector form (absent, preset, custom) resolves into this shape,
/// and the derived equality is the sole authority for "is this a real
/// change": cipher suites compare element-for-element in order (the list
/// models negotiation priority, not a set), and minimum versions must be
/// identical. No provenance field exists, so how a specification was
/// produced cannot influence comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TlsProfileSpec {
    /// Cipher suite identifiers in negotiation priority order
    #[serde(default)]
    pub ciphers: Vec<String>,

    /// Minimum protocol version
    #[serde(rename = "minTLSVersion")]
    pub min_version: TlsVersion,
}

impl TlsProfileSpec {
    pub fn new(
        ciphers: Vec<String>,
        min_version: TlsVersion,
    ) -> Self {
        Self { ciphers, min_version }
    }
}
