use std::collections::HashMap;

use lazy_static::lazy_static;

use super::ProfileType;
use super::TlsProfileSpec;
use super::TlsVersion;

fn spec(
    min_version: TlsVersion,
    ciphers: &[&str],
) -> TlsProfileSpec {
    TlsProfileSpec {
        ciphers: ciphers.iter().map(|c| c.to_string()).collect(),
        min_version,
    }
}

lazy_static! {
    /// Static lookup table mapping each named preset to its canonical
    /// specification. Values follow the Mozilla server-side TLS
    /// recommendations: `Old` for maximum client compatibility,
    /// `Intermediate` as the general-purpose default, `Modern` for
    /// TLS 1.3-only deployments.
    pub static ref TLS_PROFILES: HashMap<ProfileType, TlsProfileSpec> = HashMap::from([
        (
            ProfileType::Old,
            spec(TlsVersion::Tls10, &[
                "TLS_AES_128_GCM_SHA256",
                "TLS_AES_256_GCM_SHA384",
                "TLS_CHACHA20_POLY1305_SHA256",
                "ECDHE-ECDSA-AES128-GCM-SHA256",
                "ECDHE-RSA-AES128-GCM-SHA256",
                "ECDHE-ECDSA-AES256-GCM-SHA384",
                "ECDHE-RSA-AES256-GCM-SHA384",
                "ECDHE-ECDSA-CHACHA20-POLY1305",
                "ECDHE-RSA-CHACHA20-POLY1305",
                "DHE-RSA-AES128-GCM-SHA256",
                "DHE-RSA-AES256-GCM-SHA384",
                "DHE-RSA-CHACHA20-POLY1305",
                "ECDHE-ECDSA-AES128-SHA256",
                "ECDHE-RSA-AES128-SHA256",
                "ECDHE-ECDSA-AES128-SHA",
                "ECDHE-RSA-AES128-SHA",
                "ECDHE-ECDSA-AES256-SHA384",
                "ECDHE-RSA-AES256-SHA384",
                "ECDHE-ECDSA-AES256-SHA",
                "ECDHE-RSA-AES256-SHA",
                "DHE-RSA-AES128-SHA256",
                "DHE-RSA-AES256-SHA256",
                "AES128-GCM-SHA256",
                "AES256-GCM-SHA384",
                "AES128-SHA256",
                "AES256-SHA256",
                "AES128-SHA",
                "AES256-SHA",
                "DES-CBC3-SHA",
            ]),
        ),
        (
            ProfileType::Intermediate,
            spec(TlsVersion::Tls12, &[
                "TLS_AES_128_GCM_SHA256",
                "TLS_AES_256_GCM_SHA384",
                "TLS_CHACHA20_POLY1305_SHA256",
                "ECDHE-ECDSA-AES128-GCM-SHA256",
                "ECDHE-RSA-AES128-GCM-SHA256",
                "ECDHE-ECDSA-AES256-GCM-SHA384",
                "ECDHE-RSA-AES256-GCM-SHA384",
                "ECDHE-ECDSA-CHACHA20-POLY1305",
                "ECDHE-RSA-CHACHA20-POLY1305",
                "DHE-RSA-AES128-GCM-SHA256",
                "DHE-RSA-AES256-GCM-SHA384",
            ]),
        ),
        (
            ProfileType::Modern,
            spec(TlsVersion::Tls13, &[
                "TLS_AES_128_GCM_SHA256",
                "TLS_AES_256_GCM_SHA384",
                "TLS_CHACHA20_POLY1305_SHA256",
            ]),
        ),
    ]);
}
