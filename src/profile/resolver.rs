use crate::errors::ResolutionError;

use super::ProfileType;
use super::TlsProfileSpec;
use super::TlsSecurityProfile;
use super::TLS_PROFILES;

/// Resolves a profile selector into its canonical specification.
///
/// Resolution is total over legal selectors and referentially transparent
/// given the static preset table:
/// - an absent selector falls back to the `Intermediate` preset,
/// - named presets resolve through [`TLS_PROFILES`],
/// - a custom selector resolves to its inline fields verbatim (cipher order
///   preserved),
/// - identifiers outside the known enumeration fail with
///   [`ResolutionError::UnknownProfile`].
pub fn resolve(selector: Option<&TlsSecurityProfile>) -> std::result::Result<TlsProfileSpec, ResolutionError> {
    let profile_type = match selector {
        None => &ProfileType::Intermediate,
        Some(profile) => &profile.profile_type,
    };

    match profile_type {
        ProfileType::Custom => selector
            .and_then(|profile| profile.custom.clone())
            .ok_or(ResolutionError::MissingCustomProfile),

        ProfileType::Unknown(name) => Err(ResolutionError::UnknownProfile(name.clone())),

        known => TLS_PROFILES
            .get(known)
            .cloned()
            .ok_or_else(|| ResolutionError::UnknownProfile(format!("{:?}", known))),
    }
}
