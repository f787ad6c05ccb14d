use super::*;
use crate::ResolutionError;

#[test]
fn absent_selector_should_resolve_to_intermediate_preset() {
    let resolved = resolve(None).expect("absent selector resolves");
    assert_eq!(resolved, TLS_PROFILES[&ProfileType::Intermediate]);
}

#[test]
fn named_presets_should_resolve_via_lookup_table() {
    for kind in [ProfileType::Old, ProfileType::Intermediate, ProfileType::Modern] {
        let selector = TlsSecurityProfile::preset(kind.clone());
        let resolved = resolve(Some(&selector)).expect("known preset resolves");
        assert_eq!(resolved, TLS_PROFILES[&kind]);
    }
}

#[test]
fn custom_selector_should_resolve_to_inline_fields_in_order() {
    let spec = TlsProfileSpec::new(
        vec!["TLS_AES_256_GCM_SHA384".to_string(), "TLS_AES_128_GCM_SHA256".to_string()],
        TlsVersion::Tls13,
    );
    let resolved = resolve(Some(&TlsSecurityProfile::custom(spec.clone()))).expect("custom resolves");
    assert_eq!(resolved, spec);
    assert_eq!(resolved.ciphers[0], "TLS_AES_256_GCM_SHA384");
}

#[test]
fn custom_selector_without_settings_should_fail() {
    let selector = TlsSecurityProfile::preset(ProfileType::Custom);
    assert_eq!(resolve(Some(&selector)), Err(ResolutionError::MissingCustomProfile));
}

#[test]
fn unknown_profile_type_should_fail_with_its_identifier() {
    let selector = TlsSecurityProfile::preset(ProfileType::Unknown("Paranoid".to_string()));
    assert_eq!(
        resolve(Some(&selector)),
        Err(ResolutionError::UnknownProfile("Paranoid".to_string()))
    );
}

#[test]
fn custom_selector_matching_a_preset_should_compare_equal_to_it() {
    let intermediate = resolve(Some(&TlsSecurityProfile::preset(ProfileType::Intermediate))).expect("preset resolves");
    let replica = resolve(Some(&TlsSecurityProfile::custom(intermediate.clone()))).expect("custom resolves");

    // Provenance must not matter: same fields, equal specifications.
    assert_eq!(replica, intermediate);
}

#[test]
fn absent_selector_should_compare_equal_to_explicit_intermediate() {
    let absent = resolve(None).expect("absent resolves");
    let explicit = resolve(Some(&TlsSecurityProfile::preset(ProfileType::Intermediate))).expect("preset resolves");
    assert_eq!(absent, explicit);
}

#[test]
fn reordered_ciphers_should_not_compare_equal() {
    let intermediate = resolve(None).expect("resolves");
    let mut reordered = intermediate.clone();
    reordered.ciphers.reverse();

    // Cipher order is negotiation priority; reordering is a real change.
    assert_ne!(reordered, intermediate);
}

#[test]
fn different_min_versions_should_not_compare_equal() {
    let intermediate = resolve(None).expect("resolves");
    let mut bumped = intermediate.clone();
    bumped.min_version = TlsVersion::Tls13;
    assert_ne!(bumped, intermediate);
}
