use super::*;

#[test]
fn preset_table_should_cover_all_named_profiles() {
    assert_eq!(TLS_PROFILES.len(), 3);
    for kind in [ProfileType::Old, ProfileType::Intermediate, ProfileType::Modern] {
        assert!(TLS_PROFILES.contains_key(&kind), "missing preset: {:?}", kind);
    }
    assert!(!TLS_PROFILES.contains_key(&ProfileType::Custom));
}

#[test]
fn preset_minimum_versions_should_match_their_compatibility_level() {
    assert_eq!(TLS_PROFILES[&ProfileType::Old].min_version, TlsVersion::Tls10);
    assert_eq!(TLS_PROFILES[&ProfileType::Intermediate].min_version, TlsVersion::Tls12);
    assert_eq!(TLS_PROFILES[&ProfileType::Modern].min_version, TlsVersion::Tls13);
}

#[test]
fn modern_preset_should_carry_only_tls13_suites() {
    let modern = &TLS_PROFILES[&ProfileType::Modern];
    assert_eq!(modern.ciphers.len(), 3);
    assert!(modern.ciphers.iter().all(|c| c.starts_with("TLS_")));
}

#[test]
fn intermediate_preset_should_lead_with_tls13_suites() {
    let intermediate = &TLS_PROFILES[&ProfileType::Intermediate];
    assert_eq!(intermediate.ciphers.len(), 11);
    assert_eq!(intermediate.ciphers[0], "TLS_AES_128_GCM_SHA256");
}

#[test]
fn old_preset_should_extend_intermediate_for_compatibility() {
    let old = &TLS_PROFILES[&ProfileType::Old];
    let intermediate = &TLS_PROFILES[&ProfileType::Intermediate];
    assert!(old.ciphers.len() > intermediate.ciphers.len());
    // The forward-secrecy list is a strict prefix of the compatibility list.
    assert_eq!(&old.ciphers[..intermediate.ciphers.len()], &intermediate.ciphers[..]);
}
