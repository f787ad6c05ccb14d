use super::*;

#[test]
fn preset_selector_should_serialize_with_wire_field_names() {
    let selector = TlsSecurityProfile::preset(ProfileType::Modern);
    let json = serde_json::to_string(&selector).expect("serializes");
    assert_eq!(json, r#"{"type":"Modern"}"#);
}

#[test]
fn unknown_profile_type_should_survive_decode() {
    let profile: TlsSecurityProfile =
        serde_json::from_str(r#"{"type":"Paranoid"}"#).expect("decodes with catch-all type");
    assert_eq!(profile.profile_type, ProfileType::Unknown("Paranoid".to_string()));
    assert!(profile.custom.is_none());
}

#[test]
fn custom_selector_should_decode_min_version_wire_name() {
    let json = r#"{"type":"Custom","custom":{"ciphers":["TLS_AES_128_GCM_SHA256"],"minTLSVersion":"VersionTLS13"}}"#;
    let profile: TlsSecurityProfile = serde_json::from_str(json).expect("decodes");
    assert_eq!(profile.profile_type, ProfileType::Custom);

    let custom = profile.custom.expect("custom settings present");
    assert_eq!(custom.min_version, TlsVersion::Tls13);
    assert_eq!(custom.ciphers, vec!["TLS_AES_128_GCM_SHA256"]);
}

#[test]
fn tls_version_display_should_match_wire_identifier() {
    assert_eq!(TlsVersion::Tls12.to_string(), "VersionTLS12");
    assert_eq!(TlsVersion::Tls13.to_string(), "VersionTLS13");
}
