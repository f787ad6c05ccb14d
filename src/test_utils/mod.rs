//! Shared helpers for watcher tests.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::resolve;
use crate::ChangeCallback;
use crate::ProfileChange;
use crate::ProfileType;
use crate::TlsPolicyResource;
use crate::TlsProfileSpec;
use crate::TlsSecurityProfile;
use crate::TlsVersion;
use crate::TLS_POLICY_RESOURCE_NAME;

/// Thread-safe recorder for dispatched change events, standing in for the
/// subsystem an embedder would notify.
#[derive(Clone, Default)]
pub struct ChangeRecorder {
    changes: Arc<RwLock<Vec<ProfileChange>>>,
}

impl ChangeRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(
        &self,
        change: &ProfileChange,
    ) {
        self.changes.write().push(change.clone());
    }

    pub fn len(&self) -> usize {
        self.changes.read().len()
    }

    pub fn get(
        &self,
        index: usize,
    ) -> ProfileChange {
        self.changes.read()[index].clone()
    }

    pub fn as_callback(&self) -> ChangeCallback {
        let recorder = self.clone();
        Box::new(move |change| {
            recorder.record(change);
            Ok(())
        })
    }
}

pub fn intermediate_spec() -> TlsProfileSpec {
    resolve(Some(&TlsSecurityProfile::preset(ProfileType::Intermediate))).expect("preset resolves")
}

pub fn modern_spec() -> TlsProfileSpec {
    resolve(Some(&TlsSecurityProfile::preset(ProfileType::Modern))).expect("preset resolves")
}

pub fn small_custom_spec() -> TlsProfileSpec {
    TlsProfileSpec::new(
        vec![
            "TLS_AES_128_GCM_SHA256".to_string(),
            "TLS_AES_256_GCM_SHA384".to_string(),
        ],
        TlsVersion::Tls13,
    )
}

pub fn cluster_resource(profile: Option<TlsSecurityProfile>) -> TlsPolicyResource {
    let resource = TlsPolicyResource::new(TLS_POLICY_RESOURCE_NAME);
    match profile {
        Some(p) => resource.with_profile(p),
        None => resource,
    }
}
