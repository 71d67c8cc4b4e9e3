use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use ecom_score::payments::{
    CheckoutPlan, PaymentError, PaymentGateway, PaymentIntent, PaymentIntentStatus,
};
use ecom_score::session::{ContactRecord, DirectoryError, Handle, SessionDirectory, SessionId};
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Session-scoped contact storage. Each session owns its own handle map, so
/// visitors never see each other's records; upserts overwrite per handle.
#[derive(Default, Clone)]
pub(crate) struct InMemorySessionDirectory {
    sessions: Arc<Mutex<HashMap<SessionId, HashMap<Handle, ContactRecord>>>>,
}

impl SessionDirectory for InMemorySessionDirectory {
    fn upsert(
        &self,
        session: &SessionId,
        record: ContactRecord,
    ) -> Result<ContactRecord, DirectoryError> {
        let mut guard = self.sessions.lock().expect("session mutex poisoned");
        guard
            .entry(session.clone())
            .or_default()
            .insert(record.handle.clone(), record.clone());
        Ok(record)
    }

    fn fetch(
        &self,
        session: &SessionId,
        handle: &Handle,
    ) -> Result<Option<ContactRecord>, DirectoryError> {
        let guard = self.sessions.lock().expect("session mutex poisoned");
        Ok(guard
            .get(session)
            .and_then(|records| records.get(handle))
            .cloned())
    }
}

/// Placeholder gateway: the payment provider is deliberately unconfigured,
/// so checkout never creates a transaction.
#[derive(Default, Clone)]
pub(crate) struct UnconfiguredPaymentGateway;

impl PaymentGateway for UnconfiguredPaymentGateway {
    fn begin_checkout(&self, plan: CheckoutPlan) -> Result<PaymentIntent, PaymentError> {
        Ok(PaymentIntent {
            plan,
            status: PaymentIntentStatus::Unconfigured,
            message: format!(
                "{} ({} EUR): payment provider not configured, no transaction was created",
                plan.label(),
                plan.price_eur()
            ),
        })
    }
}
