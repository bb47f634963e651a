use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use holland_inventory::assessment::{ResultSubmitter, SubmissionError, SubmissionPayload};
use metrics_exporter_prometheus::PrometheusHandle;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// In-memory stand-in for the external results backend. Keeps every payload
/// so operators (and tests) can inspect what would have been forwarded to
/// the configured endpoint.
pub(crate) struct RecordingSubmitter {
    endpoint: Option<String>,
    payloads: Mutex<Vec<SubmissionPayload>>,
}

impl RecordingSubmitter {
    pub(crate) fn new(endpoint: Option<String>) -> Self {
        Self {
            endpoint,
            payloads: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn payloads(&self) -> Vec<SubmissionPayload> {
        self.payloads
            .lock()
            .expect("submitter mutex poisoned")
            .clone()
    }
}

impl ResultSubmitter for RecordingSubmitter {
    fn submit(&self, payload: SubmissionPayload) -> Result<(), SubmissionError> {
        info!(
            respondent = %payload.name,
            top3 = ?payload.top3,
            endpoint = self.endpoint.as_deref().unwrap_or("<in-memory>"),
            "assessment result recorded"
        );
        self.payloads
            .lock()
            .expect("submitter mutex poisoned")
            .push(payload);
        Ok(())
    }
}
