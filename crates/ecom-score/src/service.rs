use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::info;

use crate::payments::{CheckoutPlan, PaymentError, PaymentGateway, PaymentIntent};
use crate::report::{
    present, render_document, DisplayPayload, DocumentRenderer, RenderError, ReportDocument,
};
use crate::scoring::{KpiInput, KpiValidationError, ScoringEngine};
use crate::session::{
    ContactRecord, DirectoryError, Handle, HandleError, SessionDirectory, SessionId,
};

/// Service composing the scoring engine, session directory, payment gateway,
/// and document renderer behind the consent gate.
pub struct ScoreService<S, P, R> {
    engine: ScoringEngine,
    sessions: Arc<S>,
    payments: Arc<P>,
    renderer: Arc<R>,
    booking_url: String,
}

/// One scoring submission: the KPI snapshot plus the consent flag.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoreSubmission {
    #[serde(flatten)]
    pub kpis: KpiInput,
    pub consent: bool,
}

/// A report request adds the contact handle and an optional session key.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportSubmission {
    #[serde(flatten)]
    pub kpis: KpiInput,
    pub consent: bool,
    pub handle: String,
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Report pipeline output: the stored contact record, the ordered document
/// lines, and the rendered downloadable artifact.
#[derive(Debug)]
pub struct ReportArtifact {
    pub record: ContactRecord,
    pub document: ReportDocument,
    pub artifact: Vec<u8>,
}

impl<S, P, R> ScoreService<S, P, R>
where
    S: SessionDirectory + 'static,
    P: PaymentGateway + 'static,
    R: DocumentRenderer + 'static,
{
    pub fn new(sessions: Arc<S>, payments: Arc<P>, renderer: Arc<R>, booking_url: String) -> Self {
        Self {
            engine: ScoringEngine::standard(),
            sessions,
            payments,
            renderer,
            booking_url,
        }
    }

    /// Score a submission and build its display payload.
    ///
    /// Consent is checked before anything else; without it no score is
    /// computed.
    pub fn score(&self, submission: ScoreSubmission) -> Result<DisplayPayload, ScoreServiceError> {
        if !submission.consent {
            return Err(ConsentError.into());
        }
        let result = self.engine.score(&submission.kpis)?;
        Ok(present(&result))
    }

    /// Run the full report pipeline: consent gate, handle validation,
    /// scoring, document rendering, and the session-scoped contact upsert.
    pub fn report(
        &self,
        submission: ReportSubmission,
        generated_at: DateTime<Utc>,
    ) -> Result<ReportArtifact, ScoreServiceError> {
        if !submission.consent {
            return Err(ConsentError.into());
        }
        let handle = Handle::parse(&submission.handle)?;
        let result = self.engine.score(&submission.kpis)?;

        let document = render_document(
            &result,
            &handle,
            generated_at.date_naive(),
            &self.booking_url,
        );
        let artifact = self.renderer.render(&document)?;

        let session = submission
            .session_id
            .map(SessionId)
            .unwrap_or_else(SessionId::local);
        let record = self.sessions.upsert(
            &session,
            ContactRecord {
                handle: handle.clone(),
                score: result.score,
                recommendations: result
                    .recommendations
                    .iter()
                    .map(|recommendation| recommendation.to_string())
                    .collect(),
                submitted_at: generated_at,
            },
        )?;

        info!(handle = %handle.as_str(), score = record.score, "report generated");

        Ok(ReportArtifact {
            record,
            document,
            artifact,
        })
    }

    /// Start a checkout with the configured gateway (a stub by default).
    pub fn checkout(&self, plan: CheckoutPlan) -> Result<PaymentIntent, ScoreServiceError> {
        let intent = self.payments.begin_checkout(plan)?;
        Ok(intent)
    }
}

/// Submission attempted without consent; scoring is not performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("consent is required before scoring")]
pub struct ConsentError;

/// Error raised by the score service.
#[derive(Debug, thiserror::Error)]
pub enum ScoreServiceError {
    #[error(transparent)]
    Consent(#[from] ConsentError),
    #[error(transparent)]
    Kpi(#[from] KpiValidationError),
    #[error(transparent)]
    Handle(#[from] HandleError),
    #[error(transparent)]
    Directory(#[from] DirectoryError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Payment(#[from] PaymentError),
}
