use serde::{Deserialize, Serialize};

/// Paid offerings reachable from the results page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutPlan {
    PremiumReport,
    AuditDeposit,
}

impl CheckoutPlan {
    pub const fn label(self) -> &'static str {
        match self {
            CheckoutPlan::PremiumReport => "Premium report",
            CheckoutPlan::AuditDeposit => "Audit deposit",
        }
    }

    pub const fn price_eur(self) -> u32 {
        match self {
            CheckoutPlan::PremiumReport => 50,
            CheckoutPlan::AuditDeposit => 100,
        }
    }
}

/// Outbound payment hook. The shipped adapter is an unconfigured stub; the
/// core never assumes a real provider exists.
pub trait PaymentGateway: Send + Sync {
    fn begin_checkout(&self, plan: CheckoutPlan) -> Result<PaymentIntent, PaymentError>;
}

/// Result of starting a checkout, real or stubbed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentIntent {
    pub plan: CheckoutPlan,
    pub status: PaymentIntentStatus,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentIntentStatus {
    /// No provider credentials configured; no transaction was created.
    Unconfigured,
    Pending,
}

/// Payment dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    #[error("payment transport unavailable: {0}")]
    Transport(String),
}
