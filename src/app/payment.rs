use crate::core::{PaymentGateway, PaymentStatus};

/// Accepts any non-blank card number. No money moves.
#[derive(Debug, Clone, Default)]
pub struct DummyPaymentGateway {
    approved_charges: usize,
}

impl DummyPaymentGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn approved_charges(&self) -> usize {
        self.approved_charges
    }
}

impl PaymentGateway for DummyPaymentGateway {
    fn charge(&mut self, amount: f64, card_number: &str) -> PaymentStatus {
        // 不記錄卡號
        if card_number.trim().is_empty() {
            tracing::warn!("💳 Payment of {:.2} declined: no card number given", amount);
            return PaymentStatus::Declined;
        }

        self.approved_charges += 1;
        tracing::info!("💳 Payment of {:.2} approved", amount);
        PaymentStatus::Approved
    }
}
