use crate::core::catalog::CatalogMatcher;
use crate::domain::model::{GiftRecord, Order, OrderOutcome, Requirements, ShippingInfo};
use crate::domain::ports::{Console, PaymentGateway, PaymentStatus};
use crate::utils::error::{GiftError, Result};
use chrono::Utc;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct ShopSettings {
    pub currency_symbol: String,
    pub max_attempts: usize,
}

impl Default for ShopSettings {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            max_attempts: 3,
        }
    }
}

/// Interactive order flow: requirements, selection, shipping, payment.
pub struct GiftShop<'a, C: Console, P: PaymentGateway> {
    catalog: &'a CatalogMatcher,
    console: C,
    gateway: P,
    settings: ShopSettings,
}

impl<'a, C: Console, P: PaymentGateway> GiftShop<'a, C, P> {
    pub fn new(catalog: &'a CatalogMatcher, console: C, gateway: P, settings: ShopSettings) -> Self {
        Self {
            catalog,
            console,
            gateway,
            settings,
        }
    }

    pub fn run(&mut self) -> Result<OrderOutcome> {
        let requirements = self.prompt_requirements()?;
        tracing::info!(
            "🔍 Searching gifts for occasion={} age={} gender={}",
            requirements.occasion,
            requirements.age,
            requirements.gender
        );

        let catalog = self.catalog;
        let suggestions = catalog.find_for(&requirements);

        let gift = match self.choose_gift(&suggestions)? {
            Some(gift) => gift.clone(),
            None if suggestions.is_empty() => return Ok(OrderOutcome::NoMatches),
            None => return Ok(OrderOutcome::Cancelled),
        };
        tracing::info!("🎁 Selected gift #{} ({})", gift.id(), gift.name());

        let shipping = self.collect_shipping()?;

        if !self.process_payment(gift.price())? {
            self.console.say("Order not completed.")?;
            return Ok(OrderOutcome::PaymentDeclined);
        }

        self.console.say("\nOrder confirmation:")?;
        self.console.say(&format!("Gift: {}", gift.name()))?;
        self.console
            .say(&format!("Send to: {}, {}", shipping.name, shipping.address))?;
        self.console.say("Thank you for your purchase!")?;

        let amount = gift.price();
        Ok(OrderOutcome::Completed(Order {
            gift,
            shipping,
            amount,
            placed_at: Utc::now(),
        }))
    }

    pub fn prompt_requirements(&mut self) -> Result<Requirements> {
        let occasion = self
            .console
            .prompt("Occasion (e.g. birthday, anniversary): ")?
            .trim()
            .to_string();
        let age = self.prompt_number::<i64>("Recipient age: ")?;
        let gender = self
            .console
            .prompt("Recipient gender (male/female/other): ")?
            .trim()
            .to_string();

        Ok(Requirements {
            occasion,
            age,
            gender,
        })
    }

    /// 列出候選禮品並讓使用者選擇；0 或超出範圍視為取消
    pub fn choose_gift<'g>(&mut self, suggestions: &[&'g GiftRecord]) -> Result<Option<&'g GiftRecord>> {
        if suggestions.is_empty() {
            self.console.say("No gift suggestions match your criteria.")?;
            return Ok(None);
        }

        self.console.say("\nAvailable gift options:")?;
        for (idx, item) in suggestions.iter().enumerate() {
            let line = format!(
                "{}. {} - {}{:.2} -> {}",
                idx + 1,
                item.name(),
                self.settings.currency_symbol,
                item.price(),
                item.description()
            );
            self.console.say(&line)?;
        }

        let choice = self.prompt_number::<i64>("Select a gift by number (or 0 to cancel): ")?;
        let selected = usize::try_from(choice)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|idx| suggestions.get(idx).copied());

        if selected.is_none() {
            self.console.say("Cancelled.")?;
        }
        Ok(selected)
    }

    pub fn collect_shipping(&mut self) -> Result<ShippingInfo> {
        self.console.say("\nShipping information:")?;
        let name = self.console.prompt("Recipient name: ")?.trim().to_string();
        let address = self.console.prompt("Shipping address: ")?.trim().to_string();
        Ok(ShippingInfo { name, address })
    }

    pub fn process_payment(&mut self, amount: f64) -> Result<bool> {
        self.console.say(&format!(
            "\nPayment amount: {}{:.2}",
            self.settings.currency_symbol, amount
        ))?;
        let card = self.console.prompt("Enter credit card number (dummy): ")?;

        match self.gateway.charge(amount, card.trim()) {
            PaymentStatus::Approved => {
                self.console.say("Payment processed successfully!")?;
                Ok(true)
            }
            PaymentStatus::Declined => {
                self.console.say("Payment failed.")?;
                Ok(false)
            }
        }
    }

    fn prompt_number<T: FromStr>(&mut self, message: &str) -> Result<T> {
        for attempt in 1..=self.settings.max_attempts {
            let answer = self.console.prompt(message)?;
            match answer.trim().parse::<T>() {
                Ok(value) => return Ok(value),
                Err(_) => {
                    tracing::debug!("Rejected numeric input {:?} (attempt {})", answer, attempt);
                    self.console.say("Please enter a whole number.")?;
                }
            }
        }

        Err(GiftError::InputError {
            message: format!(
                "no valid number given after {} attempts",
                self.settings.max_attempts
            ),
        })
    }

    pub fn into_parts(self) -> (C, P) {
        (self.console, self.gateway)
    }
}
