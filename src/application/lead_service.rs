// Lead service - Use case for forwarding contact form submissions
use crate::application::lead_notifier::{LeadNotification, LeadNotifier};
use crate::domain::lead::{LeadError, LeadRequest, LeadSubmission};
use crate::infrastructure::config::{render_template, LeadSettings};
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Clone)]
pub struct LeadService {
    notifier: Arc<dyn LeadNotifier>,
    settings: LeadSettings,
}

impl LeadService {
    pub fn new(notifier: Arc<dyn LeadNotifier>, settings: LeadSettings) -> Self {
        Self { notifier, settings }
    }

    /// Validate, format and forward one submission.
    ///
    /// Validation failures are returned before anything is sent. A failed
    /// delivery is logged here and surfaced as [`LeadError::Delivery`]; the
    /// underlying cause never reaches the caller.
    pub async fn submit(&self, request: LeadRequest) -> Result<(), LeadError> {
        let lead = LeadSubmission::try_from(request).inspect_err(|e| {
            tracing::warn!("Rejected lead submission: {}", e);
        })?;

        let notification = self.build_notification(&lead);

        match self.notifier.notify(&notification).await {
            Ok(()) => {
                tracing::info!(company = lead.company_or_fallback(), "Lead forwarded");
                Ok(())
            }
            Err(e) => {
                tracing::error!("Failed to forward lead: {:#}", e);
                Err(LeadError::Delivery)
            }
        }
    }

    pub fn build_notification(&self, lead: &LeadSubmission) -> LeadNotification {
        let mut vars = HashMap::new();
        vars.insert("name", lead.name.as_str());
        vars.insert("email", lead.email.as_str());
        vars.insert("company", lead.company_or_fallback());
        vars.insert("message", lead.message.as_str());

        let content = render_template(&self.settings.message_template, &vars);
        let subject = lead.company.as_deref().unwrap_or(&lead.name);
        let thread_name = format!("{} {}", self.settings.thread_prefix, subject);

        LeadNotification {
            content,
            thread_name,
        }
    }
}
