// Lead domain model - a contact form submission and its validation
use serde::Deserialize;
use thiserror::Error;

pub const COMPANY_FALLBACK: &str = "Não informado";

#[derive(Debug, Error, PartialEq)]
pub enum LeadError {
    #[error("Campo obrigatório não informado: {0}")]
    MissingField(&'static str),

    #[error("Endereço de email inválido")]
    InvalidEmail,

    #[error("Falha ao enviar")]
    Delivery,
}

/// Raw form payload as posted by the landing page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeadRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// A validated submission. Lives only for one notification call.
#[derive(Debug, Clone, PartialEq)]
pub struct LeadSubmission {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub message: String,
}

impl LeadSubmission {
    pub fn company_or_fallback(&self) -> &str {
        self.company.as_deref().unwrap_or(COMPANY_FALLBACK)
    }
}

impl TryFrom<LeadRequest> for LeadSubmission {
    type Error = LeadError;

    fn try_from(request: LeadRequest) -> Result<Self, Self::Error> {
        let name = required(request.name, "name")?;
        let email = required(request.email, "email")?;
        let message = required(request.message, "message")?;

        if !is_plausible_email(&email) {
            return Err(LeadError::InvalidEmail);
        }

        let company = request
            .company
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        Ok(Self {
            name,
            email,
            company,
            message,
        })
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, LeadError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(LeadError::MissingField(field))
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, email: &str, company: Option<&str>, message: &str) -> LeadRequest {
        LeadRequest {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            company: company.map(str::to_string),
            message: Some(message.to_string()),
        }
    }

    #[test]
    fn test_valid_submission_is_trimmed() {
        let lead = LeadSubmission::try_from(request(
            "  Maria ",
            "maria@x.com",
            Some(" Acme "),
            "Precisamos de um site",
        ))
        .unwrap();

        assert_eq!(lead.name, "Maria");
        assert_eq!(lead.company.as_deref(), Some("Acme"));
        assert_eq!(lead.company_or_fallback(), "Acme");
    }

    #[test]
    fn test_blank_company_is_absent() {
        let lead =
            LeadSubmission::try_from(request("Maria", "maria@x.com", Some("   "), "Oi")).unwrap();
        assert_eq!(lead.company, None);
        assert_eq!(lead.company_or_fallback(), COMPANY_FALLBACK);
    }

    #[test]
    fn test_missing_fields_are_rejected() {
        let mut missing_name = request("Maria", "maria@x.com", None, "Oi");
        missing_name.name = None;
        assert_eq!(
            LeadSubmission::try_from(missing_name),
            Err(LeadError::MissingField("name"))
        );

        assert_eq!(
            LeadSubmission::try_from(request("Maria", "maria@x.com", None, "  ")),
            Err(LeadError::MissingField("message"))
        );
    }

    #[test]
    fn test_email_must_have_local_and_domain() {
        for email in ["maria", "@x.com", "maria@", "a@b@c"] {
            assert_eq!(
                LeadSubmission::try_from(request("Maria", email, None, "Oi")),
                Err(LeadError::InvalidEmail),
                "{email}"
            );
        }
    }
}
