use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_THREAD_PREFIX: &str = "Lead de";

pub const DEFAULT_LEAD_TEMPLATE: &str = "📥 **Novo lead recebido**\n\n\
**Nome:** ${name}\n\
**Email:** ${email}\n\
**Empresa:** ${company}\n\
**Mensagem:** ${message}";

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    pub lead_webhook_url: Option<String>,
    pub lead_message_template: Option<String>,
    #[serde(default = "default_thread_prefix")]
    pub lead_thread_prefix: String,
}

/// Settings the lead service needs, resolved from [`SiteConfig`].
#[derive(Debug, Clone, PartialEq)]
pub struct LeadSettings {
    pub webhook_url: String,
    pub message_template: String,
    pub thread_prefix: String,
}

impl Default for LeadSettings {
    fn default() -> Self {
        Self {
            webhook_url: String::new(),
            message_template: DEFAULT_LEAD_TEMPLATE.to_string(),
            thread_prefix: DEFAULT_THREAD_PREFIX.to_string(),
        }
    }
}

fn default_bind_addr() -> String {
    DEFAULT_BIND_ADDR.to_string()
}

fn default_thread_prefix() -> String {
    DEFAULT_THREAD_PREFIX.to_string()
}

/// Load `config/site.*` (optional) overlaid with `SITE_*` environment variables.
pub fn load_site_config() -> anyhow::Result<SiteConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/site").required(false))
        .add_source(config::Environment::with_prefix("SITE"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

impl SiteConfig {
    /// The webhook URL is a credential: it must come from configuration and
    /// be an http(s) URL.
    pub fn lead_settings(&self) -> anyhow::Result<LeadSettings> {
        let webhook_url = self
            .lead_webhook_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .context("SITE_LEAD_WEBHOOK_URL must be set")?;

        let parsed = reqwest::Url::parse(webhook_url)
            .context("SITE_LEAD_WEBHOOK_URL is not a valid URL")?;
        if !matches!(parsed.scheme(), "http" | "https") {
            anyhow::bail!("SITE_LEAD_WEBHOOK_URL must use http or https");
        }

        Ok(LeadSettings {
            webhook_url: webhook_url.to_string(),
            message_template: self
                .lead_message_template
                .clone()
                .unwrap_or_else(|| DEFAULT_LEAD_TEMPLATE.to_string()),
            thread_prefix: self.lead_thread_prefix.clone(),
        })
    }
}

/// Replace `${key}` placeholders in a message template.
/// Substituted values are never re-scanned, so visitor text cannot expand
/// other placeholders. Unknown keys are left as written.
pub fn render_template(template: &str, vars: &HashMap<&str, &str>) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("${") {
        result.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) => {
                let key = &after[..end];
                match vars.get(key) {
                    Some(value) => result.push_str(value),
                    None => result.push_str(&rest[start..start + 2 + end + 1]),
                }
                rest = &after[end + 1..];
            }
            None => {
                result.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    result.push_str(rest);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site_config(url: Option<&str>) -> SiteConfig {
        SiteConfig {
            bind_addr: default_bind_addr(),
            lead_webhook_url: url.map(str::to_string),
            lead_message_template: None,
            lead_thread_prefix: default_thread_prefix(),
        }
    }

    #[test]
    fn test_render_template() {
        let mut vars = HashMap::new();
        vars.insert("name", "Maria");
        vars.insert("company", "Acme");

        let result = render_template("Lead: ${name} (${company}) ${unknown}", &vars);

        assert_eq!(result, "Lead: Maria (Acme) ${unknown}");
    }

    #[test]
    fn test_render_template_does_not_expand_values() {
        let mut vars = HashMap::new();
        vars.insert("name", "${message}");
        vars.insert("message", "secret");

        assert_eq!(
            render_template("${name}|${message}|${open", &vars),
            "${message}|secret|${open"
        );
    }

    #[test]
    fn test_lead_settings_require_webhook_url() {
        assert!(site_config(None).lead_settings().is_err());
        assert!(site_config(Some("   ")).lead_settings().is_err());
        assert!(site_config(Some("not a url")).lead_settings().is_err());
        assert!(site_config(Some("ftp://hooks.example.com/x")).lead_settings().is_err());
    }

    #[test]
    fn test_lead_settings_defaults() {
        let settings = site_config(Some("https://hooks.example.com/abc"))
            .lead_settings()
            .unwrap();

        assert_eq!(settings.webhook_url, "https://hooks.example.com/abc");
        assert_eq!(settings.message_template, DEFAULT_LEAD_TEMPLATE);
        assert_eq!(settings.thread_prefix, "Lead de");
    }
}
