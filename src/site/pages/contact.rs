use crate::{
    engine::stage::ElementSpec,
    foundation::{
        core::Extent,
        error::{SiteError, SiteResult},
    },
    site::pages::PageContext,
};

/// Form field names, in display order.
pub const FIELDS: [(&str, &str, &str); 3] = [
    ("contact-name", "Name", "Identity"),
    ("contact-email", "Email", "Vibration@frequency.com"),
    (
        "contact-inquiry",
        "Nature of Inquiry",
        "Share your thoughts in the silence...",
    ),
];

/// The inquiry form's values.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub inquiry: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        inquiry: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            inquiry: inquiry.into(),
        }
    }

    pub fn validate(&self) -> SiteResult<()> {
        if self.name.trim().is_empty() {
            return Err(SiteError::validation("contact name must be non-empty"));
        }
        let email = self.email.trim();
        let well_formed = email
            .split_once('@')
            .is_some_and(|(user, domain)| !user.is_empty() && domain.contains('.'));
        if !well_formed {
            return Err(SiteError::validation(format!(
                "contact email '{email}' is not an address"
            )));
        }
        if self.inquiry.trim().is_empty() {
            return Err(SiteError::validation("inquiry must be non-empty"));
        }
        Ok(())
    }

    /// Validates, then reports that no delivery endpoint exists.
    pub fn submit(&self) -> SiteResult<()> {
        self.validate()?;
        tracing::debug!(email = %self.email, "contact submission rejected");
        Err(SiteError::unsupported(
            "contact form has no submission endpoint",
        ))
    }
}

pub fn mount(cx: &mut PageContext<'_>) -> SiteResult<()> {
    cx.section(
        ElementSpec::new("contact-heading").text(
            "Inquiry. For private acquisition, press inquiries, or to be notified of the next batch release.",
        ),
        Extent::vh(0.6),
    );
    for (name, label, placeholder) in FIELDS {
        cx.section(
            ElementSpec::new(name)
                .class("contact-field")
                .text(format!("{label}: {placeholder}"))
                .interactive(),
            Extent::px(96.0),
        );
    }
    cx.section(
        ElementSpec::new("contact-submit")
            .text("Send into the void")
            .interactive(),
        Extent::px(72.0),
    );
    Ok(())
}

#[cfg(test)]
#[path = "../../../tests/unit/site/pages/contact.rs"]
mod tests;
