use super::*;
use crate::{
    engine::{scheduler::Scheduler, stage::Stage},
    foundation::core::Viewport,
    site::config::SiteConfig,
};

fn filled() -> ContactForm {
    ContactForm::new("Ines", "ines@example.com", "Batch 02 release date?")
}

#[test]
fn submission_validates_then_reports_no_endpoint() {
    let err = filled().submit().unwrap_err();
    assert!(matches!(err, SiteError::Unsupported(_)), "{err}");

    let bad = ContactForm {
        email: "ines".into(),
        ..filled()
    };
    assert!(matches!(bad.submit(), Err(SiteError::Validation(_))));
}

#[test]
fn every_field_is_required() {
    assert!(filled().validate().is_ok());
    for form in [
        ContactForm { name: " ".into(), ..filled() },
        ContactForm { email: "@example.com".into(), ..filled() },
        ContactForm { email: "ines@localhost".into(), ..filled() },
        ContactForm { inquiry: String::new(), ..filled() },
    ] {
        assert!(form.validate().is_err(), "{form:?}");
    }
}

#[test]
fn form_is_static_and_interactive() {
    let config = SiteConfig::default();
    let mut stage = Stage::new(Viewport::new(1440, 900).unwrap());
    let mut scheduler = Scheduler::new();
    let owner = scheduler.open("contact");
    let mut cx = PageContext::new(&mut stage, &mut scheduler, &config, owner);
    mount(&mut cx).unwrap();
    let page = cx.finish();

    assert_eq!(page.interactive.len(), FIELDS.len() + 1);
    assert_eq!(scheduler.handles_of(owner), 0);
    let submit = stage.find("contact-submit").unwrap();
    assert_eq!(
        stage.get(submit).and_then(|e| e.text.as_deref()),
        Some("Send into the void")
    );
}
