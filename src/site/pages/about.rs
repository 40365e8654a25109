use crate::{
    animation::{ease::Ease, style::Style},
    engine::{scroll::ScrollBinding, stage::ElementSpec},
    foundation::{core::Extent, error::SiteResult},
    site::pages::PageContext,
    timeline::{timeline::Timeline, tween::Tween},
};

pub const STUDIO_IMAGE: &str =
    "https://images.unsplash.com/photo-1497366216548-37526070297c?auto=format&fit=crop&q=80&w=1000";

const NARRATIVE: [&str; 2] = [
    "Founded in 2024 by a collective of chemists, poets, and architects, Voidblossom exists at the intersection of molecular science and spiritual austerity.",
    "Our studio is located in the high desert, where silence is the primary ingredient. We work in small, intentional batches, respecting the lunar cycles and the natural rhythms of our botanical sources.",
];

const STATS: [(&str, &str); 3] = [
    ("Headquarters", "High Desert Studio, Sante Fe, NM"),
    ("Philosophy", "Radical Restraint, Intentional Sourcing"),
    ("Batches", "Non-Periodic, Limited Release"),
];

/// One reveal tween plus the binding that starts it.
fn reveal(
    cx: &mut PageContext<'_>,
    label: &str,
    tween: Tween,
    trigger: &str,
    start: &str,
) -> SiteResult<()> {
    let tl = Timeline::new(label).then(tween);
    cx.bind(ScrollBinding::starting_at(trigger, start)?, Some(&tl))?;
    Ok(())
}

pub fn mount(cx: &mut PageContext<'_>) -> SiteResult<()> {
    cx.section(
        ElementSpec::new("about-title").text("Makers of The Invisible."),
        Extent::vh(0.6),
    );
    cx.section(ElementSpec::new("about-narrative"), Extent::vh(0.8));
    for (i, copy) in NARRATIVE.iter().enumerate() {
        cx.insert(
            ElementSpec::new(format!("about-paragraph-{i}"))
                .class("about-paragraph")
                .text(*copy),
        );
    }
    cx.section(
        ElementSpec::new("about-image-wrapper")
            .image(STUDIO_IMAGE)
            .interactive(),
        Extent::vh(1.0),
    );
    cx.section(ElementSpec::new("about-stats"), Extent::vh(0.6));
    for (heading, copy) in STATS {
        cx.insert(
            ElementSpec::new(format!("about-stat-{}", heading.to_lowercase()))
                .class("about-stat")
                .text(format!("{heading}. {copy}")),
        );
    }

    reveal(
        cx,
        "about title",
        Tween::from("#about-title", Style::new().y(60.0).opacity(0.0), 1.8).ease(Ease::OutQuart),
        "#about-title",
        "top 90%",
    )?;
    reveal(
        cx,
        "about narrative",
        Tween::from(".about-paragraph", Style::new().y(30.0).opacity(0.0), 1.5)
            .ease(Ease::OutCubic)
            .stagger(0.3),
        "#about-narrative",
        "top 85%",
    )?;
    reveal(
        cx,
        "about image",
        Tween::from(
            "#about-image-wrapper",
            Style::new().scale(1.05).y(40.0).opacity(0.0),
            2.0,
        )
        .ease(Ease::OutExpo),
        "#about-image-wrapper",
        "top 80%",
    )?;
    reveal(
        cx,
        "about stats",
        Tween::from(".about-stat", Style::new().y(20.0).opacity(0.0), 1.2)
            .ease(Ease::OutCubic)
            .stagger(0.2),
        "#about-stats",
        "top 90%",
    )
}

#[cfg(test)]
#[path = "../../../tests/unit/site/pages/about.rs"]
mod tests;
