use crate::{
    animation::{ease::Ease, style::Style},
    engine::{
        scroll::{MediaQuery, ScrollBinding},
        stage::{ElementSpec, Selector},
    },
    foundation::{core::Extent, error::SiteResult},
    site::pages::PageContext,
    timeline::{player::Scrub, position::Position, timeline::Timeline, tween::Tween},
};

/// Length of a tween declared without a duration.
const DEFAULT_TWEEN_S: f64 = 0.5;
pub const PARALLAX_LAG_S: f64 = 1.2;

const TITLE_HEIGHT: Extent = Extent::vh(1.0);
const REVEAL_HEIGHT: Extent = Extent::vh(3.0);

const ITEMS: [(&str, f64, &str); 3] = [
    (
        "product-foundation",
        0.2,
        "I. The Foundation. 10% L-Ascorbic Acid. Stabilized in absolute dark.",
    ),
    (
        "product-synergists",
        1.2,
        "II. The Synergists. Acetyl Glucosamine. Centella Asiatica.",
    ),
    ("product-acquire", 2.2, "10ml / 0.34 fl oz. Acquire Void. Registry Open"),
];

/// Scrubbed depth motion inside the sticky column.
pub fn parallax() -> Timeline {
    Timeline::new("product parallax")
        .then(
            Tween::from_to(
                "#product-vessel",
                Style::new().y(60.0).scale(0.9).rotate_z(-4.0),
                Style::new().y(-60.0).scale(1.1).rotate_z(4.0),
                DEFAULT_TWEEN_S,
            )
            .ease(Ease::Linear),
        )
        .at(
            Tween::from_to(
                "#product-silk",
                Style::new().y(-60.0).scale(1.3).opacity(0.04),
                Style::new().y(60.0).scale(1.0).opacity(0.12),
                DEFAULT_TWEEN_S,
            )
            .ease(Ease::Linear),
            Position::At(0.0),
        )
        .at(
            Tween::from_to(
                "#product-atmosphere",
                Style::new().opacity(0.08).scale(0.85),
                Style::new().opacity(0.2).scale(1.1),
                DEFAULT_TWEEN_S,
            )
            .ease(Ease::InOutQuad),
            Position::At(0.0),
        )
        .at(
            Tween::from_to(
                "#product-grid",
                Style::new().scale(1.05).opacity(0.1),
                Style::new().scale(1.0).opacity(0.02),
                DEFAULT_TWEEN_S,
            )
            .ease(Ease::OutCubic),
            Position::At(0.0),
        )
}

pub fn mount(cx: &mut PageContext<'_>) -> SiteResult<()> {
    cx.section(ElementSpec::new("product-title"), TITLE_HEIGHT);
    for (name, copy) in [("product-title-void", "VOID"), ("product-title-vitamin", "VITAMIN C")] {
        cx.insert(
            ElementSpec::new(name)
                .class("mask-text")
                .text(copy)
                .base(Style::new().y(100.0)),
        );
    }

    cx.section(ElementSpec::new("product-reveal"), REVEAL_HEIGHT);
    let top = TITLE_HEIGHT;
    cx.insert(ElementSpec::new("sticky-column").at(top, Extent::vh(1.0)));
    cx.insert(ElementSpec::new("product-silk").base(Style::new().opacity(0.1)));
    cx.insert(ElementSpec::new("product-grid").base(Style::new().opacity(0.1)));
    cx.insert(ElementSpec::new("product-atmosphere"));
    let hero = cx.asset_url("hero.png");
    cx.insert(ElementSpec::new("product-vessel").image(hero));

    for (name, offset, copy) in ITEMS {
        let mut spec = ElementSpec::new(name)
            .class("reveal-item")
            .text(copy)
            .at(top.plus(Extent::vh(offset)), Extent::vh(0.6));
        if name == "product-acquire" {
            spec = spec.interactive();
        }
        cx.insert(spec);
    }

    let title = Timeline::new("product title").then(
        Tween::to(".mask-text", Style::new().y(0.0), 2.2)
            .ease(Ease::OutExpo)
            .delay(0.3),
    );
    cx.play(&title)?;

    let desktop = MediaQuery::MinWidth(cx.config.mobile_breakpoint_px + 1);
    cx.bind(
        ScrollBinding::new("#product-reveal", "top top", "bottom bottom")?
            .pin("#sticky-column")
            .scrub(Scrub::Instant)
            .media(desktop)
            .invalidate_on_refresh(),
        None,
    )?;
    cx.bind(
        ScrollBinding::new("#product-reveal", "top top", "bottom bottom")?
            .scrub(Scrub::Smooth {
                lag_s: PARALLAX_LAG_S,
            })
            .media(desktop),
        Some(&parallax()),
    )?;

    for (name, _, _) in ITEMS {
        let item = Timeline::new(format!("{name} reveal")).then(
            Tween::from(Selector::name(name), Style::new().y(80.0).opacity(0.0), 1.8)
                .ease(Ease::OutExpo),
        );
        cx.bind(
            ScrollBinding::starting_at(Selector::name(name), "top 92%")?
                .toggle("play none none reverse".parse()?),
            Some(&item),
        )?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../../tests/unit/site/pages/product.rs"]
mod tests;
