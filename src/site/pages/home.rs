use crate::{
    animation::{ease::Ease, style::Style},
    engine::{
        scroll::ScrollBinding,
        stage::{ElementSpec, Selector},
    },
    foundation::{
        core::{Breakpoint, Extent, Responsive},
        error::SiteResult,
    },
    motion::sequencer::{NarrativeSequencer, Step, StepMotion},
    site::pages::PageContext,
    timeline::{player::Scrub, position::Position, timeline::Timeline, tween::Tween},
};

/// Scroll distance of the pinned narrative.
pub const NARRATIVE_END: &str = "+=500%";
pub const NARRATIVE_LAG_S: f64 = 1.2;
const NARRATIVE_SCREENS: f64 = 5.0;

const VESSEL: &str = "#home-vessel";

type Link = (&'static str, &'static str, &'static str);

/// Reveal-on-scroll sections below the pinned hero: name, copy, optional link.
const SECTIONS: [(&str, &str, Option<Link>); 3] = [
    (
        "home-statement",
        "We do not decorate the skin. We nourish the silence beneath it.",
        None,
    ),
    (
        "home-materiality",
        "The weight of intentional restraint.",
        Some(("home-manifesto-link", "Read the Manifesto", "/philosophy")),
    ),
    (
        "home-closure",
        "Voidblossom is for those who understand that the most powerful thing in a room is the stillness.",
        Some(("home-collection-link", "Explore Collection", "/product")),
    ),
];

/// Page-load reveal of the hero.
pub fn intro() -> Timeline {
    Timeline::new("home intro")
        .with_default_ease(Ease::OutExpo)
        .then(Tween::from_to(
            "#hero-bg-accent",
            Style::new().opacity(0.0),
            Style::new().opacity(1.0),
            2.5,
        ))
        .at(
            Tween::from_to(
                "#home-brand",
                Style::new().opacity(0.0).y(30.0).blur(12.0),
                Style::new().opacity(1.0).y(0.0).blur(0.0),
                2.2,
            ),
            Position::FromEnd(-1.8),
        )
        .at(
            Tween::from_to(
                VESSEL,
                Style::new().opacity(0.0).scale(0.9).y(100.0),
                Style::new().opacity(1.0).scale(1.0).y(0.0),
                3.0,
            ),
            Position::FromEnd(-2.4),
        )
        .at(
            Tween::from_to(
                "#narrative-step-1",
                Style::new().opacity(0.0).y(20.0),
                Style::new().opacity(1.0).y(0.0),
                1.8,
            ),
            Position::FromEnd(-2.2),
        )
}

fn vessel_move(duration_s: f64, to: Style) -> Tween {
    Tween::to(VESSEL, to, duration_s).ease(Ease::InOutCubic)
}

fn side_entry(x: Responsive<f64>, bp: Breakpoint) -> StepMotion {
    StepMotion::from_to(
        Style::new()
            .opacity(0.0)
            .x(x.pick(bp))
            .y(Responsive::new(60.0, 0.0).pick(bp))
            .blur(15.0),
        Style::new().opacity(1.0).x(0.0).y(0.0).blur(0.0),
        2.0,
    )
}

fn fade_up(y: f64, duration_s: f64) -> StepMotion {
    StepMotion::to(Style::new().opacity(0.0).y(y), duration_s)
}

/// The scrubbed four-beat narrative for a layout branch.
pub fn narrative(bp: Breakpoint) -> NarrativeSequencer {
    let pick = |mobile: f64, desktop: f64| Responsive::new(mobile, desktop).pick(bp);
    NarrativeSequencer::new("home narrative")
        .default_ease(Ease::OutQuad)
        .step(
            Step::new("#narrative-step-1")
                .entered_on_load()
                .exit(StepMotion::to(
                    Style::new().opacity(0.0).y(-50.0).blur(10.0),
                    1.0,
                ))
                .companion(vessel_move(
                    2.5,
                    Style::new()
                        .x_percent(pick(0.0, -32.0))
                        .scale(pick(1.3, 0.8))
                        .rotate_z(pick(3.0, -4.0)),
                )),
        )
        .step(
            Step::new("#narrative-step-2")
                .enter(side_entry(Responsive::new(0.0, 160.0), bp))
                .hold(1.0)
                .exit(fade_up(-60.0, 1.2))
                .companion(vessel_move(
                    3.0,
                    Style::new()
                        .x_percent(pick(0.0, 32.0))
                        .scale(pick(1.5, 1.1))
                        .rotate_z(pick(-3.0, 5.0)),
                )),
        )
        .step(
            Step::new("#narrative-step-3")
                .enter(side_entry(Responsive::new(0.0, -160.0), bp))
                .hold(1.0)
                .exit(fade_up(-60.0, 1.2))
                .companion(vessel_move(
                    3.0,
                    Style::new()
                        .x_percent(0.0)
                        .y_viewport(pick(-10.0, -18.0))
                        .scale(pick(0.7, 0.55))
                        .rotate_z(0.0)
                        .opacity(0.1),
                )),
        )
        .step(
            Step::new("#narrative-step-4")
                .enter(StepMotion::from_to(
                    Style::new().opacity(0.0).y(80.0).blur(15.0),
                    Style::new().opacity(1.0).y(0.0).blur(0.0),
                    2.5,
                ))
                .enter_overlap(2.0),
        )
}

pub fn mount(cx: &mut PageContext<'_>) -> SiteResult<()> {
    let bp = cx.breakpoint();
    let hidden = || Style::new().opacity(0.0);

    cx.section(ElementSpec::new("home"), Extent::vh(1.0));
    cx.insert(ElementSpec::new("hero-bg-accent"));
    // The intro's from-states hide the brand and vessel at mount; their base
    // is the settled look the narrative animates away from.
    cx.insert(ElementSpec::new("home-brand").text("VOIDBLOSSOM"));
    cx.insert(ElementSpec::new("home-brand-tagline").text("Essence in Absentia"));
    let hero = cx.asset_url("hero.png");
    cx.insert(ElementSpec::new("home-vessel").image(hero));
    cx.insert(
        ElementSpec::new("narrative-step-1")
            .class("narrative-step")
            .text("Series 01 - Vitamin C Concentrate"),
    );
    cx.insert(
        ElementSpec::new("narrative-step-2")
            .class("narrative-step")
            .base(hidden())
            .text("Reduced Complexity. We remove until only the essential remains."),
    );
    cx.insert(
        ElementSpec::new("narrative-step-3")
            .class("narrative-step")
            .base(hidden())
            .text("Obsidian Glass. Absolute protection from the visible spectrum."),
    );
    cx.insert(
        ElementSpec::new("narrative-step-4")
            .class("narrative-step")
            .base(hidden())
            .text("The luxury of radical restraint."),
    );
    cx.insert(ElementSpec::new("home-cta").text("Acquire Series 01").href("/product"));

    cx.spacer(Extent::vh(NARRATIVE_SCREENS));
    for (name, copy, link) in SECTIONS {
        cx.section(
            ElementSpec::new(name).class("reveal-section").text(copy),
            Extent::vh(1.2),
        );
        if let Some((link, label, path)) = link {
            cx.insert(ElementSpec::new(link).text(label).href(path));
        }
    }

    cx.play(&intro())?;

    let master = narrative(bp).timeline();
    cx.bind(
        ScrollBinding::new("#home", "top top", NARRATIVE_END)?
            .pin("#home")
            .scrub(Scrub::Smooth {
                lag_s: NARRATIVE_LAG_S,
            })
            .invalidate_on_refresh(),
        Some(&master),
    )?;

    for (name, _, _) in SECTIONS {
        let reveal = Timeline::new(format!("{name} reveal")).then(
            Tween::from(
                Selector::name(name),
                Style::new().y(120.0).opacity(0.0),
                2.5,
            )
            .ease(Ease::OutExpo),
        );
        cx.bind(
            ScrollBinding::starting_at(Selector::name(name), "top 90%")?,
            Some(&reveal),
        )?;
    }
    tracing::debug!(?bp, "home mounted");
    Ok(())
}

#[cfg(test)]
#[path = "../../../tests/unit/site/pages/home.rs"]
mod tests;
