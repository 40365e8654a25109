use crate::{
    animation::{ease::Ease, style::Style},
    engine::{
        scroll::ScrollBinding,
        stage::{ElementSpec, Selector},
    },
    foundation::{core::Extent, error::SiteResult},
    motion::sequencer::{NarrativeSequencer, Step, StepMotion},
    site::pages::PageContext,
    timeline::{player::Scrub, position::Position, timeline::Timeline, tween::Tween},
};

pub const LINES_END: &str = "+=400%";
pub const PIN_LAG_S: f64 = 1.5;
pub const LINES_LAG_S: f64 = 1.2;
const LINES_SCREENS: f64 = 4.0;

pub const LINES: [&str; 3] = [
    "Luxury is the absence of persuasion.",
    "We speak only when we have reduced the world.",
    "Voidblossom is the silence before the bloom.",
];

const BLOCKS: [(&str, &str); 6] = [
    ("phi-ethos", "Against the noise of surplus."),
    (
        "phi-ethos-body",
        "We do not advertise. We notify. We do not package. We vessel. We do not compete. We exist.",
    ),
    ("phi-formula", "The Molecule is Sacred."),
    (
        "phi-formula-notes",
        "On Preservation. On Volatility. Fragrance: Zero. Fillers: Zero. Stability Index: 99.8%. Batch Cycle: Lunar.",
    ),
    ("phi-tenets", "01 Reduction. 02 Stability. 03 Silence."),
    (
        "phi-declaration",
        "The highest form of luxury is the ability to be quiet in a world that never stops talking.",
    ),
];

fn line_name(index: usize) -> String {
    format!("phi-line-{index}")
}

fn line_exit(duration_s: f64) -> StepMotion {
    StepMotion::to(
        Style::new().opacity(0.0).y(-60.0).blur(10.0).interactive(false),
        duration_s,
    )
    .ease(Ease::InOutCubic)
}

pub fn intro() -> Timeline {
    Timeline::new("philosophy intro")
        .with_default_ease(Ease::OutExpo)
        .then(
            Tween::from("#manifesto-header", Style::new().y(30.0).opacity(0.0), 2.0).delay(0.5),
        )
        .at(
            Tween::from(
                Selector::name(line_name(0)),
                Style::new().y(50.0).opacity(0.0).blur(10.0),
                2.5,
            ),
            Position::FromEnd(-1.5),
        )
}

/// Line swaps: each manifesto line replaces the previous one.
pub fn lines() -> NarrativeSequencer {
    let mut seq = NarrativeSequencer::new("philosophy lines").default_ease(Ease::OutQuad);
    for i in 0..LINES.len() {
        let step = Step::new(Selector::name(line_name(i)));
        let step = if i == 0 {
            step.entered_on_load().hold(1.2).exit(line_exit(1.5))
        } else {
            step.enter(
                StepMotion::from_to(
                    Style::new().opacity(0.0).y(60.0).blur(10.0),
                    Style::new().opacity(1.0).y(0.0).blur(0.0).interactive(true),
                    2.2,
                )
                .ease(Ease::OutExpo),
            )
            .enter_overlap(0.0)
            .hold(1.0)
            .exit(line_exit(1.8))
        };
        seq = seq.step(step);
    }
    seq
}

pub fn mount(cx: &mut PageContext<'_>) -> SiteResult<()> {
    cx.section(ElementSpec::new("phi-scroll"), Extent::vh(1.0));
    cx.insert(
        ElementSpec::new("manifesto-header")
            .text("The Manifesto. A declaration of aesthetic and molecular purity."),
    );
    for (i, copy) in LINES.iter().enumerate() {
        let base = if i == 0 {
            Style::new().interactive(true)
        } else {
            Style::new().opacity(0.0).y(64.0).interactive(false)
        };
        cx.insert(
            ElementSpec::new(line_name(i))
                .class("phi-line")
                .text(*copy)
                .base(base),
        );
    }
    cx.insert(ElementSpec::new("phi-scroll-hint").text("Scroll to reveal"));

    cx.spacer(Extent::vh(LINES_SCREENS));
    for (name, copy) in BLOCKS {
        cx.section(
            ElementSpec::new(name).class("reveal-block").text(copy),
            Extent::vh(0.9),
        );
    }

    cx.play(&intro())?;

    cx.bind(
        ScrollBinding::new("#phi-scroll", "top top", LINES_END)?
            .pin("#phi-scroll")
            .scrub(Scrub::Smooth { lag_s: PIN_LAG_S })
            .invalidate_on_refresh(),
        None,
    )?;
    cx.bind(
        ScrollBinding::new("#phi-scroll", "top top", LINES_END)?.scrub(Scrub::Smooth {
            lag_s: LINES_LAG_S,
        }),
        Some(&lines().timeline()),
    )?;

    for (name, _) in BLOCKS {
        let reveal = Timeline::new(format!("{name} reveal")).then(
            Tween::from(Selector::name(name), Style::new().y(80.0).opacity(0.0), 2.0)
                .ease(Ease::OutExpo),
        );
        cx.bind(
            ScrollBinding::starting_at(Selector::name(name), "top 85%")?
                .toggle("play none none reverse".parse()?),
            Some(&reveal),
        )?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../../tests/unit/site/pages/philosophy.rs"]
mod tests;
