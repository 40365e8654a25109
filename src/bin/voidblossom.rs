use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use voidblossom::{Route, Site, SiteConfig, Viewport};

/// Clock time given to scrub smoothing before the snapshot is taken.
const SETTLE_S: f64 = 30.0;

#[derive(Parser, Debug)]
#[command(name = "voidblossom", version)]
struct Cli {
    /// Site config JSON (defaults plus `VOIDBLOSSOM_BASE_PATH` when omitted).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write JSON output here instead of stdout.
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    /// Log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List routes with their menu labels.
    Routes,
    /// Dump a page's compiled timelines.
    Timeline(PageArgs),
    /// Dump the stage after scrolling through the page's first pinned section.
    Scrub(ScrubArgs),
    /// Print the preload gate's phase and counter at a point in time.
    Preload(PreloadArgs),
}

#[derive(Args, Debug)]
struct PageArgs {
    /// Route path, e.g. `/product`.
    #[arg(long, default_value = "/")]
    page: String,

    #[arg(long, default_value_t = 1440)]
    width: u32,

    #[arg(long, default_value_t = 900)]
    height: u32,
}

#[derive(Args, Debug)]
struct ScrubArgs {
    #[command(flatten)]
    page: PageArgs,

    /// Fraction of the pinned range, `0..=1`.
    #[arg(long)]
    progress: f64,
}

#[derive(Args, Debug)]
struct PreloadArgs {
    /// Seconds since the site opened.
    #[arg(long)]
    at: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => SiteConfig::from_json_file(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => SiteConfig::from_env(),
    };
    match cli.cmd {
        Command::Routes => cmd_routes(),
        Command::Timeline(args) => cmd_timeline(config, args, cli.out.as_deref()),
        Command::Scrub(args) => cmd_scrub(config, args, cli.out.as_deref()),
        Command::Preload(args) => cmd_preload(config, args),
    }
}

fn cmd_routes() -> anyhow::Result<()> {
    for route in Route::ALL {
        println!("{:<12} {}", route.path(), route.menu_label());
    }
    Ok(())
}

fn open_page(config: SiteConfig, args: &PageArgs) -> anyhow::Result<Site> {
    let viewport = Viewport::new(args.width, args.height)?;
    let mut site = Site::new(config, viewport)?;
    site.navigate(&args.page)
        .with_context(|| format!("open page '{}'", args.page))?;
    Ok(site)
}

fn cmd_timeline(config: SiteConfig, args: PageArgs, out: Option<&Path>) -> anyhow::Result<()> {
    let site = open_page(config, &args)?;
    let owner = site
        .page_owner()
        .context("no page is mounted")?;
    let compiled = site.scheduler().compiled_of(owner);
    write_json(&compiled, out)
}

fn cmd_scrub(config: SiteConfig, args: ScrubArgs, out: Option<&Path>) -> anyhow::Result<()> {
    anyhow::ensure!(
        (0.0..=1.0).contains(&args.progress),
        "progress must be within 0..=1, got {}",
        args.progress
    );
    let mut site = open_page(config, &args.page)?;
    let binding = site
        .first_pin_binding()
        .with_context(|| format!("page '{}' has no pinned section", args.page.page))?;
    let range = site
        .scheduler()
        .binding_range(binding)
        .context("pinned section is inactive at this viewport")?;
    site.scroll_to(range.at(args.progress))?;

    let dt = site.config().fps.frame_duration_secs();
    for _ in 0..site.config().fps.secs_to_frames_ceil(SETTLE_S) {
        site.tick(dt)?;
    }
    write_json(&site.snapshot(), out)
}

fn cmd_preload(config: SiteConfig, args: PreloadArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.at >= 0.0, "time must be >= 0, got {}", args.at);
    let mut site = Site::new(config, Viewport::new(1440, 900)?)?;
    let fps = site.config().fps;
    let frames = fps.secs_to_frames_ceil(args.at);
    let dt = fps.frame_duration_secs();
    let mut elapsed = 0.0;
    for _ in 0..frames {
        let step = dt.min(args.at - elapsed);
        site.tick(step)?;
        elapsed += step;
    }
    println!("{:?} {:03}", site.gate_phase(), site.preload_progress());
    Ok(())
}

fn write_json<T: serde::Serialize>(value: &T, out: Option<&Path>) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize output")?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(path, json)
                .with_context(|| format!("write '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
