use std::{io::Write as _, net::SocketAddr, path::PathBuf, sync::Arc};

use anyhow::Context as _;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use lifeweeks::server::api::{ImageQuery, OutputFormat, resolve_image_query};
use lifeweeks::server::config::{DEFAULT_MAX_DIMENSION, DEFAULT_MIN_DIMENSION, resolve_bind};
use lifeweeks::{
    BirthDate, Clock, FixedClock, LiveTicker, Presentation, Scene, ServerConfig, StatsReport,
    SystemClock, encode_png, render_frame, render_svg,
};

#[derive(Parser, Debug)]
#[command(name = "lifeweeks", version, about = "Your life in weeks, one box per week")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the image/stats API and the interactive page.
    Serve(ServeArgs),
    /// Render the grid to a PNG or SVG file.
    Image(ImageArgs),
    /// Print life statistics as JSON.
    Stats(StatsArgs),
    /// Print live counters once per second until interrupted.
    Watch(WatchArgs),
}

#[derive(Parser, Debug)]
struct ServeArgs {
    /// Listen address. Falls back to `0.0.0.0:$PORT`, then `0.0.0.0:8080`.
    #[arg(long, env = "LIFEWEEKS_BIND")]
    bind: Option<SocketAddr>,

    /// Origin used in share links (defaults to the request's Host header).
    #[arg(long, env = "LIFEWEEKS_PUBLIC_ORIGIN")]
    public_origin: Option<String>,

    #[arg(long, env = "LIFEWEEKS_MIN_DIMENSION", default_value_t = DEFAULT_MIN_DIMENSION)]
    min_dimension: u32,

    #[arg(long, env = "LIFEWEEKS_MAX_DIMENSION", default_value_t = DEFAULT_MAX_DIMENSION)]
    max_dimension: u32,
}

#[derive(Parser, Debug)]
struct ImageArgs {
    /// Birth date, YYYY-MM-DD.
    #[arg(long)]
    birth_date: String,

    /// Output path. The format follows the extension unless `--format` is given.
    #[arg(long)]
    out: PathBuf,

    #[arg(long)]
    width: Option<u32>,

    #[arg(long)]
    height: Option<u32>,

    /// Wallpaper preset name, e.g. "iPhone 15 Pro" (overrides width/height).
    #[arg(long)]
    device: Option<String>,

    #[arg(long)]
    dark: bool,

    /// Fade lived weeks older than ten years.
    #[arg(long)]
    fade: bool,

    /// export, canvas or fullscreen.
    #[arg(long, value_parser = str::parse::<Presentation>, default_value = "export")]
    presentation: Presentation,

    /// png or svg.
    #[arg(long, value_parser = str::parse::<OutputFormat>)]
    format: Option<OutputFormat>,

    /// Week number (0-based) to highlight.
    #[arg(long)]
    week: Option<u32>,

    #[arg(long)]
    lived_color: Option<String>,

    #[arg(long)]
    remaining_color: Option<String>,

    #[arg(long)]
    background_color: Option<String>,

    /// Pretend today is this date (YYYY-MM-DD).
    #[arg(long)]
    today: Option<NaiveDate>,
}

#[derive(Parser, Debug)]
struct StatsArgs {
    /// Birth date, YYYY-MM-DD.
    #[arg(long)]
    birth_date: String,

    /// Pretend today is this date (YYYY-MM-DD).
    #[arg(long)]
    today: Option<NaiveDate>,
}

#[derive(Parser, Debug)]
struct WatchArgs {
    /// Birth date, YYYY-MM-DD.
    #[arg(long)]
    birth_date: String,

    /// Stop after this many ticks.
    #[arg(long)]
    count: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Serve(args) => cmd_serve(args).await,
        Command::Image(args) => cmd_image(args),
        Command::Stats(args) => cmd_stats(args),
        Command::Watch(args) => cmd_watch(args).await,
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn clock_for(today: Option<NaiveDate>) -> Arc<dyn Clock> {
    match today {
        Some(d) => Arc::new(FixedClock::at_midnight(d)),
        None => Arc::new(SystemClock),
    }
}

async fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    anyhow::ensure!(
        args.min_dimension <= args.max_dimension,
        "min dimension {} exceeds max dimension {}",
        args.min_dimension,
        args.max_dimension
    );
    let port = std::env::var("PORT").ok();
    let config = ServerConfig {
        bind: resolve_bind(args.bind, port.as_deref())?,
        public_origin: args.public_origin,
        min_dimension: args.min_dimension,
        max_dimension: args.max_dimension,
    };
    lifeweeks::server::serve(config, shutdown_signal()).await
}

fn cmd_image(args: ImageArgs) -> anyhow::Result<()> {
    let format = args.format.unwrap_or_else(|| {
        match args.out.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => OutputFormat::Svg,
            _ => OutputFormat::Png,
        }
    });

    let query = ImageQuery {
        birth_date: Some(args.birth_date),
        width: args.width.map(|w| w.to_string()),
        height: args.height.map(|h| h.to_string()),
        dark: args.dark.then(String::new),
        device: args.device,
        fade: args.fade.then(String::new),
        week: args.week.map(|w| w.to_string()),
        lived_color: args.lived_color,
        remaining_color: args.remaining_color,
        background_color: args.background_color,
        ..Default::default()
    };
    let today = clock_for(args.today).today();
    let mut job = resolve_image_query(&query, &ServerConfig::default(), today)
        .map_err(|e| anyhow::anyhow!("{}", e.message()))?;
    job.format = format;
    job.options.presentation = args.presentation;

    let scene = Scene::build(&job.stats, job.birth.date(), &job.options);
    let bytes = match job.format {
        OutputFormat::Svg => render_svg(&scene).into_bytes(),
        OutputFormat::Png => encode_png(&render_frame(&scene)?)?,
    };
    std::fs::write(&args.out, bytes)
        .with_context(|| format!("write image '{}'", args.out.display()))?;
    tracing::info!(
        out = %args.out.display(),
        width = job.options.width,
        height = job.options.height,
        "image written"
    );
    Ok(())
}

fn cmd_stats(args: StatsArgs) -> anyhow::Result<()> {
    let today = clock_for(args.today).today();
    let birth = BirthDate::parse(Some(&args.birth_date), today)?;
    let report = StatsReport::new(birth.date(), today);
    let json = serde_json::to_string_pretty(&report).context("serialize stats")?;
    println!("{json}");
    Ok(())
}

async fn cmd_watch(args: WatchArgs) -> anyhow::Result<()> {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let birth = BirthDate::parse(Some(&args.birth_date), clock.today())?;
    let mut ticker = LiveTicker::new(birth.date(), clock);
    let mut ticks = 0u64;
    let mut stdout = std::io::stdout();

    let stop = shutdown_signal();
    tokio::pin!(stop);
    loop {
        tokio::select! {
            _ = &mut stop => break,
            s = ticker.tick() => {
                write!(
                    stdout,
                    "\r{} weeks | {} days | {} hours | {} minutes | {} seconds | {:.6}%   ",
                    s.weeks_lived,
                    s.days_lived,
                    s.hours_lived,
                    s.minutes_lived,
                    s.seconds_lived,
                    s.precise_percentage,
                )?;
                stdout.flush()?;
                ticks += 1;
                if args.count.is_some_and(|n| ticks >= n) {
                    break;
                }
            }
        }
    }
    writeln!(stdout)?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "unable to install ctrl+c handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "unable to install sigterm handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
