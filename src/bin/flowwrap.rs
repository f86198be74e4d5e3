use std::{fs::File, io::BufWriter, path::PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "flowwrap", version)]
struct Cli {
    /// Log pass details to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve a layout request and print the placements as JSON.
    Layout(LayoutArgs),
    /// Render two containers of random text chips to a PNG.
    Demo(DemoArgs),
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    /// Input layout request JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct DemoArgs {
    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Seed for label generation.
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Width of the wrapping container in pixels.
    #[arg(long, default_value_t = 360)]
    width: u32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Layout(args) => cmd_layout(args),
        Command::Demo(args) => cmd_demo(args),
    }
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let req = flowwrap::LayoutRequest::from_path(&args.in_path)?;
    let resp = req.solve();

    match &args.out {
        Some(out) => {
            ensure_parent_dir(out)?;
            let f = File::create(out).with_context(|| format!("create '{}'", out.display()))?;
            resp.write_json(BufWriter::new(f))?;
            eprintln!(
                "placed {} of {} items on {} lines -> {}",
                resp.placed_count(),
                resp.items.len(),
                resp.lines.len(),
                out.display()
            );
        }
        None => println!("{}", resp.to_json_pretty()?),
    }
    Ok(())
}

fn cmd_demo(args: DemoArgs) -> anyhow::Result<()> {
    let scene = flowwrap::DemoScene::generate(args.seed, args.width)?;
    ensure_parent_dir(&args.out)?;
    scene.save_png(&args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn ensure_parent_dir(path: &std::path::Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}
