#![deny(unsafe_code)]
//! CLI binary for the coloring-book engine.
//!
//! Subcommands:
//! - `render <theme>`: compose a theme (or a custom recipe) and write a PNG
//!   plus the render plan that reproduces it
//! - `render-all`: render every built-in theme, continuing past failures
//! - `list`: print available themes, templates and decorations
//! - `dump <theme>`: print a composed scene as JSON

mod error;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Args, Parser, Subcommand};
use coloring_core::plan::DEFAULT_DPI;
use coloring_core::{RenderPlan, Xorshift64};
use coloring_scenes::{export, ComposeOptions, Composer, Recipe, Scene, Theme};
use coloring_templates::{Decoration, TemplateId};
use error::CliError;
use serde_json::{json, Value};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "coloring-book", version, about = "Printable coloring-page generator")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging on stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

/// Inputs that decide what ends up on the page.
#[derive(Args)]
struct ComposeArgs {
    /// PRNG seed for grass and cloud jitter.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Draw a rounded border frame around the page.
    #[arg(long)]
    frame: bool,

    /// Composition options as a JSON object (frame, grass_blades, clouds).
    #[arg(long, default_value = "{}")]
    options: String,
}

/// Where and how large the PNG is written.
#[derive(Args)]
struct OutputArgs {
    /// Export resolution in dots per inch (1 to 1200).
    #[arg(long, default_value_t = DEFAULT_DPI)]
    dpi: u32,

    /// Directory receiving `coloring_page_<theme>.png` and its `.json` plan.
    #[arg(short, long, default_value = "coloring_pages")]
    output_dir: PathBuf,
}

#[derive(Subcommand)]
enum Command {
    /// Compose one theme and write it as a PNG.
    Render {
        /// Theme name (e.g. "cat_garden"), or the page name when --recipe is given.
        theme: String,

        /// Compose this JSON recipe file instead of a built-in theme.
        #[arg(long)]
        recipe: Option<PathBuf>,

        #[command(flatten)]
        compose: ComposeArgs,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Render every built-in theme.
    RenderAll {
        #[command(flatten)]
        compose: ComposeArgs,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// List available themes, templates and decorations.
    List,
    /// Print a composed scene as JSON.
    Dump {
        /// Theme name, or the page name when --recipe is given.
        theme: String,

        /// Compose this JSON recipe file instead of a built-in theme.
        #[arg(long)]
        recipe: Option<PathBuf>,

        #[command(flatten)]
        compose: ComposeArgs,
    },
}

/// Parses `--options`, folding `--frame` into it so the plan records it.
fn parse_options(args: &ComposeArgs) -> Result<(Value, ComposeOptions), CliError> {
    let mut value: Value = serde_json::from_str(&args.options)
        .map_err(|e| CliError::Input(format!("invalid --options JSON: {e}")))?;
    if args.frame {
        if let Some(obj) = value.as_object_mut() {
            obj.insert("frame".into(), Value::Bool(true));
        }
    }
    let options = ComposeOptions::from_json(&value)?;
    debug!(?options, "parsed compose options");
    Ok((value, options))
}

fn load_recipe(path: &Path) -> Result<(Value, Recipe), CliError> {
    let text = fs::read_to_string(path)
        .map_err(|e| CliError::Io(format!("{}: {e}", path.display())))?;
    let value: Value = serde_json::from_str(&text)
        .map_err(|e| CliError::Input(format!("invalid recipe JSON in {}: {e}", path.display())))?;
    let recipe = Recipe::from_json(&value)?;
    Ok((value, recipe))
}

/// Page names end up in file names, so they are restricted to `[A-Za-z0-9_-]`.
fn check_page_name(name: &str) -> Result<(), CliError> {
    if !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        Ok(())
    } else {
        Err(CliError::Input(format!(
            "page name {name:?} may only contain letters, digits, '_' and '-'"
        )))
    }
}

/// Composes a built-in theme, or the recipe at `recipe` under the page name
/// `name`, together with the plan that reproduces it.
fn compose_scene(
    name: &str,
    recipe: Option<&Path>,
    args: &ComposeArgs,
) -> Result<(Scene, RenderPlan), CliError> {
    let (options_json, options) = parse_options(args)?;
    let composer = Composer::new(options);
    let mut rng = Xorshift64::new(args.seed);
    let plan = RenderPlan::new(name, args.seed).with_options(options_json);
    match recipe {
        Some(path) => {
            check_page_name(name)?;
            let (recipe_json, recipe) = load_recipe(path)?;
            let scene = composer.compose(name, &recipe, &mut rng)?;
            Ok((scene, plan.with_recipe(recipe_json)))
        }
        None => {
            let scene = Theme::from_name(name)?.compose(&composer, &mut rng)?;
            Ok((scene, plan))
        }
    }
}

fn kind_summary(scene: &Scene) -> BTreeMap<&'static str, usize> {
    scene
        .kind_counts()
        .into_iter()
        .filter(|&(_, n)| n > 0)
        .map(|(kind, n)| (kind.name(), n))
        .collect()
}

/// Writes the PNG and its plan sidecar; returns a JSON report of the page.
fn render_page(scene: &Scene, plan: &RenderPlan, out_dir: &Path) -> Result<Value, CliError> {
    plan.validate()?;
    fs::create_dir_all(out_dir)
        .map_err(|e| CliError::Io(format!("{}: {e}", out_dir.display())))?;
    let png = out_dir.join(format!("coloring_page_{}.png", scene.name()));
    let sidecar = png.with_extension("json");

    let (width, height) = export::render_png(scene, plan.dpi, &png)?;
    fs::write(&sidecar, serde_json::to_string_pretty(plan)?)
        .map_err(|e| CliError::Io(format!("{}: {e}", sidecar.display())))?;

    Ok(json!({
        "theme": scene.name(),
        "output": png.display().to_string(),
        "plan": sidecar.display().to_string(),
        "width": width,
        "height": height,
        "dpi": plan.dpi,
        "seed": plan.seed,
        "primitives": scene.len(),
        "kinds": kind_summary(scene),
    }))
}

fn print_report(report: &Value, json_mode: bool) -> Result<(), CliError> {
    if json_mode {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!(
            "rendered {} ({}x{} @ {} dpi, seed {}, {} primitives) -> {}",
            report["theme"].as_str().unwrap_or_default(),
            report["width"],
            report["height"],
            report["dpi"],
            report["seed"],
            report["primitives"],
            report["output"].as_str().unwrap_or_default(),
        );
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let themes = Theme::list_names();
            let templates = TemplateId::list_names();
            let decorations = Decoration::NAMES;
            if cli.json {
                let info = json!({
                    "themes": themes,
                    "templates": templates,
                    "decorations": decorations,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Themes:");
                for name in themes {
                    println!("  {name}");
                }
                println!("Templates:");
                println!("  {}", templates.join(", "));
                println!("Decorations:");
                println!("  {}", decorations.join(", "));
            }
        }
        Command::Render {
            theme,
            recipe,
            compose,
            output,
        } => {
            let (scene, plan) = compose_scene(&theme, recipe.as_deref(), &compose)?;
            let report = render_page(&scene, &plan.with_dpi(output.dpi), &output.output_dir)?;
            print_report(&report, cli.json)?;
        }
        Command::RenderAll { compose, output } => {
            let mut reports = Vec::new();
            let mut failed = 0;
            for theme in Theme::ALL {
                let result = compose_scene(theme.name(), None, &compose).and_then(|(scene, plan)| {
                    render_page(&scene, &plan.with_dpi(output.dpi), &output.output_dir)
                });
                match result {
                    Ok(report) => {
                        if !cli.json {
                            print_report(&report, false)?;
                        }
                        reports.push(report);
                    }
                    Err(e) => {
                        failed += 1;
                        if cli.json {
                            reports.push(json!({
                                "theme": theme.name(),
                                "error": e.to_string(),
                                "exit_code": e.exit_code(),
                            }));
                        } else {
                            eprintln!("error: {theme}: {e}");
                        }
                    }
                }
            }
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            }
            if failed > 0 {
                return Err(CliError::Batch {
                    failed,
                    total: Theme::ALL.len(),
                });
            }
        }
        Command::Dump {
            theme,
            recipe,
            compose,
        } => {
            let (scene, _) = compose_scene(&theme, recipe.as_deref(), &compose)?;
            println!("{}", serde_json::to_string_pretty(&scene)?);
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("warning: logging disabled: {e}");
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
