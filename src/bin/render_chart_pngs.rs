use std::fs;
use std::path::PathBuf;

use dash_charts::RenderStyle;
use dash_charts::api::{
    ChartBundle, ChartRenderer, RenderOutcome, dashboard_presets, parse_chart_bundle,
};
use dash_charts::render::RasterRenderer;

const USAGE: &str = "usage: render_chart_pngs --output <dir> [--input <bundle.json>] \
                     [--style <style.json>] [--width <px>] [--height <px>]";

struct CliArgs {
    input: Option<PathBuf>,
    style: Option<PathBuf>,
    output: PathBuf,
    width: u32,
    height: u32,
}

fn main() {
    let _ = dash_charts::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let bundle: ChartBundle = match &args.input {
        Some(path) => parse_chart_bundle(&read(path)?).map_err(|err| err.to_string())?,
        None => dashboard_presets(),
    };
    let style = match &args.style {
        Some(path) => RenderStyle::from_json_str(&read(path)?).map_err(|err| err.to_string())?,
        None => RenderStyle::default(),
    };

    fs::create_dir_all(&args.output)
        .map_err(|err| format!("failed to create `{}`: {err}", args.output.display()))?;

    let backend = RasterRenderer::new(args.width, args.height);
    let mut chart = ChartRenderer::with_style(backend, style).map_err(|err| err.to_string())?;
    for (name, config) in bundle {
        match chart.render(config).map_err(|err| err.to_string())? {
            RenderOutcome::Drawn(stats) => {
                let path = args.output.join(format!("{name}.png"));
                chart
                    .backend()
                    .save_png(&path)
                    .map_err(|err| err.to_string())?;
                println!("{name}: {} primitives -> {}", stats.total(), path.display());
            }
            RenderOutcome::Skipped(reason) => println!("{name}: skipped ({reason})"),
        }
    }
    Ok(())
}

fn read(path: &PathBuf) -> Result<String, String> {
    fs::read_to_string(path).map_err(|err| format!("failed to read `{}`: {err}", path.display()))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut input = None::<PathBuf>;
    let mut style = None::<PathBuf>;
    let mut output = None::<PathBuf>;
    let mut width = 400_u32;
    let mut height = 300_u32;

    while let Some(flag) = args.next() {
        let mut value = |name: &str| {
            args.next()
                .ok_or_else(|| format!("missing value for {name}"))
        };
        match flag.as_str() {
            "--input" => input = Some(PathBuf::from(value("--input")?)),
            "--style" => style = Some(PathBuf::from(value("--style")?)),
            "--output" => output = Some(PathBuf::from(value("--output")?)),
            "--width" => width = parse_dimension("--width", &value("--width")?)?,
            "--height" => height = parse_dimension("--height", &value("--height")?)?,
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`")),
        }
    }

    let output = output.ok_or_else(|| format!("missing --output\n{USAGE}"))?;
    Ok(CliArgs {
        input,
        style,
        output,
        width,
        height,
    })
}

fn parse_dimension(name: &str, raw: &str) -> Result<u32, String> {
    match raw.parse::<u32>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(format!("{name} must be a positive integer, got `{raw}`")),
    }
}
