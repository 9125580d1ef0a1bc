use std::fs;
use std::path::PathBuf;

use chart_dashboard::api::DashboardLayout;
use chart_dashboard::render::HtmlPageOptions;
use chart_dashboard::report;

const DEFAULT_OUTPUT_PATH: &str = "dashboard.html";

#[derive(Debug)]
struct CliArgs {
    layout_path: Option<PathBuf>,
    output_path: PathBuf,
    title: Option<String>,
    dump_layout_path: Option<PathBuf>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    #[cfg(feature = "telemetry")]
    let _ = chart_dashboard::telemetry::init_default_tracing();

    let args = parse_args()?;
    let registry = report::populate_registry()
        .map_err(|err| format!("failed to load report data: {err}"))?;

    let mut layout = match &args.layout_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read layout `{}`: {err}", path.display()))?;
            DashboardLayout::from_json_compat_str(&raw)
                .map_err(|err| format!("layout `{}`: {err}", path.display()))?
        }
        None => report::layout().map_err(|err| format!("failed to build report layout: {err}"))?,
    };
    if let Some(title) = args.title {
        layout.title = title;
    }

    if let Some(path) = &args.dump_layout_path {
        let json = layout
            .to_json_contract_v1_pretty()
            .map_err(|err| err.to_string())?;
        fs::write(path, json)
            .map_err(|err| format!("failed to write layout `{}`: {err}", path.display()))?;
        println!("wrote layout {}", path.display());
    }

    let page = layout
        .render_html_page(&registry, HtmlPageOptions::default())
        .map_err(|err| format!("failed to render dashboard: {err}"))?;
    fs::write(&args.output_path, page).map_err(|err| {
        format!(
            "failed to write dashboard `{}`: {err}",
            args.output_path.display()
        )
    })?;
    println!(
        "rendered {} panels to {}",
        layout.panels.len(),
        args.output_path.display()
    );
    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut layout_path: Option<PathBuf> = None;
    let mut output_path = PathBuf::from(DEFAULT_OUTPUT_PATH);
    let mut title: Option<String> = None;
    let mut dump_layout_path: Option<PathBuf> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--layout" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --layout".to_owned())?;
                layout_path = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output_path = PathBuf::from(value);
            }
            "--title" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --title".to_owned())?;
                title = Some(value);
            }
            "--dump-layout" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --dump-layout".to_owned())?;
                dump_layout_path = Some(PathBuf::from(value));
            }
            "--help" | "-h" => {
                println!("{}", usage_message());
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
        }
    }

    Ok(CliArgs {
        layout_path,
        output_path,
        title,
        dump_layout_path,
    })
}

fn usage_message() -> String {
    format!(
        "Usage: cargo run --bin render_dashboard -- [options]\n\nOptions:\n  --layout <path>        Layout JSON (bare or schema v1 envelope); built-in report when omitted\n  --output <path>        HTML output path (default: {DEFAULT_OUTPUT_PATH})\n  --title <text>         Override the page title\n  --dump-layout <path>   Also write the effective layout as schema v1 JSON\n  -h, --help             Show this message"
    )
}
