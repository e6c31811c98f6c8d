use chart_canvas::api::{CanvasConfig, ChartCanvasInitializer};
use chart_canvas::core::Dataset;
use chart_canvas::dom::{Document, Selector};
use chart_canvas::telemetry;
use std::fs;
use std::path::PathBuf;

const DEFAULT_CONTAINER_WIDTH: &str = "480px";

#[derive(Debug)]
struct CliArgs {
    data_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
    container_width: String,
    snapshot: bool,
}

fn main() {
    let _ = telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let config = match &args.config_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            CanvasConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => CanvasConfig::default(),
    };

    let dataset = match &args.data_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            Dataset::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => Dataset::empty(),
    };

    let mut document = Document::new();
    let container = mount_container(&mut document, &config, &args.container_width)?;

    let initializer = ChartCanvasInitializer::new(config).map_err(|err| err.to_string())?;
    let canvas = initializer
        .initialize_with_tracing(&mut document, &dataset)
        .map_err(|err| err.to_string())?;

    if args.snapshot {
        let json = canvas
            .snapshot()
            .to_json_contract_v1_pretty()
            .map_err(|err| err.to_string())?;
        println!("{json}");
    } else {
        println!("{}", document.outer_markup(container));
    }
    Ok(())
}

/// Creates the element the config's selector expects, with the given computed width.
fn mount_container(
    document: &mut Document,
    config: &CanvasConfig,
    width: &str,
) -> Result<chart_canvas::dom::NodeId, String> {
    let selector = Selector::parse(&config.container_selector).map_err(|err| err.to_string())?;
    let root = document.root();
    let tag = match &selector {
        Selector::Tag(tag) => tag.as_str(),
        Selector::Class(_) | Selector::Id(_) => "div",
    };
    let container = document
        .create_element(root, tag)
        .map_err(|err| err.to_string())?;
    let tagged = match &selector {
        Selector::Class(class) => document.add_class(container, class),
        Selector::Id(id) => document.set_attr(container, "id", id.as_str()),
        Selector::Tag(_) => Ok(()),
    };
    tagged.map_err(|err| err.to_string())?;
    document
        .set_style(container, "width", width)
        .map_err(|err| err.to_string())?;
    Ok(container)
}

fn parse_args() -> Result<CliArgs, String> {
    let mut data_path: Option<PathBuf> = None;
    let mut config_path: Option<PathBuf> = None;
    let mut container_width = DEFAULT_CONTAINER_WIDTH.to_owned();
    let mut snapshot = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--data" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --data".to_owned())?;
                data_path = Some(PathBuf::from(value));
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config_path = Some(PathBuf::from(value));
            }
            "--width" => {
                container_width = args
                    .next()
                    .ok_or_else(|| "missing value for --width".to_owned())?;
            }
            "--snapshot" => snapshot = true,
            "-h" | "--help" => {
                println!(
                    "Usage: cargo run --bin render_chart_canvas -- [--data <dataset.json>] [--config <config.json>] [--width <css px>] [--snapshot]"
                );
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`"));
            }
        }
    }

    Ok(CliArgs {
        data_path,
        config_path,
        container_width,
        snapshot,
    })
}
