use dashboard_charts::api::{DashboardRequest, sample_dashboard};
use dashboard_charts::core::{HoverEvent, HoverState};
use dashboard_charts::render::{SceneTheme, SvgRenderer};
use std::fs;
use std::path::{Path, PathBuf};

const USAGE: &str = "usage: chart_geometry_dump <sample|layout|svg> [--input <path>] --output <path> [--hover <chart>=<index>]...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandKind {
    Sample,
    Layout,
    Svg,
}

#[derive(Debug)]
struct CliArgs {
    command: CommandKind,
    input: Option<PathBuf>,
    output: PathBuf,
    hovers: Vec<(String, usize)>,
}

fn main() {
    let _ = dashboard_charts::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    match args.command {
        CommandKind::Sample => {
            let json = sample_dashboard()
                .to_json_pretty()
                .map_err(|err| err.to_string())?;
            write_text(&args.output, &json)
        }
        CommandKind::Layout => {
            let request = read_request(args.input.as_deref())?;
            let layout = request.build().map_err(|err| err.to_string())?;
            let json = layout
                .to_json_contract_v1_pretty()
                .map_err(|err| err.to_string())?;
            write_text(&args.output, &json)
        }
        CommandKind::Svg => {
            let request = read_request(args.input.as_deref())?;
            let layout = request.build().map_err(|err| err.to_string())?;
            fs::create_dir_all(&args.output).map_err(|err| {
                format!("failed to create `{}`: {err}", args.output.display())
            })?;

            let theme = SceneTheme::default();
            for (name, chart) in &layout.charts {
                let hover = args
                    .hovers
                    .iter()
                    .filter(|(chart_name, _)| chart_name == name)
                    .fold(HoverState::new(), |state, &(_, index)| {
                        state.apply(HoverEvent::Enter(index), chart.len())
                    });
                let frame = chart.frame(hover, &theme);
                let document =
                    SvgRenderer::render_to_string(&frame).map_err(|err| err.to_string())?;
                write_text(&args.output.join(format!("{name}.svg")), &document)?;
            }
            Ok(())
        }
    }
}

fn read_request(input: Option<&Path>) -> Result<DashboardRequest, String> {
    let Some(input) = input else {
        return Ok(sample_dashboard());
    };
    let raw = fs::read_to_string(input)
        .map_err(|err| format!("failed to read `{}`: {err}", input.display()))?;
    DashboardRequest::from_json_str(&raw).map_err(|err| err.to_string())
}

fn write_text(path: &Path, contents: &str) -> Result<(), String> {
    fs::write(path, contents).map_err(|err| format!("failed to write `{}`: {err}", path.display()))
}

fn parse_hover(value: &str) -> Result<(String, usize), String> {
    let (name, index) = value
        .split_once('=')
        .ok_or_else(|| format!("invalid --hover value `{value}`, expected <chart>=<index>"))?;
    let index = index
        .parse::<usize>()
        .map_err(|err| format!("invalid hover index `{index}`: {err}"))?;
    Ok((name.to_owned(), index))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let command = match args.next().as_deref() {
        Some("sample") => CommandKind::Sample,
        Some("layout") => CommandKind::Layout,
        Some("svg") => CommandKind::Svg,
        _ => return Err(USAGE.to_owned()),
    };

    let mut input = None::<PathBuf>;
    let mut output = None::<PathBuf>;
    let mut hovers = Vec::new();

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--hover" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --hover".to_owned())?;
                hovers.push(parse_hover(&value)?);
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`")),
        }
    }

    let output = output.ok_or_else(|| "missing --output".to_owned())?;
    Ok(CliArgs {
        command,
        input,
        output,
        hovers,
    })
}
