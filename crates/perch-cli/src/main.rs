use perch::geom::{self, Size};
use perch::{
    AnchorEvent, AnchorRect, Offset, OverlayController, OverlayStyle, Placement,
    PlacementOptions, Position, RecordingSurface, TooltipProps, Viewport, Visibility,
    compute_offset, place,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::io::Read;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Perch(perch::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Perch(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<perch::Error> for CliError {
    fn from(value: perch::Error) -> Self {
        Self::Perch(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Place,
    Offsets,
    Simulate,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    pretty: bool,
    no_auto: bool,
    verbose: bool,
}

fn usage() -> &'static str {
    "perch-cli\n\
\n\
USAGE:\n\
  perch-cli [place] [--pretty] [--no-auto] [--verbose] [<path>|-]\n\
  perch-cli offsets [--pretty] [--verbose] [<path>|-]\n\
  perch-cli simulate [--pretty] [--verbose] [<path>|-]\n\
\n\
INPUT (JSON):\n\
  place     {\"position\", \"anchor\", \"overlay\": {\"width\", \"height\"}, \"viewport\"?}\n\
  offsets   {\"anchor\", \"viewport\"?}\n\
  simulate  {\"props\", \"overlay\", \"portal\"?, \"events\": [{\"kind\": \"pointerOver\"|\"click\"|\"pointerLeave\"|\"outsideClick\", ...}]}\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - --no-auto disables viewport collision flips for place.\n\
  - --verbose logs placement decisions to stderr; PERCH_LOG=<filter> overrides the filter.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "place" => args.command = Command::Place,
            "offsets" => args.command = Command::Offsets,
            "simulate" => args.command = Command::Simulate,
            "--pretty" => args.pretty = true,
            "--no-auto" => args.no_auto = true,
            "--verbose" | "-v" => args.verbose = true,
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            "-" => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some("-".to_string());
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn init_logging(verbose: bool) {
    let directive = match std::env::var("PERCH_LOG") {
        Ok(filter) => filter,
        Err(_) if verbose => "info,perch=debug,perch_core=debug".to_string(),
        Err(_) => return,
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_env_filter(tracing_subscriber::EnvFilter::new(directive))
        .init();
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    println!();
    Ok(())
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct OverlayBox {
    width: f64,
    height: f64,
}

impl OverlayBox {
    fn to_size(self) -> Result<Size, CliError> {
        let size = geom::size(self.width, self.height);
        geom::validate_overlay(&size)?;
        Ok(size)
    }
}

#[derive(Debug, Deserialize)]
struct PlaceInput {
    position: Position,
    anchor: AnchorRect,
    overlay: OverlayBox,
    #[serde(default)]
    viewport: Viewport,
}

#[derive(Serialize)]
struct CssOut {
    top: String,
    left: String,
    transform: String,
}

#[derive(Serialize)]
struct PlaceOut<'a> {
    #[serde(flatten)]
    placement: &'a Placement,
    css: CssOut,
}

#[derive(Debug, Deserialize)]
struct OffsetsInput {
    anchor: AnchorRect,
    #[serde(default)]
    viewport: Viewport,
}

fn default_portal() -> bool {
    true
}

#[derive(Debug, Deserialize)]
struct SimulateInput {
    props: TooltipProps,
    overlay: OverlayBox,
    #[serde(default = "default_portal")]
    portal: bool,
    #[serde(default)]
    events: Vec<AnchorEvent>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Step {
    event: &'static str,
    visibility: Visibility,
    painted: bool,
    requested: Position,
    resolved: Position,
    offset: Option<Offset>,
    class_name: Option<String>,
    style: Option<OverlayStyle>,
}

fn validate_event(event: &AnchorEvent) -> Result<(), CliError> {
    match event {
        AnchorEvent::PointerOver { anchor, viewport } | AnchorEvent::Click { anchor, viewport } => {
            anchor.validate()?;
            viewport.validate()?;
        }
        AnchorEvent::PointerLeave | AnchorEvent::OutsideClick => {}
    }
    Ok(())
}

fn run_place(text: &str, no_auto: bool, pretty: bool) -> Result<(), CliError> {
    let input: PlaceInput = serde_json::from_str(text)?;
    input.anchor.validate()?;
    input.viewport.validate()?;
    let overlay = input.overlay.to_size()?;

    let options = if no_auto {
        PlacementOptions::fixed()
    } else {
        PlacementOptions::default()
    };
    let placement = place(input.position, &input.anchor, overlay, &input.viewport, options);
    tracing::info!(
        requested = %placement.requested,
        resolved = %placement.position,
        flips = placement.flips.len(),
        "placed tooltip"
    );

    let css = CssOut {
        top: placement.result.css_top(),
        left: placement.result.css_left(),
        transform: placement.result.css_transform(),
    };
    write_json(
        &PlaceOut {
            placement: &placement,
            css,
        },
        pretty,
    )
}

fn run_offsets(text: &str, pretty: bool) -> Result<(), CliError> {
    let input: OffsetsInput = serde_json::from_str(text)?;
    input.anchor.validate()?;
    input.viewport.validate()?;

    let mut out = Map::new();
    for position in Position::ALL {
        let offset = compute_offset(position, &input.anchor, &input.viewport);
        out.insert(position.to_string(), serde_json::to_value(offset)?);
    }
    write_json(&Value::Object(out), pretty)
}

fn run_simulate(text: &str, pretty: bool) -> Result<(), CliError> {
    let input: SimulateInput = serde_json::from_str(text)?;
    for event in &input.events {
        validate_event(event)?;
    }

    let mut surface = RecordingSurface::new(input.overlay.to_size()?);
    if !input.portal {
        surface = surface.without_portal();
    }
    let mut controller = OverlayController::new(input.props);

    let mut steps = Vec::with_capacity(input.events.len());
    for event in input.events {
        let visibility = controller.handle(event, &mut surface);
        tracing::debug!(event = event.name(), ?visibility, "handled anchor event");
        steps.push(Step {
            event: event.name(),
            visibility,
            painted: controller.is_painted(),
            requested: controller.requested_position(),
            resolved: controller.resolved_position(),
            offset: controller.offset(),
            class_name: surface.class_name().map(str::to_string),
            style: surface.style().copied(),
        });
    }
    write_json(&steps, pretty)
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    match args.command {
        Command::Place => run_place(&text, args.no_auto, args.pretty),
        Command::Offsets => run_offsets(&text, args.pretty),
        Command::Simulate => run_simulate(&text, args.pretty),
    }
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    init_logging(args.verbose);

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
