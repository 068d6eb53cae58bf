use label_gen::{colours, Composer, FieldValues, Font, LabelError, Template};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::PathBuf;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Label(LabelError),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Label(err) => write!(f, "{err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<LabelError> for CliError {
    fn from(value: LabelError) -> Self {
        Self::Label(value)
    }
}

#[derive(Debug, Default)]
struct Args {
    font: Option<PathBuf>,
    template: Option<PathBuf>,
    out: Option<PathBuf>,
    outline: bool,
    values: FieldValues,
}

fn usage() -> &'static str {
    "usage: label-gen --font <path> [--template <path.json>] [--out <path>] [--outline] [field=value ...]

Renders one label as SVG. Without --template, the built-in A4 name badge
(fields `fname` and `lname`) is used. Set RUST_LOG=debug to see measurements."
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "--outline" => args.outline = true,
            "--font" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.font = Some(PathBuf::from(path));
            }
            "--template" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.template = Some(PathBuf::from(path));
            }
            "--out" | "-o" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(PathBuf::from(path));
            }
            other => {
                let Some((field, value)) = other.split_once('=') else {
                    return Err(CliError::Usage(usage()));
                };
                args.values.insert(field.to_string(), value.to_string());
            }
        }
    }

    if args.font.is_none() {
        return Err(CliError::Usage(usage()));
    }
    Ok(args)
}

fn run(args: Args) -> Result<(), CliError> {
    let font_path = args.font.ok_or(CliError::Usage(usage()))?;
    let font = Font::open(&font_path)?;
    log::debug!("loaded font {}", font_path.display());

    let template = match &args.template {
        Some(path) => Template::from_reader(BufReader::new(File::open(path)?))?,
        None => Template::name_badge(),
    };

    let mut composer = Composer::for_font(&font);
    if args.outline {
        composer = composer.with_outlines(colours::BLACK);
    }
    let svg = composer.compose(&template, &args.values, &font)?;

    match &args.out {
        Some(path) => std::fs::write(path, svg)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(svg.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();

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

    if let Err(err) = run(args) {
        log::error!("failed to create svg: {err}");
        eprintln!("{err}");
        std::process::exit(1);
    }
}
