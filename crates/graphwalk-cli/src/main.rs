use graphwalk::scenario::{self, ScenarioReport};
use serde::Serialize;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    UnknownScenario(String),
    Json(serde_json::Error),
    Failed(usize),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::UnknownScenario(name) => write!(
                f,
                "unknown scenario: {name} (expected one of {})",
                scenario::NAMES.join(", ")
            ),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::Failed(n) => write!(f, "{n} scenario(s) failed"),
        }
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
    Run,
    List,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    scenarios: Vec<String>,
    json: bool,
    pretty: bool,
    verbose: bool,
}

#[derive(Serialize)]
struct RunOut<'a> {
    passed: bool,
    scenarios: &'a [ScenarioReport],
}

fn usage() -> &'static str {
    "graphwalk\n\
\n\
USAGE:\n\
  graphwalk [run] [--scenario topo|dfs|kruskal]... [--json] [--pretty] [--verbose]\n\
  graphwalk list\n\
\n\
NOTES:\n\
  - run executes every scenario unless --scenario narrows the selection.\n\
  - --json prints a machine-readable report; --pretty indents it.\n\
  - --verbose logs algorithm progress to stderr.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "run" => args.command = Command::Run,
            "list" => args.command = Command::List,
            "--json" => args.json = true,
            "--pretty" => args.pretty = true,
            "--verbose" | "-v" => args.verbose = true,
            "--scenario" => {
                let Some(name) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                let name = name.trim().to_ascii_lowercase();
                if !scenario::NAMES.contains(&name.as_str()) {
                    return Err(CliError::UnknownScenario(name));
                }
                args.scenarios.push(name);
            }
            _ => return Err(CliError::Usage(usage())),
        }
    }

    Ok(args)
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn select(names: &[String]) -> Vec<ScenarioReport> {
    if names.is_empty() {
        return scenario::all();
    }
    names.iter().filter_map(|n| scenario::by_name(n)).collect()
}

fn print_text(reports: &[ScenarioReport]) {
    for (i, r) in reports.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}:", r.name);
        println!("  {}", r.description);
        println!("  expected: {}", r.expected);
        println!("  got:      {}", r.actual);
        println!("  status:   {}", if r.passed { "ok" } else { "FAILED" });
    }
}

fn run(args: Args) -> Result<(), CliError> {
    match args.command {
        Command::List => {
            for name in scenario::NAMES {
                println!("{name}");
            }
            Ok(())
        }
        Command::Run => {
            let reports = select(&args.scenarios);
            let failed = reports.iter().filter(|r| !r.passed).count();
            tracing::debug!(scenarios = reports.len(), failed, "scenarios finished");

            if args.json {
                let out = RunOut {
                    passed: failed == 0,
                    scenarios: &reports,
                };
                let text = if args.pretty {
                    serde_json::to_string_pretty(&out)?
                } else {
                    serde_json::to_string(&out)?
                };
                println!("{text}");
            } else {
                print_text(&reports);
            }

            if failed > 0 {
                return Err(CliError::Failed(failed));
            }
            Ok(())
        }
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
            std::process::exit(2);
        }
    };

    init_tracing(args.verbose);

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
