use std::error::Error;
use std::io;

use clap::Parser;

use avrmap::interaction::InteractionGraph;
use avrmap::prompt;
use avrmap::registry::Registry;
use avrmap::viewer;

#[derive(Parser, Debug)]
#[command(name = "avrMap")]
#[command(version, about)]
struct Cli {
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    /// Verbosity level (-v: info, -vv: debug, -vvv: trace).
    pub verbose: u8,
}

fn main() {
    let args = Cli::parse();

    let log_level = match args.verbose {
        0 => log::LevelFilter::Error,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .format_timestamp(None)
        .format_target(false)
        .init();

    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let registry = Registry::builtin();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let count = prompt::read_gene_count(&mut input, &mut output)?;
    let selection = prompt::collect_selection(count, registry, &mut input, &mut output)?;
    log::info!("{} gene(s) selected", selection.len());

    let graph = InteractionGraph::from_selection(&selection, registry);
    log::debug!(
        "interaction graph: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    let layout = graph.layout()?;

    viewer::show(graph, layout)
}
