use bogorace::digits::Candidate;
use bogorace::display::{LiveView, spawn_display};
use bogorace::error::SearchError;
use bogorace::logging::init_logging;
use bogorace::search::{
    BogoSearch, ChannelObserver, NullObserver, SearchConfig, SearchObserver, StopSignal,
};
use clap::Parser;
use std::io::{self, BufRead, IsTerminal, Write};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Pending events between the workers and the live display.
const DISPLAY_CHANNEL_CAPACITY: usize = 256;

// --- Command Line Arguments ---

#[derive(Parser)]
#[command(name = "bogorace")]
#[command(about = "bogorace - sort the digits of a number by shuffling them, in parallel")]
#[command(version)]
struct Args {
    /// Number whose digits should be sorted (prompted for when omitted)
    number: Option<String>,
    /// Number of worker threads (prompted for when omitted)
    #[arg(long, short = 'j', allow_negative_numbers = true)]
    threads: Option<i64>,
    /// Base random seed for reproducible runs (worker i uses seed + i)
    #[arg(long)]
    seed: Option<u64>,
    /// Disable the live per-thread readout
    #[arg(long)]
    no_display: bool,
    /// Live readout refresh interval in milliseconds
    #[arg(long, default_value = "100")]
    refresh_ms: u64,
    /// Enable verbose logging on stderr
    #[arg(long, short)]
    verbose: bool,
}

// --- Input ---

fn prompt<R: BufRead>(input: &mut R, message: &str) -> io::Result<String> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Ask for a thread count; an empty answer picks one per CPU.
fn prompt_threads<R: BufRead>(input: &mut R) -> Result<i64, Box<dyn std::error::Error>> {
    let answer = prompt(
        input,
        "Enter the number of threads to use (1 for single-threaded): ",
    )?;
    if answer.is_empty() {
        return Ok(num_cpus::get() as i64);
    }
    answer
        .parse::<i64>()
        .map_err(|_| format!("Invalid thread count: '{}'", answer).into())
}

fn worker_count(requested: i64) -> Result<usize, SearchError> {
    match usize::try_from(requested) {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(SearchError::InvalidWorkerCount(requested)),
    }
}

// --- Interrupt Handling ---

fn install_interrupt_handler(stop: Arc<StopSignal>) -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(move || {
        if stop.trigger() {
            println!("Process terminated, loading data...");
            info!("interrupt received, stopping workers");
        } else {
            // Second Ctrl-C while the workers are winding down
            std::process::exit(130);
        }
    })
}

// --- Race ---

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let number = match args.number {
        Some(number) => number,
        None => prompt(&mut input, "Enter a number: ")?,
    };
    let candidate = Candidate::parse(&number)?;

    if candidate.is_sorted() {
        println!("The number is sorted");
        return Ok(());
    }

    let requested = match args.threads {
        Some(threads) => threads,
        None => prompt_threads(&mut input)?,
    };
    let workers = worker_count(requested)?;

    let config = SearchConfig::default()
        .with_workers(workers)
        .with_seed_option(args.seed);
    let search = BogoSearch::new(config);
    install_interrupt_handler(search.stop_signal())?;

    println!();
    println!("Starting {} threads to find the sorted number.", workers);
    println!();

    let show_display = !args.no_display && io::stdout().is_terminal();
    let (observer, display) = if show_display {
        let (observer, rx) = ChannelObserver::new(DISPLAY_CHANNEL_CAPACITY);
        let view = LiveView::new(candidate.as_str(), workers, search.progress());
        let refresh = Duration::from_millis(args.refresh_ms.max(1));
        let handle = spawn_display(rx, view, refresh)?;
        let observer: Arc<dyn SearchObserver> = Arc::new(observer);
        (observer, Some(handle))
    } else {
        let observer: Arc<dyn SearchObserver> = Arc::new(NullObserver);
        (observer, None)
    };

    // The observer is dropped when the race ends, which closes the display
    let result = search.run(candidate.as_str(), observer);
    if let Some(handle) = display {
        let _ = handle.join();
    }
    let statistics = result?;

    println!();
    print!("{}", statistics);
    println!();

    Ok(())
}

// --- Main Function ---
fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
