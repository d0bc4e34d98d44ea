use clap::Parser;
use events_etl::core::count::count_events;
use events_etl::utils::logger;

#[derive(Parser)]
#[command(name = "count-events")]
#[command(about = "Counts events in a nested JSON dump without exporting anything")]
struct Args {
    /// Path to the JSON file
    #[arg(default_value = "data_files/event_details_close_count.json")]
    input: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);
    tracing::debug!("Counting events in: {}", args.input);

    let content = std::fs::read_to_string(&args.input)?;
    let document: serde_json::Value = serde_json::from_str(&content)?;

    println!("Total events in JSON file: {}", count_events(&document));

    Ok(())
}
