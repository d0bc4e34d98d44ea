use clap::Parser;
use events_etl::core::reader::JsonReader;
use events_etl::utils::logger;

#[derive(Parser)]
#[command(name = "json-reader")]
#[command(about = "Inspects an arbitrary JSON file column by column")]
struct Args {
    /// Path to the JSON file (a list of objects or a single object)
    input: String,

    /// Only print the values under this header
    #[arg(long)]
    header: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    let reader = match JsonReader::load(&args.input) {
        Ok(reader) => reader,
        Err(e) => {
            eprintln!("❌ Failed to read '{}': {}", args.input, e);
            std::process::exit(1);
        }
    };

    if let Some(header) = &args.header {
        for value in reader.column(header) {
            println!("{}", value);
        }
        return Ok(());
    }

    println!("Headers: {}", reader.headers().join(", "));
    for header in reader.headers() {
        let values: Vec<String> = reader
            .column(header)
            .iter()
            .map(|value| value.to_string())
            .collect();
        println!("{}: {}", header, values.join(", "));
    }

    Ok(())
}
