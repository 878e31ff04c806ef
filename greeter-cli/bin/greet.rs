use clap::Parser;
use greeter_cli::{init_logging, write_greetings, GreeterArgs, GreeterCliResult};

//--------------------------------------------------------------------------------------------------
// Functions: Main
//--------------------------------------------------------------------------------------------------

fn main() -> GreeterCliResult<()> {
    // Parse command line arguments
    let args = GreeterArgs::parse();

    // Initialize tracing
    init_logging(args.log_level());

    // Print version if requested
    if args.version {
        println!(
            "{}",
            console::style(format!("v{}", env!("CARGO_PKG_VERSION"))).bold()
        );
        return Ok(());
    }

    let names = args.names();
    let stdout = std::io::stdout();
    let count = write_greetings(&mut stdout.lock(), &names)?;

    tracing::info!("Greeted {} name(s)", count);

    Ok(())
}
