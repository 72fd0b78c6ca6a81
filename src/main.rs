use clap::{CommandFactory, Parser};
use colored::Colorize;
use ip_calc::cli::{self, Args};
use ip_calc::config::Settings;
use ip_calc::{logging, repl};
use std::io::IsTerminal;
use std::process;

fn main() {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let settings = Settings::from_env();
    if let Err(e) = logging::init(&settings.log_config) {
        eprintln!("Error initializing log4rs: {e}");
    }
    log::info!("#Start main()");

    let args = Args::parse();
    cli::apply_color(&args, &settings);

    if args.interactive {
        let settings = Settings {
            format: args.output_format(&settings),
            color: args.color(&settings),
            ..settings
        };
        let exit_code = if std::io::stdin().is_terminal() {
            match repl::run_repl(&settings) {
                Ok(()) => 0,
                Err(e) => {
                    eprintln!("{e}");
                    1
                }
            }
        } else {
            repl::run_pipe(
                std::io::stdin().lock(),
                &mut std::io::stdout(),
                &mut std::io::stderr(),
                &settings,
            )
        };
        process::exit(exit_code);
    }

    if args.address.is_none() {
        Args::command()
            .error(
                clap::error::ErrorKind::MissingRequiredArgument,
                "No ip address was provided, use -a <ADDRESS> or -i",
            )
            .exit();
    }

    match cli::run(&args, &settings) {
        Ok(out) => println!("{out}"),
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            process::exit(1);
        }
    }
}
