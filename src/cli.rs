//! Command line surface.

use crate::config::Settings;
use crate::models::Network;
use crate::output::{render, OutputFormat};
use crate::report::{Report, Selection};
use clap::Parser;
use std::error::Error;

/// Network calculator. By default it prints all information.
#[derive(Parser, Debug, Default)]
#[command(
    name = "ip-calc",
    version,
    about = "Network calculator. By default it gives all information in verbose form",
    after_help = "Examples:\n  ip-calc -a 192.168.1.0/24\n  ip-calc -a 10.0.0.5 -m 255.255.255.0 -f -l\n  ip-calc -i"
)]
pub struct Args {
    /// IP address and mask in CIDR form. To give the mask explicitly use -m.
    #[arg(short, long)]
    pub address: Option<String>,
    /// Mask written as an IP address
    #[arg(short, long)]
    pub mask: Option<String>,
    /// Show network address
    #[arg(short, long)]
    pub network: bool,
    /// Show broadcast address
    #[arg(short, long)]
    pub broadcast: bool,
    /// Show first host address
    #[arg(short, long)]
    pub first: bool,
    /// Show last host address
    #[arg(short, long)]
    pub last: bool,
    /// Show count of available host addresses
    #[arg(short, long)]
    pub count: bool,
    /// Output format (defaults to IP_CALC_FORMAT or text)
    #[arg(short = 'o', long, value_enum)]
    pub format: Option<OutputFormat>,
    /// Disable coloured labels
    #[arg(long)]
    pub no_color: bool,
    /// Read addresses interactively
    #[arg(short, long, conflicts_with_all = ["address", "mask"])]
    pub interactive: bool,
}

impl Args {
    pub fn selection(&self) -> Selection {
        Selection {
            network: self.network,
            broadcast: self.broadcast,
            first_host: self.first,
            last_host: self.last,
            host_count: self.count,
        }
    }

    pub fn output_format(&self, settings: &Settings) -> OutputFormat {
        self.format.unwrap_or(settings.format)
    }

    pub fn color(&self, settings: &Settings) -> bool {
        settings.color && !self.no_color
    }
}

/// Turn off colour globally when either the flag or the settings disable it.
pub fn apply_color(args: &Args, settings: &Settings) -> bool {
    let color = args.color(settings);
    if !color {
        colored::control::set_override(false);
    }
    color
}

/// Evaluate a one-shot invocation and return the rendered output.
pub fn run(args: &Args, settings: &Settings) -> Result<String, Box<dyn Error>> {
    let address = args
        .address
        .as_deref()
        .ok_or("No ip address was provided")?;
    log::debug!("run(address={address}, mask={:?})", args.mask);

    let network = Network::new(address, args.mask.as_deref()).map_err(|e| {
        log::warn!("Rejected input {address}: {e}");
        let hint = if args.mask.is_some() {
            "Address must be a valid ip. If you have used -m then there should be no cidr given."
        } else {
            "It is not a valid ip address. Remember you must specify cidr"
        };
        format!("{e}\n{hint}")
    })?;

    let report = Report::build(&network, &args.selection())?;
    render(&report, args.output_format(settings), args.color(settings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use colored::Colorize;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).expect("valid arguments")
    }

    #[test]
    fn test_parse_flags() {
        let args = parse(&["ip-calc", "-a", "10.0.0.1/8", "-n", "-c", "-o", "json"]);
        assert_eq!(args.address.as_deref(), Some("10.0.0.1/8"));
        assert!(args.network && args.count);
        assert!(!args.broadcast && !args.first && !args.last);
        assert_eq!(args.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_interactive_conflicts_with_address() {
        assert!(Args::try_parse_from(["ip-calc", "-i", "-a", "10.0.0.1/8"]).is_err());
    }

    #[test]
    fn test_run_all_facts() {
        let args = parse(&["ip-calc", "-a", "192.168.1.0/24", "--no-color"]);
        let out = run(&args, &Settings::default()).unwrap();
        assert_eq!(out.lines().count(), 5);
        assert!(out.contains("Broadcast Address: 192.168.1.255"));
        assert!(out.ends_with("Number of addressable hosts: 254"));
    }

    #[test]
    fn test_run_with_mask_and_selection() {
        let args = parse(&[
            "ip-calc",
            "-a",
            "10.0.0.5",
            "-m",
            "255.255.255.0",
            "-f",
            "-l",
            "--no-color",
        ]);
        let out = run(&args, &Settings::default()).unwrap();
        assert_eq!(
            out,
            "First Host Address: 10.0.0.1\nLast Host Address: 10.0.0.254"
        );
    }

    #[test]
    fn test_run_format_from_settings() {
        let args = parse(&["ip-calc", "-a", "192.168.1.0/24", "-c"]);
        let settings = Settings {
            format: OutputFormat::Json,
            ..Default::default()
        };
        assert_eq!(run(&args, &settings).unwrap(), r#"{"max_hosts":254}"#);
    }

    #[test]
    fn test_color_off_from_settings_or_flag() {
        let env_off = Settings {
            color: false,
            ..Default::default()
        };
        assert!(!apply_color(&parse(&["ip-calc", "-a", "10.0.0.0/8"]), &env_off));
        assert!(!apply_color(
            &parse(&["ip-calc", "-a", "10.0.0.0/8", "--no-color"]),
            &Settings::default()
        ));
        assert_eq!("error:".red().to_string(), "error:");
        assert!(parse(&["ip-calc"]).color(&Settings::default()));
    }

    #[test]
    fn test_run_errors() {
        let missing = Args::default();
        assert_eq!(
            run(&missing, &Settings::default()).unwrap_err().to_string(),
            "No ip address was provided"
        );

        let no_cidr = parse(&["ip-calc", "-a", "10.0.0.1"]);
        let err = run(&no_cidr, &Settings::default()).unwrap_err().to_string();
        assert!(err.starts_with("parse error"));
        assert!(err.contains("Remember you must specify cidr"));

        let with_cidr = parse(&["ip-calc", "-a", "10.0.0.1/24", "-m", "255.0.0.0"]);
        let err = run(&with_cidr, &Settings::default())
            .unwrap_err()
            .to_string();
        assert!(err.contains("there should be no cidr given"));

        let range = parse(&["ip-calc", "-a", "10.0.0.0/33"]);
        let err = run(&range, &Settings::default()).unwrap_err().to_string();
        assert!(err.starts_with("range error"));
    }
}
