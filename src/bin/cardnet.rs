//! CLI tool for card network classification and validation.
//!
//! # Usage
//!
//! ```bash
//! # Detect the network
//! cardnet classify 4111111111111111
//!
//! # Validate (classifies first unless --network is given)
//! cardnet validate 378282246310005 --output json
//!
//! # Grouped and masked display
//! cardnet format 378282246310005 --separator -
//! cardnet mask 4111111111111111 --label "**** "
//!
//! # Everything at once
//! cardnet inspect 4111111111111111
//! ```
//!
//! Set `RUST_LOG=trace` to see classification events on stderr.

use card_network::{
    classify, entry, format, is_luhn_valid, mask, validate::check, IconRef, NetworkIdentity,
    PatternRegistry,
};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cardnet")]
#[command(author, version, about = "Payment card network detection and validation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect the card network
    Classify {
        /// Card number, digits only
        card_number: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Validate a card number
    Validate {
        /// Card number, digits only
        card_number: String,

        /// Validate against this network instead of the detected one
        #[arg(short, long)]
        network: Option<NetworkArg>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Group a card number for display
    Format {
        /// Card number, digits only
        card_number: String,

        /// Separator to use
        #[arg(short, long, default_value_t = format::DEFAULT_SEPARATOR)]
        separator: char,
    },

    /// Mask a card number down to its last four digits
    Mask {
        /// Card number, digits only or already masked with '*'
        card_number: String,

        /// Label shown before the visible digits
        #[arg(short, long, default_value = mask::DEFAULT_MASK_LABEL)]
        label: String,
    },

    /// Check if a card passes the Luhn algorithm
    Luhn {
        /// Card number (spaces and dashes allowed)
        card_number: String,
    },

    /// Classify, validate and format in one pass
    Inspect {
        /// Card number, digits only
        card_number: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// List the registered network rules in match order
    Rules,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum NetworkArg {
    Visa,
    Mastercard,
    Discover,
    Amex,
    DinersClub,
    Jcb,
    Maestro,
    UnionPay,
    Switch,
    Unknown,
}

impl From<NetworkArg> for NetworkIdentity {
    fn from(arg: NetworkArg) -> Self {
        match arg {
            NetworkArg::Visa => NetworkIdentity::Visa,
            NetworkArg::Mastercard => NetworkIdentity::Mastercard,
            NetworkArg::Discover => NetworkIdentity::Discover,
            NetworkArg::Amex => NetworkIdentity::Amex,
            NetworkArg::DinersClub => NetworkIdentity::DinersClub,
            NetworkArg::Jcb => NetworkIdentity::Jcb,
            NetworkArg::Maestro => NetworkIdentity::Maestro,
            NetworkArg::UnionPay => NetworkIdentity::UnionPay,
            NetworkArg::Switch => NetworkIdentity::Switch,
            NetworkArg::Unknown => NetworkIdentity::Unknown,
        }
    }
}

#[derive(Serialize)]
struct ClassifyReport {
    network: NetworkIdentity,
    name: &'static str,
    min_length: usize,
    max_length: usize,
    group_indices: &'static [usize],
    cvv_length: usize,
    icon: IconRef,
}

impl From<NetworkIdentity> for ClassifyReport {
    fn from(identity: NetworkIdentity) -> Self {
        Self {
            network: identity,
            name: identity.name(),
            min_length: identity.min_length(),
            max_length: identity.max_length(),
            group_indices: identity.group_indices(),
            cvv_length: identity.cvv_length(),
            icon: identity.icon(),
        }
    }
}

#[derive(Serialize)]
struct ValidateReport {
    valid: bool,
    network: NetworkIdentity,
    masked: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
struct InspectReport {
    network: NetworkIdentity,
    valid: bool,
    masked: String,
    max_length: usize,
    cvv_length: usize,
    icon: IconRef,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Classify {
            card_number,
            output,
        } => cmd_classify(&card_number, output),
        Commands::Validate {
            card_number,
            network,
            output,
        } => cmd_validate(&card_number, network.map(Into::into), output),
        Commands::Format {
            card_number,
            separator,
        } => cmd_format(&card_number, separator),
        Commands::Mask { card_number, label } => cmd_mask(&card_number, &label),
        Commands::Luhn { card_number } => cmd_luhn(&card_number),
        Commands::Inspect {
            card_number,
            output,
        } => cmd_inspect(&card_number, output),
        Commands::Rules => cmd_rules(),
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error: {}", e),
    }
}

fn cmd_classify(card_number: &str, output: OutputFormat) -> ExitCode {
    let identity = classify(card_number);
    match output {
        OutputFormat::Text => {
            println!("Network: {}", identity.name());
            println!(
                "Length: {}-{} digits",
                identity.min_length(),
                identity.max_length()
            );
            println!("Groups After: {:?}", identity.group_indices());
            println!("CVV Length: {}", identity.cvv_length());
        }
        OutputFormat::Json => print_json(&ClassifyReport::from(identity)),
    }
    ExitCode::SUCCESS
}

fn cmd_validate(
    card_number: &str,
    network: Option<NetworkIdentity>,
    output: OutputFormat,
) -> ExitCode {
    let identity = network.unwrap_or_else(|| classify(card_number));
    let result = check(identity, card_number);
    let report = ValidateReport {
        valid: result.is_ok(),
        network: identity,
        masked: mask::masked_display_default(card_number),
        error: result.err().map(|e| e.to_string()),
    };

    match output {
        OutputFormat::Text => {
            println!("Valid: {}", if report.valid { "yes" } else { "no" });
            println!("Network: {}", identity.name());
            println!("Masked: {}", report.masked);
            if let Some(error) = &report.error {
                println!("Error: {}", error);
            }
        }
        OutputFormat::Json => print_json(&report),
    }

    if report.valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn cmd_format(card_number: &str, separator: char) -> ExitCode {
    let identity = classify(card_number);
    println!(
        "{}",
        format::grouped_display_with_separator(identity, card_number, separator)
    );
    ExitCode::SUCCESS
}

fn cmd_mask(card_number: &str, label: &str) -> ExitCode {
    println!("{}", mask::masked_display(label, card_number));
    ExitCode::SUCCESS
}

fn cmd_luhn(card_number: &str) -> ExitCode {
    if is_luhn_valid(card_number) {
        println!("Luhn check: PASS");
        ExitCode::SUCCESS
    } else {
        println!("Luhn check: FAIL");
        ExitCode::FAILURE
    }
}

fn cmd_inspect(card_number: &str, output: OutputFormat) -> ExitCode {
    let snapshot = entry::inspect(card_number);
    match output {
        OutputFormat::Text => {
            println!("Network: {}", snapshot.identity().name());
            println!("Valid: {}", if snapshot.is_valid() { "yes" } else { "no" });
            println!("Grouped: {}", snapshot.grouped());
            println!("Masked: {}", snapshot.masked());
            println!("Max Length: {}", snapshot.max_length());
            println!("CVV Length: {}", snapshot.cvv_length());
            println!("Icon: {}", snapshot.icon());
        }
        OutputFormat::Json => print_json(&InspectReport {
            network: snapshot.identity(),
            valid: snapshot.is_valid(),
            masked: snapshot.masked().to_string(),
            max_length: snapshot.max_length(),
            cvv_length: snapshot.cvv_length(),
            icon: snapshot.icon(),
        }),
    }
    ExitCode::SUCCESS
}

fn cmd_rules() -> ExitCode {
    for rule in PatternRegistry::global().entries() {
        println!(
            "{:<18} {:>2}-{:<2} {}",
            rule.identity().name(),
            rule.min_length(),
            rule.max_length(),
            rule.pattern()
        );
    }
    ExitCode::SUCCESS
}
