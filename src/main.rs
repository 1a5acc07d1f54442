//! Contactkit CLI.
//!
//! Thin command-line front end over the library: mask phone numbers, strip
//! digits, check email plausibility, and verify addresses against the
//! geocoding service.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use contactkit::geocode::{AddressQuery, GeocodeClient};
use contactkit::{extract_digits, is_valid_email, mask_phone};

/// Contact-field formatting and validation tool.
#[derive(Parser)]
#[command(name = "contactkit")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format input as a phone-number display mask
    Mask {
        /// Raw phone-number input (punctuation is stripped first)
        input: String,
    },

    /// Strip all non-digit characters from input
    Digits {
        /// Raw input
        input: String,
    },

    /// Check whether an email address is syntactically plausible
    CheckEmail {
        /// Address to check
        address: String,
    },

    /// Resolve a US city/state/zip to coordinates
    VerifyAddress {
        /// City name
        #[arg(long)]
        city: String,

        /// State code or name
        #[arg(long)]
        state: String,

        /// Five-digit zip code
        #[arg(long)]
        zip: Option<u32>,

        /// Override the geocode endpoint
        #[arg(long, value_name = "URL")]
        endpoint: Option<String>,
    },
}

/// Command handler carrying shared flags.
struct Handler {
    verbose: bool,
}

impl Handler {
    fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    fn mask(&self, input: &str) -> Result<()> {
        if self.verbose {
            println!("Digits: {}", extract_digits(input));
        }
        println!("{}", mask_phone(input));
        Ok(())
    }

    fn digits(&self, input: &str) -> Result<()> {
        println!("{}", extract_digits(input));
        Ok(())
    }

    fn check_email(&self, address: &str) -> Result<()> {
        if is_valid_email(address) {
            println!("✓ plausible email address");
            Ok(())
        } else {
            println!("⚠ not a plausible email address");
            std::process::exit(1);
        }
    }

    async fn verify_address(
        &self,
        city: String,
        state: String,
        zip: Option<u32>,
        endpoint: Option<String>,
    ) -> Result<()> {
        let client = match endpoint {
            Some(url) => GeocodeClient::with_base_url(url),
            None => GeocodeClient::new(),
        }
        .with_context(|| "Failed to build geocode client")?;

        let query = AddressQuery::new(city, state, zip);
        if self.verbose {
            println!(
                "Query: city={} state={} zip={:?} routable={}",
                query.city,
                query.state,
                query.zip,
                query.is_routable()
            );
        }

        let result = client
            .verify(&query)
            .await
            .with_context(|| "Address verification failed")?;

        match result {
            Some(coords) => {
                println!("{}", serde_json::to_string(&coords)?);
                Ok(())
            }
            None => {
                println!("⚠ no result for this address");
                std::process::exit(1);
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let handler = Handler::new(cli.verbose);

    match cli.command {
        Commands::Mask { input } => handler.mask(&input)?,
        Commands::Digits { input } => handler.digits(&input)?,
        Commands::CheckEmail { address } => handler.check_email(&address)?,
        Commands::VerifyAddress {
            city,
            state,
            zip,
            endpoint,
        } => {
            handler.verify_address(city, state, zip, endpoint).await?;
        }
    }

    Ok(())
}
