use std::time::Duration;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use kafb2b_client::config::settings::DEFAULT_API_URL;
use kafb2b_client::utils::logging::{self, LogLevel};
use kafb2b_client::{ApiSettings, Credentials, KafB2bClient, LedgerQuery};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// API base URL, or the token endpoint URL itself
    #[arg(long, env = "KAFB2B_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,
    /// Service key for the credential exchange
    #[arg(long, env = "SRCV_KEYVAL", hide_env_values = true)]
    service_key: String,
    /// Secret key for the credential exchange
    #[arg(long, env = "SCR_KEYVAL", hide_env_values = true)]
    secret_key: String,
    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,
    #[arg(long, env = "LOG_LEVEL", value_enum)]
    log_level: Option<LogLevel>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct QueryArgs {
    /// Request date, YYYYMMDD
    #[arg(long)]
    date: String,
    /// Page number
    #[arg(long, default_value = "1")]
    page: String,
    /// Wholesale market code
    #[arg(long)]
    market_code: String,
    /// Wholesale corporation code
    #[arg(long)]
    corp_code: String,
}

impl QueryArgs {
    fn into_query(self) -> LedgerQuery {
        LedgerQuery {
            request_date: self.date,
            page_no: self.page,
            market_code: self.market_code,
            wholesale_corp_code: self.corp_code,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Query the sales-ledger list
    SalesLedger(QueryArgs),
    /// Query the shipment/transaction-info list
    TransactionInfo(QueryArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.log_level);

    let settings = ApiSettings::new(
        cli.api_url,
        Credentials::new(cli.service_key, cli.secret_key),
    )
    .with_timeout(Duration::from_secs(cli.timeout_secs));
    let client = KafB2bClient::new(settings)?;

    let result = match cli.command {
        Command::SalesLedger(args) => client.sales_ledger(&args.into_query()).await?,
        Command::TransactionInfo(args) => client.transaction_info(&args.into_query()).await?,
    };

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
