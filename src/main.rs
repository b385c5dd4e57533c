use clap::{Parser, Subcommand};
use fleetbridge::application::controller::PaymentController;
use fleetbridge::config::Settings;
use fleetbridge::domain::network::Network;
use fleetbridge::domain::ports::EventSinkHandle;
use fleetbridge::domain::summary::TransactionSummary;
use fleetbridge::domain::supplier::SupplierDirectory;
use fleetbridge::infrastructure::log_sink::TracingEventSink;
use fleetbridge::interfaces::csv::event_reader::EventReader;
use fleetbridge::interfaces::csv::frame_writer::{FrameFormat, FrameWriter};
use fleetbridge::interfaces::csv::report_writer::ReportWriter;
use fleetbridge::logging::init_logging;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the suppliers payments can be sent to
    Suppliers,

    /// Print the fee and total for an amount
    Quote {
        /// Amount in RLUSD
        #[arg(long, allow_hyphen_values = true)]
        amount: String,

        /// Settlement network (xrpl or eth)
        #[arg(long, default_value = "xrpl")]
        network: Network,
    },

    /// Replay a CSV script of form events and print the form after each one
    Run {
        /// Input script with `action,value` rows
        input: PathBuf,

        /// How long the confirmation stays visible, in milliseconds
        #[arg(long, default_value_t = 3000)]
        reset_delay_ms: u64,

        /// Network selected when the form starts (xrpl or eth)
        #[arg(long, default_value = "xrpl")]
        network: Network,

        /// Frame output format
        #[arg(long, value_enum, default_value_t = FrameFormat::Csv)]
        format: FrameFormat,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Command::Suppliers => {
            let stdout = io::stdout();
            let mut writer = ReportWriter::new(stdout.lock());
            writer
                .write_suppliers(&SupplierDirectory::new())
                .into_diagnostic()?;
        }
        Command::Quote { amount, network } => {
            let stdout = io::stdout();
            let mut writer = ReportWriter::new(stdout.lock());
            writer
                .write_quote(&TransactionSummary::compute(&amount, network))
                .into_diagnostic()?;
        }
        Command::Run {
            input,
            reset_delay_ms,
            network,
            format,
        } => {
            let settings = Settings::default()
                .with_reset_delay(Duration::from_millis(reset_delay_ms))
                .with_network(network);
            let sink: EventSinkHandle = Arc::new(TracingEventSink::new());
            let controller = PaymentController::new(settings, sink);

            let file = File::open(input).into_diagnostic()?;
            let reader = EventReader::new(file);
            let stdout = io::stdout();
            let mut writer = FrameWriter::new(stdout.lock(), format);

            for (index, event_result) in reader.events().enumerate() {
                let step = index + 1;
                match event_result {
                    Ok(event) => {
                        let action = event.name();
                        if let Err(e) = controller.apply(event).await {
                            error!(step, "Error applying event: {}", e);
                            continue;
                        }
                        let view = controller.view().await;
                        writer.write_frame(step, action, &view).into_diagnostic()?;
                    }
                    Err(e) => {
                        error!(step, "Error reading event: {}", e);
                    }
                }
            }
            writer.flush().into_diagnostic()?;
        }
    }

    Ok(())
}
