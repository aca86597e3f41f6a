//! Command implementations for the Dive With Data CLI.
//!
//! Every subcommand loads the dataset (file or URL), applies the selection
//! flags through the same cascading filter state the dashboard uses, then
//! prints or exports the result.

use clap::{Args, Subcommand, ValueEnum};
use dwd_data::charts::TOP_RELIGIONS;

pub mod export;
pub mod report;
pub mod source;

/// Where to read the dataset from.
#[derive(Args, Debug, Clone)]
pub struct DataArgs {
    /// Dataset file (.json or .json.gz) or http(s) URL
    #[arg(short = 'd', long)]
    pub data: String,
}

/// Geographic selection flags, applied coarse to fine.
#[derive(Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// Use French Overseas Territories instead of Metropolitan France
    #[arg(long)]
    pub overseas: bool,

    #[arg(long)]
    pub country: Option<String>,

    #[arg(long)]
    pub region: Option<String>,

    #[arg(long)]
    pub department: Option<String>,

    #[arg(long)]
    pub city: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Top religions by places of worship
    Bar,
    /// Religion x denomination matrix
    Bubble,
    /// Religion share per geographic group
    Heatmap,
    /// Diversity index per geographic group
    Diversity,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the four KPIs of the selection as JSON
    Kpis {
        #[command(flatten)]
        data: DataArgs,
        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// Print the dropdown options offered under the selection as JSON
    Options {
        #[command(flatten)]
        data: DataArgs,
        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// Print one chart's data as JSON
    Chart {
        #[arg(value_enum)]
        kind: ChartKind,

        /// Number of religions kept by the bar and bubble charts
        #[arg(long, default_value_t = TOP_RELIGIONS)]
        top: usize,

        #[command(flatten)]
        data: DataArgs,
        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// Write the filtered locations to CSV, one row per religious entry
    Export {
        /// Output CSV path
        #[arg(short = 'o', long)]
        output: String,

        #[command(flatten)]
        data: DataArgs,
        #[command(flatten)]
        selection: SelectionArgs,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    match command {
        Command::Kpis { data, selection } => {
            let dataset = source::load_dataset(&data.data).await?;
            let filters = source::filter_state(&dataset, &selection);
            report::write_kpis(&mut stdout, &dataset, &filters)
        }
        Command::Options { data, selection } => {
            let dataset = source::load_dataset(&data.data).await?;
            let filters = source::filter_state(&dataset, &selection);
            report::write_options(&mut stdout, &dataset, &filters)
        }
        Command::Chart {
            kind,
            top,
            data,
            selection,
        } => {
            let dataset = source::load_dataset(&data.data).await?;
            let filters = source::filter_state(&dataset, &selection);
            report::write_chart(&mut stdout, &dataset, &filters, kind, top)
        }
        Command::Export {
            output,
            data,
            selection,
        } => {
            let dataset = source::load_dataset(&data.data).await?;
            let filters = source::filter_state(&dataset, &selection);
            export::export_csv(&output, &dataset, &filters)
        }
    }
}
