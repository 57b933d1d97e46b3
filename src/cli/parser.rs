use clap::{Parser, Subcommand};

/// Command-line interface definition for rSlotPay
#[derive(Parser)]
#[command(
    name = "rslotpay",
    version = env!("CARGO_PKG_VERSION"),
    about = "Enter worked time slots and an hourly rate, get total time and pay",
    long_about = None
)]
pub struct Cli {
    /// Enable debug logging on stderr (otherwise controlled by RSLOTPAY_LOG)
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    /// Disable ANSI colors in the output
    #[arg(global = true, long = "no-color")]
    pub no_color: bool,

    /// Without a subcommand an interactive shell is started
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            requires = "edit_config",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Compute total time and pay for the given slots and exit
    Calc {
        /// Hourly rate (non-numeric input counts as 0)
        #[arg(long, short = 'r', allow_hyphen_values = true)]
        rate: Option<String>,

        /// Currency symbol shown in front of amounts
        #[arg(long, short = 'c')]
        currency: Option<String>,

        /// Worked slot as HH:MM-HH:MM (repeatable)
        #[arg(long = "slot", short = 's', value_name = "HH:MM-HH:MM")]
        slots: Vec<String>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactive session: add, edit and remove slots and watch the totals
    Shell {
        /// Initial hourly rate
        #[arg(long, short = 'r', allow_hyphen_values = true)]
        rate: Option<String>,

        /// Initial currency symbol
        #[arg(long, short = 'c')]
        currency: Option<String>,
    },
}
