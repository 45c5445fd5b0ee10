use crate::export::OutputFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for productcodes
#[derive(Parser)]
#[command(
    name = "productcodes",
    version = env!("CARGO_PKG_VERSION"),
    about = "Manage the PRODUCT_CODE table of a SQLite database",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show or check the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Report keys missing from the configuration file")]
        check: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// List product codes
    List {
        #[arg(long, value_enum, help = "Output format (default from config)")]
        format: Option<OutputFormat>,

        #[arg(long = "code", help = "Only codes starting with this prefix")]
        code_prefix: Option<String>,
    },

    /// Show a single product code
    Show {
        /// Product code (business key)
        code: String,
    },

    /// Insert a product code, or update it if the code already exists
    Add {
        /// Product code (business key)
        code: String,

        /// Discount code (one character)
        discount: String,

        /// Free-text description
        description: String,

        #[arg(long, help = "Run the existence check and the write in one transaction")]
        atomic: bool,
    },

    /// Change fields of an existing product code
    Edit {
        /// Current product code
        code: String,

        #[arg(long = "code", help = "New product code")]
        new_code: Option<String>,

        #[arg(long = "discount", help = "New discount code (one character)")]
        discount: Option<String>,

        #[arg(long = "description", help = "New description")]
        description: Option<String>,
    },

    /// Delete a product code
    Del {
        /// Product code to delete
        code: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Export all product codes to a file
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: OutputFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
