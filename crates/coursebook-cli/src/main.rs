mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "coursebook",
    version,
    about = "Department course catalog, OCR setup notes and SPI/CPI calculator"
)]
struct Cli {
    /// Show debug logs on stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print what to install for OCR-based PDF extraction (default)
    Setup {
        /// Also check whether the OCR tools are installed
        #[arg(long)]
        check: bool,
    },
    /// Inspect department codes and their course-structure PDFs
    Branches {
        #[command(subcommand)]
        action: BranchesAction,
    },
    /// Inspect and validate a course catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Compute SPI (and CPI) for a semester
    Spi {
        /// Course catalog JSON file
        #[arg(short, long, env = "COURSEBOOK_CATALOG", value_name = "FILE")]
        catalog: Option<PathBuf>,

        /// Branch code (e.g., "CSE")
        #[arg(short, long)]
        branch: String,

        /// Semester label as written in the catalog (e.g., "3")
        #[arg(short, long)]
        semester: String,

        /// Grade for a course, repeatable: -g CS101=AA -g MA101=BC
        #[arg(short, long = "grade", value_name = "COURSE=GRADE")]
        grades: Vec<String>,

        /// SPI/CPI accumulated before this semester
        #[arg(long, requires = "prev_credits")]
        prev_spi: Option<String>,

        /// Credits accumulated before this semester
        #[arg(long, requires = "prev_spi")]
        prev_credits: Option<String>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table", value_parser = ["table", "json"])]
        output: String,
    },
}

#[derive(Subcommand)]
enum BranchesAction {
    /// List all department codes and their PDF file names
    List {
        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table", value_parser = ["table", "json"])]
        output: String,
    },
    /// Show one department's PDF file name
    Show {
        /// Branch code (case-insensitive)
        code: String,

        /// Directory holding the PDFs; prints the full path
        #[arg(short, long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// Validate a catalog file and report warnings
    Validate {
        /// Path to catalog JSON file
        file: PathBuf,
    },
    /// List semesters of a branch, or the courses of one semester
    Show {
        /// Course catalog JSON file
        #[arg(short, long, env = "COURSEBOOK_CATALOG", value_name = "FILE")]
        catalog: Option<PathBuf>,

        /// Branch code (e.g., "CSE")
        #[arg(short, long)]
        branch: String,

        /// Semester label; omit to list the branch's semesters
        #[arg(short, long)]
        semester: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        None => commands::setup::run(false),
        Some(Commands::Setup { check }) => commands::setup::run(check),
        Some(Commands::Branches { action }) => match action {
            BranchesAction::List { output } => commands::branches::list(&output),
            BranchesAction::Show { code, dir } => commands::branches::show(&code, dir),
        },
        Some(Commands::Catalog { action }) => match action {
            CatalogAction::Validate { file } => commands::catalog::validate(&file),
            CatalogAction::Show {
                catalog,
                branch,
                semester,
            } => commands::catalog::show(catalog, &branch, semester.as_deref()),
        },
        Some(Commands::Spi {
            catalog,
            branch,
            semester,
            grades,
            prev_spi,
            prev_credits,
            output,
        }) => commands::spi::run(commands::spi::SpiArgs {
            catalog,
            branch,
            semester,
            grades,
            prev_spi,
            prev_credits,
            output,
        }),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
