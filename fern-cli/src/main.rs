use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "fern", version, about = "Fern demo CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the demo tree into a document and print it as HTML text.
    Render {
        /// Sentence to split into <li> items
        #[arg(long, default_value = "Testing one two three")]
        words: String,
        /// Also mount a <pre id="vdom"> holding the JSON dump of the tree
        #[arg(long)]
        dump_json: bool,
    },
    /// Print the demo virtual tree as pretty JSON.
    Dump {
        /// Sentence to split into <li> items
        #[arg(long, default_value = "Testing one two three")]
        words: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Render { words, dump_json } => {
            println!("{}", fern_cli::render_cmd(&words, dump_json)?)
        }
        Commands::Dump { words } => println!("{}", fern_cli::dump_cmd(&words)?),
    }
    Ok(())
}
