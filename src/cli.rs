use clap::{Parser, Subcommand};

/// KnapsackOptimizer — greedy selection of weighted items under a capacity limit.
#[derive(Parser, Debug)]
#[command(name = "knapsack_optimizer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the optimizer state JSON file.
    #[arg(short, long, default_value = "knapsack_state.json")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Optimize a shopping selection under a bag weight limit.
    Shopping,

    /// Optimize an investment selection under a spending budget.
    Portfolio,

    /// Bulk-add entries from a CSV file with a Name,Weight,Value header.
    Import {
        /// Path to the CSV file.
        csv: String,

        /// Import into the portfolio list instead of the shopping list.
        #[arg(long)]
        portfolio: bool,
    },

    /// Clear stored lists.
    Reset {
        /// Clear the shopping list.
        #[arg(long)]
        items: bool,

        /// Clear the portfolio list.
        #[arg(long)]
        stocks: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Shopping
    }
}
