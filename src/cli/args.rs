//! CLI argument definitions using clap

use clap::{Parser, Subcommand, ValueEnum};

/// Binary search tree playground: build, traverse, and rebalance on demand
#[derive(Parser, Debug)]
#[command(name = "ordtree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-d, -dd, -ddd)
    #[arg(short = 'd', long = "debug", action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a tree from values and draw it
    Show {
        /// Values to build from (duplicates dropped)
        #[arg(num_args = 1..)]
        values: Vec<i64>,

        /// Use the sideways drawing instead of the top-down one
        #[arg(short, long)]
        sideways: bool,
    },

    /// Build a tree and print one traversal order
    Traverse {
        /// Traversal order
        #[arg(short, long, value_enum, default_value_t = Order::In)]
        order: Order,

        /// Values to build from (duplicates dropped)
        #[arg(num_args = 1..)]
        values: Vec<i64>,
    },

    /// Scripted walkthrough: build, degrade, delete, rebalance
    Demo {
        /// Seed values (default: 1..=15)
        values: Vec<i64>,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Traversal order selector.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    /// Left, node, right (ascending values)
    In,
    /// Node, left, right
    Pre,
    /// Left, right, node
    Post,
    /// Breadth-first, top to bottom
    Level,
}
