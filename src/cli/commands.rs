use std::io;

use clap::{Command, CommandFactory};
use clap_complete::{generate, Generator};
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, Order};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::Tree;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Show { values, sideways }) => _show(values, *sideways),
        Some(Commands::Traverse { order, values }) => _traverse(*order, values),
        Some(Commands::Demo { values }) => _demo(values),
        Some(Commands::Completion { shell }) => {
            print_completions(*shell, &mut Cli::command());
            Ok(())
        }
        None => Ok(()),
    }
}

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

/// clap accepts an empty positional list; reject it here
fn build_tree(values: &[i64]) -> CliResult<Tree<i64>> {
    if values.is_empty() {
        return Err(CliError::InvalidArgs(
            "at least one value is required".to_string(),
        ));
    }
    Ok(Tree::from_values(values.iter().copied()))
}

#[instrument]
fn _show(values: &[i64], sideways: bool) -> CliResult<()> {
    let tree = build_tree(values)?;
    if sideways {
        print!("{}", tree.render());
    } else if let Some(drawing) = tree.to_termtree() {
        print!("{}", drawing);
    }
    output::detail(&format!(
        "{} values, height {}, balanced: {}",
        tree.len(),
        tree.height(),
        tree.is_balanced()
    ));
    Ok(())
}

#[instrument]
fn _traverse(order: Order, values: &[i64]) -> CliResult<()> {
    let tree = build_tree(values)?;
    let visited = match order {
        Order::In => tree.inorder(),
        Order::Pre => tree.preorder(),
        Order::Post => tree.postorder(),
        Order::Level => tree.level_order(),
    };
    output::info(&visited.iter().join(" "));
    Ok(())
}

/// Scripted walkthrough over the whole API: build a balanced tree, degrade
/// it with a run of ascending inserts, delete a value, rebalance.
#[instrument]
fn _demo(values: &[i64]) -> CliResult<()> {
    let seed: Vec<i64> = if values.is_empty() {
        (1..=15).collect()
    } else {
        values.to_vec()
    };
    let mut tree = Tree::from_values(seed);

    output::header("initial tree");
    print!("{}", tree.render());
    output::detail(&format!(
        "height {}, balanced: {}",
        tree.height(),
        tree.is_balanced()
    ));
    output::info(&format!("inorder:   {}", tree.inorder().iter().join(" ")));
    output::info(&format!("preorder:  {}", tree.preorder().iter().join(" ")));
    output::info(&format!("postorder: {}", tree.postorder().iter().join(" ")));
    output::info(&format!("level:     {}", tree.level_order().iter().join(" ")));

    output::header("degrading the shape");
    let top = tree.max().copied().unwrap_or(0);
    for value in top + 1..=top + 5 {
        debug!("inserting {}", value);
        tree.insert(value);
    }
    output::detail(&format!(
        "height {}, balanced: {}",
        tree.height(),
        tree.is_balanced()
    ));

    if let Some(low) = tree.min().copied() {
        tree.delete(&low)?;
        output::detail(&format!("deleted {}, {} values left", low, tree.len()));
    }

    output::header("after rebalance");
    tree.rebalance();
    print!("{}", tree.render());
    output::detail(&format!(
        "height {}, balanced: {}",
        tree.height(),
        tree.is_balanced()
    ));
    output::success("demo complete");
    Ok(())
}
