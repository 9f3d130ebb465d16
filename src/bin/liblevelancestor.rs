//! Command-line driver for the level-ancestor and suffix-automaton
//! indices: builds them from files, times build and query, and prints
//! human-readable results.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use liblevelancestor::prelude::*;

#[derive(Parser)]
#[command(name = "liblevelancestor")]
#[command(about = "Level-ancestor and suffix-automaton index tooling")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build every level-ancestor index over a tree file and time one query
    Bench {
        /// Tree file of whitespace-separated `node parent` pairs
        tree: PathBuf,

        /// Node to query
        #[arg(short, long)]
        node: NodeId,

        /// How many edges above the node to look
        #[arg(short, long)]
        level: usize,
    },

    /// Answer one level-ancestor query with a chosen index
    Query {
        /// Tree file of whitespace-separated `node parent` pairs
        tree: PathBuf,

        /// Node to query
        #[arg(short, long)]
        node: NodeId,

        /// How many edges above the node to look
        #[arg(short, long)]
        level: usize,

        /// Index to build
        #[arg(short, long, value_enum, default_value = "ladder-jump")]
        index: IndexChoice,
    },

    /// Build the suffix automaton of a text and report its size
    Factors {
        /// Text to index (or a file, with --file)
        text: String,

        /// Treat TEXT as a path and index the file's contents
        #[arg(short = 'F', long)]
        file: bool,

        /// Factors to test against the automaton
        #[arg(short, long)]
        check: Vec<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum IndexChoice {
    Naive,
    LongPath,
    Ladder,
    LadderJump,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Bench { tree, node, level } => cmd_bench(&tree, node, level),
        Commands::Query {
            tree,
            node,
            level,
            index,
        } => cmd_query(&tree, node, level, index),
        Commands::Factors { text, file, check } => cmd_factors(&text, file, &check),
    };

    if let Err(error) = result {
        eprintln!("{} {error:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn load_tree(path: &Path) -> Result<Tree> {
    let tree =
        Tree::load(path).with_context(|| format!("loading tree from {}", path.display()))?;
    println!(
        "Loaded tree: {} nodes, height {}, root {}",
        tree.node_count(),
        tree.tree_height(),
        tree.root()
    );
    Ok(tree)
}

/// Build an index and answer one query, timing both.
fn timed<I, F>(build: F, tree: &Tree, node: NodeId, level: usize) -> (Option<NodeId>, Duration, Duration)
where
    I: LevelAncestor,
    F: Fn(&Tree) -> I,
{
    let started = Instant::now();
    let index = build(tree);
    let build_time = started.elapsed();

    let started = Instant::now();
    let answer = index.level_ancestor(node, level);
    let query_time = started.elapsed();

    (answer, build_time, query_time)
}

fn report(name: &str, answer: Option<NodeId>, build_time: Duration, query_time: Duration) {
    let answer = match answer {
        Some(ancestor) => ancestor.to_string().green().bold(),
        None => "none".yellow().bold(),
    };
    println!(
        "{:<12} build {:>12?}  query {:>10?}  answer {}",
        name.cyan(),
        build_time,
        query_time,
        answer
    );
}

fn cmd_bench(path: &Path, node: NodeId, level: usize) -> Result<()> {
    let tree = load_tree(path)?;
    println!(
        "Ancestor of level {} of node {}:",
        level.to_string().bold(),
        node.to_string().bold()
    );

    let mut answers = Vec::new();

    let (answer, build_time, query_time) = timed(NaiveIndex::build, &tree, node, level);
    report("naive", answer, build_time, query_time);
    answers.push(answer);

    let (answer, build_time, query_time) = timed(LongPathIndex::build, &tree, node, level);
    report("long-path", answer, build_time, query_time);
    answers.push(answer);

    let (answer, build_time, query_time) = timed(LadderIndex::build, &tree, node, level);
    report("ladder", answer, build_time, query_time);
    answers.push(answer);

    let (answer, build_time, query_time) = timed(LadderJumpIndex::build, &tree, node, level);
    report("ladder-jump", answer, build_time, query_time);
    answers.push(answer);

    if answers.windows(2).any(|pair| pair[0] != pair[1]) {
        anyhow::bail!("indices disagree: {answers:?}");
    }
    Ok(())
}

fn cmd_query(path: &Path, node: NodeId, level: usize, index: IndexChoice) -> Result<()> {
    let tree = load_tree(path)?;

    let (name, answer, build_time, query_time) = match index {
        IndexChoice::Naive => {
            let (answer, build, query) = timed(NaiveIndex::build, &tree, node, level);
            ("naive", answer, build, query)
        }
        IndexChoice::LongPath => {
            let (answer, build, query) = timed(LongPathIndex::build, &tree, node, level);
            ("long-path", answer, build, query)
        }
        IndexChoice::Ladder => {
            let (answer, build, query) = timed(LadderIndex::build, &tree, node, level);
            ("ladder", answer, build, query)
        }
        IndexChoice::LadderJump => {
            let (answer, build, query) = timed(LadderJumpIndex::build, &tree, node, level);
            ("ladder-jump", answer, build, query)
        }
    };

    report(name, answer, build_time, query_time);
    Ok(())
}

fn cmd_factors(text: &str, is_file: bool, check: &[String]) -> Result<()> {
    let owned;
    let text = if is_file {
        owned = std::fs::read_to_string(text)
            .with_context(|| format!("reading text from {text}"))?;
        owned.as_str()
    } else {
        text
    };

    let started = Instant::now();
    let sam = SuffixAutomaton::from_text(text);
    let build_time = started.elapsed();

    println!(
        "Suffix automaton over {} bytes: {} states, {} transitions (built in {:?})",
        text.len(),
        sam.state_count().to_string().bold(),
        sam.transition_count().to_string().bold(),
        build_time
    );

    for factor in check {
        let verdict = if sam.contains_factor(factor) {
            if sam.is_suffix(factor) {
                "factor, suffix".green()
            } else {
                "factor".green()
            }
        } else {
            "not a factor".red()
        };
        println!("  {factor:?}: {verdict}");
    }
    Ok(())
}
