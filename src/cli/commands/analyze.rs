//! Analyze command - statistics of the full game tree

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::Result;
use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::{
    cli::{config::CommonConfig, output},
    tictactoe::{GameTree, OutcomeCounts, SIZE, new_game_tree},
};

#[derive(Parser, Debug)]
#[command(about = "Build the full game tree and report its statistics")]
pub struct AnalyzeArgs {
    /// Print the report as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Export opening-move scores to a CSV file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

/// Minimax score of one first move from the empty board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningScore {
    pub row: usize,
    pub col: usize,
    pub score: i32,
}

/// Summary of a built and scored tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeReport {
    pub total_nodes: usize,
    pub nodes_per_depth: Vec<usize>,
    pub root_value: i32,
    pub finished_games: OutcomeCounts,
    pub openings: Vec<OpeningScore>,
}

impl TreeReport {
    /// Collect the report from a scored tree rooted at the empty board
    pub fn from_tree(tree: &GameTree, root_value: i32) -> Self {
        let root = tree.root();
        let openings = tree
            .children(root)
            .filter_map(|child| {
                let pos = tree.board(root).find_changed_position(tree.board(child))?;
                Some(OpeningScore {
                    row: pos / SIZE,
                    col: pos % SIZE,
                    score: tree.node(child).score(),
                })
            })
            .collect();

        Self {
            total_nodes: tree.len(),
            nodes_per_depth: tree.depth_counts(),
            root_value,
            finished_games: tree.outcome_counts(),
            openings,
        }
    }
}

pub fn execute(args: AnalyzeArgs, common: &CommonConfig) -> Result<()> {
    let spinner = output::create_spinner("Building and scoring the game tree...", common.progress)?;
    let (tree, value) = new_game_tree();
    let report = TreeReport::from_tree(&tree, value);
    spinner.finish_and_clear();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if let Some(path) = args.export {
        export_openings(&report, &path)?;
        println!("\nOpening scores exported to: {}", path.display());
    }

    Ok(())
}

fn print_report(report: &TreeReport) {
    output::print_section("Game Tree Statistics");
    output::print_kv("Total nodes", &output::format_number(report.total_nodes));
    output::print_kv("Root minimax value", &report.root_value.to_string());

    output::print_subsection("Nodes by depth");
    for (depth, count) in report.nodes_per_depth.iter().enumerate() {
        output::print_kv(&format!("Depth {depth}"), &output::format_number(*count));
    }

    output::print_subsection("Finished games");
    let games = &report.finished_games;
    output::print_kv("X wins", &output::format_number(games.x_wins));
    output::print_kv("O wins", &output::format_number(games.o_wins));
    output::print_kv("Draws", &output::format_number(games.draws));
    output::print_kv("Total", &output::format_number(games.total()));

    output::print_subsection("Opening move scores");
    for opening in &report.openings {
        output::print_kv(
            &format!("({}, {})", opening.row, opening.col),
            &opening.score.to_string(),
        );
    }
}

/// Write opening-move scores as CSV
pub fn export_openings(report: &TreeReport, path: &Path) -> Result<()> {
    let mut file = BufWriter::new(File::create(path)?);

    writeln!(file, "# Tic-Tac-Toe opening scores")?;
    writeln!(file, "# Root value: {}", report.root_value)?;
    writeln!(file, "Row,Col,Score")?;
    for opening in &report.openings {
        writeln!(file, "{},{},{}", opening.row, opening.col, opening.score)?;
    }
    file.flush()?;

    Ok(())
}
