use clap::{Parser, ValueEnum};
use nagare::prelude::*;
use std::fs;
use std::time::Instant;

/// Define a CLI-specific enum for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum DirectionCli {
    /// Top-to-bottom reading order
    Tb,
    /// Left-to-right reading order
    Lr,
}

/// Normalize a flow/agent graph document and compute a layered layout
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the graph document JSON file (Flow- or Agent-shaped)
    document_path: String,

    /// The layout direction to use
    #[arg(short, long, value_enum, default_value_t = DirectionCli::Tb)]
    direction: DirectionCli,

    /// Optional path to write the positioned graph as JSON
    #[arg(short, long)]
    output: Option<String>,

    /// Optional path to write a binary layout snapshot
    #[arg(short, long)]
    snapshot: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    let direction = match cli.direction {
        DirectionCli::Tb => Direction::TopToBottom,
        DirectionCli::Lr => Direction::LeftToRight,
    };

    let total_start = Instant::now();

    // --- 1. File Loading ---
    let json = fs::read_to_string(&cli.document_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read document file '{}': {}",
            &cli.document_path, e
        ))
    });
    let doc = GraphDocument::from_json(&json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse document: {}", e)));

    println!(
        "Loaded document '{}' ({})",
        doc.display_id(),
        if doc.is_flow_shaped() {
            "flow-shaped"
        } else if doc.is_agent_shaped() {
            "agent-shaped"
        } else {
            "empty"
        }
    );

    // --- 2. Normalization ---
    let normalize_start = Instant::now();
    let (graph, report) = normalize_with_report(&doc);
    let normalize_duration = normalize_start.elapsed();

    println!(
        "Normalized {} nodes and {} edges in {:?}",
        graph.nodes.len(),
        graph.edges.len(),
        normalize_duration
    );
    for dropped in &report.dropped_edges {
        println!(
            "  -> Dropped edge {} -> {} (missing node '{}')",
            dropped.source, dropped.target, dropped.missing
        );
    }
    for duplicate in &report.duplicate_nodes {
        println!("  -> Dropped duplicate node '{}'", duplicate);
    }

    // --- 3. Layout ---
    let layout_start = Instant::now();
    let positioned = layout(&graph, direction);
    let layout_duration = layout_start.elapsed();

    let max_rank = positioned.nodes.iter().map(|n| n.rank).max().unwrap_or(0);
    println!(
        "Layout finished in {:?} ({} ranks, direction {:?})",
        layout_duration,
        max_rank + 1,
        direction
    );

    // --- 4. Output ---
    if let Some(output_path) = &cli.output {
        let json = serde_json::to_string_pretty(&positioned)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize layout: {}", e)));
        fs::write(output_path, json).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to write '{}': {}", output_path, e))
        });
        println!("Positioned graph written to '{}'", output_path);
    }

    if let Some(snapshot_path) = &cli.snapshot {
        let snapshot = LayoutSnapshot::new(direction, positioned.clone());
        snapshot
            .save(snapshot_path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to save snapshot: {}", e)));
        println!("Snapshot written to '{}'", snapshot_path);
    }

    println!("Total: {:?}", total_start.elapsed());
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
