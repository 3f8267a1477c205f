// bingo-pdf: Generate printable bingo card PDFs from a plain-text item list

use clap::Parser;

use bingo_pdf::card::{generate_cards, BingoConfig};
use bingo_pdf::error::AppError;
use bingo_pdf::items::load_items;
use bingo_pdf::pdf::render_pdf;

/// CLI Arguments
#[derive(Parser, Debug)]
#[command(author, version, about = "Generate printable bingo cards as a PDF")]
struct Args {
    /// Path to a text file with one item per line (# starts a comment)
    items_file: String,

    /// Number of rows per card
    #[arg(long, default_value = "5")]
    rows: u32,

    /// Number of columns per card
    #[arg(long, default_value = "5")]
    cols: u32,

    /// Number of cards to generate (one per page)
    #[arg(long, default_value = "10")]
    cards: u32,

    /// Card title printed at the top of every page
    #[arg(long, default_value = "BINGO")]
    title: String,

    /// Put a free space at the center cell (odd rows and columns only)
    #[arg(long)]
    free_space: bool,

    /// Free space label
    #[arg(long, default_value = "FREE")]
    free_text: String,

    /// Output PDF filename
    #[arg(short, long, default_value = "bingo_cards.pdf")]
    output: String,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let args = Args::parse();

    let pool = load_items(&args.items_file)?;

    let config = BingoConfig {
        title: args.title,
        rows: args.rows,
        cols: args.cols,
        cards: args.cards,
        free_space: args.free_space,
        free_text: args.free_text,
    };

    let cards = generate_cards(&pool, &config)?;
    render_pdf(&cards, &config, &args.output)?;

    println!("✓ Generated: {}", args.output);
    println!("  Cards: {} ({}x{})", cards.len(), config.rows, config.cols);
    println!("  Pool: {} items", pool.len());

    Ok(())
}
