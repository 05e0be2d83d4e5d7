use std::fs;
use std::path::PathBuf;

use clap::Parser;
use mdstyle::{
    Document, HeadingLevel, ListItem, Row, Table, Theme, wrap_bold, wrap_code, wrap_italic,
    wrap_red_text,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mdstyle")]
#[command(about = "Render Markdown to HTML with inline styles")]
struct Cli {
    /// Input Markdown file (renders a demo document when omitted)
    input: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Style profile TOML file
    #[arg(long)]
    theme: Option<PathBuf>,

    /// Print the Markdown source instead of HTML
    #[arg(long)]
    markdown: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn demo() -> Document {
    let mut doc = Document::new();
    doc.add_heading(HeadingLevel::H1, "hello")
        .add_heading(HeadingLevel::H2, "world")
        .add_heading(HeadingLevel::H3, "world")
        .add_text("text1")
        .add_text("text2")
        .add_table(
            Table::new(["a", "b"])
                .row(Row::new().cell("a", 112).cell("b", 5463))
                .row(Row::new().cell("a", 3.05245))
                .row(Row::new().cell("b", 545))
                .row(Row::new().cell("a", 6.01).cell("b", 0.7))
                .row(Row::new().cell("b", wrap_italic(112)))
                .row(Row::new().cell("a", wrap_bold(45)).cell("b", wrap_code(0.98)))
                .row(Row::new().cell("a", wrap_bold(45)).cell("b", wrap_red_text(123)))
                .align_codes(["r", "r"]),
        )
        .add_list(vec![
            ListItem::from("as"),
            ListItem::group("asda", [ListItem::from("123"), ListItem::from("345")]),
            ListItem::from("asdas"),
        ]);
    doc
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let doc = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => {
                let mut doc = Document::new();
                doc.add_raw(content);
                doc
            }
            Err(e) => {
                eprintln!("Error reading {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => demo(),
    };

    let rendered = if cli.markdown {
        doc.markdown()
    } else {
        let theme = match &cli.theme {
            Some(path) => match Theme::try_load(path) {
                Ok(theme) => theme,
                Err(e) => {
                    eprintln!("Error loading theme {}: {}", path.display(), e);
                    std::process::exit(1);
                }
            },
            None => Theme::compiled_default(),
        };
        match doc.render_with(&theme) {
            Ok(root) => root.to_string(),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    };

    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, rendered) {
                eprintln!("Error writing {}: {}", path.display(), e);
                std::process::exit(1);
            }
        }
        None => println!("{rendered}"),
    }
}
