use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use binsearch_viz::{
    Highlight, LayoutConfig, PlanMode, Session, SessionConfig, TreeLayout,
};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "binsearch-viz", about = "Step through a binary search and its BST")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every step of the search at once.
    Walk(SearchArgs),
    /// Navigate the steps interactively (n/p/f/l/<number>/q on stdin).
    Step(SearchArgs),
    /// Print the tree with its layout coordinates.
    Tree {
        /// Number of elements n (array is 2, 4, ..., 2n).
        #[arg(long, allow_negative_numbers = true)]
        length: String,
        /// Horizontal distance per element.
        #[arg(long, default_value_t = 1.5)]
        spacing: f64,
        /// Vertical offset per tree level.
        #[arg(long, default_value_t = -3.0, allow_negative_numbers = true)]
        level_step: f64,
    },
}

#[derive(Args, Debug)]
struct SearchArgs {
    /// Number of elements n (array is 2, 4, ..., 2n).
    #[arg(long, allow_negative_numbers = true)]
    length: String,
    /// Value to search for.
    #[arg(long, allow_negative_numbers = true)]
    target: String,
    /// Record the matching probe twice (plain probe, then hit).
    #[arg(long)]
    verbatim: bool,
    /// Reject lengths above this cap.
    #[arg(long, default_value_t = binsearch_viz::session::REFERENCE_MAX_LENGTH)]
    max_length: usize,
}

impl SearchArgs {
    fn session(&self) -> Result<Session> {
        let mode = if self.verbatim {
            PlanMode::Verbatim
        } else {
            PlanMode::Collapsed
        };
        let config = SessionConfig::parse(&self.length, &self.target)
            .context("invalid search inputs")?
            .with_plan_mode(mode)
            .with_max_length(self.max_length);
        Session::from_config(config).context("failed to build session")
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Walk(args) => run_walk(&args.session()?),
        Commands::Step(args) => run_step(args.session()?)?,
        Commands::Tree {
            length,
            spacing,
            level_step,
        } => run_tree(&length, LayoutConfig { spacing, level_step })?,
    }

    Ok(())
}

fn run_walk(session: &Session) {
    println!("array:  {}", session.array());
    match session.array().position_of(session.target()) {
        Some(index) => println!("target: {} (present at index {})", session.target(), index),
        None => println!("target: {} (absent)", session.target()),
    }
    println!();
    let layout = display_layout(session);
    for highlight in session.highlights() {
        print_highlight(session, &layout, &highlight);
        println!();
    }
}

fn run_step(mut session: Session) -> Result<()> {
    println!("array:  {}", session.array());
    println!("target: {}", session.target());
    println!("commands: n(ext) p(rev) f(irst) l(ast) <step number> q(uit)");
    println!();
    let layout = display_layout(&session);
    print_highlight(&session, &layout, &session.current_highlight());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        write!(stdout, "> ").context("failed to write prompt")?;
        stdout.flush().context("failed to flush prompt")?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).context("failed to read command")? == 0 {
            break;
        }

        match line.trim() {
            "q" | "quit" => break,
            "" | "n" | "next" => {
                if !session.advance() {
                    println!("Already at the last step");
                    continue;
                }
            }
            "p" | "prev" => {
                if !session.retreat() {
                    println!("Already at the first step");
                    continue;
                }
            }
            "f" | "first" => session.rewind(),
            "l" | "last" => session.fast_forward(),
            other => match other.parse::<usize>() {
                Ok(n) if n >= 1 => {
                    session.jump_to(n - 1);
                }
                _ => {
                    println!("unknown command: {}", other);
                    continue;
                }
            },
        }

        print_highlight(&session, &layout, &session.current_highlight());
    }

    Ok(())
}

fn run_tree(length: &str, layout: LayoutConfig) -> Result<()> {
    let config = SessionConfig::parse(length, "0")
        .context("invalid tree length")?
        .with_layout(layout);
    let session = Session::from_config(config).context("failed to build session")?;
    let Some(layout) = session.layout() else {
        return Ok(());
    };

    println!("height: {}", session.tree().height());
    for position in layout.positions() {
        println!(
            "index {:>3}  value {:>4}  depth {}  x {:>8.3}  y {:>6.1}",
            position.index, position.value, position.depth, position.x, position.y
        );
    }
    for edge in layout.edges() {
        println!("edge {} -> {}", edge.parent, edge.child);
    }
    println!();
    print!("{}", render_tree(session.tree().len(), layout, None));
    Ok(())
}

/// Layout stored on the session, or the default one computed once
fn display_layout(session: &Session) -> TreeLayout {
    match session.layout() {
        Some(layout) => layout.clone(),
        None => session.tree().layout(&LayoutConfig::default()),
    }
}

fn print_highlight(session: &Session, layout: &TreeLayout, highlight: &Highlight) {
    let step = &session.steps()[highlight.step];
    println!(
        "step {}/{}  window {}",
        highlight.step + 1,
        highlight.total_steps,
        step
    );
    println!("  {}", render_strip(session, highlight));

    for line in render_tree(session.tree().len(), layout, highlight.probed_index).lines() {
        println!("  {}", line);
    }
    println!("  {}", highlight.outcome);
}

/// Array strip: `[v]` probed, `(v)` excluded, ` v ` in the window
fn render_strip(session: &Session, highlight: &Highlight) -> String {
    session
        .array()
        .iter()
        .enumerate()
        .map(|(i, v)| {
            if highlight.probed_index == Some(i) {
                format!("[{}]", v)
            } else if highlight.is_excluded(i) {
                format!("({})", v)
            } else {
                format!(" {} ", v)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// One text row per tree level, columns taken from the layout x
fn render_tree(len: usize, layout: &TreeLayout, active: Option<usize>) -> String {
    const CELL: usize = 4;

    let height = layout.positions().iter().map(|p| p.depth + 1).max().unwrap_or(0);
    let width = (len * 2 + 1) * CELL;
    let min_x = layout
        .positions()
        .iter()
        .map(|p| p.x)
        .fold(f64::INFINITY, f64::min);
    let max_x = layout
        .positions()
        .iter()
        .map(|p| p.x)
        .fold(f64::NEG_INFINITY, f64::max);
    let span = (max_x - min_x).max(f64::EPSILON);

    let mut rows = vec![vec![' '; width + CELL]; height];
    for position in layout.positions() {
        let column = ((position.x - min_x) / span * (width - CELL) as f64).round() as usize;
        let label = if active == Some(position.index) {
            format!("*{}", position.value)
        } else {
            position.value.to_string()
        };
        for (offset, ch) in label.chars().enumerate() {
            if let Some(cell) = rows[position.depth].get_mut(column + offset) {
                *cell = ch;
            }
        }
    }

    rows.into_iter()
        .map(|row| {
            let line: String = row.into_iter().collect();
            format!("{}\n", line.trim_end())
        })
        .collect()
}
