use clap::Parser;

/// helix — a GPU-accelerated particle visualization.
#[derive(Parser, Debug)]
#[command(name = "helix", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (e.g. "helix=debug").
    #[arg(long)]
    pub log_level: Option<String>,

    /// Sample points from an OBJ model instead of the procedural spiral.
    #[arg(short, long)]
    pub model: Option<String>,

    /// Override the point count.
    #[arg(short = 'n', long)]
    pub points: Option<usize>,
}

pub fn parse() -> Args {
    Args::parse()
}
