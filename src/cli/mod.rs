use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "dynarray")]
#[command(version, about = "Exercise a DynamicArray and trace its capacity", long_about = None)]
pub struct Cli {
    /// Replay the push/insert/erase/pop/shrink walkthrough
    #[arg(short, long)]
    pub scenario: bool,

    /// Push N elements and report every capacity change
    #[arg(short, long, value_name = "N")]
    pub growth: Option<usize>,

    /// Set verbose level
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
