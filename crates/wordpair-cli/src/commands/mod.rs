mod train;

/// Subcommands for wpair
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Train a tokenizer on a text file, check it, and print its merges.
    Train(train::TrainArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Train(cmd) => cmd.run(),
        }
    }
}
