use std::io::Write;

use wordpair::{Tokenizer, training::BinaryPairVocabTrainerOptions};

use crate::{input_output::OutputArgs, logging::LogArgs};

/// Args for the train command.
#[derive(clap::Args, Debug)]
pub struct TrainArgs {
    /// Input text file (UTF-8).
    file: String,

    #[clap(flatten)]
    pub logging: LogArgs,

    /// Target vocab size; must be >= 256.
    #[arg(long, default_value = "1000")]
    vocab_size: usize,

    /// Report every merge as it is learned.
    #[arg(long)]
    report_merges: bool,

    #[command(flatten)]
    output: OutputArgs,
}

impl TrainArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        log::info!("Reading: {}", self.file);
        let text = std::fs::read_to_string(&self.file)?;

        log::info!("Training Tokenizer...");
        let options = BinaryPairVocabTrainerOptions::new(self.vocab_size)
            .with_verbose(self.report_merges);
        let mut tokenizer: Tokenizer<u32> = Tokenizer::new();
        let trained = tokenizer.train_with_options(&text, options)?;

        log::info!(
            "Vocabulary Size: {}; {} bytes -> {} tokens",
            tokenizer.vocab_size(),
            text.len(),
            trained.len()
        );

        let tokens = tokenizer.encode(&text);
        if tokens != trained {
            return Err("encoding the training text disagrees with training".into());
        }
        if tokenizer.decode(&tokens)? != text {
            return Err("decode(encode(text)) does not reproduce the training text".into());
        }
        log::info!("Round trip OK");

        if let Some(path) = &self.output.output {
            log::info!("output: {}", path);
        }
        let mut writer = self.output.open_writer()?;
        for ((a, b), token) in tokenizer.merges().iter() {
            writeln!(writer, "({a}, {b}) -> {token}")?;
        }
        writer.flush()?;

        Ok(())
    }
}
