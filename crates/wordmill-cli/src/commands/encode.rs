use std::io::Write;

use wordmill::{
    TokenEncoder,
    TokenEncoderOptions,
    encoders::encode_lines,
    vocab::DEFAULT_PROGRESS_INTERVAL,
};

use crate::{
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
    tokenizer_args::TokenizerArgs,
    vocab_args::VocabArgs,
};

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    #[command(flatten)]
    vocab: VocabArgs,

    /// Replace digits with `0` before lookup; match the vocabulary build.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    normalize_digits: bool,

    #[command(flatten)]
    tokenizer: TokenizerArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    #[clap(flatten)]
    pub(super) logging: LogArgs,
}

impl EncodeArgs {
    /// Run the encode command; logging is set up by the caller.
    pub fn execute(&self) -> Result<(), Box<dyn std::error::Error>> {
        let encoder = TokenEncoder::new(
            self.vocab.load_index()?,
            self.tokenizer.build_tokenizer()?,
            TokenEncoderOptions::default().with_normalize_digits(self.normalize_digits),
        );

        let reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        let count = encode_lines(&encoder, reader, &mut writer, DEFAULT_PROGRESS_INTERVAL)?;
        writer.flush()?;
        log::info!("encoded {count} lines");

        Ok(())
    }
}
