use std::io::{BufRead, Write};

use wordmill::{VocabIndex, encoders::parse_id_line};

use crate::{
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
    vocab_args::VocabArgs,
};

/// Args for the decode command.
#[derive(clap::Args, Debug)]
pub struct DecodeArgs {
    #[command(flatten)]
    vocab: VocabArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    #[clap(flatten)]
    pub(super) logging: LogArgs,
}

impl DecodeArgs {
    /// Run the decode command; logging is set up by the caller.
    pub fn execute(&self) -> Result<(), Box<dyn std::error::Error>> {
        let index = self.vocab.load_index()?;

        let reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        decode_lines(&index, reader, &mut writer)?;
        writer.flush()?;

        Ok(())
    }
}

/// Decode id lines into space-joined token lines.
fn decode_lines<R: BufRead, W: Write + ?Sized>(
    index: &VocabIndex<u32>,
    reader: R,
    writer: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    for line in reader.lines() {
        let ids: Vec<u32> = parse_id_line(&line?)?;
        let tokens = index.try_decode(&ids)?;
        writeln!(writer, "{}", tokens.join(" "))?;
    }
    Ok(())
}
