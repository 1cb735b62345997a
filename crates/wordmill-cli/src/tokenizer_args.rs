use wordmill::{RegexTokenizer, TextTokenizer, WhitespaceTokenizer};

/// Tokenizer selection arg group.
///
/// Defaults to the [`RegexTokenizer`] word pattern.
#[derive(clap::Args, Debug)]
#[group(required = false, multiple = false)]
pub struct TokenizerArgs {
    /// Token regex; each match is a token.
    #[arg(long)]
    pattern: Option<String>,

    /// Split on whitespace only.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    whitespace: bool,
}

impl TokenizerArgs {
    /// Build the selected tokenizer.
    pub fn build_tokenizer(&self) -> Result<Box<dyn TextTokenizer>, Box<dyn std::error::Error>> {
        if self.whitespace {
            return Ok(Box::new(WhitespaceTokenizer));
        }
        Ok(match &self.pattern {
            Some(pattern) => {
                log::debug!("token pattern: {pattern}");
                Box::new(RegexTokenizer::from_pattern(pattern.as_str())?)
            }
            None => Box::new(RegexTokenizer::default()),
        })
    }
}
