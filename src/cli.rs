//! CLI argument parsing with clap.

use clap::Parser;

/// Prompt used when none is given on the command line.
pub const DEMO_PROMPT: &str = "A cybersecurity professional analyzing data on holographic \
                               screens in a futuristic command center";

/// Image generation demo: generate with the `OpenAI` Images API and download the results.
#[derive(Parser, Debug)]
#[command(name = "dalle-demo", version, about)]
pub struct Cli {
    /// Text prompt describing the desired image (defaults to the demo prompt).
    #[arg(conflicts_with = "prompt_file")]
    pub prompt: Option<String>,

    /// Path to a file containing the prompt text.
    #[arg(short = 'p', long, conflicts_with = "prompt")]
    pub prompt_file: Option<String>,

    /// Model name or short alias (dalle3, dalle2).
    #[arg(short, long)]
    pub model: Option<String>,

    /// Image size: 1024x1024, 1792x1024, 1024x1792.
    #[arg(short, long)]
    pub size: Option<String>,

    /// Quality: standard, hd.
    #[arg(short, long)]
    pub quality: Option<String>,

    /// Number of images to generate (1-10).
    #[arg(short = 'n', long)]
    pub count: Option<u32>,

    /// Prefix for downloaded files; image `i` is saved as `<prefix>_<i>.png`.
    #[arg(short, long)]
    pub output_prefix: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Verbose diagnostics on stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Resolve the prompt from the positional argument, the file flag, or
    /// fall back to the demo prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt file cannot be read.
    pub fn resolve_prompt(&self) -> Result<String, std::io::Error> {
        if let Some(ref text) = self.prompt {
            Ok(text.clone())
        } else if let Some(ref path) = self.prompt_file {
            Ok(std::fs::read_to_string(path)?.trim().to_string())
        } else {
            Ok(DEMO_PROMPT.to_string())
        }
    }
}
