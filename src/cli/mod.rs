use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[value(alias = "google", alias = "googleai")]
    Gemini,
    #[value(name = "openai", alias = "open-ai")]
    OpenAI,
}

#[derive(Parser, Debug)]
#[command(name = "niche-studio", version, about = "Generate hooks, captions and images for niche social posts")]
pub struct Args {
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[arg(long, value_enum, global = true)]
    pub provider: Option<ProviderKind>,

    #[arg(long, global = true)]
    pub text_model: Option<String>,

    #[arg(long, global = true)]
    pub image_model: Option<String>,

    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Directory for downloads and saved artifacts.
    #[arg(long, global = true)]
    pub out: Option<String>,

    #[arg(long, default_value_t = false, global = true)]
    pub save_request: bool,

    #[arg(long, default_value_t = false, global = true)]
    pub save_response: bool,

    #[arg(long, default_value_t = false, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List available niches.
    Niches,
    /// List available image styles.
    Styles,
    /// List available font styles.
    Fonts,
    /// Generate a hook and short content from a post idea.
    Hook {
        #[arg(long)]
        idea: String,
        #[arg(long)]
        niche: Option<String>,
    },
    /// Generate an image for a niche and post idea.
    Image {
        #[arg(long)]
        niche: String,
        #[arg(long)]
        idea: String,
        #[arg(long)]
        style: Option<String>,
        #[arg(long)]
        hook: Option<String>,
        #[arg(long)]
        content: Option<String>,
        #[arg(long)]
        hook_font: Option<String>,
        #[arg(long)]
        content_font: Option<String>,
        /// Write the image into the output directory.
        #[arg(long, default_value_t = false)]
        download: bool,
    },
    /// Generate a viral caption and hashtags.
    Caption {
        #[arg(long)]
        niche: String,
        #[arg(long)]
        idea: String,
        #[arg(long)]
        hook: Option<String>,
        #[arg(long)]
        content: Option<String>,
        #[arg(long)]
        style: Option<String>,
    },
    /// Suggest an image prompt for a niche.
    Suggest {
        #[arg(long)]
        niche: String,
    },
    /// Interactive session.
    Studio,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_image_subcommand_with_globals() {
        let args = Args::try_parse_from([
            "niche-studio", "--provider", "google", "image",
            "--niche", "web-dev", "--idea", "edge functions", "--style", "cyber-y2k", "--download",
        ])
        .unwrap();
        assert_eq!(args.provider, Some(ProviderKind::Gemini));
        match args.command {
            Command::Image { niche, download, style, hook, .. } => {
                assert_eq!(niche, "web-dev");
                assert!(download);
                assert_eq!(style.as_deref(), Some("cyber-y2k"));
                assert!(hook.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn hook_requires_idea() {
        assert!(Args::try_parse_from(["niche-studio", "hook"]).is_err());
    }
}
