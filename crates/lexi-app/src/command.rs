//! Parsing of the lines typed at the prompt.

use clap::{Parser, Subcommand, ValueEnum};
use lexi_api::OAuthIntent;
use lexi_vocabulary::SortOrder;

#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_version_flag = true)]
struct CommandLine {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Look a word up in the dictionary
    Lookup { word: String },
    /// List the captions of a video
    Captions {
        video: String,
        #[arg(long)]
        lang: Option<String>,
    },
    /// Most frequent words in a video's captions
    Vocab {
        video: String,
        #[arg(long)]
        lang: Option<String>,
        #[arg(long, default_value_t = 20)]
        top: u32,
    },
    /// Load a video's captions and start playback
    Play {
        video: String,
        /// Start position in seconds
        #[arg(long, default_value_t = 0.0)]
        from: f64,
        #[arg(long)]
        lang: Option<String>,
    },
    Pause,
    Resume,
    /// Jump to a position in seconds
    Seek {
        #[arg(allow_negative_numbers = true)]
        seconds: f64,
    },
    /// Words of the active caption with their estimated times
    Words,
    /// Click a word of the current caption
    Click {
        word: String,
        /// Caption to use instead of the active one
        #[arg(long)]
        index: Option<usize>,
    },
    /// Save a word to your vocabulary
    Save {
        word: String,
        /// Defaults to the loaded video
        #[arg(long)]
        video: Option<String>,
    },
    /// List saved words
    Saved {
        #[arg(long)]
        search: Option<String>,
        /// date_desc, date_asc, word_asc or word_desc
        #[arg(long, default_value = "date_desc")]
        sort: SortOrder,
        #[arg(long, default_value_t = 0)]
        skip: usize,
        #[arg(long, default_value_t = 100)]
        limit: usize,
    },
    /// Remove a saved word
    Delete { word: String },
    /// Whether a word is saved
    Check { word: String },
    /// Trending videos
    Trending {
        /// Two-letter region code
        #[arg(long)]
        region: Option<String>,
        #[arg(long)]
        category: Option<String>,
    },
    /// Next page of trending videos
    More,
    /// Most recently liked video on the linked Google account
    LastLiked,
    Login {
        email: String,
        password: String,
    },
    Register {
        email: String,
        first_name: String,
        last_name: String,
        password: String,
    },
    Logout,
    /// Show the signed-in user
    Me,
    /// Print the Google sign-in URL
    Oauth {
        #[arg(value_enum)]
        intent: OAuthArg,
    },
    /// Dictionary cache stats, or `cache clear`
    Cache {
        #[command(subcommand)]
        action: Option<CacheAction>,
    },
    #[command(alias = "exit")]
    Quit,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OAuthArg {
    Login,
    Register,
}

impl From<OAuthArg> for OAuthIntent {
    fn from(arg: OAuthArg) -> Self {
        match arg {
            OAuthArg::Login => OAuthIntent::Login,
            OAuthArg::Register => OAuthIntent::Register,
        }
    }
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheAction {
    Stats,
    Clear,
}

/// Split on whitespace; double quotes group words
pub fn split_args(line: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut in_arg = false;

    for c in line.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                in_arg = true;
            }
            c if c.is_whitespace() && !quoted => {
                if in_arg {
                    args.push(std::mem::take(&mut current));
                    in_arg = false;
                }
            }
            c => {
                current.push(c);
                in_arg = true;
            }
        }
    }
    if in_arg {
        args.push(current);
    }

    args
}

pub fn parse(line: &str) -> Result<Command, clap::Error> {
    CommandLine::try_parse_from(split_args(line)).map(|cl| cl.command)
}
