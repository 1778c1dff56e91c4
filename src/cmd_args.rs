use std::ffi::OsString;

pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Settings file. Defaults to $CALCLINE_CONFIG_PATH or ~/.calcline/config.
    #[clap(short = 'c', long, help = "settings file path")]
    config: Option<String>,

    /// Run a whitespace-separated key script instead of the interactive keypad,
    /// e.g. "1 . 5 ± Backspace". Names like Backspace/Enter/Delete/Insert are
    /// keys, single characters are key presses, anything else is a button label.
    #[clap(
        short = 'k',
        long,
        allow_hyphen_values = true,
        help = "key script to run headless"
    )]
    keys: Option<String>,

    /// Print the final state as JSON (with --keys)
    #[clap(long, help = "print final state as JSON")]
    json: bool,

    /// Do not treat the Insert key as ±
    #[clap(long, help = "disable Insert as negate")]
    no_insert_negate: bool,

    /// Maximum characters accepted while typing a number
    #[clap(long, help = "maximum entry length")]
    max_chars: Option<usize>,

    /// Write logs to this file
    #[clap(long, help = "log file path")]
    log_file: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    config: Option<String>,
    keys: Option<String>,
    json: bool,
    no_insert_negate: bool,
    max_chars: Option<usize>,
    log_file: Option<String>,
}

impl From<ClapArgs> for CommandLineArgs {
    fn from(args: ClapArgs) -> Self {
        Self {
            config: args.config,
            keys: args.keys,
            json: args.json,
            no_insert_negate: args.no_insert_negate,
            max_chars: args.max_chars,
            log_file: args.log_file,
        }
    }
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        ClapArgs::parse().into()
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::parse_from(itr).into()
    }

    pub fn config(&self) -> Option<&str> {
        self.config.as_deref()
    }

    pub fn keys(&self) -> Option<&str> {
        self.keys.as_deref()
    }

    pub fn json(&self) -> bool {
        self.json
    }

    pub fn no_insert_negate(&self) -> bool {
        self.no_insert_negate
    }

    pub fn max_chars(&self) -> Option<usize> {
        self.max_chars
    }

    pub fn log_file(&self) -> Option<&str> {
        self.log_file.as_deref()
    }
}
