use clap::Parser;

/// Wordpedia - definitions, origins, usage and ranked synonyms for any word
#[derive(Parser, Debug)]
#[command(name = "wordpedia")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Profile to load from the profiles folder
    #[arg(long, default_value = "main")]
    pub profile: String,

    /// Look up one word and exit
    #[arg(long)]
    pub word: Option<String>,

    /// Copy the main profile to a new profile and exit
    #[arg(long, value_name = "NAME")]
    pub new_profile: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,
}
