use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(name = "hermes")]
#[command(about = "Discover RSS, Atom and JSON feeds advertised by a web page")]
#[command(version)]
pub struct Cli {
    /// Page to look for feeds on
    pub url: Option<String>,

    /// Fetch every discovered feed and keep only the ones that validate
    #[arg(long, env = "HERMES_CHECK")]
    pub check: bool,

    /// Probe common feed paths (rss.xml, atom.xml, feed, rss) when no feed is found
    #[arg(long, env = "HERMES_GUESS")]
    pub guess: bool,
}
