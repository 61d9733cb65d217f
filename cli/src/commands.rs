use banwatch_common::config::DEFAULT_WINDOW_HOURS;
use clap::Parser;

#[derive(Parser)]
#[command(name = "banwatch")]
#[command(version)]
#[command(about = "Summarizes fail2ban and ufw activity from the journal to an ntfy topic.")]
pub struct CommandLine {
    /// Hours of journal history to scan
    #[arg(value_name = "HOURS", default_value_t = DEFAULT_WINDOW_HOURS)]
    pub hours: u64,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
