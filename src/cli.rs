use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "deskmate")]
#[command(about = "Chat assistant that can look up weather, news and stocks, and send messages", long_about = None)]
pub struct Args {
    #[arg(
        long = "api-endpoint",
        help = "Custom API base URL (e.g., http://localhost:11434/v1)"
    )]
    pub api_endpoint: Option<String>,

    #[arg(short = 'm', long = "model", help = "Model to use for this run")]
    pub model: Option<String>,

    #[arg(long = "no-tools", help = "Disable tool calling for this run")]
    pub no_tools: bool,

    #[arg(short = 'v', long = "verbose", help = "Print diagnostic output")]
    pub verbose: bool,

    #[arg(help = "Question to send; starts the interactive shell when omitted")]
    pub query: Vec<String>,
}
