mod commands;
mod session;
mod terminal;

use std::io;

use commands::CommandLine;
use kennel_common::config::Config;
use kennel_core::Register;
use session::Session;
use terminal::logging;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg: Config = commands.config();

    logging::init_logging(&cfg);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(Register::new(), stdin.lock(), stdout.lock(), cfg);

    session.run()
}
