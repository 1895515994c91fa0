mod commands;
mod terminal;

use commands::{CommandLine, Commands, calc, sweep};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose, commands.quiet);
    let color = !commands.no_color && console::colors_enabled();
    colored::control::set_override(color);

    match commands.command {
        Commands::Sweep { cidr, probe } => {
            print::header("starting ping sweep");
            let cfg = probe.to_config(!color)?;
            sweep::sweep_cidr(&cidr, probe.method, &cfg).await
        }
        Commands::Range { start, end, probe } => {
            print::header("starting ping sweep");
            let cfg = probe.to_config(!color)?;
            sweep::sweep_between(&start, &end, probe.method, &cfg).await
        }
        Commands::Calc { cidr } => calc::calc(&cidr),
    }
}
