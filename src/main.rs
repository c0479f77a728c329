use clap::Parser;
use miette::Result;
use vitae::cli::{Cli, Commands, Reporter};

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    // Without this, piping to `head`, `grep -q`, etc. causes a panic on broken pipe.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    // Install miette's fancy error handler for beautiful diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let reporter = Reporter::new(cli.global.quiet, cli.global.verbose);

    match cli.command {
        Commands::Generate(args) => vitae::cli::commands::generate::run(args, &reporter),
        Commands::Validate(args) => vitae::cli::commands::validate::run(args, &reporter),
        Commands::Profiles(args) => vitae::cli::commands::profiles::run(args, &reporter),
        Commands::Init(args) => vitae::cli::commands::init::run(args, &reporter),
        Commands::Completions(args) => vitae::cli::commands::completions::run(args),
    }
}
