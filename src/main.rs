use bomplan::cli::{Cli, Commands};
use clap::Parser;
use miette::Result;

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
    let global = cli.global;

    match cli.command {
        Commands::Plan(args) => bomplan::cli::commands::plan::run(args, &global),
        Commands::Components(args) => bomplan::cli::commands::components::run(args, &global),
        Commands::Machines(args) => bomplan::cli::commands::machines::run(args, &global),
        Commands::Show(args) => bomplan::cli::commands::show::run(args, &global),
        Commands::Export(args) => bomplan::cli::commands::export::run(args, &global),
        Commands::Interactive(args) => bomplan::cli::commands::interactive::run(args, &global),
        Commands::Completions(args) => bomplan::cli::commands::completions::run(args),
    }
}
