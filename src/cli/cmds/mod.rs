use crate::{Cli, Result};

mod config;
mod init;
mod rev_parse;

pub(crate) fn add_subcommands<'a, 'b>(app: clap::App<'a, 'b>) -> clap::App<'a, 'b> {
    app.subcommand(config::subcommand())
        .subcommand(init::subcommand())
        .subcommand(rev_parse::subcommand())
}

pub(crate) fn dispatch(cli: &mut Cli) -> Result<()> {
    let matches = cli.arg_matches.clone();
    // ^^ Ugh. Need an independent copy of matches so we can still pass
    // the Cli struct through to subcommand imps.

    match matches.subcommand() {
        ("config", Some(m)) => config::run(cli, &m),
        ("init", Some(m)) => init::run(cli, &m),
        ("rev-parse", Some(m)) => rev_parse::run(cli, &m),
        _ => unreachable!(),
        // unreachable: Should have exited out with appropriate help or
        // error message if no subcommand was given.
    }
}
