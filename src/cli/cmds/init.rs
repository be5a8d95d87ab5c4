use std::io::Write;

use crate::{Cli, Result};

use clap::{App, Arg, ArgMatches, SubCommand};
use minigit::repo::OnDisk;

pub(crate) fn subcommand<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("init")
        .about("Create an empty git repository")
        .arg(
            Arg::with_name("directory")
                .help("The directory to create (defaults to the current directory)"),
        )
}

pub(crate) fn run(cli: &mut Cli, init_matches: &ArgMatches) -> Result<()> {
    let dir = init_matches.value_of("directory").unwrap_or(".");
    let path = cli.resolve(dir);

    let repo = OnDisk::init(&path)?;

    writeln!(
        cli,
        "Initialized empty Git repository in {}",
        repo.git_dir().display()
    )?;

    Ok(())
}
