use std::io::Write;

use crate::{find_repo, Cli, Result};

use clap::{App, Arg, ArgMatches, SubCommand};

pub(crate) fn subcommand<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("rev-parse")
        .about("Show paths of the enclosing repository")
        .arg(
            Arg::with_name("show-toplevel")
                .long("show-toplevel")
                .help("Show the top-level directory of the working tree (default)"),
        )
        .arg(
            Arg::with_name("git-dir")
                .long("git-dir")
                .help("Show the path to the .git directory"),
        )
}

pub(crate) fn run(cli: &mut Cli, args: &ArgMatches) -> Result<()> {
    let repo = find_repo::from_path(cli.resolve("."))?;

    let git_dir = args.is_present("git-dir");
    let toplevel = args.is_present("show-toplevel") || !git_dir;

    if toplevel {
        writeln!(cli, "{}", repo.work_dir().display())?;
    }
    if git_dir {
        writeln!(cli, "{}", repo.git_dir().display())?;
    }

    Ok(())
}
