use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io;

pub fn display_banner() {
    println!(r#"
  ____ _ _   _____            _
 / ___(_) |_| ____|_  ___ __ | | ___  _ __ ___
| |  _| | __|  _| \ \/ / '_ \| |/ _ \| '__/ _ \
| |_| | | |_| |___ >  <| |_) | | (_) | | |  __/
 \____|_|\__|_____/_/\_\ .__/|_|\___/|_|  \___|
                       |_|
"#);

    let mut cmd = crate::Cli::command();
    let _ = cmd.print_help();
    println!();
}

pub fn generate_completions(shell: Shell) {
    let mut cmd = crate::Cli::command();
    generate(shell, &mut cmd, "gitexplore", &mut io::stdout());
}
