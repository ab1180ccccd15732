use crate::controller::{QueryController, SearchAction};
use crate::github::RepositorySearch;
use crate::render;
use std::io::{self, BufRead, Write};

const MORE_HINT: &str = "Type :more to load the next page.";
const HELP: &str = "Type a search term, :more for the next page, :quit to leave.";

enum Input<'a> {
    Search(&'a str),
    More,
    Quit,
    Help,
}

fn parse_line(line: &str) -> Input<'_> {
    match line.trim() {
        ":q" | ":quit" | ":exit" => Input::Quit,
        ":m" | ":more" => Input::More,
        ":h" | ":help" => Input::Help,
        term => Input::Search(term),
    }
}

/// Interactive session: each line is a new search or a command.
pub fn explore(
    backend: &dyn RepositorySearch,
    initial: Option<&str>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    let mut controller = QueryController::new();

    writeln!(out, "\n{}\n", render::TITLE)?;
    writeln!(out, "{}", HELP)?;

    if let Some(term) = initial {
        search(&mut controller, backend, term, out)?;
    }

    let mut line = String::new();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        match parse_line(&line) {
            Input::Quit => break,
            Input::Help => writeln!(out, "{}", HELP)?,
            Input::Search(term) => search(&mut controller, backend, term, out)?,
            Input::More => {
                let shown = controller.session().results().len();
                if controller.run(SearchAction::LoadMore, backend) {
                    render::write_session(out, controller.session(), shown, MORE_HINT)?;
                } else {
                    writeln!(out, "Nothing more to load.")?;
                }
            }
        }
    }

    Ok(())
}

fn search(
    controller: &mut QueryController,
    backend: &dyn RepositorySearch,
    term: &str,
    out: &mut impl Write,
) -> io::Result<()> {
    controller.set_term(term);
    if controller.run(SearchAction::Submit, backend) {
        render::write_session(out, controller.session(), 0, MORE_HINT)?;
    }
    Ok(())
}
