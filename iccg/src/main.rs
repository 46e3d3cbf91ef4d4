// ICCG: Interactive shell for checking CCG derivations.
// Copyright (C) 2018 to 2019 Charles Johnson
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! # Interactive shell for checking CCG derivations.
//!
//! `iccg [--japanese] [TREEBANK]` starts a read-eval-print loop. Each line is
//! either a pair of categories to combine, an AUTO derivation to check, or one
//! of the directives `:grammar english|japanese`, `:load PATH`, `:save PATH`
//! and `:check`.

use ccg::{Language, Session};
use linefeed::{Interface, ReadResult};
use std::{env, io};

fn main() -> io::Result<()> {
    if let Err(error) = simple_logger::init_with_level(log::Level::Warn) {
        eprintln!("{}", error);
    }
    let reader = Interface::new("ICCG")?;
    println!("ICCG Copyright (C) 2018 to 2019 Charles Johnson.\nThis program comes with ABSOLUTELY NO WARRANTY.\nThis is free software, and you are welcome to redistribute it under certain\nconditions; visit https://www.gnu.org/licenses/gpl-3.0.en.html for more details.");
    reader.set_prompt(">>> ")?;
    let mut session = Session::new();
    for argument in env::args().skip(1) {
        if argument == "--japanese" {
            session.set_language(Language::Japanese);
        } else {
            match session.load(&argument) {
                Ok(report) => println!("{}", report),
                Err(error) => println!("{}", error),
            }
        }
    }
    while let ReadResult::Input(input) = reader.read_line()? {
        if !input.trim().is_empty() {
            reader.add_history_unique(input.clone());
        }
        println!("{}", session.execute(&input));
    }
    println!("Exiting");
    Ok(())
}
