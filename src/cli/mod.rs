// SPDX-FileCopyrightText: 2022 Hewlett-Packard Development Company, L.P.
//
// SPDX-License-Identifier: GPL-3.0-only

mod scenarios;
mod search;

use std::{env, process};

pub fn run() -> anyhow::Result<()> {
    let mut args = env::args();
    let _ = args.next();
    let cmd = args.next();
    match cmd.as_deref() {
        None | Some("scenarios") => scenarios::run(),
        Some("search") => search::run(args),
        _ => {
            eprintln!("Usage: uni-search [scenarios|search [--name <name>] [--country <country>] [--endpoint <url>]]");
            process::exit(1);
        }
    }
}
