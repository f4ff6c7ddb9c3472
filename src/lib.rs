// SPDX-FileCopyrightText: 2022 Hewlett-Packard Development Company, L.P.
//
// SPDX-License-Identifier: GPL-3.0-only

use std::io::{self, Write};

use uni_search_client::{Api, Query};

pub mod cli;
pub mod report;

/// Fixed queries run when no arguments are given.
pub fn scenarios() -> [Query; 3] {
    [
        Query::default().name("Amrita"),
        Query::default().country("India"),
        Query::default()
            .name("Technology")
            .country("United States"),
    ]
}

/// Run one search and print its summary. Request failures are printed, not
/// returned; only errors writing to `out` are.
pub fn run_query<W: Write>(api: &Api, query: &Query, out: &mut W) -> io::Result<()> {
    report::write_header(out, query)?;
    let result = api.search(query);
    if let Err(err) = &result {
        log::warn!("search with {} failed: {}", query, err);
    }
    report::write_result(out, &result)?;
    out.flush()
}

pub fn run_queries<W: Write>(api: &Api, queries: &[Query], out: &mut W) -> io::Result<()> {
    for query in queries {
        run_query(api, query, out)?;
    }
    Ok(())
}
