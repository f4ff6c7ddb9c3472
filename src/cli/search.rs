// SPDX-FileCopyrightText: 2022 Hewlett-Packard Development Company, L.P.
//
// SPDX-License-Identifier: GPL-3.0-only

use anyhow::{bail, Context};
use std::io;
use uni_search_client::{Api, Query};

#[derive(Debug, Default, PartialEq)]
struct SearchArgs {
    query: Query,
    endpoint: Option<String>,
}

fn parse_args<I: Iterator<Item = String>>(mut args: I) -> anyhow::Result<SearchArgs> {
    let mut parsed = SearchArgs::default();
    while let Some(arg) = args.next() {
        let slot = match arg.as_str() {
            "--name" => &mut parsed.query.name,
            "--country" => &mut parsed.query.country,
            "--endpoint" => &mut parsed.endpoint,
            _ => bail!("unknown argument `{}`", arg),
        };
        match args.next() {
            Some(value) => *slot = Some(value),
            None => bail!("missing value for `{}`", arg),
        }
    }
    Ok(parsed)
}

pub fn run<I: Iterator<Item = String>>(args: I) -> anyhow::Result<()> {
    let SearchArgs { query, endpoint } = parse_args(args)?;
    let api = match endpoint.as_deref() {
        Some(endpoint) => Api::with_endpoint(endpoint),
        None => Api::new(),
    }
    .context("Failed to create HTTP client")?;
    crate::run_query(&api, &query, &mut io::stdout().lock()).context("Failed to write to stdout")
}
