// SPDX-FileCopyrightText: 2022 Hewlett-Packard Development Company, L.P.
//
// SPDX-License-Identifier: GPL-3.0-only

use anyhow::Context;
use std::io;
use uni_search_client::Api;

pub fn run() -> anyhow::Result<()> {
    let api = Api::new().context("Failed to create HTTP client")?;
    crate::run_queries(&api, &crate::scenarios(), &mut io::stdout().lock())
        .context("Failed to write to stdout")
}
