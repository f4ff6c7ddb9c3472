// SPDX-FileCopyrightText: 2022 Hewlett-Packard Development Company, L.P.
//
// SPDX-License-Identifier: MPL-2.0

use std::env;

fn main() {
    let mut args = env::args().skip(1);
    let query = uni_search_client::Query::new(args.next().as_deref(), args.next().as_deref());
    let api = uni_search_client::Api::new().unwrap();
    let response = api.search(&query).unwrap();
    println!("{}: {} results", query, response.records.len());
    for record in &response.records {
        println!("{:?}", record.get("name"));
    }
}
