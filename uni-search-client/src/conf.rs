// SPDX-FileCopyrightText: 2022 Hewlett-Packard Development Company, L.P.
//
// SPDX-License-Identifier: MPL-2.0

use once_cell::sync::Lazy;
use std::{env, fs};

const DEFAULT_ENDPOINT_URL: &str = "http://universities.hipolabs.com";
const CONF_PATH: &str = "/etc/uni-search.conf";
const CONF_PATH_ENV: &str = "UNI_SEARCH_CONF";

#[derive(Debug, Default, serde::Deserialize)]
pub struct UniSearchConf {
    endpoint_url: Option<String>,
    user_agent: Option<String>,
}

impl UniSearchConf {
    pub fn parse(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn endpoint_url(&self) -> &str {
        self.endpoint_url.as_deref().unwrap_or(DEFAULT_ENDPOINT_URL)
    }

    pub fn user_agent(&self) -> String {
        self.user_agent.clone().unwrap_or_else(default_user_agent)
    }
}

fn default_user_agent() -> String {
    concat!("uni-search/", env!("CARGO_PKG_VERSION")).to_string()
}

fn conf_path() -> String {
    env::var(CONF_PATH_ENV).unwrap_or_else(|_| CONF_PATH.to_string())
}

/// Configuration read from `/etc/uni-search.conf`, or the file named by
/// `UNI_SEARCH_CONF`. Read once; falls back to defaults if missing or invalid.
pub fn uni_search_conf() -> &'static UniSearchConf {
    static CONF: Lazy<UniSearchConf> = Lazy::new(|| {
        let path = conf_path();
        let s = match fs::read_to_string(&path) {
            Ok(s) => s,
            Err(_) => {
                return UniSearchConf::default();
            }
        };
        UniSearchConf::parse(&s).unwrap_or_else(|err| {
            log::warn!("Failed to parse `{}`: {}", path, err);
            UniSearchConf::default()
        })
    });
    &CONF
}
