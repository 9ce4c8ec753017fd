// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::common::SiteContext;
use anyhow::{Context, Result};
use serde::Serialize;

/// One generated page, as printed by `list --json`.
#[derive(Debug, Serialize)]
pub struct ListEntry {
    pub url: String,
    pub output_path: String,
    pub title: String,
}

/// List command - prints every page the site generates
pub fn list_command<F>(ctx: &SiteContext, json: bool, mut handler: F) -> Result<()>
where
    F: FnMut(&str),
{
    let config = ctx.load_config()?;
    let entries: Vec<ListEntry> = sitegen::expand_pages(&config)
        .into_iter()
        .map(|job| ListEntry {
            url: job.url,
            output_path: job.output_path,
            title: job.title,
        })
        .collect();

    if json {
        let out = serde_json::to_string_pretty(&entries).context("Failed to serialize page list")?;
        handler(&out);
    } else {
        for entry in &entries {
            handler(&format!("{}\t{}", entry.url, entry.title));
        }
    }
    Ok(())
}
