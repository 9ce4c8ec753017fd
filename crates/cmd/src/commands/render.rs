// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::common::SiteContext;
use anyhow::Result;

/// Render command - prints the HTML for a single path
pub fn render_command<F>(ctx: &SiteContext, path: &str, mut handler: F) -> Result<()>
where
    F: FnMut(&str),
{
    let config = ctx.load_config()?;
    let html = sitegen::render_path(&config, path)?;
    handler(&html);
    Ok(())
}
