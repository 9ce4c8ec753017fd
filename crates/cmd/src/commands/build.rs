// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::common::SiteContext;
use anyhow::{Context, Result};
use std::path::Path;

/// Build command - renders every page of the site into `output_dir`
pub fn build_command<F>(ctx: &SiteContext, output_dir: &Path, mut handler: F) -> Result<()>
where
    F: FnMut(&str),
{
    diagnostics::debug!("build_command called with {dir}", dir: output_dir.display().to_string());

    let config = ctx.load_config()?;
    let report = sitegen::generate_site(&config, output_dir)
        .with_context(|| format!("Failed to generate site into {}", output_dir.display()))?;

    handler(&format!(
        "Generated {} pages in {}",
        report.pages,
        report.output_dir.display()
    ));
    Ok(())
}
