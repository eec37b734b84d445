// src/collect.rs
use std::error::Error;

use log::{error, info};

use crate::{
    config::options::FetchOptions,
    core::Credentials,
    model::MatchRecord,
    progress::Progress,
    specs,
};

/// Fetch one event's finished matches from the API.
/// Credentials come from the environment (or `.env`).
pub fn collect_matches(
    opts: &FetchOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<MatchRecord>, Box<dyn Error>> {
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Fetching {} {} ({})…", opts.season, opts.event_code, opts.level));
    }

    let result = Credentials::from_env().and_then(|creds| specs::matches::fetch(opts, &creds));

    let bundle = match result {
        Ok(b) => b,
        Err(e) => {
            error!("Fetch: {e}");
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("Fetch failed: {e}"));
                p.finish();
            }
            return Err(e.into());
        }
    };

    info!(
        "Fetch: {} {} → {} matches ({} unscored, {} incomplete)",
        opts.season,
        opts.event_code,
        bundle.records.len(),
        bundle.unscored,
        bundle.incomplete
    );

    if let Some(p) = progress.as_deref_mut() {
        p.begin(bundle.records.len());
        p.finish();
    }

    Ok(bundle.records)
}
