// src/scrape/scrape.rs
//
// Sequential ingestion loops. One request in flight at a time; the only
// suspension point is the cooldown pause after every Nth request.

use std::error::Error;

use crate::{
    config::consts::{player_shooting_path, schedule_path, shot_chart_path},
    config::options::ScrapeOptions,
    core::net,
    progress::Progress,
    shots::ShotCollection,
    specs::shot_chart::{self, Category},
    specs::schedule,
    store,
};

use super::rate_limit::{thread_sleep, CooldownGate};

/// Collect every listed team, one entity at a time. A failed entity is
/// logged and skipped; it never aborts the rest of the batch.
pub fn collect_teams(
    teams: &[&str],
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<ShotCollection>, Box<dyn Error>> {
    let mut out = Vec::with_capacity(teams.len());
    for &team in teams {
        if let Some(p) = progress.as_deref_mut().map(|p| p as &mut dyn Progress) {
            p.log(&format!("Collecting {team}…"));
        }
        match collect_team_shots(team, opts, progress.as_deref_mut().map(|p| p as &mut dyn Progress)) {
            Ok(col) => out.push(col),
            Err(e) => {
                loge!("{team}: {e}");
                if let Some(p) = progress.as_deref_mut().map(|p| p as &mut dyn Progress) {
                    p.item_failed(team, &e.to_string());
                }
            }
        }
    }
    Ok(out)
}

/// Collect one team: fetch its season schedule, then every match's shot
/// chart in schedule order, folding all events into one collection.
pub fn collect_team_shots(
    team: &str,
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<ShotCollection, Box<dyn Error>> {
    let mut col = ShotCollection::new(team);

    let resp = net::http_get(&schedule_path(team, &opts.season), opts.timeout())?;
    if !resp.is_ok() {
        // skipped entity, not an error; the rest of the batch proceeds
        loge!("{team}: schedule skipped (HTTP {})", resp.status);
        if let Some(p) = progress.as_deref_mut().map(|p| p as &mut dyn Progress) {
            p.item_failed(team, &format!("HTTP {}", resp.status));
        }
        return Ok(col);
    }

    let match_ids = schedule::parse_doc(&resp.body)?;
    logf!("{team}: {} matches scheduled", match_ids.len());

    if let Some(p) = progress.as_deref_mut().map(|p| p as &mut dyn Progress) {
        p.begin(match_ids.len());
    }

    let mut gate = CooldownGate::new(opts.cooldown_every, opts.cooldown());
    for id in &match_ids {
        fetch_chart_into(
            &mut col,
            &shot_chart_path(id),
            Category::Match,
            id,
            Some(id),
            opts,
            progress.as_deref_mut().map(|p| p as &mut dyn Progress),
        );
        gate.tick(&mut thread_sleep);
    }

    store::save_dist_series(&opts.out_dir, &col)?;

    if let Some(p) = progress.as_deref_mut().map(|p| p as &mut dyn Progress) {
        p.finish();
    }
    Ok(col)
}

/// Collect every listed player. One page per player-season; the cooldown
/// gate spans the whole list.
pub fn collect_players(
    players: &[&str],
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<ShotCollection>, Box<dyn Error>> {
    if let Some(p) = progress.as_deref_mut().map(|p| p as &mut dyn Progress) {
        p.begin(players.len());
    }

    let mut out = Vec::with_capacity(players.len());
    let mut gate = CooldownGate::new(opts.cooldown_every, opts.cooldown());

    for &player in players {
        match collect_player_shots(player, opts, progress.as_deref_mut().map(|p| p as &mut dyn Progress)) {
            Ok(col) => out.push(col),
            Err(e) => {
                loge!("{player}: {e}");
                if let Some(p) = progress.as_deref_mut().map(|p| p as &mut dyn Progress) {
                    p.item_failed(player, &e.to_string());
                }
            }
        }
        gate.tick(&mut thread_sleep);
    }

    if let Some(p) = progress.as_deref_mut().map(|p| p as &mut dyn Progress) {
        p.finish();
    }
    Ok(out)
}

/// Collect one player's season shooting page.
pub fn collect_player_shots(
    player: &str,
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<ShotCollection, Box<dyn Error>> {
    let mut col = ShotCollection::new(player);
    fetch_chart_into(
        &mut col,
        &player_shooting_path(player, &opts.season),
        Category::Player,
        player,
        None,
        opts,
        progress.as_deref_mut().map(|p| p as &mut dyn Progress),
    );
    store::save_dist_series(&opts.out_dir, &col)?;
    Ok(col)
}

/* ---------------- shared page step ---------------- */

/// Fetch one shot-chart page, parse it and fold the events into `col`,
/// persisting the page's coordinate arrays. Non-200 responses and
/// malformed pages are skipped; transport errors are too (the batch
/// must outlive one bad page).
fn fetch_chart_into(
    col: &mut ShotCollection,
    path: &str,
    category: Category,
    source_id: &str,
    file_tag: Option<&str>,
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) {
    let resp = match net::http_get(path, opts.timeout()) {
        Ok(r) if r.is_ok() => r,
        Ok(r) => {
            loge!("{source_id}: skipped (HTTP {})", r.status);
            if let Some(p) = progress.as_deref_mut().map(|p| p as &mut dyn Progress) {
                p.item_failed(source_id, &format!("HTTP {}", r.status));
            }
            return;
        }
        Err(e) => {
            loge!("{source_id}: fetch failed: {e}");
            if let Some(p) = progress.as_deref_mut().map(|p| p as &mut dyn Progress) {
                p.item_failed(source_id, &e.to_string());
            }
            return;
        }
    };

    let page = match shot_chart::parse_doc(&resp.body, category, source_id, true) {
        Ok(page) => page,
        Err(e) => {
            loge!("{source_id}: {e}");
            if let Some(p) = progress.as_deref_mut().map(|p| p as &mut dyn Progress) {
                p.item_failed(source_id, &e.to_string());
            }
            return;
        }
    };

    for w in &page.warnings {
        loge!("{w}");
        if let Some(p) = progress.as_deref_mut().map(|p| p as &mut dyn Progress) {
            p.log(w);
        }
    }

    if let Err(e) = store::save_shot_arrays(&opts.out_dir, col.entity(), file_tag, &page.events) {
        loge!("{source_id}: write failed: {e}");
    }

    col.extend(page.events);
    if let Some(p) = progress.as_deref_mut().map(|p| p as &mut dyn Progress) {
        p.item_done(source_id);
    }
}
