// src/config/consts.rs

// Net config
pub const HOST: &str = "www.basketball-reference.com";
pub const NET_TIMEOUT_SECS: u64 = 15;

// Rate limiting: pause after every N requests, for this many seconds.
pub const COOLDOWN_EVERY: u32 = 30;
pub const COOLDOWN_SECS: u64 = 60;

// Local cache
pub const STORE_DIR: &str = ".store";

// Output
pub const DEFAULT_OUT_DIR: &str = "data";
pub const DISTS_MADE_FILE: &str = "dists.csv";
pub const DISTS_MISSED_FILE: &str = "dists_missed.csv";

// Density estimation over the halfcourt pixel frame.
// The bounding box is fixed (not the data's min/max) so the visual frame
// stays stable across entities with different shot spreads.
pub const KDE_BANDWIDTH: f64 = 30.0;
pub const GRID_RES: usize = 200;
pub const COURT_X_MIN: f64 = -10.0;
pub const COURT_X_MAX: f64 = 485.0;
pub const COURT_Y_MIN: f64 = -15.0;
pub const COURT_Y_MAX: f64 = 440.0;

// Scatter canvas (halfcourt backdrop is 500x472 at 1.2x).
pub const CANVAS_W: f64 = 600.0;
pub const CANVAS_H: f64 = 566.4;

// Court geometry in the source image's pixel frame. The chart is ~500 px
// across for a 50 ft court width; the hoop sits centered, 5.25 ft from
// the baseline. Used only when a tooltip distance is unavailable.
pub const PX_PER_FT: f64 = 10.0;
pub const HOOP_X_PX: f64 = 250.0;
pub const HOOP_Y_PX: f64 = 52.5;

/* ---------------- URL templates ---------------- */

/// Season schedule/results page for one team.
pub fn schedule_path(team: &str, season: &str) -> String {
    format!("/teams/{team}/{season}_games.html")
}

/// Shot chart page for one match.
pub fn shot_chart_path(match_id: &str) -> String {
    format!("/boxscores/shot-chart/{match_id}.html")
}

/// Season shooting page for one player.
pub fn player_shooting_path(player: &str, season: &str) -> String {
    let initial = player.chars().next().unwrap_or('x');
    format!("/players/{initial}/{player}/shooting/{season}")
}
