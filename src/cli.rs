// src/cli.rs
use std::{env, path::PathBuf};

use crate::config::options::{EntitySelector, PageKind, ScrapeOptions};
use crate::config::rosters;
use crate::progress::Progress;
use crate::scrape;

pub struct Cli {
    pub opts: ScrapeOptions,
    pub list_teams: bool,
    pub list_players: bool,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = parse_cli()?;

    if cli.list_teams {
        for code in rosters::all_teams() {
            println!("{},{}", code, rosters::team_name(code).unwrap_or(""));
        }
        return Ok(());
    }
    if cli.list_players {
        for code in rosters::PLAYERS {
            println!("{},{}", code, rosters::player_name(code).unwrap_or(""));
        }
        return Ok(());
    }

    let codes: Vec<&str> = match (&cli.opts.entities, cli.opts.page) {
        (EntitySelector::All, PageKind::Teams) => rosters::all_teams(),
        (EntitySelector::All, PageKind::Players) => rosters::PLAYERS.to_vec(),
        (EntitySelector::Ids(ids), _) => ids.iter().map(|s| s.as_str()).collect(),
    };

    let mut progress = StderrProgress::default();
    let collections = match cli.opts.page {
        PageKind::Teams => scrape::collect_teams(&codes, &cli.opts, Some(&mut progress))?,
        PageKind::Players => scrape::collect_players(&codes, &cli.opts, Some(&mut progress))?,
    };

    let total: usize = collections.iter().map(|c| c.len()).sum();
    println!(
        "Collected {} shots across {} entities into {}",
        total,
        collections.len(),
        cli.opts.out_dir.display()
    );
    Ok(())
}

fn parse_cli() -> Result<Cli, Box<dyn std::error::Error>> {
    let mut cli = Cli {
        opts: ScrapeOptions::default(),
        list_teams: false,
        list_players: false,
    };

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "--teams" => cli.opts.page = PageKind::Teams,
            "--players" => cli.opts.page = PageKind::Players,
            "--list-teams" => cli.list_teams = true,
            "--list-players" => cli.list_players = true,
            "-s" | "--season" => {
                cli.opts.season = args.next().ok_or("Missing value for --season")?;
            }
            "--ids" => {
                let v = args.next().ok_or("Missing value for --ids")?;
                let ids: Vec<String> = v
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect();
                if ids.is_empty() { return Err("Empty --ids list".into()); }
                cli.opts.entities = EntitySelector::Ids(ids);
            }
            "-o" | "--out" => {
                cli.opts.out_dir = PathBuf::from(args.next().ok_or("Missing output path")?);
            }
            "--cooldown-every" => {
                cli.opts.cooldown_every = args.next().ok_or("Missing value for --cooldown-every")?.parse()?;
            }
            "--cooldown-secs" => {
                cli.opts.cooldown_secs = args.next().ok_or("Missing value for --cooldown-secs")?.parse()?;
            }
            "--timeout-secs" => {
                cli.opts.timeout_secs = args.next().ok_or("Missing value for --timeout-secs")?.parse()?;
            }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(cli)
}

/// Progress sink printing one line per item to stderr.
#[derive(Default)]
struct StderrProgress {
    total: usize,
    done: usize,
}

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }

    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }

    fn item_done(&mut self, id: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {}", self.done, self.total, id);
    }

    fn item_failed(&mut self, id: &str, reason: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {} SKIPPED ({})", self.done, self.total, id, reason);
    }
}
