// src/cli.rs
use std::error::Error;
use std::{env, thread, time::Duration};

use crate::api::{Gateway, HttpGateway};
use crate::config::consts::POLL_INTERVAL_MS;
use crate::config::options::{ClubFilter, Criteria, SortDir};
use crate::monitor::{ScrapeMonitor, TickOutcome};

pub enum Command {
    /// List players for the given criteria (default).
    List,
    /// Print collection-wide counts.
    Counts,
    /// Print one player's cards.
    Show(String),
    /// Trigger a scrape and watch it to completion.
    Scrape,
}

pub struct Params {
    pub command: Command,
    pub criteria: Criteria,
    pub base: Option<String>,
}

impl Params {
    pub fn new() -> Self {
        Self {
            command: Command::List,
            criteria: Criteria::default(),
            base: None,
        }
    }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;

    let gw = match &params.base {
        Some(base) => HttpGateway::new(base.clone()),
        None => HttpGateway::from_env(),
    };

    match params.command {
        Command::List => {
            let players = gw.list_players(&params.criteria)?;
            for p in &players {
                let rating = p.base_card_rating.map(|r| r.to_string()).unwrap_or_default();
                println!(
                    "{},{},{},{},{},{}",
                    p.slug, p.display_name, rating, p.in_club_count, p.total_cards, p.any_in_club
                );
            }
        }
        Command::Counts => {
            let counts = gw.player_counts()?;
            println!("total,{}", counts.total);
            println!("in_club,{}", counts.in_club);
        }
        Command::Show(slug) => {
            let detail = gw.get_player(&slug)?;
            eprintln!(
                "{}: {} of {} cards in club",
                detail.display_name, detail.in_club_count, detail.total_cards
            );
            for c in &detail.cards {
                println!(
                    "{},{},{},{},{}",
                    c.card_slug, c.name, c.version, c.rating, c.in_club
                );
            }
        }
        Command::Scrape => watch_scrape(&gw)?,
    }

    Ok(())
}

fn watch_scrape(gw: &dyn Gateway) -> Result<(), Box<dyn Error>> {
    let mut monitor = ScrapeMonitor::new();
    let ack = monitor.trigger(gw)?;
    eprintln!("Scrape accepted: {}", ack.message);

    loop {
        thread::sleep(Duration::from_millis(POLL_INTERVAL_MS));
        match monitor.tick(gw) {
            TickOutcome::Continue => eprintln!("…still running"),
            TickOutcome::Completed => {
                monitor.acknowledge();
                eprintln!("Scrape complete");
                return Ok(());
            }
            TickOutcome::Errored(e) => {
                monitor.acknowledge();
                return Err(e.into());
            }
        }
    }
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--search" | "-s" => {
                params.criteria.search = args.next().ok_or("Missing value for --search")?;
            }
            "--club" => {
                let v = args.next().ok_or("Missing value for --club")?;
                params.criteria.filter = match v.to_ascii_lowercase().as_str() {
                    "all" => ClubFilter::All,
                    "in_club" => ClubFilter::InClub,
                    "not_in_club" => ClubFilter::NotInClub,
                    other => return Err(format!("Unknown club filter: {}", other).into()),
                };
            }
            "--sort" => {
                let v = args.next().ok_or("Missing value for --sort")?;
                params.criteria.sort = match v.to_ascii_lowercase().as_str() {
                    "asc" => SortDir::Asc,
                    "desc" => SortDir::Desc,
                    other => return Err(format!("Unknown sort direction: {}", other).into()),
                };
            }
            "--counts" => params.command = Command::Counts,
            "--show" => {
                let slug = args.next().ok_or("Missing player slug for --show")?;
                params.command = Command::Show(slug);
            }
            "--scrape" => params.command = Command::Scrape,
            "--base" => params.base = Some(args.next().ok_or("Missing value for --base")?),
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}
