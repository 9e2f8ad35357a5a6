use anyhow::{Context, Result};
use cfb_scoreboard::poll::run_poll_loop;
use cfb_scoreboard::utils::format::format_time;
use cfb_scoreboard::{
    build_week_display, game_detail, week_selection, CfbdClient, Config, DenormalizedGame,
    FeedCache, LiveScoreSnapshot, PollLoop, StaticDatasets, DIVISION,
};
use chrono::Utc;
use clap::Parser;
use std::path::PathBuf;

/// Live college football scoreboard for the terminal.
#[derive(Parser, Debug)]
#[command(name = "scoreboard")]
struct Args {
    /// Week to display (defaults to the current week from the calendar)
    #[arg(long)]
    week: Option<u8>,

    /// Season year (defaults to SEASON_YEAR or the current year)
    #[arg(long)]
    year: Option<u16>,

    /// Directory holding the static team datasets
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// Show the matchup/result breakdown for one game id
    #[arg(long)]
    game: Option<u64>,

    /// Keep polling live scores and print updates until no games remain
    #[arg(long)]
    watch: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::from_env()?;
    tracing_subscriber::fmt::init();

    let datasets = StaticDatasets::load(&args.data_dir)
        .context("failed to load static team datasets")?;
    let client = CfbdClient::new(config.api_key.clone());
    let cache = FeedCache::new();

    let year = args.year.unwrap_or(config.year);

    // Resolve the week: explicit flag, else the calendar's current week
    let week = match args.week {
        Some(week) => week,
        None => {
            let (options, selected) =
                week_selection(&client, &cache, year, Utc::now().date_naive()).await;
            for option in &options {
                println!("{}", option.label);
            }
            selected.context("no selectable weeks returned from the calendar")?
        }
    };

    println!("\nCFB Games | {} week {}\n", year, week);

    let mut games = build_week_display(&client, &cache, &datasets.team_refs, year, week).await;

    // Completed games sink to the bottom; everything else keeps feed order
    games.sort_by_key(|game| game.completed);

    for game in &games {
        print_game(game);
    }

    if let Some(game_id) = args.game {
        match game_detail(&games, &datasets.stats, game_id) {
            Some(rows) => {
                println!("\nGame {} breakdown:", game_id);
                for row in rows {
                    println!(
                        "  {:<24} {:>7.1} [{:>5.1}%] vs [{:>5.1}%] {:>7.1}",
                        row.label, row.home_value, row.home_pct, row.away_pct, row.away_value
                    );
                }
            }
            None => println!("\nGame {} not found in week {}", game_id, week),
        }
    }

    if args.watch {
        println!("\nPolling live scores every 12s (ctrl-c to stop)...\n");
        let mut poll = PollLoop::new();
        poll.mark_ready();
        run_poll_loop(&client, &mut poll, DIVISION, print_live_update).await;
        println!("No more games in progress.");
    }

    Ok(())
}

fn print_game(game: &DenormalizedGame) {
    let status = if game.completed { "Final" } else { "Scheduled" };
    let score = match (game.away_points, game.home_points) {
        (Some(away), Some(home)) => format!("{} - {}", away, home),
        _ => String::new(),
    };

    println!(
        "[{:>9}] {} ({}-{}) @ {} ({}-{})  {}",
        status,
        game.away_team,
        game.away_total_wins,
        game.away_total_losses,
        game.home_team,
        game.home_total_wins,
        game.home_total_losses,
        score
    );
    println!(
        "            {}, {} | {} • O/U {} | {}",
        game.day_of_week, game.start_date, game.spread, game.over_under, game.outlet
    );
}

fn print_live_update(snapshots: &[LiveScoreSnapshot]) {
    for snap in snapshots {
        let clock = snap.clock.as_deref().map(format_time).unwrap_or_default();
        let period = snap
            .period
            .map(|p| format!("{} Qtr", p))
            .unwrap_or_default();
        println!(
            "{} {} - {} {}  ({} ● {})  {}",
            snap.away_team,
            snap.away_team_score.unwrap_or(0),
            snap.home_team_score.unwrap_or(0),
            snap.home_team,
            period,
            clock,
            snap.situation.as_deref().unwrap_or("")
        );
    }
    println!();
}
