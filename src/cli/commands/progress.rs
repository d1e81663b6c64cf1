//! Progress command - Show the palette progress stored in a snapshot

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    app::App,
    cli::{
        config::DataArgs,
        output::{color_name, format_stars, print_kv, print_section, print_subsection},
    },
    colors::Language,
    ports::SnapshotRepository,
    state::AppState,
};

#[derive(Parser, Debug)]
#[command(about = "Show progress saved in a snapshot")]
pub struct ProgressArgs {
    /// Snapshot file written by `replay --save`
    pub snapshot: PathBuf,

    /// Print the whole snapshot as JSON instead
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: ProgressArgs, data: &DataArgs) -> Result<()> {
    let app = data.app()?;
    let state = app
        .repository()
        .load(&args.snapshot)
        .with_context(|| format!("loading snapshot {}", args.snapshot.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&state)?);
        return Ok(());
    }

    print_progress(&state, &app, data.language());
    Ok(())
}

fn print_progress(state: &AppState, app: &App, language: Language) {
    let catalog = app.catalog();
    let catalog = catalog.as_ref();
    let per_palette = app.config().challenges_per_palette;

    print_section("Progress");
    print_kv("Total stars", &state.progress.total_stars().to_string());
    print_kv("Focused palette", state.current_palette().as_str());
    if let Some(challenge) = state.current_challenge() {
        print_kv(
            "Current target",
            &color_name(catalog, challenge.target_color_id, language),
        );
    }
    if catalog.all_palettes_mastered(&state.progress) {
        println!("\n  Every palette mastered!");
    }

    for (id, record) in state.progress.iter() {
        let required = catalog
            .palette(id)
            .map(|palette| palette.effective_challenge_count(per_palette))
            .unwrap_or(per_palette);
        let status = match (record.unlocked, record.mastered) {
            (_, true) => "mastered",
            (true, false) => "unlocked",
            (false, false) => "locked",
        };

        print_subsection(&format!("{id} ({status})"));
        print_kv(
            "Completed",
            &format!("{}/{required}", record.completed_count()),
        );
        print_kv("Stars", &record.total_stars.to_string());
        for (color, stars) in &record.stars_per_challenge {
            print_kv(&color_name(catalog, *color, language), &format_stars(*stars));
        }
    }
}
