//! Replay command - Run a scripted play session against a seeded store
//!
//! A script is a JSON array of steps. Each step is either an action in its
//! tagged form (`{"type": "select_color", "payload": "red"}`) or a pause
//! (`{"wait_ms": 600}`) that advances the store's clock and fires any
//! follow-ups falling due.

use std::{fs, path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::{
    adapters::TracingObserver,
    catalog::Catalog,
    cli::{
        config::DataArgs,
        output::{color_name, format_stars, print_kv, print_section},
    },
    colors::Language,
    game::RoundPhase,
    reducer::{Action, Notice},
    state::AppState,
    store::Store,
};

#[derive(Parser, Debug)]
#[command(about = "Replay a scripted play session")]
pub struct ReplayArgs {
    /// JSON script of actions and waits
    pub script: PathBuf,

    /// Start from a saved snapshot instead of a fresh state
    #[arg(long)]
    pub resume: Option<PathBuf>,

    /// Save the final snapshot to this file
    #[arg(long)]
    pub save: Option<PathBuf>,

    /// Fire every remaining follow-up after the last step
    #[arg(long)]
    pub settle: bool,

    /// Print the final snapshot as JSON
    #[arg(long)]
    pub json: bool,
}

/// One step of a replay script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Step {
    Wait { wait_ms: u64 },
    Dispatch(Action),
}

/// What a single step did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub step: Step,
    /// Follow-ups fired while waiting.
    pub fired: usize,
    pub notices: Vec<Notice>,
}

pub fn parse_script(contents: &str) -> Result<Vec<Step>> {
    serde_json::from_str(contents).context("parsing replay script")
}

/// Apply `steps` in order.
pub fn run_script(store: &mut Store, steps: &[Step]) -> Vec<StepReport> {
    steps
        .iter()
        .map(|step| {
            let fired = match step {
                Step::Wait { wait_ms } => store.advance_time(Duration::from_millis(*wait_ms)),
                Step::Dispatch(action) => {
                    store.dispatch(action.clone());
                    0
                }
            };
            StepReport {
                step: step.clone(),
                fired,
                notices: store.drain_notices(),
            }
        })
        .collect()
}

pub fn execute(args: ReplayArgs, data: &DataArgs) -> Result<()> {
    let app = data.app()?;
    let contents = fs::read_to_string(&args.script)
        .with_context(|| format!("reading script {}", args.script.display()))?;
    let steps = parse_script(&contents)?;

    let mut store = match &args.resume {
        Some(path) => app
            .load_store(path)
            .with_context(|| format!("loading snapshot {}", path.display()))?,
        None => app.create_store(),
    };
    store.add_observer(Box::new(TracingObserver::new()));
    tracing::info!(steps = steps.len(), seed = ?app.seed(), "replaying script");

    let language = data.language();
    let catalog = app.catalog();
    println!("start  {}", summarize(store.state(), &catalog, language));

    for report in run_script(&mut store, &steps) {
        let label = match &report.step {
            Step::Wait { wait_ms } => format!("wait {wait_ms} ms ({} fired)", report.fired),
            Step::Dispatch(action) => serde_json::to_string(action)?,
        };
        println!("{label}");
        println!("       {}", summarize(store.state(), &catalog, language));
        for notice in &report.notices {
            println!("       ! {notice}");
        }
    }

    if args.settle {
        let fired = store.run_pending();
        println!("settled ({fired} follow-ups fired)");
        for notice in store.drain_notices() {
            println!("       ! {notice}");
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(store.state())?);
    } else {
        print_section("Final progress");
        for (id, record) in store.state().progress.iter() {
            let stars: Vec<String> = record
                .stars_per_challenge
                .iter()
                .map(|(color, stars)| {
                    format!("{} {}", color_name(&catalog, *color, language), format_stars(*stars))
                })
                .collect();
            print_kv(id.as_str(), &stars.join(", "));
        }
    }

    if let Some(path) = &args.save {
        app.save_store(&store, path)
            .with_context(|| format!("saving snapshot {}", path.display()))?;
        println!("Snapshot saved to {}", path.display());
    }

    Ok(())
}

fn summarize(state: &AppState, catalog: &Catalog, language: Language) -> String {
    let target = state
        .current_challenge()
        .map(|c| color_name(catalog, c.target_color_id, language))
        .unwrap_or_else(|| "-".to_string());
    let selection: Vec<String> = state
        .game
        .selection
        .colors()
        .iter()
        .map(|c| color_name(catalog, *c, language))
        .collect();
    let phase = match &state.game.phase {
        RoundPhase::Selecting => "selecting".to_string(),
        RoundPhase::Succeeded {
            stars,
            fun_fact,
            fact_modal_open,
            ..
        } => {
            let shown = fun_fact
                .as_ref()
                .filter(|_| *fact_modal_open)
                .and_then(|id| catalog.fact(id));
            match shown {
                Some(fact) => format!(
                    "success {} (fun fact: {})",
                    format_stars(*stars),
                    fact.content.get(language)
                ),
                None => format!("success {}", format_stars(*stars)),
            }
        }
        RoundPhase::Revealed { .. } => "revealed".to_string(),
    };
    let mini_game = state
        .mini_games
        .active
        .map(|kind| format!(" [{kind}]"))
        .unwrap_or_default();

    format!(
        "{}{mini_game}: target {target}, selected [{}], attempts {}, {phase}",
        state.current_palette(),
        selection.join(", "),
        state.game.attempts_left,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{adapters::ScriptedRandom, app::App, colors::ColorId, game::PhaseKind};

    #[test]
    fn scripts_mix_actions_and_waits() {
        let steps = parse_script(
            r#"[
                {"type": "select_color", "payload": "red"},
                {"type": "select_color", "payload": "blue"},
                {"type": "attempt_mix"},
                {"wait_ms": 600}
            ]"#,
        )
        .unwrap();
        assert_eq!(steps[0], Step::Dispatch(Action::SelectColor(ColorId::Red)));
        assert_eq!(steps[3], Step::Wait { wait_ms: 600 });

        let app = App::new();
        let mut store = app.create_store_with_random(Box::new(ScriptedRandom::new([(0, 8)])));
        let reports = run_script(&mut store, &steps);

        assert_eq!(reports[3].fired, 3);
        assert_eq!(store.state().game.phase_kind(), PhaseKind::Selecting);
        assert_eq!(store.state().game.mixed_result, Some(ColorId::Purple));
        assert!(!store.state().game.shaking);
        assert_eq!(store.state().game.attempts_left, 1);
    }

    #[test]
    fn summary_shows_the_open_fun_fact() {
        let steps = parse_script(
            r#"[
                {"type": "select_color", "payload": "red"},
                {"type": "select_color", "payload": "yellow"},
                {"type": "attempt_mix"}
            ]"#,
        )
        .unwrap();
        let app = App::new();
        let mut store = app.create_store_with_random(Box::new(ScriptedRandom::new([(0, 8)])));
        run_script(&mut store, &steps);

        let splash = summarize(store.state(), store.catalog(), Language::En);
        assert!(splash.ends_with("success ★★★"), "{splash}");

        store.advance_time(Duration::from_millis(2100));
        let modal = summarize(store.state(), store.catalog(), Language::En);
        assert!(modal.contains("fun fact: The word 'orange'"), "{modal}");
    }

    #[test]
    fn malformed_scripts_are_rejected() {
        assert!(parse_script(r#"[{"type": "fly_away"}]"#).is_err());
        assert!(parse_script(r#"{"wait_ms": 5}"#).is_err());
    }
}
