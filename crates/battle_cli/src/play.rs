use std::io::{BufRead, Write};

use anyhow::Result;
use battle_core::{Action, Actor, BattleEngine, BattleEvent, BattleView, EntryKind, RandomSource};
use tracing::debug;

const BAR_WIDTH: usize = 20;
const LOG_LINES: usize = 8;

enum Command {
    Act(Action),
    Restart,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    match line.trim().to_ascii_lowercase().as_str() {
        "restart" | "r" => Some(Command::Restart),
        "quit" | "q" | "exit" => Some(Command::Quit),
        other => other.parse().ok().map(Command::Act),
    }
}

/// Line-driven battle screen. Reads one command per line until `quit` or EOF.
pub fn run<R: RandomSource>(
    engine: &mut BattleEngine<R>,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    render(engine, out)?;
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_command(&line) {
            Some(Command::Quit) => break,
            Some(Command::Restart) => engine.initialize(),
            Some(Command::Act(action)) => {
                if let Err(err) = engine.perform(action) {
                    writeln!(out, "! {err}")?;
                }
            }
            None => {
                writeln!(out, "? unknown command `{}`", line.trim())?;
                continue;
            }
        }
        for event in engine.take_events() {
            debug!(target: "battle_cli.play", ?event, "event");
            if event == BattleEvent::MatchStarted {
                writeln!(out, "Game Restarted!")?;
            }
        }
        render(engine, out)?;
    }
    Ok(())
}

fn render<R>(engine: &BattleEngine<R>, out: &mut impl Write) -> Result<()> {
    let view = BattleView::capture(engine);
    writeln!(out)?;
    writeln!(out, "Monster Health {}", health_bar(view.monster_percent))?;
    writeln!(out, "Player Health  {}", health_bar(view.player_percent))?;

    if let Some(headline) = view.headline {
        writeln!(out, "== Game Over! {headline} == (type `restart` to start a new game)")?;
    }

    let controls: Vec<&str> = view.actions.iter().map(Action::name).collect();
    writeln!(out, "Controls: {} | restart | quit", controls.join(" | "))?;

    writeln!(out, "Battle Log")?;
    for entry in view.recent_log.iter().take(LOG_LINES) {
        let style = match (entry.actor(), entry.kind()) {
            (_, EntryKind::Heal) => '+',
            (Actor::Player, EntryKind::Damage) => '-',
            (Actor::Monster, EntryKind::Damage) => '*',
        };
        writeln!(out, "  {style} {entry}")?;
    }
    Ok(())
}

fn health_bar(percent: u32) -> String {
    let filled = (percent as usize * BAR_WIDTH) / 100;
    format!(
        "[{}{}] {percent:>3}%",
        "#".repeat(filled),
        ".".repeat(BAR_WIDTH - filled)
    )
}
