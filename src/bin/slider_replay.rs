use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use time_range_slider::api::{AutoRefreshBehavior, TimeSlider, TimeSliderConfig};
use time_range_slider::core::{HandleKind, ManualClock, RangeEvent, TimeView};

const REPLAY_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Deserialize)]
struct ReplayScript {
    schema_version: u32,
    start_ms: i64,
    mode: TimeView,
    #[serde(default)]
    track_width_px: f64,
    #[serde(default)]
    auto_refresh: Option<AutoRefreshBehavior>,
    steps: Vec<ReplayStep>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
enum ReplayStep {
    SetNow { ms: i64 },
    AdvanceMs { ms: i64 },
    SetMode { mode: String },
    SetTrackWidth { px: f64 },
    PointerDown { handle: HandleKind, x: f64 },
    PointerMove { handle: HandleKind, x: f64 },
    PointerUp { handle: HandleKind },
    Tick,
    Teardown,
}

#[derive(Debug, Serialize)]
struct ReplayLine<'a> {
    step: usize,
    event: &'a RangeEvent,
}

struct CliArgs {
    script_path: Option<PathBuf>,
    print_snapshot: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

struct Replay {
    lines: Vec<String>,
    slider: TimeSlider<ManualClock>,
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let raw = match &args.script_path {
        Some(path) => fs::read_to_string(path)
            .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|err| format!("failed to read stdin: {err}"))?;
            buffer
        }
    };

    let replay = replay(parse_script(&raw)?)?;
    for line in &replay.lines {
        println!("{line}");
    }
    if args.print_snapshot {
        println!(
            "{}",
            replay.slider.snapshot_json_pretty().map_err(|e| e.to_string())?
        );
    }
    Ok(())
}

fn parse_script(raw: &str) -> Result<ReplayScript, String> {
    let script: ReplayScript =
        serde_json::from_str(raw).map_err(|err| format!("invalid json: {err}"))?;
    if script.schema_version != REPLAY_SCHEMA_VERSION {
        return Err(format!(
            "unsupported replay schema version: {}",
            script.schema_version
        ));
    }
    Ok(script)
}

fn replay(script: ReplayScript) -> Result<Replay, String> {
    let clock = ManualClock::from_millis(script.start_ms).map_err(|e| e.to_string())?;
    let mut config =
        TimeSliderConfig::new(script.mode).with_track_width_px(script.track_width_px);
    if let Some(behavior) = script.auto_refresh {
        config = config.with_auto_refresh(behavior);
    }
    let mut slider = TimeSlider::new(clock, config).map_err(|e| e.to_string())?;
    let mut lines = Vec::new();
    drain_lines(0, &mut slider, &mut lines)?;

    for (index, step) in script.steps.into_iter().enumerate() {
        apply_step(&mut slider, step).map_err(|e| format!("step {}: {e}", index + 1))?;
        drain_lines(index + 1, &mut slider, &mut lines)?;
    }
    Ok(Replay { lines, slider })
}

fn apply_step(
    slider: &mut TimeSlider<ManualClock>,
    step: ReplayStep,
) -> time_range_slider::SliderResult<()> {
    match step {
        ReplayStep::SetNow { ms } => {
            *slider.clock_mut() = ManualClock::from_millis(ms)?;
        }
        ReplayStep::AdvanceMs { ms } => slider.clock_mut().advance_millis(ms)?,
        ReplayStep::SetMode { mode } => {
            slider.set_mode_str(&mode)?;
        }
        ReplayStep::SetTrackWidth { px } => slider.set_track_width_px(px)?,
        ReplayStep::PointerDown { handle, x } => {
            slider.pointer_down(handle, x)?;
        }
        ReplayStep::PointerMove { handle, x } => {
            slider.pointer_move(handle, x)?;
        }
        ReplayStep::PointerUp { handle } => {
            slider.pointer_up(handle)?;
        }
        ReplayStep::Tick => {
            slider.tick()?;
        }
        ReplayStep::Teardown => {
            slider.teardown();
        }
    }
    Ok(())
}

fn drain_lines(
    step: usize,
    slider: &mut TimeSlider<ManualClock>,
    lines: &mut Vec<String>,
) -> Result<(), String> {
    for event in slider.drain_range_events() {
        let line = serde_json::to_string(&ReplayLine {
            step,
            event: &event,
        })
        .map_err(|err| format!("failed to serialize event: {err}"))?;
        lines.push(line);
    }
    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut script_path: Option<PathBuf> = None;
    let mut print_snapshot = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--script" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --script".to_owned())?;
                script_path = Some(PathBuf::from(value));
            }
            "--snapshot" => print_snapshot = true,
            "-h" | "--help" => {
                println!(
                    "Usage: cargo run --bin slider_replay -- [--script <path>] [--snapshot]\n\
                     Reads the replay script from stdin when --script is omitted."
                );
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`"));
            }
        }
    }

    Ok(CliArgs {
        script_path,
        print_snapshot,
    })
}
