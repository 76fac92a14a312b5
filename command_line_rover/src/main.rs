//! Interactive command line front end for the rover.
//!
//! Prompts for the grid, the rover's starting pose, the obstacles and a
//! command string, then drives the rover and prints what happened.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use std::path::PathBuf;

use color_eyre::{Report, eyre::{WrapErr, eyre}};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use structopt::StructOpt;

use comms_if::mission::{check_grid_size, MissionParams};
use rov_lib::{
    mission::build_rover,
    nav::{apply_commands, Outcome, Position}
};

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

const PROMPT: &str = "Rover $ ";

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

#[derive(Debug, StructOpt)]
#[structopt(name = "command_line_rover", about = "Drive a rover around a grid interactively")]
struct Opts {
    /// Accept lowercase commands (m, l, r) as well as uppercase ones.
    #[structopt(short, long)]
    ignore_case: bool,

    /// Print each outcome as a JSON object instead of a sentence.
    #[structopt(long)]
    json: bool,

    /// Readline history file.
    #[structopt(long, parse(from_os_str), default_value = "data/history.txt")]
    history: PathBuf,
}

/// Starting pose as typed by the user, heading still unresolved.
#[derive(Debug, Clone, PartialEq)]
struct StartPose {
    x: i32,
    y: i32,
    heading: String
}

// ---------------------------------------------------------------------------
// FUNCTIONS
// ---------------------------------------------------------------------------

fn main() -> Result<(), Report> {
    color_eyre::install()?;

    let opts = Opts::from_args();

    let mut rl = DefaultEditor::new()
        .wrap_err("Failed to start the line editor")?;
    if rl.load_history(&opts.history).is_err() {
        println!("No history detected");
    }

    let result = run(&mut rl, &opts);

    if let Err(e) = rl.save_history(&opts.history) {
        println!("Could not save history: {}", e);
    }

    result
}

/// Run a single session: setup, command execution, and final status.
fn run(rl: &mut DefaultEditor, opts: &Opts) -> Result<(), Report> {

    // ---- GRID ----

    let (grid_width, grid_height) = loop {
        let v = read_ints(rl, "Enter grid width and height: ", 2)?;
        match check_grid_size(v[0], v[1]) {
            Ok(()) => break (v[0], v[1]),
            Err(e) => println!("{}", e)
        }
    };

    // ---- STARTING POSE ----

    let pose = loop {
        let line = read_line(
            rl, 
            "Enter starting position of the rover (x y) and initial direction \
            (NORTH, EAST, SOUTH, WEST): "
        )?;

        match parse_pose(&line) {
            Some(p) => break p,
            None => println!("Expected two integers and a direction, e.g. \"0 0 NORTH\"")
        }
    };

    // ---- OBSTACLES ----

    let num_obstacles = loop {
        let v = read_ints(rl, "Enter the number of obstacles: ", 1)?;
        if v[0] >= 0 {
            break v[0]
        }
        println!("The number of obstacles cannot be negative");
    };

    let mut obstacles = Vec::new();
    for _ in 0..num_obstacles {
        let v = read_ints(rl, "Enter obstacle position (x y): ", 2)?;
        obstacles.push([v[0], v[1]]);
    }

    // ---- COMMANDS ----

    let cmds = read_line(rl, "Enter commands (e.g., MMRML): ")?;

    // ---- SETUP ----

    let params = mission_params(
        (grid_width, grid_height), 
        pose, 
        obstacles, 
        first_token(&cmds), 
        opts.ignore_case
    );

    let mut setup = build_rover(&params)
        .wrap_err("Failed to set up the rover")?;

    if let Some(notice) = setup.heading_notice() {
        println!("{}", notice);
    }
    for pos in setup.obstacle_acks.iter() {
        println!("{}", obstacle_ack(pos));
    }
    if let Err(e) = setup.rover.validate_initial_state() {
        println!("Warning: {}", e);
    }

    // ---- EXECUTION ----

    let outcomes = apply_commands(&mut setup.rover, &params.commands, setup.case_policy);

    for o in outcomes.iter() {
        println!("{}", format_outcome(o, opts.json).wrap_err("Failed to serialise outcome")?);
    }

    println!("{}", setup.rover);

    Ok(())
}

/// Assemble the answers to the prompts into a mission.
fn mission_params(
    grid_size: (i32, i32),
    pose: StartPose,
    obstacles: Vec<[i32; 2]>,
    cmds: &str,
    ignore_case: bool
) -> MissionParams {
    MissionParams {
        grid_width: grid_size.0,
        grid_height: grid_size.1,
        start_x: pose.x,
        start_y: pose.y,
        start_heading: pose.heading,
        obstacles,
        commands: cmds.to_string(),
        case_insensitive_cmds: ignore_case
    }
}

/// Parse exactly `n` whitespace separated integers.
fn parse_ints(line: &str, n: usize) -> Option<Vec<i32>> {
    let v: Vec<i32> = line
        .split_whitespace()
        .map(|s| s.parse::<i32>())
        .collect::<Result<Vec<i32>, _>>()
        .ok()?;

    if v.len() == n { Some(v) } else { None }
}

/// Parse `x y HEADING`.
fn parse_pose(line: &str) -> Option<StartPose> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    match parts.as_slice() {
        [x, y, heading] => Some(StartPose {
            x: x.parse().ok()?,
            y: y.parse().ok()?,
            heading: heading.to_string()
        }),
        _ => None
    }
}

/// The command string is the first whitespace separated token on the line.
fn first_token(line: &str) -> &str {
    line.split_whitespace().next().unwrap_or("")
}

fn obstacle_ack(pos: &Position) -> String {
    format!("Obstacle added at {}", pos)
}

fn format_outcome(outcome: &Outcome, json: bool) -> Result<String, serde_json::Error> {
    if json {
        serde_json::to_string(outcome)
    }
    else {
        Ok(outcome.to_string())
    }
}

/// Read a line of input, adding it to the history.
fn read_line(rl: &mut DefaultEditor, prompt: &str) -> Result<String, Report> {
    println!("{}", prompt);

    match rl.readline(PROMPT) {
        Ok(line) => {
            rl.add_history_entry(line.as_str()).ok();
            Ok(line)
        },
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => 
            Err(eyre!("Input ended before setup was complete")),
        Err(e) => Err(e).wrap_err("Failed to read input")
    }
}

/// Read exactly `n` integers from one line, prompting again until they parse.
fn read_ints(rl: &mut DefaultEditor, prompt: &str, n: usize) -> Result<Vec<i32>, Report> {
    loop {
        let line = read_line(rl, prompt)?;

        match parse_ints(&line, n) {
            Some(v) => return Ok(v),
            None => println!("Expected {} integer(s), try again", n)
        }
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use rov_lib::nav::Heading;

    #[test]
    fn test_parse_ints() {
        assert_eq!(parse_ints("5 5", 2), Some(vec![5, 5]));
        assert_eq!(parse_ints("  -1  ", 1), Some(vec![-1]));

        // Wrong count or non-integers are rejected so the prompt repeats
        assert_eq!(parse_ints("5", 2), None);
        assert_eq!(parse_ints("1 2 3", 2), None);
        assert_eq!(parse_ints("5 five", 2), None);
        assert_eq!(parse_ints("", 1), None);
    }

    #[test]
    fn test_parse_pose() {
        assert_eq!(parse_pose("0 4 north"), Some(StartPose { 
            x: 0, 
            y: 4, 
            heading: "north".to_string() 
        }));
        assert_eq!(parse_pose("0 NORTH"), None);
        assert_eq!(parse_pose("a 0 NORTH"), None);
        assert_eq!(parse_pose("0 0 NORTH extra"), None);
    }

    #[test]
    fn test_first_token() {
        assert_eq!(first_token("MMRML"), "MMRML");
        assert_eq!(first_token("  MM RR\n"), "MM");
        assert_eq!(first_token("   "), "");
    }

    #[test]
    fn test_setup_from_prompts() {
        let pose = parse_pose("2 2 UP").unwrap();
        let params = mission_params(
            (5, 5), 
            pose, 
            vec![[2, 3], [0, 0]], 
            first_token("MXR ignored"), 
            false
        );

        let mut setup = build_rover(&params).unwrap();

        assert_eq!(
            setup.heading_notice().unwrap(), 
            "Invalid direction: UP. Setting to NORTH by default."
        );

        let acks: Vec<String> = setup.obstacle_acks.iter().map(obstacle_ack).collect();
        assert_eq!(acks, vec!["Obstacle added at (2, 3)", "Obstacle added at (0, 0)"]);

        // Blocked by (2, 3), then X is skipped and R turns
        let outcomes = apply_commands(&mut setup.rover, &params.commands, setup.case_policy);
        assert_eq!(outcomes, vec![
            Outcome::BlockedByObstacle(Position::new(2, 3)),
            Outcome::UnrecognizedCommand('X'),
            Outcome::Turned(Heading::East),
        ]);
        assert_eq!(format!("{}", setup.rover), "Rover is at (2, 2) facing EAST");
    }

    #[test]
    fn test_ignore_case() {
        let params = mission_params(
            (3, 3), 
            parse_pose("0 0 EAST").unwrap(), 
            Vec::new(), 
            "mm", 
            true
        );
        let mut setup = build_rover(&params).unwrap();

        let outcomes = apply_commands(&mut setup.rover, &params.commands, setup.case_policy);
        assert_eq!(outcomes, vec![
            Outcome::Moved(Position::new(1, 0)),
            Outcome::Moved(Position::new(2, 0)),
        ]);
    }

    #[test]
    fn test_format_outcome() {
        let moved = Outcome::Moved(Position::new(0, 1));

        assert_eq!(format_outcome(&moved, false).unwrap(), "Moved to (0, 1)");
        assert_eq!(format_outcome(&moved, true).unwrap(), r#"{"Moved":{"x":0,"y":1}}"#);
        assert_eq!(
            format_outcome(&Outcome::Turned(Heading::West), true).unwrap(), 
            r#"{"Turned":"WEST"}"#
        );
        assert_eq!(
            format_outcome(&Outcome::UnrecognizedCommand('X'), true).unwrap(), 
            r#"{"UnrecognizedCommand":"X"}"#
        );
        assert_eq!(
            format_outcome(&Outcome::OutOfBounds(Position::new(0, 5)), false).unwrap(), 
            "Cannot move out of bounds to (0, 5)."
        );
    }
}
