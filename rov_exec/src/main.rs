//! Main rover-side executable entry point.
//! 
//! # Architecture
//! 
//! The execution methodology consists of:
//! 
//!     - Start the session and logger
//!     - Load the mission and build the rover
//!     - Main loop, one command per cycle:
//!         - Command execution
//!         - Outcome reporting
//!     - Final status report

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use color_eyre::{Report, eyre::{WrapErr, eyre}};
use log::{debug, info, warn};
use structopt::StructOpt;

// Internal
use rov_lib::sim::{InputData, RoverSim};
use util::{
    module::State,
    logger::{logger_init, LevelFilter, TargetLevel, NAV_TARGET},
    session::Session,
};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Drive a rover around a grid according to a mission file.
#[derive(Debug, StructOpt)]
#[structopt(name = "rov_exec")]
struct Opts {
    /// Mission file, relative to the params directory.
    #[structopt(default_value = "mission.toml")]
    mission: String,

    /// Log at DEBUG rather than INFO.
    #[structopt(short, long)]
    verbose: bool,

    /// Trace every bounds and obstacle check made by the navigation module.
    #[structopt(long)]
    trace_nav: bool,

    /// Refuse to run if the rover starts outside the grid or on an obstacle.
    #[structopt(long)]
    strict: bool,
}

// ---------------------------------------------------------------------------
// FUNCTIONS
// ---------------------------------------------------------------------------

/// Executable main function, entry point.
fn main() -> Result<(), Report> {

    color_eyre::install()?;

    let opts = Opts::from_args();

    // ---- EARLY INITIALISATION ----

    // Initialise session
    let session = Session::new(
        "rov_exec", 
        "sessions"
    ).wrap_err("Failed to create the session")?;

    // Initialise logger
    let level = if opts.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    let overrides: Vec<TargetLevel> = if opts.trace_nav {
        vec![TargetLevel { target: NAV_TARGET, level: LevelFilter::Trace }]
    }
    else {
        Vec::new()
    };
    logger_init(level, &overrides, &session)
        .wrap_err("Failed to initialise logging")?;

    // Log information on this execution.
    info!("Grid Rover Executable\n");
    info!("Session directory: {:?}\n", session.session_root);
    debug!("CLI options: {:?}", opts);

    // ---- INITIALISE MODULES ----

    let mut sim = RoverSim::default();

    sim.init(opts.mission.clone(), &session)
        .wrap_err("Failed to initialise RoverSim")?;
    info!("RoverSim init complete\n");

    if opts.strict {
        if let Some(rover) = sim.rover() {
            rover.validate_initial_state()
                .wrap_err("Rover initial state is invalid")?;
        }
    }

    // ---- MAIN LOOP ----

    let cmds: Vec<char> = sim.commands().chars().collect();

    info!("Executing {} command(s)\n", cmds.len());

    for c in cmds {
        let (outcome, _) = sim.proc(&InputData { cmd: Some(c) })
            .wrap_err("Failed to process command")?;

        match outcome {
            Some(o) if o.is_rejected() => warn!("{}", o),
            Some(o) => info!("{}", o),
            None => ()
        }
    }

    // ---- FINAL STATUS ----

    let report = sim.report();

    match sim.rover() {
        Some(rover) => info!("{}", rover),
        None => return Err(eyre!("No rover present after executing the mission"))
    }

    info!(
        "{} command(s) processed, {} rejected", 
        report.num_cmds, 
        report.num_rejected
    );

    Ok(())
}
