//! Implementations for the RoverSim state structure

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::{info, trace, warn};
use serde::Serialize;

// Internal
use super::SimError;
use comms_if::{mission::MissionParams, tc::CasePolicy};
use crate::{
    mission::{self, MissionSetup},
    nav::{self, Outcome, Rover, Status}
};
use util::{
    params, 
    module::State,
    session::Session};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Rover simulation module state
#[derive(Default)]
pub struct RoverSim {
    pub(crate) params: Option<MissionParams>,

    pub(crate) rover: Option<Rover>,

    pub(crate) case_policy: CasePolicy,

    pub(crate) report: StatusReport,
}

/// Input data to RoverSim.
#[derive(Default)]
pub struct InputData {
    /// The command character to execute, or `None` if there is no new command
    /// on this cycle.
    pub cmd: Option<char>
}

/// Status report for RoverSim processing.
#[derive(Clone, Copy, Default, Serialize, Debug)]
pub struct StatusReport {
    /// The rover's pose at the end of the cycle.
    pub status: Option<Status>,

    /// Number of commands processed so far, including rejected ones.
    pub num_cmds: usize,

    /// Number of commands which left the rover unchanged.
    pub num_rejected: usize,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl RoverSim {

    /// Build the module directly from a mission, without a parameter file.
    pub fn from_mission(params: MissionParams) -> Result<(Self, MissionSetup), SimError> {
        let mut sim = Self::default();
        let setup = sim.load_mission(params)?;
        Ok((sim, setup))
    }

    /// The mission's command string, or an empty string if no mission is loaded.
    pub fn commands(&self) -> &str {
        match self.params {
            Some(ref p) => p.commands.as_str(),
            None => ""
        }
    }

    pub fn rover(&self) -> Option<&Rover> {
        self.rover.as_ref()
    }

    pub fn report(&self) -> StatusReport {
        self.report
    }

    fn load_mission(&mut self, params: MissionParams) -> Result<MissionSetup, SimError> {
        let setup = mission::build_rover(&params)
            .map_err(SimError::InvalidMission)?;

        if let Err(e) = setup.rover.validate_initial_state() {
            warn!("{}", e);
        }

        self.case_policy = setup.case_policy;
        self.rover = Some(setup.rover.clone());
        self.report = StatusReport {
            status: Some(Status::from(&setup.rover)),
            ..StatusReport::default()
        };
        self.params = Some(params);

        Ok(setup)
    }
}

impl State for RoverSim {
    type InitData = String;
    type InitError = SimError;
    
    type InputData = InputData;
    type OutputData = Option<Outcome>;
    type StatusReport = StatusReport;
    type ProcError = SimError;

    /// Initialise the RoverSim module.
    ///
    /// Expected init data is the path to the mission file, relative to the
    /// params directory.
    fn init(&mut self, init_data: Self::InitData, session: &Session) 
        -> Result<(), Self::InitError> 
    {
        info!("Loading mission {:?} (session {:?})", init_data, session.session_root);

        let params: MissionParams = params::load(&init_data)
            .map_err(SimError::ParamLoadError)?;

        let setup = self.load_mission(params)?;

        info!(
            "Rover on a {} x {} grid with {} obstacle(s)", 
            setup.rover.grid_size().0, 
            setup.rover.grid_size().1, 
            setup.rover.num_obstacles()
        );

        Ok(())
    }

    /// Execute the command for this cycle, if there is one.
    fn proc(&mut self, input_data: &Self::InputData)
        -> Result<(Self::OutputData, Self::StatusReport), Self::ProcError> 
    {
        let rover = self.rover.as_mut().ok_or(SimError::NotInitialised)?;

        let outcome = match input_data.cmd {
            Some(c) => {
                let o = nav::apply_command(rover, c, self.case_policy);

                self.report.num_cmds += 1;
                if o.is_rejected() {
                    self.report.num_rejected += 1;
                }

                Some(o)
            },
            None => None
        };

        self.report.status = Some(Status::from(&*rover));

        trace!("RoverSim report: {:?}", self.report);

        Ok((outcome, self.report))
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------
