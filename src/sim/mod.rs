pub mod error;
pub mod metrics;
pub mod process;
pub mod run;

pub use error::SchedError;
pub use metrics::{ProcessMetrics, RunResult};
pub use process::ProcessSpec;
pub use run::Sim;
