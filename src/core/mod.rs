pub mod driver;
pub mod observer;
pub mod queue;
pub mod state;
pub mod timeline;

pub use driver::SimCore;
pub use observer::Observer;
pub use queue::{Rank, ReadyQueue};
pub use state::{Pid, Proc, QueueId, SimCtx, Ticks};
pub use timeline::{ExecutionInterval, TimelineBuilder};
