//! Assignment domain models.
//!
//! Provides the core data types for representing a roster, a backlog,
//! and the assignments that connect them.
//!
//! # Domain Mappings
//!
//! | u-assign | Software Team | Field Service | Support Desk |
//! |----------|---------------|---------------|--------------|
//! | Employee | Developer | Technician | Agent |
//! | Task | Ticket/Story | Work Order | Case |
//! | Assignment | Owner | Dispatch | Routing |

mod assignment;
mod employee;
mod level;
mod task;

pub use assignment::Assignment;
pub use employee::Employee;
pub(crate) use employee::utilization_percentage;
pub use level::{Complexity, ExperienceLevel, Priority};
pub use task::Task;
