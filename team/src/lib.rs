//! Team state for the six-panel creature viewer.
//!
//! # Overview
//!
//! ```text
//! pokegui-protocol (wire format)
//!        │
//!        ▼
//! pokegui-client (fetch + aggregate) ──> CreatureRecord
//!        │
//!        ▼
//! pokegui-team (slots + generations) ← THIS CRATE
//!        │
//!        ▼
//! pokegui (egui panels)
//! ```
//!
//! # Main Types
//!
//! - [`CreatureRecord`] - Everything shown in one panel
//! - [`TypeRelations`] - Union of double-damage relations across a creature's types
//! - [`Team`] - Six [`Slot`]s, each with its own generation counter
//! - [`SlotTicket`] - Handed to a background lookup, checked on completion
//!
//! # Example Usage
//!
//! ```ignore
//! let mut team = Team::new();
//! let slot = SlotId::new(0).unwrap();
//!
//! let ticket = team.begin_query(slot);
//! // ... run the lookup elsewhere ...
//! match team.complete(ticket, record) {
//!     Completion::Applied => println!("{}", summary(team.record(slot).unwrap())),
//!     Completion::Failed | Completion::Stale => {}
//! }
//! ```

mod level;
mod record;
mod slot;
mod summary;
mod team;

pub use level::{DEFAULT_LEVEL, parse_level, parse_name};
pub use record::{CreatureRecord, TypeRelations};
pub use slot::{GRID_COLUMNS, GRID_ROWS, SlotId, SlotTicket, TEAM_SIZE};
pub use summary::{EMPTY_LIST, summary};
pub use team::{Completion, Slot, Team};
