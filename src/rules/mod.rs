//! Card-ordering rules.
//!
//! Pure functions over card slices, shared by `tableau` (per-pile legality)
//! and `engine` (game status). Nothing here mutates state.
//!
//! Placement and lifting are deliberately asymmetric:
//! - placing only checks rank continuity (any suit may go on any suit)
//! - lifting several cards, or completing a sequence, needs a same-suit run

pub mod run;
pub mod status;

pub use run::{can_stack, is_complete_run, is_run};
pub use status::GameStatus;
