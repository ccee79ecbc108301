//! Game rules: selection, match resolution, and outcome.
//!
//! - `selection`: Accepts or ignores `select_card` commands and takes the
//!   resolving lock when a pair is complete
//! - `resolver`: Compares the pending pair, scores matches, conceals
//!   mismatches
//! - `outcome`: Winner or draw from final scores
//!
//! These functions mutate a `GameState` passed in by the lifecycle; they
//! never schedule anything themselves.

pub mod outcome;
pub mod resolver;
pub mod selection;

pub use outcome::GameOutcome;
pub use resolver::{abort, conceal_pair, points_for_match, resolve_pair, Resolution};
pub use selection::{check_selectable, select_card, IgnoreReason, Selection};
