//! Python bindings for the rust-pairs engine.
//!
//! A Python presentation layer (pygame, a web handler, a notebook) drives
//! the engine through these commands and reads back its state.
//!
//! # Quick Start
//!
//! ```python
//! import rust_pairs
//!
//! game = rust_pairs.PairGame(seed=42)
//! game.start_game()
//!
//! game.select_card("A-spades")
//! game.select_card("A-hearts")
//! game.settle()
//!
//! print(game.status)          # "Pair! Player 1 scores 1 point."
//! print(game.face("A-spades")) # "matched"
//! ```

use pyo3::prelude::*;

mod py_game;

pub use py_game::*;

/// rust_pairs: a two-player card-matching game engine.
#[pymodule]
fn rust_pairs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPairGame>()?;
    Ok(())
}
