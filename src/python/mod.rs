//! Python bindings for the spider-solitaire engine.
//!
//! Lets a Python front-end (rendering, input, audio) drive the engine.
//!
//! # Quick Start
//!
//! ```python
//! import spider_solitaire as spider
//!
//! game = spider.Spider(suits=2, seed=42)
//! if game.hold(3, len(game.pile(3)) - 1):
//!     completed = game.put(7, 3)
//! game.deal()
//! game.undo()
//! ```

use pyo3::prelude::*;

mod py_engine;

pub use py_engine::*;

/// spider_solitaire: Spider Solitaire rule engine.
#[pymodule]
fn spider_solitaire(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySpider>()?;
    Ok(())
}
