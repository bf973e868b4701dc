use std::cell::Cell;
use std::rc::Rc;

use collabdir::{BiographyRefiner, RefineOutcome, RefineStatus};

/// Refiner that always succeeds with a fixed rewrite.
pub struct RewritingRefiner(pub String);

impl BiographyRefiner for RewritingRefiner {
    fn refine(&self, _biography: &str) -> RefineOutcome {
        RefineOutcome {
            text: self.0.clone(),
            status: RefineStatus::Refined,
            detected_language: Some("spa"),
        }
    }
}

/// Refiner that exercises the fallback contract: the input comes back
/// unchanged with the given status.
pub struct PassthroughRefiner(pub RefineStatus);

impl BiographyRefiner for PassthroughRefiner {
    fn refine(&self, biography: &str) -> RefineOutcome {
        RefineOutcome {
            text: biography.to_string(),
            status: self.0,
            detected_language: None,
        }
    }
}

/// Refiner that records how many times it was invoked.
pub struct CountingRefiner {
    pub calls: Rc<Cell<usize>>,
}

impl CountingRefiner {
    pub fn new() -> (Self, Rc<Cell<usize>>) {
        let calls = Rc::new(Cell::new(0));
        (
            Self {
                calls: Rc::clone(&calls),
            },
            calls,
        )
    }
}

impl BiographyRefiner for CountingRefiner {
    fn refine(&self, biography: &str) -> RefineOutcome {
        self.calls.set(self.calls.get() + 1);
        RefineOutcome {
            text: biography.to_string(),
            status: RefineStatus::Refined,
            detected_language: None,
        }
    }
}
