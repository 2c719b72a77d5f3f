//! Step bounds invariant: the step pointer and highlight point at real entries.

use super::super::Timeline;
use super::Invariant;

/// Invariant: `step < len` and any highlighted step is `< len`.
pub struct StepInBoundsInvariant;

impl Invariant<Timeline> for StepInBoundsInvariant {
    fn holds(timeline: &Timeline) -> bool {
        let len = timeline.len();
        timeline.step() < len && timeline.highlighted_step().is_none_or(|step| step < len)
    }

    fn description() -> &'static str {
        "Current and highlighted steps refer to existing history entries"
    }
}
