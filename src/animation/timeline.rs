use crate::animation::tween::TweenVars;

/// A tween placed on a timeline
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineEntry {
    pub selector: String,
    pub vars: TweenVars,
    /// Seconds from the start of the timeline
    pub offset: f64,
}

/// Declarative sequence of tweens. Each `to` is placed at the end of the
/// previous one, shifted by its own delay; a negative delay overlaps them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline {
    entries: Vec<TimelineEntry>,
    cursor: f64,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn to(mut self, selector: &str, vars: TweenVars) -> Self {
        let offset = (self.cursor + vars.delay).max(0.0);
        self.cursor = offset + vars.duration.max(0.0);
        self.entries.push(TimelineEntry {
            selector: selector.to_string(),
            vars,
            offset,
        });
        self
    }

    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<TimelineEntry> {
        self.entries
    }

    /// Time at which the last entry ends
    pub fn duration(&self) -> f64 {
        self.entries
            .iter()
            .map(|entry| entry.offset + entry.vars.duration.max(0.0))
            .fold(0.0, f64::max)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chaining_with_overlap() {
        let timeline = Timeline::new()
            .to(".mask", TweenVars::new().rotate(10.0).duration(2.0))
            .to(".mask", TweenVars::new().scale(10.0).duration(2.0).delay(-1.8));

        let offsets: Vec<f64> = timeline.entries().iter().map(|e| e.offset).collect();
        assert_eq!(offsets[0], 0.0);
        assert!((offsets[1] - 0.2).abs() < 1e-9);
        assert!((timeline.duration() - 2.2).abs() < 1e-9);
    }

    #[test]
    fn test_offsets_never_go_negative() {
        let timeline = Timeline::new().to(".a", TweenVars::new().duration(1.0).delay(-3.0));
        assert_eq!(timeline.entries()[0].offset, 0.0);
        assert_eq!(timeline.duration(), 1.0);
    }

    #[test]
    fn test_positive_delay_leaves_gap() {
        let timeline = Timeline::new()
            .to(".a", TweenVars::new().duration(1.0))
            .to(".b", TweenVars::new().duration(1.0).delay(0.5));
        assert_eq!(timeline.entries()[1].offset, 1.5);
        assert!(Timeline::new().is_empty());
    }
}
