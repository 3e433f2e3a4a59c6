//! Profile sink seam
//!
//! The driver hands each profile it wants shown to a [`ProfileSink`]. The
//! sink decides what to do with it: draw a PNG/SVG, write a CSV, or keep it
//! in memory.

use plotters::style::RGBColor;

use crate::error::DiffusionResult;

/// One concentration profile ready to be shown
///
/// Borrowed view: the sink copies whatever it needs to keep.
#[derive(Debug, Clone, Copy)]
pub struct ProfileSnapshot<'a> {
    /// Grid coordinates
    pub x: &'a [f64],

    /// Profile values, index-aligned with `x`
    pub values: &'a [f64],

    /// Physical time of the profile
    pub time: f64,

    /// Plot title (also used to derive file names)
    pub title: &'a str,

    /// X-axis label
    pub xlabel: &'a str,

    /// Y-axis label
    pub ylabel: &'a str,

    /// Line colour
    pub color: RGBColor,
}

impl<'a> ProfileSnapshot<'a> {
    /// Snapshot with the default axis labels `x` and `C`
    pub fn new(x: &'a [f64], values: &'a [f64], time: f64, title: &'a str, color: RGBColor) -> Self {
        Self {
            x,
            values,
            time,
            title,
            xlabel: "x",
            ylabel: "C",
            color,
        }
    }

    /// File stem derived from the title: lowercase, non-alphanumerics as `_`
    ///
    /// ```rust
    /// use diffusion_rs::output::ProfileSnapshot;
    /// use plotters::style::RED;
    ///
    /// let s = ProfileSnapshot::new(&[], &[], 0.0, "Initial concentration profile", RED);
    /// assert_eq!(s.file_stem(), "initial_concentration_profile");
    /// ```
    pub fn file_stem(&self) -> String {
        let stem: String = self
            .title
            .trim()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
            .collect();

        if stem.is_empty() { "profile".to_string() } else { stem }
    }
}

/// Receiver of profiles produced by a run
pub trait ProfileSink {
    /// Consume one snapshot
    ///
    /// # Errors
    ///
    /// [`DiffusionError::Output`](crate::error::DiffusionError::Output) or
    /// [`DiffusionError::Io`](crate::error::DiffusionError::Io) when the
    /// backend fails.
    fn receive(&mut self, snapshot: &ProfileSnapshot<'_>) -> DiffusionResult<()>;
}

impl<S: ProfileSink + ?Sized> ProfileSink for &mut S {
    fn receive(&mut self, snapshot: &ProfileSnapshot<'_>) -> DiffusionResult<()> {
        (**self).receive(snapshot)
    }
}

/// Forward every snapshot to several sinks, in order
impl<'a> ProfileSink for Vec<Box<dyn ProfileSink + 'a>> {
    fn receive(&mut self, snapshot: &ProfileSnapshot<'_>) -> DiffusionResult<()> {
        for sink in self.iter_mut() {
            sink.receive(snapshot)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plotters::style::{BLUE, RED};

    #[derive(Default)]
    struct Counter {
        titles: Vec<String>,
    }

    impl ProfileSink for Counter {
        fn receive(&mut self, snapshot: &ProfileSnapshot<'_>) -> DiffusionResult<()> {
            self.titles.push(snapshot.title.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_default_labels() {
        let s = ProfileSnapshot::new(&[0.0], &[1.0], 0.0, "t", BLUE);
        assert_eq!(s.xlabel, "x");
        assert_eq!(s.ylabel, "C");
    }

    #[test]
    fn test_file_stem() {
        let s = ProfileSnapshot::new(&[], &[], 0.0, "Final concentration profile", RED);
        assert_eq!(s.file_stem(), "final_concentration_profile");

        let s = ProfileSnapshot::new(&[], &[], 0.0, "  ", RED);
        assert_eq!(s.file_stem(), "profile");
    }

    #[test]
    fn test_mut_ref_forwarding() {
        fn feed(mut sink: impl ProfileSink) {
            sink.receive(&ProfileSnapshot::new(&[], &[], 0.0, "a", RED)).unwrap();
        }

        let mut counter = Counter::default();
        feed(&mut counter);
        assert_eq!(counter.titles, vec!["a".to_string()]);
    }

    #[test]
    fn test_fan_out() {
        let mut sinks: Vec<Box<dyn ProfileSink>> = vec![Box::new(Counter::default()), Box::new(Counter::default())];
        sinks.receive(&ProfileSnapshot::new(&[], &[], 0.0, "a", RED)).unwrap();
        assert_eq!(sinks.len(), 2);
    }
}
