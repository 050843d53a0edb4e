use tracing::{debug, trace};

use crate::{
    error::{NamerError, Result},
    name_gen::NameGen,
    source::{Classify, SourceKind},
    trace::Trace,
};

/// Category used for traces built straight from a numeric array.
pub const POINTS: &str = "points";

/// Sets plotly trace names and legend groups, numbering each source
/// category separately.
#[derive(Debug, Default)]
pub struct TraceNamer {
    name_gen: NameGen,
}

impl TraceNamer {
    pub fn new() -> Self {
        Self {
            name_gen: NameGen::new(),
        }
    }

    /// Labels a batch of traces that were all derived from `source`.
    ///
    /// Every trace ends up in the same legend group. Traces which already
    /// carry a name keep it. An empty batch is a no-op, even for sources that
    /// could not be classified.
    pub fn set_name<S>(&mut self, traces: &mut [Trace], source: &S) -> Result<()>
    where
        S: Classify + ?Sized,
    {
        if traces.is_empty() {
            trace!("empty trace batch, nothing to name");
            return Ok(());
        }

        let category = match source.classify() {
            SourceKind::Visualizable(type_name) => type_name,
            SourceKind::NumericArray => POINTS,
            SourceKind::Unrecognized(type_name) => {
                return Err(NamerError::UnclassifiableSource {
                    type_name: type_name.to_owned(),
                })
            }
        };

        let label = self.name_gen.get_fresh_name(category);
        debug!(%label, traces = traces.len(), "naming trace batch");

        // Could have smarter heuristics per case, for now every unnamed trace
        // gets the label.
        for t in traces.iter_mut() {
            if !t.has_name() {
                t.name = Some(label.clone());
            }
            t.legendgroup = Some(label.clone());
        }
        Ok(())
    }

    /// How many batches of `category` have been named so far.
    pub fn count(&self, category: &str) -> usize {
        self.name_gen.count(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{short_type_name, Visualizable};
    use serde_json::json;

    struct Ray;
    struct Point3d;

    impl Visualizable for Ray {
        fn type_name(&self) -> &str {
            short_type_name::<Self>()
        }
    }

    impl Visualizable for Point3d {
        fn type_name(&self) -> &str {
            short_type_name::<Self>()
        }
    }

    fn fresh(n: usize) -> Vec<Trace> {
        vec![Trace::new(); n]
    }

    #[test]
    fn names_whole_batch_with_one_label() {
        let mut namer = TraceNamer::new();
        let mut traces = fresh(2);
        namer.set_name(&mut traces, &Ray as &dyn Visualizable).unwrap();
        for t in &traces {
            assert_eq!(t.name.as_deref(), Some("Ray 0"));
            assert_eq!(t.legendgroup.as_deref(), Some("Ray 0"));
        }

        let mut more = fresh(1);
        namer.set_name(&mut more, &Ray as &dyn Visualizable).unwrap();
        assert_eq!(more[0].name.as_deref(), Some("Ray 1"));
        assert_eq!(namer.count("Ray"), 2);
    }

    #[test]
    fn arrays_are_points() {
        let mut namer = TraceNamer::new();
        let mut traces = fresh(1);
        namer
            .set_name(&mut traces, &vec![[0.0f64, 0.0, 0.0], [1.0, 2.0, 3.0]])
            .unwrap();
        assert_eq!(traces[0].legendgroup.as_deref(), Some("points 0"));

        let mut traces = fresh(1);
        namer.set_name(&mut traces, &json!([1, 2, 3])).unwrap();
        assert_eq!(traces[0].legendgroup.as_deref(), Some("points 1"));

        let mut traces = fresh(1);
        namer.set_name(&mut traces, &vec![1i64, 2, 3]).unwrap();
        assert_eq!(traces[0].name.as_deref(), Some("points 2"));
    }

    #[test]
    fn categories_count_independently() {
        let mut namer = TraceNamer::new();
        let mut a = fresh(1);
        let mut b = fresh(1);
        let mut c = fresh(1);
        namer.set_name(&mut a, &Ray as &dyn Visualizable).unwrap();
        namer.set_name(&mut b, &Point3d as &dyn Visualizable).unwrap();
        namer.set_name(&mut c, &Ray as &dyn Visualizable).unwrap();
        assert_eq!(a[0].name.as_deref(), Some("Ray 0"));
        assert_eq!(b[0].name.as_deref(), Some("Point3d 0"));
        assert_eq!(c[0].name.as_deref(), Some("Ray 1"));
    }

    #[test]
    fn keeps_existing_names() {
        let mut namer = TraceNamer::new();
        let mut traces = vec![Trace::with_name("custom"), Trace::with_name(""), Trace::new()];
        traces[0].legendgroup = Some("old".to_owned());
        namer.set_name(&mut traces, &Ray as &dyn Visualizable).unwrap();
        assert_eq!(traces[0].name.as_deref(), Some("custom"));
        assert_eq!(traces[0].legendgroup.as_deref(), Some("Ray 0"));
        assert_eq!(traces[1].name.as_deref(), Some("Ray 0"));
        assert_eq!(traces[2].name.as_deref(), Some("Ray 0"));
    }

    #[test]
    fn empty_batch_is_noop() {
        let mut namer = TraceNamer::new();
        namer.set_name(&mut [], &Ray as &dyn Visualizable).unwrap();
        assert_eq!(namer.count("Ray"), 0);
        // Not classified, so no error either.
        namer.set_name(&mut [], &json!("oops")).unwrap();

        let mut traces = fresh(1);
        namer.set_name(&mut traces, &Ray as &dyn Visualizable).unwrap();
        assert_eq!(traces[0].name.as_deref(), Some("Ray 0"));
    }

    #[test]
    fn unclassifiable_source_leaves_everything_untouched() {
        let mut namer = TraceNamer::new();
        let mut traces = vec![Trace::new(), Trace::with_name("custom")];
        let before = traces.clone();
        let err = namer.set_name(&mut traces, &json!({"x": 1})).unwrap_err();
        assert!(matches!(
            &err,
            NamerError::UnclassifiableSource { type_name } if type_name == "object"
        ));
        assert_eq!(err.to_string(), "Unexpected trace object");
        assert_eq!(traces, before);
        assert_eq!(namer.count(POINTS), 0);
    }
}
