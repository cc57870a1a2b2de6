/// Events emitted while a GIST pass runs.
///
/// A pass is a sequence of phases (accumulation, post-processing); each phase may run one
/// counted task, e.g. one step per frame or per voxel.
#[derive(Debug, Clone)]
pub enum Progress {
    PhaseStart { name: &'static str },
    PhaseFinish,

    TaskStart { total_steps: u64 },
    TaskIncrement,
    TaskFinish,
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// Forwards [`Progress`] events to an optional callback. Shared by reference across the
/// rayon workers of a phase.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }

    /// Runs `body` bracketed by `PhaseStart`/`PhaseFinish`. `PhaseFinish` is reported even
    /// when `body` fails so front-ends can tear down their display.
    pub fn phase<T, E>(
        &self,
        name: &'static str,
        body: impl FnOnce() -> Result<T, E>,
    ) -> Result<T, E> {
        self.report(Progress::PhaseStart { name });
        let result = body();
        self.report(Progress::PhaseFinish);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn reporter_without_callback_ignores_events() {
        let reporter = ProgressReporter::new();
        reporter.report(Progress::PhaseStart { name: "Accumulation" });
    }

    #[test]
    fn reporter_forwards_events_to_callback() {
        let seen = Mutex::new(Vec::new());
        {
            let reporter = ProgressReporter::with_callback(Box::new(|event| {
                if let Progress::TaskStart { total_steps } = event {
                    seen.lock().unwrap().push(total_steps);
                }
            }));
            reporter.report(Progress::TaskStart { total_steps: 12 });
            reporter.report(Progress::TaskIncrement);
        }
        assert_eq!(seen.into_inner().unwrap(), vec![12]);
    }

    #[test]
    fn phase_brackets_body_even_on_error() {
        let events = Mutex::new(Vec::new());
        {
            let reporter = ProgressReporter::with_callback(Box::new(|event| {
                events.lock().unwrap().push(format!("{:?}", event));
            }));
            let result: Result<(), &str> = reporter.phase("Post-processing", || Err("boom"));
            assert_eq!(result, Err("boom"));
        }
        let events = events.into_inner().unwrap();
        assert_eq!(
            events,
            vec![
                "PhaseStart { name: \"Post-processing\" }".to_string(),
                "PhaseFinish".to_string()
            ]
        );
    }
}
