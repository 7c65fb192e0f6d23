use std::{sync::Arc, thread};

use habits::{ClientError, Predict, PredictionResult, Session, Submission};
use tokio::sync::mpsc;

use super::model::LogLine;

const MAX_LOGS: usize = 200;
const EVENTS_CAPACITY: usize = 8;

/// Predictor shared with the request threads.
pub type SharedPredictor = Arc<dyn Predict + Send + Sync>;

/// Outcome of one request, sent back by its thread.
#[derive(Debug)]
pub struct PredictionEvent {
    pub generation: u64,
    pub outcome: Result<PredictionResult, ClientError>,
}

/// Drives a [`Session`] whose requests run on background threads.
///
/// Each ticket gets its own thread, which sends exactly one
/// [`PredictionEvent`] back. Events are applied in [`SessionState::tick`].
pub struct SessionState {
    session: Session,
    predictor: SharedPredictor,
    tx: mpsc::Sender<PredictionEvent>,
    events: mpsc::Receiver<PredictionEvent>,
    logs: Vec<LogLine>,
}

impl SessionState {
    /// Creates a new `SessionState`.
    ///
    /// # Args
    /// * `session` - The session to drive, usually fresh.
    /// * `predictor` - Where tickets are sent.
    pub fn new(session: Session, predictor: SharedPredictor) -> Self {
        let (tx, events) = mpsc::channel(EVENTS_CAPACITY);

        Self {
            session,
            predictor,
            tx,
            events,
            logs: vec![LogLine {
                level: "INFO",
                message: "fill in the form and press enter".into(),
            }],
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn logs(&self) -> &[LogLine] {
        &self.logs
    }

    /// Submits the form, spawning the request if it validates.
    pub fn submit(&mut self) -> Submission {
        let submission = self.session.submit();

        match submission {
            Submission::Ready(ticket) => {
                self.push_log(
                    "INFO",
                    format!(
                        "request {} sent ({})",
                        ticket.generation,
                        ticket.model.display_name()
                    ),
                );

                let predictor = Arc::clone(&self.predictor);
                let tx = self.tx.clone();
                thread::spawn(move || {
                    let outcome = predictor.predict(ticket.model, &ticket.input);
                    let event = PredictionEvent {
                        generation: ticket.generation,
                        outcome,
                    };
                    // The receiver only goes away with the screen.
                    let _ = tx.blocking_send(event);
                });
            }
            Submission::Invalid => {
                let missing = self.session.errors().len();
                self.push_log("WARN", format!("{missing} field(s) missing"));
            }
            Submission::Busy => {
                self.push_log("WARN", "a prediction is already running".into());
            }
        }

        submission
    }

    /// Drains all pending events and updates state. Non-blocking.
    ///
    /// Should be called once per TUI frame tick.
    pub fn tick(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.apply(event);
        }
    }

    fn apply(&mut self, event: PredictionEvent) {
        let PredictionEvent {
            generation,
            outcome,
        } = event;

        let line = match &outcome {
            Ok(result) => (
                "INFO",
                format!(
                    "request {generation}: {} ({})",
                    result.prediction.label(),
                    result.model.display_name()
                ),
            ),
            Err(e) => ("ERROR", format!("request {generation}: {e}")),
        };

        match self.session.complete(generation, outcome) {
            habits::Completion::Applied => self.push_log(line.0, line.1),
            habits::Completion::Stale => {
                self.push_log("WARN", format!("request {generation} ignored, outdated"))
            }
        }
    }

    fn push_log(&mut self, level: &'static str, message: String) {
        self.logs.push(LogLine { level, message });
        if self.logs.len() > MAX_LOGS {
            let drain = self.logs.len() - MAX_LOGS;
            self.logs.drain(0..drain);
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::{
        sync::Mutex,
        time::{Duration, Instant},
    };

    use habits::{
        Field, HealthStatus, ModelChoice, ModelName, Phase, PredictionInput, PredictionResult,
    };

    use super::*;

    /// Answers every request with the same label, echoing the input.
    pub(crate) struct Echo {
        pub prediction: HealthStatus,
        pub calls: Mutex<usize>,
    }

    impl Echo {
        pub(crate) fn new(prediction: HealthStatus) -> Arc<Self> {
            Arc::new(Self {
                prediction,
                calls: Mutex::new(0),
            })
        }
    }

    impl Predict for Echo {
        fn predict(
            &self,
            model: ModelChoice,
            input: &PredictionInput,
        ) -> Result<PredictionResult, ClientError> {
            *self.calls.lock().unwrap() += 1;
            let model = match model {
                ModelChoice::Lr => ModelName::LogisticRegression,
                ModelChoice::Rf => ModelName::RandomForest,
            };
            Ok(PredictionResult {
                model,
                input: *input,
                prediction: self.prediction,
            })
        }
    }

    /// Fails every request like a service answering 500.
    pub(crate) struct Failing;

    impl Predict for Failing {
        fn predict(
            &self,
            _model: ModelChoice,
            _input: &PredictionInput,
        ) -> Result<PredictionResult, ClientError> {
            Err(ClientError::RequestFailed { status: 500 })
        }
    }

    /// Ticks until the session leaves `Submitting`.
    pub(crate) fn settle(state: &mut SessionState) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while state.session().is_loading() && Instant::now() < deadline {
            state.tick();
            thread::sleep(Duration::from_millis(5));
        }
    }

    fn filled(predictor: SharedPredictor) -> SessionState {
        let mut state = SessionState::new(Session::default(), predictor);
        for field in Field::ALL {
            state.session_mut().set_field(field, Some(2.0));
        }
        state
    }

    #[test]
    fn background_request_lands_on_tick() {
        let echo = Echo::new(HealthStatus::Good);
        let mut state = filled(echo.clone());

        assert!(matches!(state.submit(), Submission::Ready(_)));
        assert!(state.session().is_loading());

        settle(&mut state);

        assert_eq!(state.session().phase(), Phase::ShowingResult);
        assert_eq!(
            state.session().result().map(|r| r.prediction),
            Some(HealthStatus::Good)
        );
        assert_eq!(*echo.calls.lock().unwrap(), 1);
    }

    #[test]
    fn failure_is_logged_and_noticed() {
        let mut state = filled(Arc::new(Failing));

        state.submit();
        settle(&mut state);

        assert_eq!(state.session().phase(), Phase::Idle);
        assert!(state.session().notice().is_some());
        assert_eq!(state.logs().last().map(|l| l.level), Some("ERROR"));
    }

    #[test]
    fn invalid_submit_spawns_nothing() {
        let echo = Echo::new(HealthStatus::Good);
        let mut state = SessionState::new(Session::default(), echo.clone());

        assert_eq!(state.submit(), Submission::Invalid);
        state.tick();

        assert_eq!(*echo.calls.lock().unwrap(), 0);
        assert_eq!(state.logs().last().map(|l| l.level), Some("WARN"));
    }
}
