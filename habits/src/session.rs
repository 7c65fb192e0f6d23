use crate::{
    client::Predict,
    error::ClientError,
    form::{Field, FormState, ModelChoice},
    validate::{FormErrors, PresenceRule, validate},
    wire::{PredictionInput, PredictionResult},
};

/// Notice shown when a prediction round trip fails for any reason.
pub const PREDICTION_FAILED: &str = "Error calculating prediction. Please try again.";

/// Lifecycle of the form view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing submitted successfully yet.
    ShowingMetrics,
    Validating,
    Submitting,
    /// Back at rest after a rejected or failed submit.
    Idle,
    ShowingResult,
}

/// What the result pane should display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pane<'a> {
    Metrics,
    Result(&'a PredictionResult),
}

/// A validated request handed out by [`Session::submit`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ticket {
    pub generation: u64,
    pub model: ModelChoice,
    pub input: PredictionInput,
}

/// Outcome of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Submission {
    /// Validation failed, see [`Session::errors`].
    Invalid,
    /// A request is already in flight, nothing was done.
    Busy,
    /// The caller must run the ticket and report back with [`Session::complete`].
    Ready(Ticket),
}

/// Whether a reported outcome was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// The outcome belongs to a request that is no longer the latest one.
    Stale,
}

/// Owns the form, its errors and the last prediction, and drives the
/// submit cycle.
///
/// The session never performs I/O on its own: [`Session::submit`] hands out
/// a [`Ticket`] and the caller reports the outcome, so the same state machine
/// works inline or with the request running on another thread.
#[derive(Debug, Clone)]
pub struct Session {
    form: FormState,
    rule: PresenceRule,
    errors: FormErrors,
    notice: Option<&'static str>,
    phase: Phase,
    loading: bool,
    show_result: bool,
    result: Option<PredictionResult>,
    generation: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(PresenceRule::default())
    }
}

impl Session {
    /// Creates a new `Session` with an empty form.
    ///
    /// # Args
    /// * `rule` - What the validator treats as a missing value.
    pub fn new(rule: PresenceRule) -> Self {
        Self {
            form: FormState::new(),
            rule,
            errors: FormErrors::new(),
            notice: None,
            phase: Phase::ShowingMetrics,
            loading: false,
            show_result: false,
            result: None,
            generation: 0,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Mutable access for keystrokes and selections.
    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub fn set_field(&mut self, field: Field, value: Option<f64>) {
        self.form.set(field, value);
    }

    pub fn set_model(&mut self, model: ModelChoice) {
        self.form.set_model(model);
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    /// Top-level message about the last submit, separate from field errors.
    pub fn notice(&self) -> Option<&'static str> {
        self.notice
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn shows_result(&self) -> bool {
        self.show_result
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        self.result.as_ref()
    }

    /// Generation of the most recent ticket, `0` before the first one.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn pane(&self) -> Pane<'_> {
        match (&self.result, self.show_result) {
            (Some(result), true) => Pane::Result(result),
            _ => Pane::Metrics,
        }
    }

    /// Unsets every field and forgets errors and notice. A shown result stays.
    pub fn clear_form(&mut self) {
        self.form.clear();
        self.errors.clear();
        self.notice = None;
    }

    /// Validates the form and, if it is complete, starts a request.
    ///
    /// # Returns
    /// [`Submission::Ready`] with the ticket to run, or why nothing was started.
    pub fn submit(&mut self) -> Submission {
        if self.loading {
            log::warn!("submit ignored, request {} still in flight", self.generation);
            return Submission::Busy;
        }

        self.phase = Phase::Validating;
        self.notice = None;
        self.errors = validate(&self.form, self.rule);

        if !self.errors.is_empty() {
            log::info!("submit rejected, {} field(s) missing", self.errors.len());
            self.phase = Phase::Idle;
            return Submission::Invalid;
        }

        // Both rules reject unset fields, so a validated form always converts.
        let Some(input) = self.form.to_input() else {
            self.phase = Phase::Idle;
            return Submission::Invalid;
        };

        self.generation += 1;
        self.loading = true;
        self.phase = Phase::Submitting;

        let ticket = Ticket {
            generation: self.generation,
            model: self.form.model(),
            input,
        };
        log::info!(
            "submitting request {} with model {}",
            ticket.generation,
            ticket.model.code()
        );

        Submission::Ready(ticket)
    }

    /// Applies the outcome of a ticket.
    ///
    /// # Args
    /// * `generation` - The generation of the ticket that produced `outcome`.
    /// * `outcome` - What the prediction client returned.
    ///
    /// # Returns
    /// [`Completion::Stale`] if the ticket is not the one in flight.
    pub fn complete(
        &mut self,
        generation: u64,
        outcome: Result<PredictionResult, ClientError>,
    ) -> Completion {
        if !self.loading || generation != self.generation {
            log::warn!(
                "dropping outcome of request {generation}, latest is {}",
                self.generation
            );
            return Completion::Stale;
        }

        self.loading = false;

        match outcome {
            Ok(result) => {
                log::info!(
                    "request {generation} predicted {} with {}",
                    result.prediction.label(),
                    result.model.display_name()
                );
                self.result = Some(result);
                self.show_result = true;
                self.notice = None;
                self.phase = Phase::ShowingResult;
            }
            Err(e) => {
                log::warn!("request {generation} failed: {e}");
                self.notice = Some(PREDICTION_FAILED);
                self.phase = Phase::Idle;
            }
        }

        Completion::Applied
    }

    /// Runs a whole submit cycle on the calling thread.
    ///
    /// # Returns
    /// The phase the session ended in.
    pub fn submit_with<P: Predict + ?Sized>(&mut self, predictor: &P) -> Phase {
        if let Submission::Ready(ticket) = self.submit() {
            let outcome = predictor.predict(ticket.model, &ticket.input);
            self.complete(ticket.generation, outcome);
        }

        self.phase
    }
}
