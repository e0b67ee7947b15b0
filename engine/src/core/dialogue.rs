//! Finite-state dialogue controller
//!
//! The controller owns no state. Each call consumes the caller's session
//! snapshot plus the latest user text and returns the next snapshot together
//! with a scripted response. Steps only ever move forward along
//! welcome → business_name → description → customization → finalize, and the
//! classification steps hold in place when nothing matched.

use shared::{
    Action, BotResponse, Category, ComponentId, SessionSnapshot, SessionState, SharedError, Step,
    component_debug,
};

use super::classifier::classify;
use super::phrases::{self, DelayWindow};
use super::quick_actions::QuickAction;
use crate::error::{EngineError, EngineResult};
use crate::traits::ChoiceSource;

/// Output of one dialogue turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub state: SessionState,
    pub response: BotResponse,
}

/// Maps user turns to state transitions and scripted replies
#[derive(Debug, Clone, Copy, Default)]
pub struct DialogueController;

impl DialogueController {
    pub fn new() -> Self {
        Self
    }

    /// Checked entry point for snapshots arriving from a caller
    ///
    /// Fails with [`EngineError::InvalidState`] when the snapshot's step is
    /// not part of the dialogue sequence; the caller's state is untouched.
    pub fn advance<C>(&self, snapshot: SessionSnapshot, text: &str, choices: &mut C) -> EngineResult<Turn>
    where
        C: ChoiceSource + ?Sized,
    {
        let state = self.restore(snapshot)?;
        Ok(self.next_turn(state, text, choices))
    }

    /// Turn a caller-held snapshot back into a typed session
    pub fn restore(&self, snapshot: SessionSnapshot) -> EngineResult<SessionState> {
        SessionState::try_from(snapshot).map_err(|err| match err {
            SharedError::UnknownStep { step } => EngineError::InvalidState { step },
            other => EngineError::SharedError(other),
        })
    }

    /// Run one turn of the dialogue
    pub fn next_turn<C>(&self, state: SessionState, text: &str, choices: &mut C) -> Turn
    where
        C: ChoiceSource + ?Sized,
    {
        match state.step {
            Step::Welcome | Step::BusinessType => self.classification_turn(state, text, choices),
            Step::BusinessName => {
                let message = pick(phrases::step_pool(Step::BusinessName), choices)
                    .replace(phrases::BUSINESS_TYPE_TOKEN, &state.business_type);
                let next = SessionState {
                    step: Step::Description,
                    business_name: text.to_string(),
                    ..state
                };
                respond(next, message, Action::RequestInfo, None, phrases::BUSINESS_NAME_DELAY, choices)
            }
            Step::Description => {
                let message = pick(phrases::step_pool(Step::Description), choices).to_string();
                let next = SessionState {
                    step: Step::Customization,
                    description: text.to_string(),
                    ..state
                };
                respond(next, message, Action::ShowTemplate, None, phrases::DESCRIPTION_DELAY, choices)
            }
            Step::Customization => {
                let message = pick(phrases::step_pool(Step::Customization), choices).to_string();
                let next = SessionState {
                    step: Step::Finalize,
                    ..state
                };
                respond(next, message, Action::Customize, None, phrases::CUSTOMIZATION_DELAY, choices)
            }
            Step::Finalize => {
                let message = pick(phrases::step_pool(Step::Finalize), choices).to_string();
                respond(state, message, Action::Finalize, None, phrases::FINALIZE_DELAY, choices)
            }
        }
    }

    /// Start from a quick-action suggestion
    ///
    /// Outside the classification steps this is an ordinary turn with the
    /// suggestion's label as the user text.
    pub fn quick_start<C>(&self, state: SessionState, action: QuickAction, choices: &mut C) -> Turn
    where
        C: ChoiceSource + ?Sized,
    {
        if !state.step.is_classification() {
            return self.next_turn(state, action.label(), choices);
        }

        let category = action.category();
        component_debug!(ComponentId::Engine, category = %category, "Quick action selected");
        let next = classified_state(state, category);
        respond(
            next,
            action.reply().to_string(),
            Action::RequestInfo,
            Some(category),
            phrases::QUICK_ACTION_DELAY,
            choices,
        )
    }

    fn classification_turn<C>(&self, state: SessionState, text: &str, choices: &mut C) -> Turn
    where
        C: ChoiceSource + ?Sized,
    {
        match classify(text) {
            Some(category) => {
                component_debug!(ComponentId::Engine, category = %category, "Classified business type");
                let mut message = pick(phrases::category_pool(category), choices).to_string();
                message.push_str(&phrases::name_question(category));
                let next = classified_state(state, category);
                respond(
                    next,
                    message,
                    Action::RequestInfo,
                    Some(category),
                    phrases::CLASSIFIED_DELAY,
                    choices,
                )
            }
            None => {
                component_debug!(ComponentId::Engine, step = %state.step, "No business type matched, re-prompting");
                respond(
                    state,
                    phrases::CLARIFICATION.to_string(),
                    Action::None,
                    None,
                    phrases::CLARIFICATION_DELAY,
                    choices,
                )
            }
        }
    }
}

fn classified_state(state: SessionState, category: Category) -> SessionState {
    SessionState {
        step: Step::BusinessName,
        business_type: category.label().to_string(),
        ..state
    }
}

fn pick<C>(pool: &'static [&'static str], choices: &mut C) -> &'static str
where
    C: ChoiceSource + ?Sized,
{
    let index = choices.pick(pool.len()).min(pool.len() - 1);
    pool[index]
}

fn respond<C>(
    state: SessionState,
    message: String,
    action: Action,
    template_category: Option<Category>,
    window: DelayWindow,
    choices: &mut C,
) -> Turn
where
    C: ChoiceSource + ?Sized,
{
    let delay = if window.min_ms == window.max_ms {
        window.min_ms
    } else {
        choices.delay_between(window.min_ms, window.max_ms)
    };

    Turn {
        state,
        response: BotResponse {
            message,
            action,
            template_category,
            delay,
        },
    }
}
