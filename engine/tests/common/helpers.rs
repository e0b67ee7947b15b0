//! Helpers for driving whole conversations in tests

use std::sync::Arc;

use engine::{DialogueController, Previewer, RngChoiceSource, TemplateCatalog, TemplateResolver, Turn};
use shared::{SessionState, Step};

use super::fixtures::TestFixtures;

/// Test helper utilities
pub struct TestHelpers;

impl TestHelpers {
    pub fn builtin_catalog() -> Arc<TemplateCatalog> {
        Arc::new(TemplateCatalog::builtin().unwrap())
    }

    pub fn previewer() -> Previewer {
        Previewer::new(TemplateResolver::new(Self::builtin_catalog()))
    }

    /// Numeric position of a step along the dialogue sequence
    pub fn ordinal(step: Step) -> u8 {
        match step {
            Step::Welcome => 0,
            Step::BusinessType => 1,
            Step::BusinessName => 2,
            Step::Description => 3,
            Step::Customization => 4,
            Step::Finalize => 5,
        }
    }
}

/// Drives a session through the controller, keeping every turn
pub struct Conversation {
    controller: DialogueController,
    choices: RngChoiceSource,
    pub state: SessionState,
    pub turns: Vec<Turn>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::seeded(TestFixtures::SEED)
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            controller: DialogueController::new(),
            choices: RngChoiceSource::seeded(seed),
            state: SessionState::new(),
            turns: Vec::new(),
        }
    }

    pub fn say(&mut self, text: &str) -> &Turn {
        let turn = self.controller.next_turn(self.state.clone(), text, &mut self.choices);
        self.state = turn.state.clone();
        self.turns.push(turn);
        self.turns.last().unwrap()
    }

    pub fn say_all(&mut self, texts: &[&str]) -> &mut Self {
        for text in texts {
            self.say(text);
        }
        self
    }
}
