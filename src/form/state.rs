use crate::domain::{field_text, next_identifier, DisplayState, EmptyInputPolicy, Identifier, UserRecord};
use crate::fetcher::FetchError;
use super::FormError;

/// Sequence number of an issued fetch. Later fetches carry larger tokens.
pub type RequestToken = u64;

/// Inputs that drive the form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// The identifier field's raw text changed.
    InputChanged(String),
    /// A previously issued fetch completed.
    FetchResolved {
        token: RequestToken,
        result: Result<UserRecord, FetchError>,
    },
}

/// What the owner of the state has to do after an event.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Input was not a valid identifier; the field keeps its previous value.
    Rejected,
    /// A fetch resolved after a newer one was issued and was ignored.
    Discarded { token: RequestToken },
}

/// A fetch the form has issued and is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingFetch {
    pub token: RequestToken,
    pub identifier: Identifier,
}

/// Read-only view of the form handed to renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSnapshot {
    pub field: String,
    pub identifier: Option<Identifier>,
    pub display: DisplayState,
    pub loading: bool,
}

/// Complete state of the form: the identifier field, the record display
/// and the most recently issued fetch.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    identifier: Option<Identifier>,
    display: DisplayState,
    pending: Option<PendingFetch>,
    last_issued: RequestToken,
    policy: EmptyInputPolicy,
}

impl FormState {
    pub fn new(policy: EmptyInputPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    pub fn pending(&self) -> Option<PendingFetch> {
        self.pending
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            field: field_text(self.identifier),
            identifier: self.identifier,
            display: self.display.clone(),
            loading: self.is_loading(),
        }
    }

    /// Applies `event` and returns the follow-up work it requires.
    pub fn handle(&mut self, event: FormEvent) -> Effect {
        match event {
            FormEvent::InputChanged(raw) => self.on_input(&raw),
            FormEvent::FetchResolved { token, result } => self.on_resolved(token, result),
        }
    }

    /// Issues a fetch for the current identifier, or refuses while the field is empty.
    pub fn submit(&mut self) -> Result<PendingFetch, FormError> {
        let identifier = self.identifier.ok_or(FormError::IdentifierRequired)?;
        Ok(self.issue(identifier))
    }

    /// Issues a fetch for `identifier` without touching the field.
    pub fn load(&mut self, identifier: Identifier) -> PendingFetch {
        self.issue(identifier)
    }

    fn on_input(&mut self, raw: &str) -> Effect {
        let accepted = Identifier::parse(raw).is_some()
            || (raw.trim().is_empty() && self.policy == EmptyInputPolicy::Clear);
        self.identifier = next_identifier(self.identifier, raw, self.policy);
        if accepted {
            Effect::None
        } else {
            Effect::Rejected
        }
    }

    fn issue(&mut self, identifier: Identifier) -> PendingFetch {
        self.last_issued += 1;
        let fetch = PendingFetch { token: self.last_issued, identifier };
        self.pending = Some(fetch);
        fetch
    }

    fn on_resolved(&mut self, token: RequestToken, result: Result<UserRecord, FetchError>) -> Effect {
        let pending = match self.pending {
            Some(pending) if pending.token == token => pending,
            _ => return Effect::Discarded { token },
        };
        self.pending = None;
        self.display = match result {
            Ok(record) => DisplayState::Loaded(record),
            Err(e) => DisplayState::Failed {
                identifier: pending.identifier,
                reason: e.to_string(),
            },
        };
        Effect::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(value: i64) -> Identifier {
        Identifier::new(value).unwrap()
    }

    fn leanne() -> UserRecord {
        UserRecord::new("Leanne Graham", "Sincere@april.biz", "Bret")
    }

    fn ervin() -> UserRecord {
        UserRecord::new("Ervin Howell", "Shanna@melissa.tv", "Antonette")
    }

    fn input(state: &mut FormState, raw: &str) -> Effect {
        state.handle(FormEvent::InputChanged(raw.to_string()))
    }

    #[test]
    fn starts_unset_without_identifier() {
        let state = FormState::new(EmptyInputPolicy::Retain);
        let snapshot = state.snapshot();
        assert_eq!(snapshot.field, "");
        assert_eq!(snapshot.display, DisplayState::Unset);
        assert!(!snapshot.loading);
    }

    #[test]
    fn submit_without_identifier_is_refused() {
        let mut state = FormState::default();
        assert_eq!(state.submit(), Err(FormError::IdentifierRequired));
        assert!(!state.is_loading());
    }

    #[test]
    fn submit_with_identifier_issues_fetch() {
        let mut state = FormState::default();
        assert_eq!(input(&mut state, "2"), Effect::None);
        assert_eq!(state.submit(), Ok(PendingFetch { token: 1, identifier: id(2) }));
        assert_eq!(state.pending(), Some(PendingFetch { token: 1, identifier: id(2) }));
    }

    #[test]
    fn rejected_input_keeps_field_text() {
        let mut state = FormState::default();
        input(&mut state, "5");
        for raw in ["0", "11", "a", "a?", "", "look it's whatever, strings fail"] {
            assert_eq!(input(&mut state, raw), Effect::Rejected, "{raw}");
            assert_eq!(state.snapshot().field, "5");
        }
    }

    #[test]
    fn clear_policy_empties_identifier_and_closes_gate() {
        let mut state = FormState::new(EmptyInputPolicy::Clear);
        input(&mut state, "5");
        assert_eq!(input(&mut state, ""), Effect::None);
        assert_eq!(state.snapshot().identifier, None);
        assert_eq!(state.submit(), Err(FormError::IdentifierRequired));
    }

    #[test]
    fn direct_submit_and_load_return_the_issued_fetch() {
        let mut state = FormState::default();
        assert_eq!(state.submit(), Err(FormError::IdentifierRequired));
        assert_eq!(state.load(id(1)), PendingFetch { token: 1, identifier: id(1) });

        input(&mut state, "4");
        assert_eq!(state.submit(), Ok(PendingFetch { token: 2, identifier: id(4) }));
        assert_eq!(state.pending(), Some(PendingFetch { token: 2, identifier: id(4) }));
    }

    #[test]
    fn load_does_not_fill_the_field() {
        let mut state = FormState::default();
        assert_eq!(state.load(id(1)), PendingFetch { token: 1, identifier: id(1) });
        assert_eq!(state.snapshot().field, "");
    }

    #[test]
    fn resolution_replaces_display() {
        let mut state = FormState::default();
        state.load(id(1));
        state.handle(FormEvent::FetchResolved { token: 1, result: Ok(leanne()) });
        assert_eq!(state.display(), &DisplayState::Loaded(leanne()));
        assert!(!state.is_loading());

        input(&mut state, "2");
        state.submit().unwrap();
        assert!(state.is_loading());
        assert_eq!(state.display(), &DisplayState::Loaded(leanne()));

        state.handle(FormEvent::FetchResolved { token: 2, result: Ok(ervin()) });
        assert_eq!(state.display(), &DisplayState::Loaded(ervin()));
    }

    #[test]
    fn stale_resolution_is_discarded() {
        let mut state = FormState::default();
        input(&mut state, "1");
        state.submit().unwrap();
        input(&mut state, "2");
        state.submit().unwrap();

        let newer = state.handle(FormEvent::FetchResolved { token: 2, result: Ok(ervin()) });
        assert_eq!(newer, Effect::None);
        let older = state.handle(FormEvent::FetchResolved { token: 1, result: Ok(leanne()) });
        assert_eq!(older, Effect::Discarded { token: 1 });
        assert_eq!(state.display(), &DisplayState::Loaded(ervin()));
    }

    #[test]
    fn older_resolution_before_newer_does_not_end_loading() {
        let mut state = FormState::default();
        state.load(id(1));
        input(&mut state, "3");
        state.submit().unwrap();

        state.handle(FormEvent::FetchResolved { token: 1, result: Ok(leanne()) });
        assert_eq!(state.display(), &DisplayState::Unset);
        assert!(state.is_loading());
    }

    #[test]
    fn duplicate_resolution_is_discarded() {
        let mut state = FormState::default();
        state.load(id(1));
        state.handle(FormEvent::FetchResolved { token: 1, result: Ok(leanne()) });
        let again = state.handle(FormEvent::FetchResolved { token: 1, result: Err(FetchError::Status(500)) });
        assert_eq!(again, Effect::Discarded { token: 1 });
        assert_eq!(state.display(), &DisplayState::Loaded(leanne()));
    }

    #[test]
    fn failure_is_surfaced() {
        let mut state = FormState::default();
        input(&mut state, "7");
        state.submit().unwrap();
        state.handle(FormEvent::FetchResolved { token: 1, result: Err(FetchError::Status(404)) });
        assert_eq!(
            state.display(),
            &DisplayState::Failed {
                identifier: id(7),
                reason: "User service returned status 404".to_string(),
            }
        );
    }
}
