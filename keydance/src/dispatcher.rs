//! Dance dispatch: apply the action registered for a finished dance, undo it on reset.

use heapless::Vec;

use crate::context::{Context, ContextResolver};
use crate::host::KeyboardHost;
use crate::keycode::HidKeyCode;
use crate::tap_dance::{DanceOutcome, DanceState};

/// Default capacity of a [`DanceActionTable`]
pub const DANCE_ACTION_MAX_NUM: usize = 8;

/// What a dance outcome does, as an (apply, undo) pair.
#[derive(Debug, Clone, Copy)]
pub enum DanceAction {
    /// Press a key on apply, release it on undo
    Key(HidKeyCode),
    /// Activate a layer on apply, deactivate it on undo
    Layer(u8),
    /// Press three keys in order on apply, release them in the same order on undo
    Chord([HidKeyCode; 3]),
    /// Arbitrary host side effects
    Custom {
        apply: fn(&mut dyn KeyboardHost),
        undo: fn(&mut dyn KeyboardHost),
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for DanceAction {
    fn format(&self, f: defmt::Formatter) {
        match self {
            DanceAction::Key(key) => defmt::write!(f, "Key({:?})", key),
            DanceAction::Layer(layer) => defmt::write!(f, "Layer({})", layer),
            DanceAction::Chord(keys) => defmt::write!(f, "Chord({:?})", keys),
            DanceAction::Custom { .. } => defmt::write!(f, "Custom"),
        }
    }
}

impl DanceAction {
    pub fn apply(&self, host: &mut dyn KeyboardHost) {
        match self {
            DanceAction::Key(key) => host.register_code(*key),
            DanceAction::Layer(layer) => host.layer_on(*layer),
            DanceAction::Chord(keys) => keys.iter().for_each(|key| host.register_code(*key)),
            DanceAction::Custom { apply, .. } => apply(host),
        }
    }

    pub fn undo(&self, host: &mut dyn KeyboardHost) {
        match self {
            DanceAction::Key(key) => host.unregister_code(*key),
            DanceAction::Layer(layer) => host.layer_off(*layer),
            DanceAction::Chord(keys) => keys.iter().for_each(|key| host.unregister_code(*key)),
            DanceAction::Custom { undo, .. } => undo(host),
        }
    }
}

/// Which contexts an action table entry applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ContextFilter {
    /// Every context, including layers without one
    Any,
    Only(Context),
}

impl ContextFilter {
    pub fn matches(self, context: Option<Context>) -> bool {
        match self {
            ContextFilter::Any => true,
            ContextFilter::Only(c) => context == Some(c),
        }
    }
}

#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DanceActionEntry {
    pub outcome: DanceOutcome,
    pub filter: ContextFilter,
    pub action: DanceAction,
}

/// Actions of a tap dance key, keyed by (outcome, context filter).
#[derive(Debug, Clone, Default)]
pub struct DanceActionTable<const N: usize = DANCE_ACTION_MAX_NUM> {
    entries: Vec<DanceActionEntry, N>,
}

impl<const N: usize> DanceActionTable<N> {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Builder form of [`DanceActionTable::register`]
    pub fn with(mut self, outcome: DanceOutcome, filter: ContextFilter, action: DanceAction) -> Self {
        self.register(outcome, filter, action);
        self
    }

    /// Register an action, replacing the one already registered for the same outcome and filter.
    pub fn register(&mut self, outcome: DanceOutcome, filter: ContextFilter, action: DanceAction) {
        if outcome == DanceOutcome::Unknown {
            warn!("Unknown dance outcome can't have an action");
            return;
        }
        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|e| e.outcome == outcome && e.filter == filter)
        {
            entry.action = action;
            return;
        }
        if self
            .entries
            .push(DanceActionEntry { outcome, filter, action })
            .is_err()
        {
            error!("Dance action table is full, dropping action for {:?}", outcome);
        }
    }

    /// Action for an outcome in a context. An exact context entry wins over an `Any` entry.
    pub fn lookup(&self, outcome: DanceOutcome, context: Option<Context>) -> Option<DanceAction> {
        if outcome == DanceOutcome::Unknown {
            return None;
        }
        let mut fallback = None;
        for entry in self.entries.iter().filter(|e| e.outcome == outcome) {
            match entry.filter {
                ContextFilter::Only(_) if entry.filter.matches(context) => return Some(entry.action),
                ContextFilter::Any => fallback = Some(entry.action),
                ContextFilter::Only(_) => {}
            }
        }
        fallback
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The outstanding outcome of a dance and the action applied for it.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DanceSession {
    outcome: Option<DanceOutcome>,
    applied: Option<DanceAction>,
}

impl DanceSession {
    pub fn outcome(&self) -> Option<DanceOutcome> {
        self.outcome
    }

    pub fn applied(&self) -> Option<DanceAction> {
        self.applied
    }

    /// Nothing outstanding
    pub fn is_empty(&self) -> bool {
        self.outcome.is_none()
    }
}

/// Applies dance actions on finish, undoes them on reset.
pub struct Dispatcher<R: ContextResolver, const N: usize = DANCE_ACTION_MAX_NUM> {
    resolver: R,
    table: DanceActionTable<N>,
    session: DanceSession,
}

impl<R: ContextResolver, const N: usize> Dispatcher<R, N> {
    pub fn new(resolver: R, table: DanceActionTable<N>) -> Self {
        Self {
            resolver,
            table,
            session: DanceSession::default(),
        }
    }

    pub fn session(&self) -> &DanceSession {
        &self.session
    }

    pub fn table(&self) -> &DanceActionTable<N> {
        &self.table
    }

    /// The dance finished: classify it and apply the action registered for the current context.
    pub fn on_finished<H: KeyboardHost>(&mut self, state: &DanceState, host: &mut H) {
        if !self.session.is_empty() {
            debug!("Discharging outstanding dance outcome {:?}", self.session.outcome);
            self.on_reset(host);
        }

        let outcome = state.outcome();
        let context = self.resolver.current(&*host);
        let action = self.table.lookup(outcome, context);
        debug!("Dance finished: {:?} in {:?}, action: {:?}", outcome, context, action);

        self.session.outcome = Some(outcome);
        self.session.applied = action;
        if let Some(action) = action {
            action.apply(host);
        }
    }

    /// The dance is over: undo whatever `on_finished` applied. Does nothing without an outstanding
    /// outcome.
    pub fn on_reset<H: KeyboardHost>(&mut self, host: &mut H) {
        if self.session.is_empty() {
            return;
        }
        if let Some(action) = self.session.applied {
            action.undo(host);
        }
        self.session = DanceSession::default();
    }
}
