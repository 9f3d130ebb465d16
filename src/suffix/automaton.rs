//! Online suffix-automaton construction.

use smallvec::SmallVec;

/// Handle of a state inside a [`SuffixAutomaton`].
///
/// States live in an arena owned by the automaton and are compared by
/// handle; the absent state (the initial state's suffix link, a missing
/// transition) is `Option::<StateId>::None`.
pub type StateId = usize;

const INITIAL: StateId = 0;

/// A state of the automaton: one equivalence class of factors.
///
/// All factors in the class share their set of end positions; `len` is the
/// length of the longest of them.
#[derive(Debug, Clone)]
pub struct State {
    /// Length of the longest factor in this class.
    len: usize,

    /// End-position witness: start index of the longest factor at its
    /// first recorded occurrence. Kept for callers; construction and
    /// queries never read it.
    index: usize,

    /// Suffix link: the state of the longest proper suffix of this class's
    /// longest factor that falls outside the class. `None` only for the
    /// initial state.
    slink: Option<StateId>,

    /// Outgoing transitions, sorted by symbol.
    ///
    /// Out-degrees are tiny in practice; the inline capacity covers the
    /// common case without heap traffic.
    delta: SmallVec<[(u8, StateId); 4]>,

    /// Whether the longest factor of this class is a suffix of the text.
    is_final: bool,
}

impl State {
    fn new(len: usize) -> Self {
        Self {
            len,
            index: 0,
            slink: None,
            delta: SmallVec::new(),
            is_final: false,
        }
    }

    /// Length of the longest factor recognised at this state.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether this is the initial state (the empty factor only).
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// End-position witness of the class (see the field docs).
    pub fn witness_index(&self) -> usize {
        self.index
    }

    /// The suffix link, `None` for the initial state.
    pub fn suffix_link(&self) -> Option<StateId> {
        self.slink
    }

    /// Whether the longest factor of this class is a suffix of the text.
    pub fn is_final(&self) -> bool {
        self.is_final
    }

    /// Outgoing transitions as `(symbol, target)` pairs, sorted by symbol.
    pub fn transitions(&self) -> &[(u8, StateId)] {
        &self.delta
    }

    /// Target of the transition on `symbol`, if present.
    pub fn transition(&self, symbol: u8) -> Option<StateId> {
        if self.delta.len() < 16 {
            self.delta
                .iter()
                .find(|(s, _)| *s == symbol)
                .map(|(_, target)| *target)
        } else {
            self.delta
                .binary_search_by_key(&symbol, |(s, _)| *s)
                .ok()
                .map(|slot| self.delta[slot].1)
        }
    }

    /// Add or overwrite the transition on `symbol`, keeping sort order.
    fn set_transition(&mut self, symbol: u8, target: StateId) {
        match self.delta.binary_search_by_key(&symbol, |(s, _)| *s) {
            Ok(slot) => self.delta[slot].1 = target,
            Err(slot) => self.delta.insert(slot, (symbol, target)),
        }
    }
}

/// The minimal deterministic automaton recognising every factor of a
/// string.
///
/// Built online over the text; immutable afterwards. States form an arena
/// (`Vec`) addressed by [`StateId`], with state 0 the initial state. The
/// suffix-link relation is a tree rooted at the initial state with `len`
/// strictly decreasing toward the root; the final states are exactly the
/// classes whose longest factor is a suffix of the text.
///
/// ```rust
/// use liblevelancestor::suffix::SuffixAutomaton;
///
/// let sam = SuffixAutomaton::from_text("abb");
/// assert_eq!(sam.state_count(), 5);
/// assert!(sam.contains_factor("bb"));
/// assert!(!sam.contains_factor("ba"));
/// ```
#[derive(Debug, Clone)]
pub struct SuffixAutomaton {
    states: Vec<State>,
}

impl SuffixAutomaton {
    /// Build the automaton of `text`.
    pub fn from_text(text: &str) -> Self {
        Self::from_bytes(text.as_bytes())
    }

    /// Build the automaton of a byte string.
    pub fn from_bytes(text: &[u8]) -> Self {
        let mut initial = State::new(0);
        initial.is_final = true; // the empty factor is a suffix
        let mut automaton = Self {
            states: vec![initial],
        };

        let mut last = INITIAL;
        for (position, &symbol) in text.iter().enumerate() {
            last = automaton.extend(last, position, symbol);
        }

        // The suffixes of the text are exactly the classes on the suffix
        // link chain of the last state.
        let mut cursor = Some(last);
        while let Some(state) = cursor {
            automaton.states[state].is_final = true;
            cursor = automaton.states[state].slink;
        }

        automaton
    }

    /// Append one symbol to the recognised text.
    ///
    /// Returns the state of the new whole text.
    fn extend(&mut self, last: StateId, position: usize, symbol: u8) -> StateId {
        let created = self.states.len();
        self.states.push(State::new(position + 1));

        let stem = self.find_stem(last, created, symbol);
        let clone = self.split_class(stem, created, symbol);
        self.redirect_transitions(stem, clone, symbol);

        if let Some(clone) = clone {
            let len = self.states[clone].len;
            self.states[clone].index = position + 1 - len;
        }

        created
    }

    /// Walk the suffix-link chain from `from`, wiring each state without a
    /// transition on `symbol` to `target`.
    ///
    /// Returns the first state on the chain that already had one, or
    /// `None` if the chain was exhausted.
    fn find_stem(&mut self, from: StateId, target: StateId, symbol: u8) -> Option<StateId> {
        let mut cursor = Some(from);
        while let Some(state) = cursor {
            if self.states[state].transition(symbol).is_some() {
                return Some(state);
            }
            self.states[state].set_transition(symbol, target);
            cursor = self.states[state].slink;
        }
        None
    }

    /// Choose the suffix link of the freshly created state, cloning the
    /// stem's successor when its class has to be split.
    ///
    /// `stem` is the state returned by [`Self::find_stem`], so when it is
    /// present its transition on `symbol` is guaranteed to exist. The
    /// successor is the canonical representative of its class only if its
    /// `len` is exactly `stem.len + 1`; otherwise a clone with the shorter
    /// `len` takes over as representative: it inherits the successor's
    /// transitions and suffix link, and slots between the successor and
    /// its old suffix link.
    fn split_class(
        &mut self,
        stem: Option<StateId>,
        created: StateId,
        symbol: u8,
    ) -> Option<StateId> {
        let Some(stem) = stem else {
            self.states[created].slink = Some(INITIAL);
            return None;
        };

        let successor = self.states[stem].transition(symbol).unwrap();
        if self.states[successor].len == self.states[stem].len + 1 {
            self.states[created].slink = Some(successor);
            return None;
        }

        let clone = self.states.len();
        let mut split = State::new(self.states[stem].len + 1);
        split.delta = self.states[successor].delta.clone();
        split.slink = self.states[successor].slink;
        self.states.push(split);

        self.states[successor].slink = Some(clone);
        self.states[created].slink = Some(clone);
        Some(clone)
    }

    /// After a split, repoint the transitions that used to enter the split
    /// state.
    ///
    /// The predecessors sharing the transition form a contiguous segment
    /// of the suffix-link chain starting at the stem, so the walk stops at
    /// the first state whose transition differs.
    fn redirect_transitions(
        &mut self,
        stem: Option<StateId>,
        clone: Option<StateId>,
        symbol: u8,
    ) {
        let (Some(stem), Some(clone)) = (stem, clone) else {
            return;
        };
        let Some(split) = self.states[stem].transition(symbol) else {
            return;
        };

        let mut cursor = Some(stem);
        while let Some(state) = cursor {
            if self.states[state].transition(symbol) != Some(split) {
                break;
            }
            self.states[state].set_transition(symbol, clone);
            cursor = self.states[state].slink;
        }
    }

    /// The initial state.
    pub fn initial(&self) -> StateId {
        INITIAL
    }

    /// The state reached by reading `word` from the initial state.
    pub fn walk_bytes(&self, word: &[u8]) -> Option<StateId> {
        let mut state = INITIAL;
        for &symbol in word {
            state = self.states[state].transition(symbol)?;
        }
        Some(state)
    }

    /// Whether `factor` occurs anywhere in the indexed text.
    ///
    /// Every reachable state recognises a factor, so the walk alone
    /// decides.
    pub fn contains_factor(&self, factor: &str) -> bool {
        self.walk_bytes(factor.as_bytes()).is_some()
    }

    /// Whether `word` is a suffix of the indexed text.
    pub fn is_suffix(&self, word: &str) -> bool {
        self.walk_bytes(word.as_bytes())
            .map(|state| self.states[state].is_final)
            .unwrap_or(false)
    }

    /// The state with the given handle, if it exists.
    pub fn state(&self, id: StateId) -> Option<&State> {
        self.states.get(id)
    }

    /// All states as `(handle, state)` pairs.
    pub fn states(&self) -> impl Iterator<Item = (StateId, &State)> {
        self.states.iter().enumerate()
    }

    /// Number of states.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Total number of transitions.
    pub fn transition_count(&self) -> usize {
        self.states.iter().map(|state| state.delta.len()).sum()
    }
}
