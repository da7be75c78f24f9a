use crate::algorithm::codec::NodeCodec;

/// When the search stops.
pub enum Goal<'a, N> {
    /// Stop at this node, compared by serialized key
    Node(N),
    /// Stop at the first node the predicate accepts
    Predicate(Box<dyn FnMut(&N) -> bool + 'a>),
    /// Never stop; exhaust the reachable frontier
    Never,
}

impl<'a, N> Goal<'a, N> {
    pub fn node(target: N) -> Self {
        Goal::Node(target)
    }

    /// Goal satisfied by any node matching `pred`, e.g. "any cell on the far edge"
    pub fn when<F>(pred: F) -> Self
    where
        F: FnMut(&N) -> bool + 'a,
    {
        Goal::Predicate(Box::new(pred))
    }

    /// Resolves a fixed target to its key once, up front
    pub(crate) fn matcher<C>(self, codec: &C) -> GoalMatcher<'a, N, C::Key>
    where
        C: NodeCodec<N>,
    {
        match self {
            Goal::Node(target) => GoalMatcher::Key(codec.serialize(&target)),
            Goal::Predicate(pred) => GoalMatcher::Predicate(pred),
            Goal::Never => GoalMatcher::Never,
        }
    }
}

impl<N: std::fmt::Debug> std::fmt::Debug for Goal<'_, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Goal::Node(target) => f.debug_tuple("Node").field(target).finish(),
            Goal::Predicate(_) => f.write_str("Predicate(..)"),
            Goal::Never => f.write_str("Never"),
        }
    }
}

pub(crate) enum GoalMatcher<'a, N, K> {
    Key(K),
    Predicate(Box<dyn FnMut(&N) -> bool + 'a>),
    Never,
}

impl<N, K: PartialEq> GoalMatcher<'_, N, K> {
    pub(crate) fn is_reached(&mut self, node: &N, key: &K) -> bool {
        match self {
            GoalMatcher::Key(target) => target == key,
            GoalMatcher::Predicate(pred) => pred(node),
            GoalMatcher::Never => false,
        }
    }
}
