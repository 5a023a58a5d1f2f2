use std::collections::VecDeque;

use crate::config::Strategy;
use crate::state::State;

/// How freshly generated states are placed into the queue. The pop side is
/// always the front, so insertion alone decides the strategy's character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Order {
    /// append - breadth-first
    Fifo,
    /// prepend the whole batch, keeping its expansion order - depth-first
    Lifo,
    /// stable insert ordered by `total_cost` - uniform-cost
    Cost,
    /// stable insert ordered by `hscore` - greedy and A*
    Score,
}

/// The open list. A deque rather than a heap so that equal-priority entries
/// keep their generation order - the stable tie-break the statistics of all
/// strategies depend on.
#[derive(Debug)]
pub(crate) struct Frontier {
    queue: VecDeque<State>,
    order: Order,
}

impl Frontier {
    pub(crate) fn new(strategy: Strategy) -> Frontier {
        let order = match strategy {
            Strategy::Bfs => Order::Fifo,
            Strategy::Dfs => Order::Lifo,
            Strategy::Ucs => Order::Cost,
            Strategy::GreedyH1 | Strategy::GreedyH2 | Strategy::AStarH1 | Strategy::AStarH2 => {
                Order::Score
            }
        };
        Frontier {
            queue: VecDeque::new(),
            order,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.queue.len()
    }

    pub(crate) fn pop(&mut self) -> Option<State> {
        self.queue.pop_front()
    }

    /// Inserts a batch of children (already deduplicated) according to the
    /// ordering policy. The batch must be in expansion order.
    pub(crate) fn extend(&mut self, children: Vec<State>) {
        match self.order {
            Order::Fifo => self.queue.extend(children),
            Order::Lifo => {
                // reversed so the batch sits at the front in its own order
                for child in children.into_iter().rev() {
                    self.queue.push_front(child);
                }
            }
            Order::Cost => {
                for child in children {
                    self.insert_ordered(child, |state| state.total_cost);
                }
            }
            Order::Score => {
                for child in children {
                    self.insert_ordered(child, |state| state.hscore);
                }
            }
        }
    }

    /// Before the first entry with a strictly greater key, else at the back -
    /// FIFO among equal keys.
    fn insert_ordered<K: Fn(&State) -> i32>(&mut self, state: State, key: K) {
        let new_key = key(&state);
        match self.queue.iter().position(|queued| key(queued) > new_key) {
            Some(i) => self.queue.insert(i, state),
            None => self.queue.push_back(state),
        }
    }
}
