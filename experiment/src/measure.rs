use std::fmt;
use std::time::{Duration, Instant};

use unbalanced_bst::OrderedContainer;

/// The operation being timed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Insert,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Insert => write!(f, "insert"),
            Operation::Delete => write!(f, "delete"),
        }
    }
}

/// Applies `operation` to every key in order and returns the wall-clock time it took
pub fn measure<T, C>(operation: Operation, container: &mut C, keys: &[T]) -> Duration
    where T: Copy,
          C: OrderedContainer<T>,
{
    let start = Instant::now();
    match operation {
        Operation::Insert => {
            for &key in keys {
                container.insert(key);
            }
        },

        Operation::Delete => {
            for key in keys {
                container.delete(key);
            }
        },
    }
    let elapsed = start.elapsed();

    log::trace!("{} of {} keys on {} took {:?}", operation, keys.len(), C::NAME, elapsed);
    elapsed
}
