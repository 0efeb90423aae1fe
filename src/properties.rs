//! Properties and orders of [`BinaryRelation`]s.
//!
//! Every check is universally quantified over the universe of the relation, and queries the
//! relation through [`BinaryRelation::contains_relation`] only.

use crate::prelude::*;
use crossbeam::channel;
use std::{
    num::NonZeroUsize,
    sync::atomic::{AtomicBool, Ordering as AtomicOrdering},
    thread,
};

/// xRx for every x.
#[must_use]
pub fn reflexive<R: BinaryRelation + ?Sized>(relation: &R) -> bool {
    relation
        .universe()
        .iter()
        .all(|x| relation.contains_relation(x, x))
}

/// xRy or yRx for every x, y.
#[must_use]
pub fn complete<R: BinaryRelation + ?Sized>(relation: &R) -> bool {
    let universe = relation.universe();
    universe.iter().all(|x| {
        universe
            .iter()
            .all(|y| relation.contains_relation(x, y) || relation.contains_relation(y, x))
    })
}

/// xRy ⇒ yRx for every x, y.
#[must_use]
pub fn symmetric<R: BinaryRelation + ?Sized>(relation: &R) -> bool {
    let universe = relation.universe();
    universe.iter().all(|x| {
        universe
            .iter()
            .all(|y| !relation.contains_relation(x, y) || relation.contains_relation(y, x))
    })
}

/// xRy and yRx ⇒ x = y for every x, y.
#[must_use]
pub fn anti_symmetric<R: BinaryRelation + ?Sized>(relation: &R) -> bool {
    let universe = relation.universe();
    universe.iter().all(|x| {
        universe.iter().all(|y| {
            x == y || !(relation.contains_relation(x, y) && relation.contains_relation(y, x))
        })
    })
}

/// Checks xRy and yRz ⇒ xRz for a fixed x and every y, z.
///
/// Gives up early, returning `true`, once `cancel` is set.
fn transitive_from<R: BinaryRelation + ?Sized>(
    relation: &R,
    x: &Element,
    elements: &[Element],
    cancel: &AtomicBool,
) -> bool {
    for y in elements {
        if cancel.load(AtomicOrdering::Relaxed) {
            return true;
        }
        if !relation.contains_relation(x, y) {
            continue;
        }

        for z in elements {
            if relation.contains_relation(y, z) && !relation.contains_relation(x, z) {
                return false;
            }
        }
    }

    true
}

/// xRy and yRz ⇒ xRz for every x, y, z.
///
/// Transitivity is only evaluated for complete relations: this returns `false` for any relation
/// that isn't [`complete`].
#[must_use]
pub fn transitive<R: BinaryRelation + ?Sized>(relation: &R) -> bool {
    if !complete(relation) {
        return false;
    }

    let elements = relation.universe().elements();
    let never = AtomicBool::new(false);
    elements
        .iter()
        .all(|x| transitive_from(relation, x, &elements, &never))
}

// -------------------- Parallel transitivity -------------------- //

/// Configuration for [`transitive_parallel_with`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Maximum number of worker threads. Defaults to the available parallelism.
    pub workers: Option<NonZeroUsize>,
}

impl ParallelConfig {
    /// A configuration with a fixed maximum number of workers.
    #[must_use]
    pub const fn with_workers(workers: NonZeroUsize) -> Self {
        Self {
            workers: Some(workers),
        }
    }

    /// Number of workers to spawn for a universe of the given size.
    ///
    /// Never more than there are elements, and zero only for the empty universe.
    #[must_use]
    pub fn workers_for(&self, card: usize) -> usize {
        let max = self
            .workers
            .or_else(|| thread::available_parallelism().ok())
            .map_or(1, NonZeroUsize::get);
        max.min(card)
    }
}

/// Same as [`transitive`], with the outer loop split across worker threads.
///
/// Uses the default [`ParallelConfig`].
#[must_use]
pub fn transitive_parallel<R: BinaryRelation + Sync + ?Sized>(relation: &R) -> bool {
    transitive_parallel_with(relation, &ParallelConfig::default())
}

/// Same as [`transitive`], with the outer loop split across worker threads.
///
/// Each worker checks a contiguous chunk of the universe as the x in xRy, yRz ⇒ xRz. The first
/// violation reported cancels the remaining workers. All workers are joined before returning.
#[must_use]
pub fn transitive_parallel_with<R: BinaryRelation + Sync + ?Sized>(
    relation: &R,
    config: &ParallelConfig,
) -> bool {
    if !complete(relation) {
        return false;
    }

    let elements = relation.universe().elements();
    let workers = config.workers_for(elements.len());
    if workers == 0 {
        return true;
    }

    let chunk = elements.len().div_ceil(workers);
    tracing::debug!(
        workers,
        card = elements.len(),
        "checking transitivity in parallel"
    );

    let cancel = AtomicBool::new(false);
    let (tx, rx) = channel::bounded(workers);

    thread::scope(|scope| {
        let elements = &elements;
        let cancel = &cancel;
        let handles: SmallVec<_> = elements
            .chunks(chunk)
            .map(|xs| {
                let tx = tx.clone();
                scope.spawn(move || {
                    let holds = xs
                        .iter()
                        .all(|x| transitive_from(relation, x, elements, cancel));
                    // The receiver may be gone after a violation.
                    let _ = tx.send(holds);
                })
            })
            .collect();
        drop(tx);

        // Workers only report `false` on an actual violation, since cancellation happens only
        // after the first `false` has been received.
        let holds = rx.iter().all(|holds| holds);
        if !holds {
            tracing::debug!("transitivity violated, cancelling workers");
            cancel.store(true, AtomicOrdering::Relaxed);
        }

        for handle in handles {
            if let Err(panic) = handle.join() {
                std::panic::resume_unwind(panic);
            }
        }
        holds
    })
}

// -------------------- Orders -------------------- //

/// A relation that is [`complete`] and [`transitive`], like ≤ on the integers.
#[must_use]
pub fn weak_order<R: BinaryRelation + ?Sized>(relation: &R) -> bool {
    complete(relation) && transitive(relation)
}

/// A [`weak_order`] that is also [`anti_symmetric`].
///
/// Reflexive pairs are not excluded, so ≤ on the integers is a strict order in this sense.
#[must_use]
pub fn strict_order<R: BinaryRelation + ?Sized>(relation: &R) -> bool {
    weak_order(relation) && anti_symmetric(relation)
}

/// Whether all relations are defined over [`equivalent`] universes. Vacuously true for no
/// relations.
#[must_use]
pub fn composable_relations(relations: &[&dyn BinaryRelation]) -> bool {
    let Some((fst, rest)) = relations.split_first() else {
        return true;
    };

    rest.iter()
        .all(|relation| equivalent(fst.universe(), relation.universe()))
}
