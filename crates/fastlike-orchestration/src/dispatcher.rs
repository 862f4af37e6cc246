//! Chunked work distribution over a fixed pool of worker threads.
//!
//! The corpus is cut into chunks of `chunk_size` lines. Workers claim chunk
//! indices from one atomic cursor and write counts into the result slots of
//! the chunks they claimed, so slots are disjoint and their locks are never
//! contended. Each worker builds its own matcher; no scratch state crosses
//! threads. The first error stops every worker and is returned.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::thread;

use parking_lot::Mutex;
use tracing::{debug, error};

use fastlike_core::naive::count_matches;
use fastlike_core::{LikeError, LineMatcher, Options, Pattern};

/// Number of chunks needed to cover `lines` lines.
#[must_use]
pub fn chunk_count(lines: usize, chunk_size: usize) -> usize {
    lines.div_ceil(chunk_size.max(1))
}

struct Shared<'c, 'r> {
    corpus: &'c [String],
    chunk_size: usize,
    slots: Vec<Mutex<&'r mut [u32]>>,
    cursor: AtomicUsize,
    abort: AtomicBool,
    failure: Mutex<Option<LikeError>>,
    oracle: Option<&'c Pattern>,
}

impl Shared<'_, '_> {
    /// Claim and process chunks until none are left or a worker failed.
    fn drain(&self, matcher: &mut dyn LineMatcher) {
        while !self.abort.load(Ordering::Relaxed) {
            let chunk = self.cursor.fetch_add(1, Ordering::Relaxed);
            if chunk >= self.slots.len() {
                return;
            }
            if let Err(err) = self.process(chunk, matcher) {
                self.fail(err);
                return;
            }
        }
    }

    fn process(&self, chunk: usize, matcher: &mut dyn LineMatcher) -> Result<(), LikeError> {
        let start = chunk * self.chunk_size;
        let mut slot = self.slots[chunk].lock();

        for (offset, count) in slot.iter_mut().enumerate() {
            let index = start + offset;
            let line = &self.corpus[index];
            let found = matcher.count(line).inspect_err(|err| {
                error!(line = index, %err, "line rejected");
            })?;

            if let Some(pattern) = self.oracle {
                let expected = count_matches(pattern, line);
                if expected != found {
                    error!(
                        line = index,
                        text = %line,
                        strategy = matcher.name(),
                        expected,
                        actual = found,
                        "verification mismatch"
                    );
                    return Err(LikeError::Mismatch {
                        line: index,
                        expected,
                        actual: found,
                    });
                }
            }
            *count = found;
        }
        Ok(())
    }

    /// Record the first failure and stop the pool.
    fn fail(&self, err: LikeError) {
        let mut failure = self.failure.lock();
        self.abort.store(true, Ordering::Relaxed);
        if failure.is_none() {
            *failure = Some(err);
        }
    }
}

/// Count matches for every corpus line on `opts.threads` workers.
///
/// `make` builds one matcher per worker. With `oracle`, every count is
/// checked against the naive matcher and the first disagreement aborts the
/// run with [`LikeError::Mismatch`].
pub fn dispatch<M, F>(
    corpus: &[String],
    opts: &Options,
    oracle: Option<&Pattern>,
    make: F,
) -> Result<Vec<u32>, LikeError>
where
    M: LineMatcher,
    F: Fn() -> M + Sync,
{
    let opts = opts.clone().normalize();
    let mut counts = vec![0u32; corpus.len()];
    if corpus.is_empty() {
        return Ok(counts);
    }

    let chunks = chunk_count(corpus.len(), opts.chunk_size);
    let workers = opts.threads.min(chunks);
    debug!(
        lines = corpus.len(),
        chunks,
        chunk_size = opts.chunk_size,
        workers,
        verify = oracle.is_some(),
        "dispatching"
    );

    let shared = Shared {
        corpus,
        chunk_size: opts.chunk_size,
        slots: counts.chunks_mut(opts.chunk_size).map(Mutex::new).collect(),
        cursor: AtomicUsize::new(0),
        abort: AtomicBool::new(false),
        failure: Mutex::new(None),
        oracle,
    };

    thread::scope(|scope| {
        for _ in 0..workers {
            let shared = &shared;
            let make = &make;
            scope.spawn(move || {
                let mut matcher = make();
                shared.drain(&mut matcher);
            });
        }
    });

    let Shared { slots, failure, .. } = shared;
    drop(slots);
    if let Some(err) = failure.into_inner() {
        return Err(err);
    }
    Ok(counts)
}
