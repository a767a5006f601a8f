use crate::pipeline::pipeline_logger::PipelineLogger;

const DEFAULT_CHANNEL_CAPACITY: usize = 8;

/// Runs one job per input on a fixed pool of worker threads.
///
/// Layout: `feeder → workers → main [collect/progress]`
///
/// Results come back in input order. Progress is reported on the calling
/// thread, so the logger never crosses threads.
pub struct ThreadedBatchExecutor {
    workers: usize,
    channel_capacity: usize,
}

impl ThreadedBatchExecutor {
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Applies `job` to every input. Result `i` belongs to `inputs[i]`.
    pub fn run<I, R, F>(&self, inputs: Vec<I>, job: F, logger: &mut dyn PipelineLogger) -> Vec<R>
    where
        I: Send,
        R: Send,
        F: Fn(I) -> R + Sync,
    {
        let total = inputs.len();
        if total == 0 {
            return Vec::new();
        }

        let workers = self.workers.min(total);
        let cap = self.channel_capacity;
        let (job_tx, job_rx) = crossbeam_channel::bounded::<(usize, I)>(cap);
        let (result_tx, result_rx) = crossbeam_channel::bounded::<(usize, R)>(cap);
        let job = &job;
        let mut slots: Vec<Option<R>> = (0..total).map(|_| None).collect();

        std::thread::scope(|scope| {
            scope.spawn(move || {
                for item in inputs.into_iter().enumerate() {
                    if job_tx.send(item).is_err() {
                        break;
                    }
                }
            });
            for _ in 0..workers {
                let job_rx = job_rx.clone();
                let result_tx = result_tx.clone();
                scope.spawn(move || {
                    for (index, input) in job_rx {
                        if result_tx.send((index, job(input))).is_err() {
                            break;
                        }
                    }
                });
            }
            drop(job_rx);
            drop(result_tx);

            for (done, (index, result)) in result_rx.into_iter().enumerate() {
                slots[index] = Some(result);
                logger.progress(done + 1, total);
            }
        });

        // each input yields one result before the scope joins
        slots.into_iter().flatten().collect()
    }
}

impl Default for ThreadedBatchExecutor {
    fn default() -> Self {
        let workers = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        Self::new(workers)
    }
}
