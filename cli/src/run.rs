use crate::config::TopConfig;
use crate::errors::CliError;
use crate::input::ScoredItem;
use maxmin_heap::{BoundedTopKHeap, Order};
use rayon::ThreadPoolBuilder;
use rayon::prelude::*;

// Calculates chunk size to use for an input in order for it to be spread over all producers
pub fn chunk_size(input_length: usize, producers: usize) -> usize {
    let minimum_factor = std::cmp::min(input_length, producers).max(1);
    input_length.div_ceil(minimum_factor).max(1)
}

/// Puts `items` into one shared heap from a pool of `config.producers` threads and drains it once
/// every chunk is in, maximum under the configured order first.
#[tracing::instrument(skip_all, fields(capacity = config.capacity, order = %Order::from(config.order)))]
pub fn run_top(config: &TopConfig, items: Vec<ScoredItem>) -> Result<Vec<ScoredItem>, CliError> {
    let heap = BoundedTopKHeap::from_config(Order::from(config.order), &config.heap_config());
    let pool = ThreadPoolBuilder::new()
        .num_threads(config.producers)
        .thread_name(|index| format!("producer-{index}"))
        .build()?;
    let size = chunk_size(items.len(), config.producers);

    pool.install(|| {
        items.into_par_iter().chunks(size).for_each(|chunk| {
            let count = chunk.len();
            for item in chunk {
                heap.put(item);
            }
            tracing::debug!(count, "Producer finished chunk");
        })
    });

    let retained = heap.drain();
    tracing::info!("Retained {} items", retained.len());
    Ok(retained)
}
