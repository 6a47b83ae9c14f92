//! Span definitions per operation: stack run, group, partition.

/// Create a span covering one full stack run.
#[macro_export]
macro_rules! stack_span {
    ($seed:expr, $lora_count:expr) => {
        tracing::info_span!("stacker.stack", seed = $seed, lora_count = $lora_count)
    };
}

/// Create a span covering one group's strength distribution.
#[macro_export]
macro_rules! group_span {
    ($label:expr, $members:expr) => {
        tracing::info_span!("stacker.group", group = %$label, members = $members)
    };
}

/// Create a span covering one partition call.
#[macro_export]
macro_rules! partition_span {
    ($total:expr, $segments:expr) => {
        tracing::debug_span!("stacker.partition", total = $total, segments = $segments)
    };
}
