mod generator;
mod plot;
mod stats;

pub use generator::bench_generate;
pub use plot::bench_plot;
pub use stats::bench_stats;
