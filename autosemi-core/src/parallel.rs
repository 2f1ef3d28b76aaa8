//! Parallel line classification using Rayon
//!
//! Lines are independent, so the input is cut into contiguous chunks that are
//! rendered on a thread pool. Chunk outputs are joined in input order, which
//! makes the result byte-identical to the sequential pass.

use crate::{
    config::TransformConfig,
    error::{CoreError, Result},
    transform::{render_lines, TransformStats},
};
use rayon::prelude::*;

/// Render `lines` on a dedicated thread pool
pub(crate) fn render_parallel(
    lines: &[&str],
    config: &TransformConfig,
) -> Result<(String, TransformStats)> {
    let threads = config.threads.unwrap_or_else(num_cpus::get).max(1);
    let chunk_lines = config.chunk_lines.max(1);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| CoreError::ThreadPool(e.to_string()))?;

    log::trace!(
        "dispatching {} lines in chunks of {} to {} threads",
        lines.len(),
        chunk_lines,
        threads
    );

    let rendered: Vec<(String, TransformStats)> = pool.install(|| {
        lines
            .par_chunks(chunk_lines)
            .map(|chunk| render_lines(chunk.iter().copied()))
            .collect()
    });

    let capacity = rendered.iter().map(|(text, _)| text.len()).sum();
    Ok(rendered.into_iter().fold(
        (String::with_capacity(capacity), TransformStats::default()),
        |(mut out, mut stats), (text, chunk_stats)| {
            out.push_str(&text);
            stats.merge(chunk_stats);
            (out, stats)
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::transform;

    fn sample_lines() -> Vec<String> {
        (0..1_000)
            .map(|i| match i % 5 {
                0 => format!("x{i} := {i}"),
                1 => format!("call(x{i})"),
                2 => "if ready {".to_string(),
                3 => String::new(),
                _ => format!("sum += x{i} +"),
            })
            .collect()
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let owned = sample_lines();
        let lines: Vec<&str> = owned.iter().map(String::as_str).collect();
        let config = TransformConfig {
            threads: Some(4),
            chunk_lines: 7,
            ..TransformConfig::parallel()
        };

        let (text, stats) = render_parallel(&lines, &config).unwrap();
        let (expected_text, expected_stats) = render_lines(lines.iter().copied());

        assert_eq!(text, expected_text);
        assert_eq!(stats, expected_stats);
        assert_eq!(text, transform(&owned.join("\n")));
    }

    #[test]
    fn test_parallel_empty_input() {
        let (text, stats) = render_parallel(&[], &TransformConfig::parallel()).unwrap();
        assert!(text.is_empty());
        assert_eq!(stats.lines, 0);
    }

    #[test]
    fn test_chunk_larger_than_input() {
        let lines = ["a", "{", "b()"];
        let config = TransformConfig {
            chunk_lines: 1_000,
            threads: Some(2),
            ..TransformConfig::parallel()
        };
        let (text, _) = render_parallel(&lines, &config).unwrap();
        assert_eq!(text, "a;\n{\nb();\n");
    }
}
