//! File-level parallelism: independent files are compressed on a pool of
//! scoped worker threads. Each job owns its own buffers; nothing is shared
//! between runs except the job and result channels.

use std::path::PathBuf;

use crossbeam::channel::{bounded, Receiver, Sender};
use tracing::{debug, warn};

use super::files::{compress_file, container_path};
use crate::error::{Error, Result};
use crate::{CodecConfig, CodecStats};

/// A single file to compress
struct Job {
    /// Position in the caller's input list
    index: usize,
    src: PathBuf,
    dst: PathBuf,
}

/// Compress every path to `<path>.<suffix>`.
///
/// Returns one result per input, in input order. A failing file does not
/// stop the others.
pub fn compress_files(paths: &[PathBuf], config: &CodecConfig) -> Vec<Result<CodecStats>> {
    let jobs: Vec<Job> = paths
        .iter()
        .enumerate()
        .map(|(index, src)| Job {
            index,
            src: src.clone(),
            dst: container_path(src, &config.suffix),
        })
        .collect();
    run_jobs(jobs, paths.len(), config)
}

fn run_jobs(jobs: Vec<Job>, count: usize, config: &CodecConfig) -> Vec<Result<CodecStats>> {
    let num_threads = config.effective_threads().min(count.max(1));
    debug!(files = count, threads = num_threads, "starting batch");

    let mut results: Vec<Option<Result<CodecStats>>> = (0..count).map(|_| None).collect();

    if num_threads == 1 {
        for job in jobs {
            results[job.index] = Some(compress_file(&job.src, &job.dst, config));
        }
    } else {
        let channel_capacity = num_threads * 2;
        let (job_tx, job_rx): (Sender<Job>, Receiver<Job>) = bounded(channel_capacity);
        let (result_tx, result_rx): (
            Sender<(usize, Result<CodecStats>)>,
            Receiver<(usize, Result<CodecStats>)>,
        ) = bounded(channel_capacity);

        let scoped = crossbeam::scope(|scope| {
            for _ in 0..num_threads {
                let job_rx = job_rx.clone();
                let result_tx = result_tx.clone();
                scope.spawn(move |_| worker_thread(job_rx, result_tx, config));
            }

            // Drop our copies of the channels that workers use
            drop(job_rx);
            drop(result_tx);

            scope.spawn(move |_| {
                for job in jobs {
                    if job_tx.send(job).is_err() {
                        break;
                    }
                }
            });

            for (index, result) in result_rx.iter() {
                results[index] = Some(result);
            }
        });

        if scoped.is_err() {
            warn!("batch worker thread panicked");
        }
    }

    results
        .into_iter()
        .map(|r| r.unwrap_or_else(|| Err(Error::Internal("Thread panicked".to_string()))))
        .collect()
}

fn worker_thread(
    job_rx: Receiver<Job>,
    result_tx: Sender<(usize, Result<CodecStats>)>,
    config: &CodecConfig,
) {
    for job in job_rx {
        let result = compress_file(&job.src, &job.dst, config);
        if let Err(e) = &result {
            warn!(src = %job.src.display(), error = %e, "compression failed");
        }
        if result_tx.send((job.index, result)).is_err() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_batch_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut paths = Vec::new();
        for i in 0..6 {
            let path = dir.path().join(format!("file{i}.txt"));
            fs::write(&path, format!("file number {i} ").repeat(i * 40 + 1)).unwrap();
            paths.push(path);
        }

        let config = CodecConfig { num_threads: 3, ..Default::default() };
        let results = compress_files(&paths, &config);
        assert_eq!(results.len(), paths.len());

        for (path, result) in paths.iter().zip(results) {
            let stats = result.unwrap();
            let original = fs::read(path).unwrap();
            assert_eq!(stats.input_bytes, original.len() as u64);

            let container = fs::read(container_path(path, "lzss")).unwrap();
            assert_eq!(crate::decompress(&container).unwrap(), original);
        }
    }

    #[test]
    fn test_batch_reports_failures_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good");
        fs::write(&good, b"good good good").unwrap();
        let missing = dir.path().join("missing");

        for threads in [1, 2] {
            let config = CodecConfig { num_threads: threads, ..Default::default() };
            let results = compress_files(&[missing.clone(), good.clone()], &config);
            assert!(matches!(results[0], Err(Error::InputRead(_))));
            assert!(results[1].is_ok());
        }
    }

    #[test]
    fn test_batch_empty() {
        assert!(compress_files(&[], &CodecConfig::default()).is_empty());
    }
}
