/// Split file indices `1..=files_count` into `worker_count` contiguous
/// buckets, the first `files_count % worker_count` holding one extra index.
///
/// Trailing buckets are empty when there are fewer files than workers.
/// A `worker_count` of zero yields no buckets.
pub fn distribute(files_count: u64, worker_count: usize) -> Vec<Vec<u64>> {
    if worker_count == 0 {
        return Vec::new();
    }

    let workers = worker_count as u64;
    let per_worker = files_count / workers;
    let remainder = files_count % workers;

    let mut buckets = Vec::with_capacity(worker_count);
    let mut next = 1_u64;
    for worker in 0..workers {
        let size = per_worker + u64::from(worker < remainder);
        buckets.push((next..next + size).collect());
        next += size;
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uneven_split_front_loads_buckets() {
        assert_eq!(
            distribute(10, 3),
            vec![vec![1, 2, 3, 4], vec![5, 6, 7], vec![8, 9, 10]]
        );
    }

    #[test]
    fn single_file_single_worker() {
        assert_eq!(distribute(1, 1), vec![vec![1]]);
    }

    #[test]
    fn fewer_files_than_workers_leaves_empty_tail() {
        assert_eq!(
            distribute(2, 4),
            vec![vec![1], vec![2], Vec::<u64>::new(), Vec::new()]
        );
    }

    #[test]
    fn zero_files_gives_empty_buckets() {
        assert_eq!(distribute(0, 2), vec![Vec::<u64>::new(), Vec::new()]);
        assert!(distribute(5, 0).is_empty());
    }

    #[test]
    fn partitions_every_combination() {
        for files in 0..=40_u64 {
            for workers in 1..=9_usize {
                let buckets = distribute(files, workers);
                assert_eq!(buckets.len(), workers);

                let flat: Vec<u64> = buckets.iter().flatten().copied().collect();
                let expected: Vec<u64> = (1..=files).collect();
                assert_eq!(flat, expected, "files={files} workers={workers}");

                let sizes: Vec<usize> = buckets.iter().map(Vec::len).collect();
                let max = sizes.iter().max().copied().unwrap_or(0);
                let min = sizes.iter().min().copied().unwrap_or(0);
                assert!(max - min <= 1);
                assert!(sizes.windows(2).all(|pair| pair[0] >= pair[1]));
            }
        }
    }
}
