//! # Selection Flows
//!
//! Snapshot file on disk -> `SnapshotMempoolSource` -> `BlockBuilderService`
//! -> `FileBlockSink`, checked against hand-computed blocks.

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use qc_06_mempool::SnapshotReader;
    use qc_17_block_production::{
        BlockBuilderApi, BlockBuilderService, BlockProductionConfig, BlockProductionError,
        FileBlockSink, SelectionMode, SnapshotMempoolSource,
    };

    use crate::fixtures::{rising_chain, to_snapshot, tx};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    struct Run {
        dir: tempfile::TempDir,
    }

    impl Run {
        fn new(snapshot: &str) -> Self {
            let dir = tempfile::tempdir().unwrap();
            fs::write(dir.path().join("mempool.csv"), snapshot).unwrap();
            Self { dir }
        }

        fn path(&self, name: &str) -> std::path::PathBuf {
            self.dir.path().join(name)
        }

        fn service(
            &self,
            max_block_weight: u64,
            selection_mode: SelectionMode,
        ) -> BlockBuilderService<SnapshotMempoolSource, FileBlockSink> {
            let config = BlockProductionConfig {
                max_block_weight,
                selection_mode,
                ..Default::default()
            };
            BlockBuilderService::new(
                SnapshotMempoolSource::new(self.path("mempool.csv"), SnapshotReader::default()),
                FileBlockSink::new(self.path("block.txt"), self.path("result.txt")),
                &config,
            )
        }

        fn block_lines(&self) -> Vec<String> {
            read_lines(&self.path("block.txt"))
        }

        fn result(&self) -> String {
            fs::read_to_string(self.path("result.txt")).unwrap()
        }
    }

    fn read_lines(path: &Path) -> Vec<String> {
        fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    const SMALL_MEMPOOL: &str = "\
txid,fee,weight,parents
A,10,50,
B,20,40,A
C,5,10,
D,30,20,
E,9,30,
";

    // =============================================================================
    // END-TO-END FLOWS
    // =============================================================================

    #[test]
    fn test_parent_too_heavy_leaves_child_parked() {
        let run = Run::new(SMALL_MEMPOOL);

        let template = run.service(100, SelectionMode::Cascading).build_block().unwrap();

        assert_eq!(run.block_lines(), vec!["D", "C", "E"]);
        assert_eq!(
            run.result(),
            "Total Number of transactions in the block: 3\n\
             Total Weight of Block: 60\n\
             Total Fee of all transactions in the block: 44\n"
        );
        assert_eq!(template.parked, vec!["B"]);
    }

    #[test]
    fn test_diamond_admitted_after_both_parents() {
        // D spends B and C, both of which spend A. D has the best rate.
        let snapshot = to_snapshot(&[
            tx("A", 1, 10, &[]),
            tx("B", 2, 10, &["A"]),
            tx("C", 3, 10, &["A"]),
            tx("D", 100, 10, &["B", "C"]),
        ]);
        let run = Run::new(&snapshot);

        let template = run.service(1_000, SelectionMode::Cascading).build_block().unwrap();

        assert_eq!(run.block_lines(), vec!["A", "C", "B", "D"]);
        assert_eq!(template.total_weight, 40);
        assert_eq!(template.total_fees, 106);
        assert_eq!(template.stats.cascade_committed, 3);
    }

    #[test]
    fn test_long_chain_resolves_in_one_cascade() {
        let chain = rising_chain(10_000);
        let run = Run::new(&to_snapshot(&chain));

        let template = run
            .service(u64::MAX, SelectionMode::Cascading)
            .build_block()
            .unwrap();

        assert_eq!(template.transaction_count(), 10_000);
        let lines = run.block_lines();
        assert_eq!(lines.first().map(String::as_str), Some("c0"));
        assert_eq!(lines.last().map(String::as_str), Some("c9999"));
    }

    #[test]
    fn test_strict_mode_only_takes_ready_transactions() {
        let run = Run::new(SMALL_MEMPOOL);

        let template = run.service(200, SelectionMode::Strict).build_block().unwrap();

        // B is evaluated before A and is dropped for good.
        assert_eq!(run.block_lines(), vec!["D", "C", "E", "A"]);
        assert_eq!(template.stats.parent_rejected, 1);
        assert!(template.parked.is_empty());
    }

    #[test]
    fn test_duplicate_snapshot_entry_fails_before_output() {
        let run = Run::new("txid,fee,weight,parents\nA,1,1,\nA,2,2,\n");

        let err = run
            .service(100, SelectionMode::Cascading)
            .build_block()
            .unwrap_err();

        assert!(matches!(err, BlockProductionError::Mempool(_)));
        assert!(!run.path("block.txt").exists());
        assert!(!run.path("result.txt").exists());
    }

    #[test]
    fn test_header_only_snapshot_gives_empty_block() {
        let run = Run::new("txid,fee,weight,parents\n");

        let template = run.service(100, SelectionMode::Cascading).build_block().unwrap();

        assert_eq!(template.transaction_count(), 0);
        assert!(run.block_lines().is_empty());
        assert!(run.result().contains("Total Weight of Block: 0"));
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let run = Run::new(SMALL_MEMPOOL);
        let service = run.service(100, SelectionMode::Cascading);

        let first = service.build_block().unwrap();
        let first_block = run.block_lines();
        let second = service.build_block().unwrap();

        assert_eq!(first.transactions, second.transactions);
        assert_eq!(first_block, run.block_lines());
        assert_eq!(service.metrics().get_blocks_produced(), 2);
    }
}
