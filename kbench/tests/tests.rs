#[cfg(test)]
mod tests {
    use std::path::Path;

    use float_cmp::approx_eq;
    use kbench::batch::BatchRunner;
    use kbench::config::{BenchConfig, DEFAULT_MAX_CAPACITY};
    use kbench::error::BenchError;
    use kbench::eval::Evaluator;
    use kbench::io;
    use kbench::optimal::OptimalValueTable;
    use kbench::report;
    use knapsack_rs::entities::{Instance, Item};
    use knapsack_rs::io::ParseError;
    use knapsack_rs::solvers::Algorithm;
    use test_case::test_case;

    const INSTANCE_DIR: &str = "../assets/instances";
    const OPTIMAL_TABLE: &str = "../assets/optimal.json";

    fn init_logger() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .is_test(true)
            .try_init();
    }

    fn textbook() -> Instance {
        Instance::new(
            10,
            vec![Item::new(60, 10), Item::new(100, 20), Item::new(120, 30)],
        )
    }

    fn fixture_table() -> OptimalValueTable {
        io::read_json(Path::new(OPTIMAL_TABLE)).unwrap()
    }

    #[test]
    fn evaluate_textbook_instance() {
        let result = Evaluator::default()
            .evaluate("textbook", &textbook(), 60)
            .unwrap();

        assert_eq!(result.optimal_value, 60);
        assert_eq!(result.n_items, 3);
        assert_eq!(result.capacity, 10);
        assert_eq!(
            result.outcomes.iter().map(|o| o.algorithm).collect::<Vec<_>>(),
            Algorithm::ALL.to_vec()
        );
        for outcome in &result.outcomes {
            assert_eq!(outcome.value, 60);
            assert!(approx_eq!(f64, outcome.quality, 1.0));
            assert!(outcome.time_secs >= 0.0);
        }
    }

    #[test]
    fn evaluate_scores_against_supplied_optimum() {
        // the supplied value is not validated, a wrong optimum shows up in every quality
        let result = Evaluator::new(BenchConfig::default())
            .evaluate("textbook", &textbook(), 120)
            .unwrap();
        for outcome in &result.outcomes {
            assert!(approx_eq!(f64, outcome.quality, 0.5));
        }
    }

    #[test]
    fn evaluate_rejects_zero_optimum() {
        let err = Evaluator::default()
            .evaluate("textbook", &textbook(), 0)
            .unwrap_err();
        assert!(matches!(err, BenchError::DivisionByZero { instance } if instance == "textbook"));
    }

    #[test]
    fn read_textbook_instance() {
        let instance = io::read_instance(&Path::new(INSTANCE_DIR).join("textbook")).unwrap();
        assert_eq!(instance, textbook());
    }

    #[test]
    fn read_malformed_instance() {
        let path = Path::new(INSTANCE_DIR).join("malformed");
        match io::read_instance(&path) {
            Err(BenchError::MalformedInstance { path: p, source }) => {
                assert_eq!(p, path);
                assert_eq!(
                    source,
                    ParseError::TooFewLines {
                        found: 4,
                        expected: 6
                    }
                );
            }
            other => panic!("expected a malformed instance error, got {other:?}"),
        }
        assert!(io::load_instance(&path).is_none());
    }

    #[test]
    fn read_unaddressable_capacity() {
        let path = Path::new(INSTANCE_DIR).join("unaddressable_capacity");
        assert!(matches!(
            io::read_instance(&path),
            Err(BenchError::MalformedInstance {
                source: ParseError::CapacityOverflow(18446744073709551614),
                ..
            })
        ));
    }

    #[test]
    fn evaluate_rejects_capacity_above_limit() {
        let instance = io::read_instance(&Path::new(INSTANCE_DIR).join("huge_capacity")).unwrap();
        let err = Evaluator::default()
            .evaluate("huge_capacity", &instance, 1)
            .unwrap_err();
        assert!(matches!(
            err,
            BenchError::CapacityLimit {
                capacity: 500_000_000,
                limit: DEFAULT_MAX_CAPACITY,
                ..
            }
        ));

        let config = BenchConfig {
            max_capacity: 9,
            ..BenchConfig::default()
        };
        assert!(matches!(
            Evaluator::new(config).evaluate("textbook", &textbook(), 60),
            Err(BenchError::CapacityLimit { capacity: 10, limit: 9, .. })
        ));
    }

    #[test]
    fn evaluate_rejects_overflowing_values() {
        let instance = Instance::new(10, vec![Item::new(u64::MAX, 1), Item::new(1, 1)]);
        let err = Evaluator::default()
            .evaluate("overflow", &instance, u64::MAX)
            .unwrap_err();
        assert!(matches!(err, BenchError::ValueOverflow { instance } if instance == "overflow"));
    }

    #[test]
    fn read_missing_instance() {
        let path = Path::new(INSTANCE_DIR).join("does_not_exist");
        assert!(matches!(
            io::read_instance(&path),
            Err(BenchError::Io { .. })
        ));
        assert!(io::load_instance(&path).is_none());
    }

    #[test]
    fn batch_over_fixture_directory() {
        init_logger();
        let runner = BatchRunner::new(BenchConfig::default(), fixture_table());
        let results = runner.run(Path::new(INSTANCE_DIR)).unwrap();

        // lexicographic order, malformed and oversized files skipped, notes.txt has no optimal value
        let names = results.iter().map(|(n, _)| n.as_str()).collect::<Vec<_>>();
        assert_eq!(
            names,
            vec![
                "knapPI_1_12_100_1",
                "knapPI_2_14_100_1",
                "knapPI_3_16_100_1",
                "textbook"
            ]
        );

        for (name, result) in &results {
            let exact = result.outcome(Algorithm::DynamicProgramming).unwrap();
            assert_eq!(exact.value, result.optimal_value, "{name}");
            assert!(approx_eq!(f64, exact.quality, 1.0), "{name}");
            for outcome in &result.outcomes {
                assert!(outcome.quality <= 1.0, "{name}: {}", outcome.algorithm);
            }
        }
    }

    #[test_case("knapPI_1_12_100_1", 316, 418, 418; "uncorrelated")]
    #[test_case("knapPI_2_14_100_1", 301, 376, 395; "weakly correlated")]
    #[test_case("knapPI_3_16_100_1", 540, 540, 540; "strongly correlated")]
    #[test_case("textbook", 60, 60, 60; "textbook")]
    fn fixture_values(name: &str, smallest_weight: u64, best_ratio: u64, exact: u64) {
        let instance = io::read_instance(&Path::new(INSTANCE_DIR).join(name)).unwrap();
        let optimal_value = fixture_table().get(name).unwrap();
        let result = Evaluator::default()
            .evaluate(name, &instance, optimal_value)
            .unwrap();

        let value = |a| result.outcome(a).unwrap().value;
        assert_eq!(value(Algorithm::GreedySmallestWeight), smallest_weight);
        assert_eq!(value(Algorithm::GreedyBestRatio), best_ratio);
        assert_eq!(value(Algorithm::DynamicProgramming), exact);
    }

    #[test]
    fn batch_skips_zero_optimum() {
        let table: OptimalValueTable = [("textbook", 0), ("knapPI_3_16_100_1", 540)]
            .into_iter()
            .collect();
        let results = BatchRunner::new(BenchConfig::default(), table)
            .run(Path::new(INSTANCE_DIR))
            .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].0, "knapPI_3_16_100_1");
    }

    #[test]
    fn batch_with_empty_table() {
        let results = BatchRunner::new(BenchConfig::default(), OptimalValueTable::new())
            .run(Path::new(INSTANCE_DIR))
            .unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn batch_fails_on_missing_directory() {
        let runner = BatchRunner::new(
            BenchConfig::default(),
            OptimalValueTable::pisinger_large_scale(),
        );
        assert!(matches!(
            runner.run(Path::new("../assets/no_such_directory")),
            Err(BenchError::Io { .. })
        ));
    }

    #[test]
    fn pisinger_table() {
        let table = OptimalValueTable::pisinger_large_scale();
        assert_eq!(table.len(), 21);
        assert_eq!(table.get("knapPI_1_100_1000_1"), Some(9147));
        assert_eq!(table.get("knapPI_3_10000_1000_1"), Some(146919));
        assert_eq!(table.get("knapPI_4_100_1000_1"), None);
    }

    #[test]
    fn optimal_table_from_json() {
        let table = fixture_table();
        assert_eq!(table.len(), 8);
        assert_eq!(table.get("textbook"), Some(60));
        assert!(!table.contains("notes.txt"));
    }

    #[test]
    fn config_from_json() {
        let config: BenchConfig = serde_json::from_str(r#"{ "summary": false }"#).unwrap();
        assert_eq!(
            config,
            BenchConfig {
                cross_check_exact: true,
                summary: false,
                max_capacity: DEFAULT_MAX_CAPACITY,
            }
        );
    }

    #[test]
    fn report_empty() {
        assert_eq!(report::render_table(&[]), "Nothing to display.\n");
        assert!(report::summarize(&[]).is_empty());
        assert_eq!(report::render_summary(&[]), "");
    }

    #[test]
    fn report_table_layout() {
        let mut result = Evaluator::default()
            .evaluate("textbook", &textbook(), 60)
            .unwrap();
        for outcome in result.outcomes.iter_mut() {
            outcome.time_secs = 0.25;
        }
        let table = report::render_table(&[("textbook".to_string(), result)]);
        let lines = table.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 6);
        assert_eq!(
            lines[0],
            format!(
                "{:<30} {:<25} {:<15} Solution Quality",
                "File", "Algorithm", "Time (s)"
            )
        );
        assert_eq!(lines[1], "=".repeat(80));
        assert_eq!(
            lines[2],
            format!(
                "{:<30} {:<25} {:<15} 1.000000",
                "textbook", "Greedy Smallest Weight", "0.250000"
            )
        );
        assert!(lines[3].contains("Greedy Best Ratio"));
        assert!(lines[4].contains("Dynamic Programming"));
        assert_eq!(lines[5], "=".repeat(80));
    }

    #[test]
    fn report_summary() {
        let results = vec![
            (
                "a".to_string(),
                Evaluator::default()
                    .evaluate("a", &textbook(), 60)
                    .unwrap(),
            ),
            (
                "b".to_string(),
                Evaluator::default()
                    .evaluate("b", &Instance::new(50, textbook().items), 220)
                    .unwrap(),
            ),
        ];
        let summaries = report::summarize(&results);
        assert_eq!(summaries.len(), 3);

        let greedy = &summaries[0];
        assert_eq!(greedy.algorithm, Algorithm::GreedySmallestWeight);
        assert_eq!(greedy.n_instances, 2);
        assert_eq!(greedy.n_optimal, 1);
        assert!(approx_eq!(f64, greedy.min_quality, 160.0 / 220.0));
        assert!(approx_eq!(
            f64,
            greedy.mean_quality,
            (1.0 + 160.0 / 220.0) / 2.0
        ));

        let exact = &summaries[2];
        assert_eq!(exact.n_optimal, 2);
        assert!(approx_eq!(f64, exact.mean_quality, 1.0));

        let rendered = report::render_summary(&summaries);
        assert_eq!(rendered.lines().count(), 5);
        assert!(rendered.contains("2/2"));
    }
}
