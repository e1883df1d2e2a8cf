use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use pretty_assertions::assert_eq;

use boolcanon::bdd::BDDEnv;
use boolcanon::builder::DecisionTree;
use boolcanon::minimize::minimize;
use boolcanon::pla_io::solution_to_string;
use boolcanon::reduce::reduce;
use boolcanon::{Config, TruthTable};

fn load<P: AsRef<Path>>(path: P) -> TruthTable {
    let f = File::open(path).unwrap();
    TruthTable::parse(&mut BufReader::new(f)).expect("Could not parse input file")
}

#[test]
fn test_minimized_output_is_equivalent() {
    let config = Config::default();

    for file in glob::glob("tests/data/*.pla").unwrap() {
        let path = file.unwrap();
        println!("testing {}", path.display());

        let table = load(&path);
        let solution = minimize(&table, config).unwrap();
        let written = solution_to_string(&table, &solution);
        let minimized: TruthTable = written.parse().unwrap();

        assert_eq!(minimized.vars, table.vars);
        assert_eq!(minimized.care.len(), solution.len());
        assert!(minimized.dont_care.is_empty());

        if table.dont_care.is_empty() {
            let env = BDDEnv::new();
            let original = reduce(&env, &DecisionTree::from_table(&table, config).unwrap());
            let rewritten = reduce(&env, &DecisionTree::from_table(&minimized, config).unwrap());
            assert_eq!(original, rewritten);
        } else {
            let covered = minimized.care_minterms();
            assert!(covered.is_superset(&table.care_minterms()));
            assert!(covered.is_subset(&table.universe()));
        }

        // the written form is a fixed point
        let again = minimize(&minimized, config).unwrap();
        assert_eq!(solution_to_string(&minimized, &again), written);
    }
}
