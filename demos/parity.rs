use std::fs::File;

use boolcanon::bdd::Robdd;
use boolcanon::bdd_io::BDDGraph;
use boolcanon::minimize::minimize;
use boolcanon::pla_io::solution_to_string;
use boolcanon::{Config, Term, TruthTable, Variable};

// odd parity over n inputs: the worst case for two-level forms, linear as a BDD
fn main() -> anyhow::Result<()> {
    let n = 5;

    let care: Vec<Term> = (0..1u64 << n)
        .filter(|m| m.count_ones() % 2 == 1)
        .map(|m| Term::from_minterm(m, n))
        .collect();

    let table = TruthTable::new(Variable::default_names(n), care, vec![])?.with_output_name("odd");

    let solution = minimize(&table, Config::default())?;
    print!("{}", solution_to_string(&table, &solution));

    let robdd = Robdd::from_table(&table, Config::default())?;
    println!(
        "{} terms, {} literals, {} BDD nodes",
        solution.len(),
        solution.literal_count(),
        robdd.node_count()
    );

    let mut f = File::create("parity.dot")?;
    BDDGraph::from_robdd(&robdd).render_dot(&mut f)?;

    Ok(())
}
