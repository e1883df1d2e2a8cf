use std::io;
use std::io::Write;

use itertools::Itertools;

use crate::cover::Solution;
use crate::truth_table::TruthTable;

/// Output name written when the input did not declare one.
pub const DEFAULT_OUTPUT_NAME: &str = "f";

/// Writes `solution` in the truth-table text format, reusing the header of `table`.
///
/// Only care rows are emitted, one `<term> 1` line per solution term.
pub fn write_solution<W: Write>(
    writer: &mut W,
    table: &TruthTable,
    solution: &Solution,
) -> io::Result<()> {
    writeln!(writer, ".i {}", table.num_vars())?;
    writeln!(writer, ".o 1")?;
    writeln!(writer, ".ilb {}", table.vars.iter().join(" "))?;
    writeln!(
        writer,
        ".ob {}",
        table.output_name.as_deref().unwrap_or(DEFAULT_OUTPUT_NAME)
    )?;
    writeln!(writer, ".p {}", solution.len())?;

    for term in solution.iter() {
        writeln!(writer, "{term} 1")?;
    }

    writeln!(writer, ".e")
}

pub fn solution_to_string(table: &TruthTable, solution: &Solution) -> String {
    let mut buffer = Vec::new();
    // writing into a Vec cannot fail
    let _ = write_solution(&mut buffer, table, solution);
    String::from_utf8_lossy(&buffer).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::minimize::minimize;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_header_and_terms() {
        let table: TruthTable = ".i 3\n.o 1\n.ilb a b c\n.ob out\n.p 4\n000 1\n001 1\n010 1\n011 1\n.e\n"
            .parse()
            .unwrap();
        let solution = minimize(&table, Config::default()).unwrap();

        assert_eq!(
            solution_to_string(&table, &solution),
            ".i 3\n.o 1\n.ilb a b c\n.ob out\n.p 1\n0-- 1\n.e\n"
        );
    }

    #[test]
    fn test_default_names_and_empty_solution() {
        let table: TruthTable = ".i 2\n00 0\n".parse().unwrap();
        let solution = minimize(&table, Config::default()).unwrap();

        assert_eq!(
            solution_to_string(&table, &solution),
            ".i 2\n.o 1\n.ilb x0 x1\n.ob f\n.p 0\n.e\n"
        );
    }
}
