use std::error::Error;
use std::io::{BufRead, Write};

use log::debug;

use crate::registry::Registry;

/// Asks how many R genes to check. Negative answers count as zero, anything
/// that is not a whole number is an error.
pub fn read_gene_count<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<usize, Box<dyn Error>> {
    write!(output, "How many R genes do you want to check? ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let count: i64 = line
        .trim()
        .parse()
        .map_err(|_| "Invalid input. Please enter a number.")?;
    Ok(count.max(0) as usize)
}

/// Collects `count` R gene names, echoing the lookup report after every
/// answer and re-asking the same slot until the name is known.
pub fn collect_selection<R: BufRead, W: Write>(
    count: usize,
    registry: &Registry,
    input: &mut R,
    output: &mut W,
) -> Result<Vec<String>, Box<dyn Error>> {
    let mut selection = Vec::new();
    for slot in 1..=count {
        loop {
            write!(output, "Enter R gene name {slot}/{count} (e.g., Rlm1): ")?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Err("Input ended before all gene names were provided.".into());
            }
            // names keep their inner and leading whitespace, only the line
            // ending goes
            let name = line.trim_end_matches(['\r', '\n']);
            writeln!(output, "{}", registry.describe(name))?;

            if registry.contains(name) {
                selection.push(name.to_string());
                break;
            }
            debug!("slot {slot} rejected {name:?}");
        }
    }
    Ok(selection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_count(line: &str) -> Result<usize, Box<dyn Error>> {
        let mut input = Cursor::new(line.to_string());
        let mut output = Vec::new();
        read_gene_count(&mut input, &mut output)
    }

    fn run_selection(count: usize, lines: &str) -> (Result<Vec<String>, Box<dyn Error>>, String) {
        let mut input = Cursor::new(lines.to_string());
        let mut output = Vec::new();
        let selection = collect_selection(count, Registry::builtin(), &mut input, &mut output);
        (selection, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_count_parses_a_number() {
        assert_eq!(run_count("3\n").unwrap(), 3);
    }

    #[test]
    fn test_count_accepts_surrounding_whitespace() {
        assert_eq!(run_count("  5 \n").unwrap(), 5);
    }

    #[test]
    fn test_count_clamps_negatives_to_zero() {
        assert_eq!(run_count("-4\n").unwrap(), 0);
        assert_eq!(run_count("0\n").unwrap(), 0);
    }

    #[test]
    fn test_count_rejects_non_numbers() {
        let err = run_count("abc\n").unwrap_err();
        assert_eq!(err.to_string(), "Invalid input. Please enter a number.");
        assert!(run_count("2.5\n").is_err());
        assert!(run_count("\n").is_err());
    }

    #[test]
    fn test_count_writes_its_prompt() {
        let mut input = Cursor::new("1\n".to_string());
        let mut output = Vec::new();
        read_gene_count(&mut input, &mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "How many R genes do you want to check? "
        );
    }

    #[test]
    fn test_selection_collects_known_names() {
        let (selection, output) = run_selection(2, "Rlm1\nRlm10\n");
        assert_eq!(selection.unwrap(), ["Rlm1", "Rlm10"]);
        assert!(output.contains("Enter R gene name 1/2 (e.g., Rlm1): "));
        assert!(output.contains("Enter R gene name 2/2 (e.g., Rlm1): "));
        assert!(output.contains("Rlm1 interacts with AvrLm1-L3 on chromosome A07."));
        assert!(output.contains("Rlm10 interacts with AvrLm10a, AvrLm10b on chromosome B04."));
    }

    #[test]
    fn test_selection_reasks_until_the_name_is_known() {
        let (selection, output) = run_selection(1, "Bogus\nStillBogus\nRlm7\n");
        assert_eq!(selection.unwrap(), ["Rlm7"]);
        assert_eq!(output.matches("Enter R gene name 1/1 (e.g., Rlm1): ").count(), 3);
        assert_eq!(
            output
                .matches("R gene not found. Please check the gene name and try again.")
                .count(),
            2
        );
        assert!(output.contains("Rlm7 interacts with AvrLm4-7 on chromosome A07."));
    }

    #[test]
    fn test_selection_keeps_leading_whitespace() {
        let (selection, output) = run_selection(1, " Rlm1\nRlm1\n");
        assert_eq!(selection.unwrap(), ["Rlm1"]);
        assert!(output.contains("R gene not found. Please check the gene name and try again."));
    }

    #[test]
    fn test_selection_accepts_crlf_input() {
        let (selection, _) = run_selection(1, "Rlm2\r\n");
        assert_eq!(selection.unwrap(), ["Rlm2"]);
    }

    #[test]
    fn test_selection_fails_when_input_runs_out() {
        let (selection, _) = run_selection(2, "Rlm1\n");
        let err = selection.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Input ended before all gene names were provided."
        );
    }

    #[test]
    fn test_huge_count_reaches_the_first_prompt() {
        // an absurd count is still a valid answer; the loop must start
        // prompting instead of sizing a buffer to it
        let huge = run_count("9223372036854775807\n").unwrap();
        assert_eq!(huge, i64::MAX as usize);

        let (selection, output) = run_selection(huge, "");
        assert!(selection.is_err());
        assert!(output.starts_with(&format!("Enter R gene name 1/{huge} (e.g., Rlm1): ")));
    }

    #[test]
    fn test_zero_count_reads_nothing() {
        let (selection, output) = run_selection(0, "Rlm1\n");
        assert_eq!(selection.unwrap(), Vec::<String>::new());
        assert!(output.is_empty());
    }
}
