//! Applies a validation strategy to a parsed row sequence.

use crate::parser::ParsedRow;

use super::rules::{ValidationStrategy, ValidationVerdict};

/// Validate every parsed row, one verdict per row, in input order.
///
/// Rows that already carry a parse defect are rejected with that defect
/// and skip the field rules.
pub fn validate_rows(rows: &[ParsedRow], strategy: ValidationStrategy) -> Vec<ValidationVerdict> {
    rows.iter()
        .map(|parsed| match &parsed.defect {
            Some(defect) => {
                ValidationVerdict::defective(parsed.row_number, parsed.row.clone(), defect.clone())
            }
            None => strategy.validate(&parsed.row, parsed.row_number),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{parse_vocab_csv, parse_vocab_json};

    #[test]
    fn one_verdict_per_row_with_defects_kept() {
        let text = "English_Word,Translation,Level,Target_Language,Example_Sentence\n\
                    hello,merhaba,Beginner,Turkish,hello\n\
                    bad,row\n\
                    cat,kedi,Novice,Turkish,cat";
        let rows = parse_vocab_csv(text).unwrap();
        let verdicts = validate_rows(&rows, ValidationStrategy::CsvRow);

        assert_eq!(verdicts.len(), 3);
        assert!(verdicts[0].valid);
        assert!(!verdicts[1].valid);
        assert_eq!(verdicts[1].row_number, 3);
        assert_eq!(verdicts[1].errors, vec!["Expected 5 columns, got 2"]);
        assert!(!verdicts[2].valid);
        assert_eq!(verdicts[2].row_number, 4);
    }

    #[test]
    fn json_strategy_skips_sentence_containment() {
        let text = r#"[{"english":"cat","foreign":"kedi","language":"Turkish","difficulty":"Medium","examples":["A dog"]}]"#;
        let rows = parse_vocab_json(text).unwrap();

        let verdicts = validate_rows(&rows, ValidationStrategy::JsonEntry);
        assert!(verdicts[0].valid);
    }
}
