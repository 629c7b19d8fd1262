//! Parsing of the "new scenario" form into a scenario name and its cases.
//!
//! The form carries the scenario name in `tst_scenario`, the first case in
//! `tst_case` and any further cases in `tst_case[0]`, `tst_case[1]`, ...
//! Indexed cases are read in increasing order and the scan stops at the first
//! missing index: `tst_case[2]` is ignored when `tst_case[1]` is absent.

use std::collections::HashMap;

use crate::error::CoreError;
use crate::validation::require_non_blank;

pub const FIELD_SCENARIO: &str = "tst_scenario";
pub const FIELD_FIRST_CASE: &str = "tst_case";
pub const FIELD_CSRF: &str = "csrf_token";

/// Message returned when any submitted case value is blank.
pub const BLANK_CASES_MESSAGE: &str = "Test Cases cannot be blank";

/// A validated scenario submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioForm {
    pub scenario_name: String,
    /// Case names in creation order; never empty.
    pub case_names: Vec<String>,
}

/// Name of the `index`-th additional case field.
pub fn indexed_case_field(index: usize) -> String {
    format!("{FIELD_FIRST_CASE}[{index}]")
}

/// Validate a submitted form and collect its case names.
///
/// Every value other than the scenario name and CSRF token must be
/// non-blank; a single blank value rejects the whole batch.
pub fn parse_scenario_form(fields: &HashMap<String, String>) -> Result<ScenarioForm, CoreError> {
    let scenario_name =
        require_non_blank(fields.get(FIELD_SCENARIO).map(String::as_str), FIELD_SCENARIO)?;

    let has_blank = fields
        .iter()
        .filter(|(key, _)| key.as_str() != FIELD_SCENARIO && key.as_str() != FIELD_CSRF)
        .any(|(_, value)| value.trim().is_empty());
    if has_blank {
        return Err(CoreError::Validation(BLANK_CASES_MESSAGE.to_string()));
    }

    let first =
        require_non_blank(fields.get(FIELD_FIRST_CASE).map(String::as_str), FIELD_FIRST_CASE)?;

    let mut case_names = vec![first.to_string()];
    case_names.extend(
        (0..)
            .map_while(|i| fields.get(&indexed_case_field(i)))
            .cloned(),
    );

    Ok(ScenarioForm {
        scenario_name: scenario_name.to_string(),
        case_names,
    })
}
