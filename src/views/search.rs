//! Company search screen state.
//!
//! Results are replaced wholesale by each successful response, in the order responses
//! resolve. Failures leave the previous results untouched and show nothing.

use super::form::{Form, TextField};
use crate::api::{CompanyRecord, SearchQuery, SearchResponse};

#[derive(Debug, Clone, PartialEq)]
pub struct SearchView {
    form: Form,
    results: Vec<CompanyRecord>,
    name: String,
    in_flight: usize,
}

impl SearchView {
    pub fn new() -> Self {
        Self {
            form: Form::new(vec![TextField::new("Domain")]),
            results: Vec::new(),
            name: String::new(),
            in_flight: 0,
        }
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut Form {
        &mut self.form
    }

    pub fn query(&self) -> &str {
        self.form.field(0)
    }

    pub fn results(&self) -> &[CompanyRecord] {
        &self.results
    }

    /// Display name of the last successful search, empty before the first one
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of submitted requests that have not resolved yet
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn submit(&mut self) -> SearchQuery {
        self.in_flight += 1;
        SearchQuery::domain(self.query())
    }

    pub fn on_results(&mut self, response: SearchResponse) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.results = response.results;
        self.name = response.name;
    }

    pub fn on_failure(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    /// `"Results for {name}"` once a search has succeeded
    pub fn results_heading(&self) -> Option<String> {
        (!self.name.is_empty()).then(|| format!("Results for {}", self.name))
    }

    pub fn result_lines(&self) -> Vec<String> {
        self.results.iter().map(CompanyRecord::display_line).collect()
    }
}

impl Default for SearchView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(siren: &str, name: &str, score: f64) -> CompanyRecord {
        CompanyRecord {
            siren: siren.to_string(),
            nom_raison_sociale: name.to_string(),
            score,
        }
    }

    #[test]
    fn test_results_replaced_wholesale() {
        let mut view = SearchView::new();
        view.submit();
        view.on_results(SearchResponse {
            name: "First".to_string(),
            results: vec![record("1", "A", 1.0), record("2", "B", 0.5)],
        });
        view.submit();
        view.on_results(SearchResponse {
            name: "ACME Corp".to_string(),
            results: vec![record("123", "Acme", 0.8)],
        });

        assert_eq!(view.result_lines(), vec!["Acme - SIREN 123 - Score 0.80"]);
        assert_eq!(view.results_heading().as_deref(), Some("Results for ACME Corp"));
        assert_eq!(view.in_flight(), 0);
    }

    #[test]
    fn test_failure_keeps_previous_results() {
        let mut view = SearchView::new();
        view.submit();
        view.on_results(SearchResponse {
            name: "ACME Corp".to_string(),
            results: vec![record("123", "Acme", 0.8)],
        });
        view.submit();
        view.on_failure();

        assert_eq!(view.results().len(), 1);
        assert_eq!(view.name(), "ACME Corp");
        assert_eq!(view.in_flight(), 0);
    }

    #[test]
    fn test_submit_uses_query_as_domain() {
        let mut view = SearchView::new();
        "acme".chars().for_each(|c| view.form_mut().insert_char(c));
        let query = view.submit();
        assert_eq!(query, SearchQuery::domain("acme"));
        assert_eq!(view.in_flight(), 1);
        assert!(view.results_heading().is_none());
    }
}
