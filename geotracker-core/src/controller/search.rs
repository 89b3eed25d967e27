use std::fmt;

use geotracker_entities::place::Place;

/// Identifies one debounce window.
///
/// Every keystroke opens a new window and thereby cancels the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket(u64);

/// A search that should be sent to the place search service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub seq: u64,
    pub query: String,
}

/// What the result list currently shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchResults<'a> {
    Hidden,
    NoResults,
    Places(&'a [Place]),
}

/// What happened to a search response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Rendered,
    Outdated,
    Failed,
}

#[derive(Debug, Default)]
pub(crate) struct SearchState {
    text: String,
    last_ticket: u64,
    pending_ticket: Option<SearchTicket>,
    last_seq: u64,
    // Responses up to this sequence number belong to a closed list.
    superseded_seq: u64,
    last_rendered_seq: Option<u64>,
    rendered: Vec<Place>,
    visible: bool,
}

impl SearchState {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: String) {
        self.text = text;
    }

    pub fn input(&mut self, text: String) -> SearchTicket {
        self.text = text;
        self.last_ticket += 1;
        let ticket = SearchTicket(self.last_ticket);
        self.pending_ticket = Some(ticket);
        ticket
    }

    /// Returns the query of the debounce window if it has not been
    /// superseded by a later keystroke.
    pub fn take_pending(&mut self, ticket: SearchTicket) -> Option<&str> {
        if self.pending_ticket != Some(ticket) {
            return None;
        }
        self.pending_ticket = None;
        Some(&self.text)
    }

    pub fn next_request(&mut self, query: String) -> SearchRequest {
        self.last_seq += 1;
        SearchRequest {
            seq: self.last_seq,
            query,
        }
    }

    pub fn complete<E>(
        &mut self,
        seq: u64,
        result: Result<Vec<Place>, E>,
        max_results: usize,
    ) -> SearchOutcome
    where
        E: fmt::Display,
    {
        if seq <= self.superseded_seq || self.last_rendered_seq.is_some_and(|last| seq < last) {
            log::debug!("Discard outdated search response #{seq}");
            return SearchOutcome::Outdated;
        }
        match result {
            Ok(mut places) => {
                places.truncate(max_results);
                log::debug!("Render {} search results (#{seq})", places.len());
                self.rendered = places;
                self.last_rendered_seq = Some(seq);
                self.visible = true;
                SearchOutcome::Rendered
            }
            Err(err) => {
                log::error!("Error searching for location: {err}");
                SearchOutcome::Failed
            }
        }
    }

    pub fn rendered(&self, index: usize) -> Option<&Place> {
        self.rendered.get(index)
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Hide the list and discard all responses still in flight.
    pub fn close(&mut self) {
        self.hide();
        self.superseded_seq = self.last_seq;
    }

    pub fn results(&self) -> SearchResults<'_> {
        if !self.visible {
            SearchResults::Hidden
        } else if self.rendered.is_empty() {
            SearchResults::NoResults
        } else {
            SearchResults::Places(&self.rendered)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geotracker_entities::geo::Position;

    fn place(name: &str) -> Place {
        Place {
            display_name: name.into(),
            pos: Position::new(1.0, 2.0),
        }
    }

    #[test]
    fn only_the_last_ticket_fires() {
        let mut state = SearchState::default();
        let first = state.input("Paris".into());
        let second = state.input("Paris,".into());
        assert_eq!(state.take_pending(first), None);
        assert_eq!(state.take_pending(second), Some("Paris,"));
        // a ticket fires at most once
        assert_eq!(state.take_pending(second), None);
    }

    #[test]
    fn sequence_numbers_increase() {
        let mut state = SearchState::default();
        let a = state.next_request("a".into());
        let b = state.next_request("b".into());
        assert!(b.seq > a.seq);
    }

    #[test]
    fn discard_responses_older_than_the_rendered_one() {
        let mut state = SearchState::default();
        let old = state.next_request("Par".into());
        let new = state.next_request("Paris".into());
        let outcome = state.complete::<String>(new.seq, Ok(vec![place("Paris")]), 5);
        assert_eq!(outcome, SearchOutcome::Rendered);
        let outcome = state.complete::<String>(old.seq, Ok(vec![place("Parma")]), 5);
        assert_eq!(outcome, SearchOutcome::Outdated);
        assert_eq!(state.results(), SearchResults::Places(&[place("Paris")]));
    }

    #[test]
    fn failures_keep_the_previous_results() {
        let mut state = SearchState::default();
        let first = state.next_request("Paris".into());
        state.complete::<String>(first.seq, Ok(vec![place("Paris")]), 5);
        let second = state.next_request("Berlin".into());
        let outcome = state.complete(second.seq, Err("offline"), 5);
        assert_eq!(outcome, SearchOutcome::Failed);
        assert_eq!(state.results(), SearchResults::Places(&[place("Paris")]));
    }

    #[test]
    fn empty_response_shows_no_results_row() {
        let mut state = SearchState::default();
        assert_eq!(state.results(), SearchResults::Hidden);
        let req = state.next_request("xyzzy".into());
        state.complete::<String>(req.seq, Ok(vec![]), 5);
        assert_eq!(state.results(), SearchResults::NoResults);
        state.hide();
        assert_eq!(state.results(), SearchResults::Hidden);
    }

    #[test]
    fn closing_discards_pending_responses() {
        let mut state = SearchState::default();
        let pending = state.next_request("Paris".into());
        state.close();
        let outcome = state.complete::<String>(pending.seq, Ok(vec![place("Paris")]), 5);
        assert_eq!(outcome, SearchOutcome::Outdated);
        assert_eq!(state.results(), SearchResults::Hidden);

        let next = state.next_request("Berlin".into());
        let outcome = state.complete::<String>(next.seq, Ok(vec![place("Berlin")]), 5);
        assert_eq!(outcome, SearchOutcome::Rendered);
        assert_eq!(state.results(), SearchResults::Places(&[place("Berlin")]));
    }
}
