use relfind::buffer::{Position, TextDocument};
use relfind::search::{get_matches, SearchMode, SearchSession, NOTHING_FOUND};
use relfind::EditorHost;

fn sample() -> TextDocument {
    TextDocument::from_str("the cat sat\non the mat")
}

fn positions(doc: &TextDocument, query: &str, mode: SearchMode, cursor: Position) -> Vec<Position> {
    get_matches(doc, query, mode, cursor)
        .into_iter()
        .map(|m| m.pos)
        .collect()
}

#[test]
fn forward_from_document_start_lists_every_match_in_order() {
    let doc = sample();
    let matches = get_matches(&doc, "at", SearchMode::Forward, Position::origin());

    let found: Vec<(&str, Position)> = matches.iter().map(|m| (m.text.as_str(), m.pos)).collect();
    assert_eq!(
        found,
        vec![
            (" s", Position::new(0, 7)),
            (" ", Position::new(0, 11)),
            (" ", Position::new(1, 10)),
        ]
    );
}

#[test]
fn backward_lists_nearest_match_before_cursor_first() {
    let doc = sample();
    assert_eq!(
        positions(&doc, "at", SearchMode::Backward, Position::new(1, 5)),
        vec![Position::new(0, 11), Position::new(0, 7)]
    );
    assert_eq!(
        positions(&doc, "at", SearchMode::Backward, Position::new(1, 10)),
        vec![
            Position::new(1, 10),
            Position::new(0, 11),
            Position::new(0, 7)
        ]
    );
}

#[test]
fn match_exactly_at_cursor_is_in_both_directions() {
    let doc = sample();
    let cursor = Position::new(0, 7);
    assert_eq!(
        positions(&doc, "at", SearchMode::Forward, cursor).first(),
        Some(&cursor)
    );
    assert_eq!(
        positions(&doc, "at", SearchMode::Backward, cursor),
        vec![cursor]
    );
}

#[test]
fn trailing_match_has_empty_fragment_at_padded_line_end() {
    let doc = TextDocument::from_str("where is the cat");
    let matches = get_matches(&doc, "cat ", SearchMode::Forward, Position::origin());
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].text, "");
    assert_eq!(matches[0].pos, Position::new(0, 17));
}

#[test]
fn mixed_case_query_matches_lowercase_text() {
    let doc = sample();
    assert_eq!(
        positions(&doc, "Cat", SearchMode::Forward, Position::origin()),
        vec![Position::new(0, 7)]
    );
}

#[test]
fn empty_query_yields_nothing() {
    let doc = sample();
    assert!(get_matches(&doc, "", SearchMode::Forward, Position::origin()).is_empty());
    assert!(get_matches(&doc, "", SearchMode::Backward, Position::new(1, 10)).is_empty());
}

#[test]
fn session_jump_selects_the_matched_occurrence() {
    let mut doc = sample();
    doc.set_cursor(Position::new(1, 0));

    let mut session = SearchSession::new();
    session.open(&doc, SearchMode::Backward);
    assert_eq!(session.input(), "before:");
    for ch in "SAT".chars() {
        session.input_char(&doc, ch);
    }
    assert_eq!(session.matches().len(), 1);

    let chosen = session.choose(&mut doc).unwrap();
    assert_eq!(chosen.pos, Position::new(0, 11));
    assert_eq!(doc.cursor(), Position::new(0, 11));
    assert_eq!(doc.selected_text().as_deref(), Some("sat"));
}

#[test]
fn session_reports_nothing_found() {
    let doc = sample();
    let mut session = SearchSession::new();
    session.open(&doc, SearchMode::Forward);
    session.set_input(&doc, "after:dog");
    assert_eq!(session.empty_message(), Some(NOTHING_FOUND));
    assert!(session.suggestions().is_empty());
}

#[test]
fn document_loaded_from_file_is_searchable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "alpha beta\r\ngamma beta\r\n").unwrap();

    let doc = TextDocument::open(&path).unwrap();
    assert_eq!(doc.line_count(), 3);
    assert_eq!(
        positions(&doc, "BETA", SearchMode::Forward, Position::new(1, 0)),
        vec![Position::new(1, 10)]
    );
}
