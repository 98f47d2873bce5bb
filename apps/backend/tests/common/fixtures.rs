//! Test fixtures and factory functions for creating request bodies.

use serde_json::{json, Value};

/// Bytes returned by the mock synthesizer.
pub const MOCK_AUDIO: &[u8] = b"ID3-test-audio";

/// Base64 of [`MOCK_AUDIO`].
pub const MOCK_AUDIO_BASE64: &str = "SUQzLXRlc3QtYXVkaW8=";

/// Body for POST /api/load_rows.
pub fn rows_request(rows: &[(&str, &str)]) -> Value {
    let rows: Vec<[&str; 2]> = rows.iter().map(|(a, b)| [*a, *b]).collect();
    json!({ "rows": rows })
}

/// Body for POST /api/start_game.
pub fn start_request(mode: &str, max_questions: u32, max_passes: u32) -> Value {
    json!({
        "mode": mode,
        "max_questions": max_questions,
        "max_passes": max_passes
    })
}

/// Body for POST /api/check_answer.
pub fn answer_request(answer: &str) -> Value {
    json!({ "answer": answer })
}

/// Body for POST /api/set_languages.
pub fn languages_request(first: &str, second: &str) -> Value {
    json!({ "first_language": first, "second_language": second })
}

/// Single-sheet `.xlsx` workbook with a header row.
pub fn sample_workbook(rows: &[(&str, &str)]) -> Vec<u8> {
    let mut book = rust_xlsxwriter::Workbook::new();
    let sheet = book.add_worksheet();
    sheet.write_string(0, 0, "English").unwrap();
    sheet.write_string(0, 1, "Italian").unwrap();
    for (i, (first, second)) in rows.iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_string(row, 0, *first).unwrap();
        sheet.write_string(row, 1, *second).unwrap();
    }
    book.save_to_buffer().unwrap()
}

/// CSV upload with a header, one valid row and one missing value.
pub fn sample_csv() -> &'static str {
    "English,Italian\ngo/went,andare\nnan,vuoto\nhouse,casa\n"
}
