//! General test utilities for HUD tests.
//!
//! For device and config helpers, see `crate::tui::widgets::testing`.

use ratatui::buffer::Buffer;

/// Helper to extract lines from buffer
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area();
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buf[(area.x + x, area.y + y)].symbol())
                .collect::<String>()
        })
        .collect()
}

/// Helper for buffer assertions
///
/// Trailing whitespace is ignored so expected lines can omit padding.
pub fn assert_buffer(buf: &Buffer, expected: &[&str]) {
    let actual = buffer_lines(buf);
    let buffer_width = buf.area().width as usize;

    assert_eq!(
        actual.len(),
        expected.len(),
        "Buffer height mismatch: expected {} lines, got {}",
        expected.len(),
        actual.len()
    );
    for (i, expected_line) in expected.iter().enumerate() {
        assert_eq!(
            actual[i].chars().count(),
            buffer_width,
            "Line {} width mismatch: expected {}, got {}",
            i,
            buffer_width,
            actual[i].chars().count()
        );
        assert_eq!(
            actual[i].trim_end(),
            expected_line.trim_end(),
            "Line {} mismatch:\nExpected: '{}'\nActual:   '{}'",
            i,
            expected_line,
            actual[i]
        );
    }
}
