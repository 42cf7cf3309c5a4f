use std::io;
use std::io::prelude::*;

use crate::models::{Stats, Window};

/// Copies lines from `reader` to `writer`, dropping every line that equals one
/// of the last `window_size` kept lines.
///
/// Lines are compared as raw bytes including their `\n` terminator, so a final
/// line without one never matches an earlier terminated copy.
pub fn dedup_lines<R, W>(mut reader: R, mut writer: W, window_size: usize) -> io::Result<Stats>
where
    R: BufRead,
    W: Write,
{
    let mut window = Window::new(window_size);
    let mut stats = Stats::default();
    let mut line = Vec::new();

    loop {
        line.clear();
        let n = reader.read_until(b'\n', &mut line)?;
        if n == 0 {
            break;
        }
        if window.contains(&line) {
            stats.duplicates += 1;
            continue;
        }
        writer.write_all(&line)?;
        stats.rows += 1;
        // reuse the evicted buffer for the next read
        line = window.push(line).unwrap_or_default();
    }
    Ok(stats)
}
