use anyhow::Result;
use std::io::{self, Write};

use crate::cli::args::AtArgs;
use crate::config::Config;
use crate::lyrics::fetch;
use crate::lyrics::indexer::active_index_signed;
use crate::lyrics::LineSequence;

pub async fn execute(args: AtArgs, config: &Config) -> Result<()> {
    let lyrics = fetch::load_lyrics(&args.locator, &config.fetch);
    let mut out = io::stdout().lock();
    write_indices(&mut out, &lyrics, &args.times)?;
    Ok(())
}

/// One line per time: `<seconds>\t<index>\t<text>`, index `-1` when idle.
fn write_indices<W: Write>(out: &mut W, lyrics: &LineSequence, times: &[f64]) -> Result<()> {
    for &time in times {
        let index = active_index_signed(lyrics.lines(), time);
        let text = usize::try_from(index)
            .ok()
            .and_then(|i| lyrics.get(i))
            .map(|line| line.text.as_str())
            .unwrap_or("");
        writeln!(out, "{}\t{}\t{}", time, index, text)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lyrics::TimedLine;

    #[test]
    fn test_write_indices() {
        let lyrics: LineSequence = vec![
            TimedLine::new(1.0, 4.0, "Hello world"),
            TimedLine::new(4.0, 6.5, "Second line"),
        ]
        .into();
        let mut buf = Vec::new();
        write_indices(&mut buf, &lyrics, &[0.5, 5.0, 9.0]).unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "0.5\t-1\t\n5\t1\tSecond line\n9\t1\tSecond line\n"
        );
    }
}
