use super::Wordlist;
use crate::tilesets::TileSet;
use crate::Error;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::time::Instant;
use tracing::{debug, info, warn};

/// What to do with a line in a wordfile that is not a valid word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnInvalid {
    /// Report the line and continue with the next one
    Skip,
    /// Stop reading with [`Error::InvalidLine`]
    Abort,
}

impl Default for OnInvalid {
    fn default() -> Self {
        OnInvalid::Skip
    }
}

/// A line in a wordfile that was skipped because it is not a valid word.
#[derive(Debug)]
pub struct SkippedLine {
    /// Line number, starting at 1
    pub line: usize,
    /// The trimmed contents of the line, decoded lossily if it is not utf-8
    pub text: String,
    /// The reason the line was skipped
    pub error: Error,
}

impl Wordlist {
    /// Read the wordlist from a file. The file must be encoded in utf-8 and
    /// have one lower case word per line.
    ///
    /// Returns the wordlist and the lines that were skipped.
    /// ## Errors
    /// - If the wordfile can not be read.
    /// - If a line is not a valid word and `on_invalid` is [`OnInvalid::Abort`].
    pub fn from_file(
        wordfile: &str,
        tileset: TileSet,
        on_invalid: OnInvalid,
    ) -> Result<(Wordlist, Vec<SkippedLine>), Error> {
        let t0 = Instant::now();
        let file = File::open(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let mut wordlist = Wordlist::new(tileset);
        wordlist.wordfile = String::from(wordfile);
        let skipped = wordlist.read_words(BufReader::new(file), on_invalid)?;
        info!(
            wordfile,
            words = wordlist.word_count(),
            nodes = wordlist.node_count(),
            skipped = skipped.len(),
            elapsed = ?t0.elapsed(),
            "loaded wordlist"
        );
        Ok((wordlist, skipped))
    }

    /// Insert the words read from `reader`, one word per line.
    /// Surrounding whitespace is removed from each line.
    ///
    /// Returns the lines that were skipped. With [`OnInvalid::Skip`] an invalid line
    /// does not stop reading, with [`OnInvalid::Abort`] it does. A line that is not
    /// valid utf-8 is an invalid line, its text is decoded lossily.
    /// ## Errors
    /// - [`Error::ReadError`] if reading fails.
    /// - [`Error::InvalidLine`] on the first invalid line when `on_invalid` is
    ///   [`OnInvalid::Abort`].
    /// ## Examples
    /// ```
    /// use rack_solver::{Error, OnInvalid, Wordlist};
    /// let mut wordlist = Wordlist::default();
    /// let skipped = wordlist.read_words("foo\nB4R\nbaz\n".as_bytes(), OnInvalid::Skip)?;
    /// assert_eq!(wordlist.word_count(), 2);
    /// assert_eq!(skipped[0].line, 2);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn read_words<R: BufRead>(
        &mut self,
        mut reader: R,
        on_invalid: OnInvalid,
    ) -> Result<Vec<SkippedLine>, Error> {
        let mut skipped = Vec::new();
        let mut buf = Vec::new();
        let mut lineno = 0;
        loop {
            buf.clear();
            let n = reader
                .read_until(b'\n', &mut buf)
                .map_err(|source| Error::ReadError {
                    path: self.wordfile.clone(),
                    source,
                })?;
            if n == 0 {
                break;
            }
            lineno += 1;
            let text = match std::str::from_utf8(&buf) {
                Ok(line) => Ok(line.trim()),
                Err(_) => Err(String::from_utf8_lossy(&buf).trim().to_string()),
            };
            let error = match text {
                Ok(text) => match self.insert(text) {
                    Ok(()) => continue,
                    Err(error) => error,
                },
                Err(lossy) => Error::InvalidUtf8(lossy),
            };
            match on_invalid {
                OnInvalid::Abort => {
                    return Err(Error::InvalidLine {
                        line: lineno,
                        source: Box::new(error),
                    })
                }
                OnInvalid::Skip => {
                    let text = String::from_utf8_lossy(&buf).trim().to_string();
                    warn!(line = lineno, %text, %error, "skipping invalid word");
                    skipped.push(SkippedLine {
                        line: lineno,
                        text,
                        error,
                    });
                }
            }
        }
        debug!(
            words = self.word_count(),
            skipped = skipped.len(),
            "read words"
        );
        Ok(skipped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const WORDFILE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/wordlists/words.txt");

    #[test]
    fn test_from_file() -> Result<(), Error> {
        let (wordlist, skipped) =
            Wordlist::from_file(WORDFILE, TileSet::default(), OnInvalid::Abort)?;
        assert!(skipped.is_empty());
        assert_eq!(wordlist.word_count(), 65);
        assert!(wordlist.contains("oology"));
        assert_eq!(wordlist.wordfile(), WORDFILE);
        Ok(())
    }

    #[test]
    fn test_file_not_found() {
        let result =
            Wordlist::from_file("no/such/wordfile.txt", TileSet::default(), OnInvalid::Skip);
        match result {
            Err(Error::ReadError { path, .. }) => {
                assert_eq!(path, "no/such/wordfile.txt")
            }
            other => panic!("unexpected {:?}", other.map(|(w, _)| w.to_string())),
        }
    }

    #[test]
    fn test_skip_invalid() -> Result<(), Error> {
        let input = "foo\n  bar \nba-z\n\nBaz\nbaz\r\n";
        let mut wordlist = Wordlist::default();
        let skipped = wordlist.read_words(Cursor::new(input), OnInvalid::Skip)?;
        assert_eq!(wordlist.word_count(), 3);
        for word in &["foo", "bar", "baz"] {
            assert!(wordlist.contains(word));
        }
        let lines: Vec<usize> = skipped.iter().map(|s| s.line).collect();
        assert_eq!(lines, vec![3, 4, 5]);
        assert_eq!(skipped[0].text, "ba-z");
        assert!(matches!(
            skipped[0].error,
            Error::InvalidSymbol { symbol: '-', .. }
        ));
        assert!(matches!(skipped[1].error, Error::EmptyWord));
        assert!(matches!(
            skipped[2].error,
            Error::InvalidSymbol { symbol: 'B', .. }
        ));
        Ok(())
    }

    #[test]
    fn test_abort_invalid() {
        let input = "foo\nbar\nba-z\nbaz\n";
        let mut wordlist = Wordlist::default();
        let result = wordlist.read_words(Cursor::new(input), OnInvalid::Abort);
        match result {
            Err(Error::InvalidLine { line, source }) => {
                assert_eq!(line, 3);
                assert!(matches!(*source, Error::InvalidSymbol { symbol: '-', .. }));
            }
            other => panic!("unexpected {:?}", other),
        }
        // words before the invalid line are kept
        assert!(wordlist.contains("bar"));
        assert!(!wordlist.contains("baz"));
    }

    #[test]
    fn test_skip_invalid_utf8() -> Result<(), Error> {
        let mut wordlist = Wordlist::default();
        let skipped = wordlist.read_words(&b"foo\n\xffbar\nbaz\n"[..], OnInvalid::Skip)?;
        assert!(wordlist.contains("foo"));
        assert!(wordlist.contains("baz"));
        assert_eq!(wordlist.word_count(), 2);
        assert_eq!(skipped.len(), 1);
        assert_eq!(skipped[0].line, 2);
        assert_eq!(skipped[0].text, "\u{fffd}bar");
        assert!(matches!(skipped[0].error, Error::InvalidUtf8(_)));
        Ok(())
    }

    #[test]
    fn test_abort_invalid_utf8() {
        let mut wordlist = Wordlist::default();
        let result = wordlist.read_words(&b"foo\n\xffbar\nbaz\n"[..], OnInvalid::Abort);
        match result {
            Err(Error::InvalidLine { line, source }) => {
                assert_eq!(line, 2);
                assert!(matches!(*source, Error::InvalidUtf8(_)));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_skip_long_word() -> Result<(), Error> {
        let input = format!("foo\n{}\nbaz\n", "z".repeat(30_000));
        let mut wordlist = Wordlist::default();
        let skipped = wordlist.read_words(Cursor::new(input), OnInvalid::Skip)?;
        assert_eq!(wordlist.word_count(), 2);
        assert_eq!(skipped[0].line, 2);
        assert!(matches!(skipped[0].error, Error::ValueOverflow(30_000)));
        Ok(())
    }

    #[test]
    fn test_read_more_words() -> Result<(), Error> {
        let mut wordlist = Wordlist::from_words(&["foo"], TileSet::default())?;
        let max = wordlist.max_value();
        wordlist.read_words(Cursor::new("foo\nquiz\n"), OnInvalid::Abort)?;
        assert_eq!(wordlist.word_count(), 2);
        assert!(wordlist.max_value() > max);
        Ok(())
    }
}
