use crate::error::TokenizerError;

const DENSE_SIZE: usize = 0x100;

/// Maps character codes to values through a set of intervals.
///
/// Codes below `0x100` are stored in a dense table. Higher codes are kept as
/// a list of intervals that is searched from the most recently added one, so
/// later intervals take precedence over earlier ones everywhere.
///
/// # Example
/// ```
/// use formulary::tokenizer::char_map::CharReferenceMap;
///
/// let mut map = CharReferenceMap::new();
/// map.add_interval('a', 'z', 1).unwrap();
/// map.add_interval('\u{100}', char::MAX, 2).unwrap();
///
/// assert_eq!(map.lookup('q'), Some(&1));
/// assert_eq!(map.lookup('\u{3b1}'), Some(&2));
/// assert_eq!(map.lookup('1'), None);
/// assert!(map.add_interval('z', 'a', 3).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct CharReferenceMap<T> {
    dense:     Vec<Option<T>>,
    intervals: Vec<(char, char, T)>,
}

impl<T: Clone> CharReferenceMap<T> {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self { dense:     vec![None; DENSE_SIZE],
               intervals: Vec::new(), }
    }

    /// Associates every character in `start..=end` with `value`.
    ///
    /// # Errors
    /// Returns [`TokenizerError::InvalidInterval`] if `start > end`.
    pub fn add_interval(&mut self, start: char, end: char, value: T) -> Result<(), TokenizerError> {
        if start > end {
            return Err(TokenizerError::InvalidInterval { start, end });
        }
        self.insert(start, end, value);
        Ok(())
    }

    /// Associates every character in `start..=end` with `value`.
    ///
    /// An empty range is ignored.
    pub(crate) fn insert(&mut self, start: char, end: char, value: T) {
        if start > end {
            return;
        }

        let dense_end = (end as usize).min(DENSE_SIZE - 1);
        for code in (start as usize)..=dense_end {
            self.dense[code] = Some(value.clone());
        }

        if end as usize >= DENSE_SIZE {
            let low = if (start as usize) < DENSE_SIZE { '\u{100}' } else { start };
            self.intervals.push((low, end, value));
        }
    }

    /// Returns the value associated with `symbol`, if any.
    #[must_use]
    pub fn lookup(&self, symbol: char) -> Option<&T> {
        let code = symbol as usize;
        if code < DENSE_SIZE {
            return self.dense[code].as_ref();
        }

        self.intervals
            .iter()
            .rev()
            .find(|(start, end, _)| (*start..=*end).contains(&symbol))
            .map(|(_, _, value)| value)
    }

    /// Removes every association.
    pub fn clear(&mut self) {
        self.dense.iter_mut().for_each(|slot| *slot = None);
        self.intervals.clear();
    }
}

impl<T: Clone> Default for CharReferenceMap<T> {
    fn default() -> Self {
        Self::new()
    }
}
