//! Grid shape shared by the input and weight matrices.

/// Smallest allowed row or column count.
pub const MIN_EXTENT: usize = 1;
/// Largest allowed row or column count.
pub const MAX_EXTENT: usize = 5;

/// Number of rows and columns of the perceptron grid.
///
/// Both extents always lie in `MIN_EXTENT..=MAX_EXTENT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    rows: usize,
    cols: usize,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self { rows: 3, cols: 3 }
    }
}

impl Dimensions {
    /// Creates dimensions, clamping both extents into the allowed range.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows: clamp_extent(rows),
            cols: clamp_extent(cols),
        }
    }

    /// Row count (N).
    pub fn rows(self) -> usize {
        self.rows
    }

    /// Column count (M).
    pub fn cols(self) -> usize {
        self.cols
    }

    /// Shape tuple in `ndarray` order.
    pub fn shape(self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of cells.
    pub fn cell_count(self) -> usize {
        self.rows * self.cols
    }

    /// Same dimensions with a different (clamped) row count.
    pub fn with_rows(self, rows: usize) -> Self {
        Self::new(rows, self.cols)
    }

    /// Same dimensions with a different (clamped) column count.
    pub fn with_cols(self, cols: usize) -> Self {
        Self::new(self.rows, cols)
    }

    /// Whether `(row, col)` addresses a cell of this grid.
    pub fn contains(self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }
}

/// Whether `extent` is an allowed row or column count.
pub fn is_valid_extent(extent: usize) -> bool {
    (MIN_EXTENT..=MAX_EXTENT).contains(&extent)
}

/// Clamps a requested row or column count into `MIN_EXTENT..=MAX_EXTENT`.
pub fn clamp_extent(extent: usize) -> usize {
    extent.clamp(MIN_EXTENT, MAX_EXTENT)
}

/// Normalizes free-text extent entry from a numeric field.
///
/// The leading integer is used and trailing junk ignored (`"4x"` is 4).
/// Empty, non-numeric, zero and negative entries fall back to
/// [`MIN_EXTENT`]; anything larger than [`MAX_EXTENT`] is clamped.
pub fn parse_extent(text: &str) -> usize {
    let trimmed = text.trim_start();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..end];

    if digits.is_empty() || negative {
        return MIN_EXTENT;
    }

    match digits.parse::<usize>() {
        Ok(0) => MIN_EXTENT,
        Ok(extent) => clamp_extent(extent),
        // Only overflow can fail here: every char is an ASCII digit.
        Err(_) => MAX_EXTENT,
    }
}
