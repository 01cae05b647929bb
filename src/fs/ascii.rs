//! Plain text dumps of numbers, one value or one matrix row per line, for loading into other
//! tools.

use std::fmt::Display;
use std::path::Path;

use super::error::FileError;
use super::file::write_string_to_file;

/// A read-only view of a matrix, given by its shape and a function returning the element at a
/// row and column. Lets any matrix type be saved without depending on it.
///
/// # Examples
/// ```
/// # use meadow::fs::MatrixReader;
/// let data = [[1, 2, 3], [4, 5, 6]];
/// let reader = MatrixReader::new(2, 3, |r: usize, c: usize| data[r][c]);
/// assert_eq!(reader.at(1, 2), 6);
/// ```
#[derive(Clone, Copy)]
pub struct MatrixReader<F> {
    rows: usize,
    cols: usize,
    at: F,
}

impl<F> MatrixReader<F> {
    pub const fn new(rows: usize, cols: usize, at: F) -> MatrixReader<F> {
        MatrixReader { rows, cols, at }
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the element at `row` and `col`, which must lie inside the matrix.
    #[track_caller]
    pub fn at<T>(&self, row: usize, col: usize) -> T
    where
        F: Fn(usize, usize) -> T,
    {
        debug_assert!(
            row < self.rows && col < self.cols,
            "({row}, {col}) outside of a {}x{} matrix",
            self.rows,
            self.cols
        );
        (self.at)(row, col)
    }
}

/// Saves `values` to a text file at `path`, one value per line.
///
/// # Errors
/// See [`write_string_to_file`].
pub fn save_ascii<P, T>(path: P, values: &[T]) -> Result<(), FileError>
where
    P: AsRef<Path>,
    T: Display,
{
    let text: String = values.iter().map(|value| format!("{value}\n")).collect();
    write_string_to_file(&text, path)
}

/// Saves the matrix read by `reader` to a text file at `path`, one row per line with the values
/// separated by spaces.
///
/// # Errors
/// See [`write_string_to_file`].
pub fn save_ascii_matrix<P, T, F>(path: P, reader: &MatrixReader<F>) -> Result<(), FileError>
where
    P: AsRef<Path>,
    T: Display,
    F: Fn(usize, usize) -> T,
{
    let text: String = (0..reader.rows())
        .map(|row| {
            let line: Vec<String> = (0..reader.cols())
                .map(|col| reader.at(row, col).to_string())
                .collect();
            line.join(" ") + "\n"
        })
        .collect();
    write_string_to_file(&text, path)
}
