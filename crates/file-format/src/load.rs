use std::path::Path;

use dfn_kernel::geometry::point::Point3d;
use dfn_kernel::{Fracture, FractureId, FractureSet};
use tracing::{info, instrument};

use crate::errors::LoadError;

/// Non-comment lines with their 1-based line numbers.
struct DataLines<'a> {
    inner: std::iter::Enumerate<std::str::Lines<'a>>,
}

impl<'a> DataLines<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.lines().enumerate(),
        }
    }
}

impl<'a> Iterator for DataLines<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.by_ref().map(|(i, line)| (i + 1, line.trim())).find(|(_, line)| {
            !line.is_empty() && !line.starts_with('#')
        })
    }
}

fn parse_header(line: usize, content: &str) -> Result<(FractureId, usize), LoadError> {
    let malformed = || LoadError::MalformedHeader {
        line,
        content: content.to_string(),
    };
    let (id, count) = content.split_once(';').ok_or_else(malformed)?;
    let id = id.trim().parse().map_err(|_| malformed())?;
    let count = count.trim().parse().map_err(|_| malformed())?;
    Ok((id, count))
}

/// Read the first `expected` `;`-separated reals of a row. Extra values are
/// ignored.
fn parse_row(line: usize, content: &str, expected: usize) -> Result<Vec<f64>, LoadError> {
    let tokens: Vec<&str> = content.split(';').map(str::trim).filter(|t| !t.is_empty()).collect();
    if tokens.len() < expected {
        return Err(LoadError::ShortVertexRow {
            line,
            expected,
            found: tokens.len(),
        });
    }
    tokens[..expected]
        .iter()
        .map(|token| {
            token.parse::<f64>().map_err(|_| LoadError::InvalidCoordinate {
                line,
                value: token.to_string(),
            })
        })
        .collect()
}

/// Parse a fracture network from the DFN text format.
///
/// Lines starting with `#` and blank lines are ignored. The first data line
/// holds the fracture count; each fracture follows as an `id; num_vertices`
/// header and three rows of x, y and z coordinates.
pub fn parse_fractures(text: &str) -> Result<FractureSet, LoadError> {
    let mut lines = DataLines::new(text);

    let (count_line, count) = lines.next().ok_or(LoadError::MissingCount)?;
    let declared: usize = count.parse().map_err(|_| LoadError::InvalidCount {
        line: count_line,
        value: count.to_string(),
    })?;
    if declared == 0 {
        return Err(LoadError::NoFractures);
    }

    let mut set = FractureSet::with_capacity(declared);
    while let Some((header_line, header)) = lines.next() {
        let (id, num_vertices) = parse_header(header_line, header)?;

        let mut rows = Vec::with_capacity(3);
        for _ in 0..3 {
            let (line, content) = lines.next().ok_or(LoadError::UnexpectedEof { fracture: id })?;
            rows.push(parse_row(line, content, num_vertices)?);
        }
        let vertices = (0..num_vertices)
            .map(|j| Point3d::new(rows[0][j], rows[1][j], rows[2][j]))
            .collect();
        set.insert(Fracture::new(id, vertices)?)?;
    }

    if set.len() != declared {
        return Err(LoadError::CountMismatch {
            declared,
            found: set.len(),
        });
    }
    Ok(set)
}

/// Read and parse a fracture file.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_fractures(path: impl AsRef<Path>) -> Result<FractureSet, LoadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let set = parse_fractures(&text)?;
    info!(fractures = set.len(), "fracture file loaded");
    Ok(set)
}
