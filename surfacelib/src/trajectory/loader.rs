use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::trajectory::{LoadError, Snapshot, Trajectory};

// The point file format:
// 1. The first line is a header `<name>=<iterationCount>`.
// 2. Each block starts with `<name>=<pointCount>`.
// 3. The block is followed by exactly pointCount lines of `x;y;z`.
// Names before `=` are ignored. Blank lines between blocks are skipped.

pub fn load_trajectory<P: AsRef<Path>>(path: P) -> Result<Trajectory, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!("Loading trajectory from {}...", path.display());
    read_trajectory(BufReader::new(file))
}

pub fn read_trajectory<R: BufRead>(reader: R) -> Result<Trajectory, LoadError> {
    let mut lines = reader.lines().enumerate();

    let (header_line, header) = match lines.next() {
        Some((i, line)) => (i + 1, line?),
        None => return Err(LoadError::MissingHeader),
    };
    let declared_iterations = parse_count(header_line, header.trim())?;

    let mut snapshots = Vec::new();
    while let Some((i, line)) = lines.next() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let block_line = i + 1;
        let point_count = parse_count(block_line, line)?;
        log::trace!("Block at line {} declares {} points", block_line, point_count);

        let mut snapshot = Snapshot::with_capacity(point_count);
        for found in 0..point_count {
            let (i, line) = lines.next().ok_or(LoadError::Truncated {
                line: block_line,
                expected: point_count,
                found,
            })?;
            let (x, y, z) = parse_point(i + 1, line?.trim())?;
            snapshot.push(x, y, z);
        }
        snapshots.push(snapshot);
    }

    if declared_iterations != snapshots.len() {
        log::warn!(
            "Header declares {} iterations but {} were found.",
            declared_iterations,
            snapshots.len()
        );
    }
    log::info!("Loaded {} snapshots.", snapshots.len());

    Ok(Trajectory::new(declared_iterations, snapshots))
}

fn parse_count(line: usize, content: &str) -> Result<usize, LoadError> {
    let (_, value) = content
        .split_once('=')
        .ok_or_else(|| LoadError::MissingSeparator {
            line,
            content: content.to_string(),
        })?;

    let value = value.trim();
    value.parse::<usize>().map_err(|_| LoadError::InvalidCount {
        line,
        value: value.to_string(),
    })
}

fn parse_point(line: usize, content: &str) -> Result<(f64, f64, f64), LoadError> {
    let fields: Vec<&str> = content.split(';').collect();
    if fields.len() != 3 {
        return Err(LoadError::FieldCount {
            line,
            found: fields.len(),
        });
    }

    let parse = |value: &str| {
        let value = value.trim();
        value.parse::<f64>().map_err(|_| LoadError::InvalidNumber {
            line,
            value: value.to_string(),
        })
    };

    Ok((parse(fields[0])?, parse(fields[1])?, parse(fields[2])?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read(content: &str) -> Result<Trajectory, LoadError> {
        read_trajectory(Cursor::new(content))
    }

    #[test]
    fn two_single_point_blocks() {
        let trajectory = read("x=2\ny=1\n1.0;2.0;3.0\ny=1\n4.0;5.0;6.0\n").unwrap();

        assert_eq!(trajectory.len(), 2);
        assert_eq!(trajectory.declared_iterations(), 2);
        assert_eq!(trajectory.snapshots()[0].point(0), Some((1.0, 2.0, 3.0)));
        assert_eq!(trajectory.snapshots()[1].point(0), Some((4.0, 5.0, 6.0)));
    }

    #[test]
    fn block_sizes_follow_declared_counts() {
        let content = "Iterations=3\n\
                       Points=2\n0;0;0\n1;1;1\n\
                       Points=0\n\
                       Points=3\n-1.5;2e3;0.25\n 7 ; 8 ; 9 \n1;2;3\n";
        let trajectory = read(content).unwrap();

        let sizes: Vec<usize> = trajectory.iter().map(Snapshot::len).collect();
        assert_eq!(sizes, vec![2, 0, 3]);
        for snapshot in &trajectory {
            assert_eq!(snapshot.x().len(), snapshot.y().len());
            assert_eq!(snapshot.y().len(), snapshot.z().len());
        }
        assert_eq!(trajectory.snapshots()[2].point(0), Some((-1.5, 2000.0, 0.25)));
        assert_eq!(trajectory.snapshots()[2].point(1), Some((7.0, 8.0, 9.0)));
    }

    #[test]
    fn header_count_is_informational() {
        let trajectory = read("Iterations=10\nPoints=1\n1;2;3\n").unwrap();
        assert_eq!(trajectory.declared_iterations(), 10);
        assert_eq!(trajectory.len(), 1);
    }

    #[test]
    fn blank_lines_between_blocks_are_skipped() {
        let trajectory = read("x=2\r\ny=1\r\n1;2;3\r\n\r\ny=1\r\n4;5;6\r\n\n\n").unwrap();
        assert_eq!(trajectory.len(), 2);
    }

    #[test]
    fn header_only_file_has_no_snapshots() {
        let trajectory = read("Iterations=0\n").unwrap();
        assert!(trajectory.is_empty());
    }

    #[test]
    fn two_fields_fail_fast() {
        let err = read("x=1\ny=2\n1.0;2.0\n3.0;4.0;5.0\n").unwrap_err();
        assert!(matches!(err, LoadError::FieldCount { line: 3, found: 2 }));
    }

    #[test]
    fn four_fields_fail() {
        let err = read("x=1\ny=1\n1;2;3;4\n").unwrap_err();
        assert!(matches!(err, LoadError::FieldCount { line: 3, found: 4 }));
    }

    #[test]
    fn blank_point_line_is_a_field_count_error() {
        let err = read("x=1\ny=2\n1;2;3\n\n").unwrap_err();
        assert!(matches!(err, LoadError::FieldCount { line: 4, found: 1 }));
    }

    #[test]
    fn truncated_block() {
        let err = read("x=1\ny=3\n1;2;3\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::Truncated {
                line: 2,
                expected: 3,
                found: 1
            }
        ));
    }

    #[test]
    fn empty_input() {
        assert!(matches!(read(""), Err(LoadError::MissingHeader)));
    }

    #[test]
    fn malformed_counts() {
        assert!(matches!(
            read("no separator here\n"),
            Err(LoadError::MissingSeparator { line: 1, .. })
        ));
        assert!(matches!(
            read("x=1\ny=-1\n"),
            Err(LoadError::InvalidCount { line: 2, .. })
        ));
        assert!(matches!(
            read("x=1\ny=one\n"),
            Err(LoadError::InvalidCount { line: 2, .. })
        ));
    }

    #[test]
    fn malformed_number() {
        let err = read("x=1\ny=1\n1;two;3\n").unwrap_err();
        match err {
            LoadError::InvalidNumber { line, value } => {
                assert_eq!(line, 3);
                assert_eq!(value, "two");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_trajectory(dir.path().join("missing.pts")).unwrap_err();
        assert!(matches!(err, LoadError::Open { .. }));
    }
}
